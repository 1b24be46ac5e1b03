mod delete_reminder;
mod get_reminders_by_habit;
mod set_reminder;
mod update_reminder;

use actix_web::web;
use delete_reminder::delete_reminder_controller;
use get_reminders_by_habit::get_reminders_by_habit_controller;
use set_reminder::set_reminder_controller;
use update_reminder::update_reminder_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminder", web::post().to(set_reminder_controller));
    cfg.route(
        "/reminder/{reminder_id}",
        web::put().to(update_reminder_controller),
    );
    cfg.route(
        "/reminder/{reminder_id}",
        web::delete().to(delete_reminder_controller),
    );
    cfg.route(
        "/habit/{habit_id}/reminder",
        web::get().to(get_reminders_by_habit_controller),
    );
}
