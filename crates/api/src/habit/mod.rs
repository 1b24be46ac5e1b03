mod add_habit_entry;
mod create_habit;
mod delete_habit;
mod get_habit;
mod get_habit_entries;
mod get_habit_stats;
mod get_habits_by_user;
mod update_habit;

use actix_web::web;
use add_habit_entry::add_habit_entry_controller;
use create_habit::create_habit_controller;
use delete_habit::delete_habit_controller;
use get_habit::get_habit_controller;
use get_habit_entries::get_habit_entries_controller;
use get_habit_stats::get_habit_stats_controller;
use get_habits_by_user::get_habits_by_user_controller;
use update_habit::update_habit_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/habit", web::post().to(create_habit_controller));
    cfg.route(
        "/user/{user_id}/habit",
        web::get().to(get_habits_by_user_controller),
    );
    cfg.route("/habit/{habit_id}", web::get().to(get_habit_controller));
    cfg.route("/habit/{habit_id}", web::put().to(update_habit_controller));
    cfg.route("/habit/{habit_id}", web::delete().to(delete_habit_controller));
    cfg.route(
        "/habit/{habit_id}/entry",
        web::post().to(add_habit_entry_controller),
    );
    cfg.route(
        "/habit/{habit_id}/entries",
        web::get().to(get_habit_entries_controller),
    );
    cfg.route(
        "/habit/{habit_id}/stats",
        web::get().to(get_habit_stats_controller),
    );
}
