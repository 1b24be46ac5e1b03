use crate::error::RoutinelyError;
use actix_web::{web, HttpResponse};
use routinely_api_structs::{get_pending_reminders, get_status};
use routinely_scheduler::SchedulerHandle;

async fn status_controller() -> HttpResponse {
    HttpResponse::Ok().json(get_status::APIResponse {
        message: "Yo! We are up and running!".into(),
    })
}

async fn pending_reminders_controller(
    scheduler: web::Data<SchedulerHandle>,
) -> Result<HttpResponse, RoutinelyError> {
    let pending = scheduler.pending().await.map_err(|_| {
        RoutinelyError::Unavailable("The notification scheduler is not running".into())
    })?;
    Ok(HttpResponse::Ok().json(get_pending_reminders::APIResponse::new(pending)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status_controller));
    cfg.route(
        "/scheduler/pending",
        web::get().to(pending_reminders_controller),
    );
}
