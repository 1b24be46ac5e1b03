use crate::error::RoutinelyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::TimeZone;
use routinely_api_structs::get_habit_stats::*;
use routinely_domain::{stats, HabitStats, ID};
use routinely_infra::Context;

pub async fn get_habit_stats_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, RoutinelyError> {
    let usecase = GetHabitStatsUseCase {
        habit_id: path_params.habit_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|stats| HttpResponse::Ok().json(APIResponse::new(stats)))
        .map_err(RoutinelyError::from)
}

#[derive(Debug)]
pub struct GetHabitStatsUseCase {
    pub habit_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    HabitNotFound(ID),
    InternalError,
}

impl From<UseCaseError> for RoutinelyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::HabitNotFound(habit_id) => {
                Self::NotFound(format!("The habit with id: {}, was not found.", habit_id))
            }
            UseCaseError::InternalError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetHabitStatsUseCase {
    type Response = HabitStats;

    type Error = UseCaseError;

    const NAME: &'static str = "GetHabitStats";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .habits
            .find(&self.habit_id)
            .await
            .ok_or_else(|| UseCaseError::HabitNotFound(self.habit_id.clone()))?;

        let entries = ctx.repos.habit_entries.find_by_habit(&self.habit_id).await;

        let today = ctx
            .config
            .timezone
            .timestamp_millis_opt(ctx.sys.get_timestamp_millis())
            .single()
            .ok_or(UseCaseError::InternalError)?
            .date_naive();

        Ok(stats::compute(&entries, today))
    }
}
