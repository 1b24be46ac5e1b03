use crate::error::RoutinelyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use routinely_api_structs::get_habit_entries::*;
use routinely_domain::{HabitEntry, ID};
use routinely_infra::Context;

pub async fn get_habit_entries_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, RoutinelyError> {
    let usecase = GetHabitEntriesUseCase {
        habit_id: path_params.habit_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|entries| HttpResponse::Ok().json(APIResponse::new(entries)))
        .map_err(RoutinelyError::from)
}

#[derive(Debug)]
pub struct GetHabitEntriesUseCase {
    pub habit_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    HabitNotFound(ID),
}

impl From<UseCaseError> for RoutinelyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::HabitNotFound(habit_id) => {
                Self::NotFound(format!("The habit with id: {}, was not found.", habit_id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetHabitEntriesUseCase {
    type Response = Vec<HabitEntry>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetHabitEntries";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .habits
            .find(&self.habit_id)
            .await
            .ok_or_else(|| UseCaseError::HabitNotFound(self.habit_id.clone()))?;

        Ok(ctx.repos.habit_entries.find_by_habit(&self.habit_id).await)
    }
}
