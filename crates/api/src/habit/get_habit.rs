use crate::error::RoutinelyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use routinely_api_structs::get_habit::*;
use routinely_domain::{Habit, ID};
use routinely_infra::Context;

pub async fn get_habit_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, RoutinelyError> {
    let usecase = GetHabitUseCase {
        habit_id: path_params.habit_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|habit| HttpResponse::Ok().json(APIResponse::new(habit)))
        .map_err(RoutinelyError::from)
}

#[derive(Debug)]
pub struct GetHabitUseCase {
    pub habit_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for RoutinelyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(habit_id) => {
                Self::NotFound(format!("The habit with id: {}, was not found.", habit_id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetHabitUseCase {
    type Response = Habit;

    type Error = UseCaseError;

    const NAME: &'static str = "GetHabit";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .habits
            .find(&self.habit_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.habit_id.clone()))
    }
}
