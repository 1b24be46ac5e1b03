use crate::error::RoutinelyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use routinely_api_structs::create_habit::*;
use routinely_domain::{Habit, HabitKind, ID};
use routinely_infra::Context;

pub async fn create_habit_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, RoutinelyError> {
    let body = body.0;
    let usecase = CreateHabitUseCase {
        user_id: body.user_id,
        name: body.name,
        description: body.description,
        kind: body.kind,
    };

    execute(usecase, &ctx)
        .await
        .map(|habit| HttpResponse::Created().json(APIResponse::new(habit)))
        .map_err(RoutinelyError::from)
}

#[derive(Debug)]
pub struct CreateHabitUseCase {
    pub user_id: ID,
    pub name: String,
    pub description: Option<String>,
    pub kind: HabitKind,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidName,
    StorageError,
}

impl From<UseCaseError> for RoutinelyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidName => {
                Self::BadClientData("Habit name must not be empty".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateHabitUseCase {
    type Response = Habit;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateHabit";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UseCaseError::InvalidName);
        }

        let mut habit = Habit::new(
            self.user_id.clone(),
            name.to_string(),
            self.kind,
            ctx.sys.get_timestamp_millis(),
        );
        habit.description = self.description.clone();

        ctx.repos
            .habits
            .insert(&habit)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(habit)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use routinely_infra::setup_context;

    #[actix_web::test]
    async fn creates_habit() {
        let ctx = setup_context().await;

        let mut usecase = CreateHabitUseCase {
            user_id: ID::new(),
            name: "Read a book".into(),
            description: Some("Thirty minutes before bed".into()),
            kind: HabitKind::Good,
        };

        let habit = usecase.execute(&ctx).await.expect("To create habit");
        assert_eq!(ctx.repos.habits.find(&habit.id).await, Some(habit));
    }

    #[actix_web::test]
    async fn rejects_blank_name() {
        let ctx = setup_context().await;

        let mut usecase = CreateHabitUseCase {
            user_id: ID::new(),
            name: "   ".into(),
            description: None,
            kind: HabitKind::Good,
        };

        let res = usecase.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::InvalidName);
    }
}
