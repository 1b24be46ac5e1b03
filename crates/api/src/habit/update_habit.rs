use crate::error::RoutinelyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use routinely_api_structs::update_habit::*;
use routinely_domain::{Habit, HabitKind, ID};
use routinely_infra::Context;

pub async fn update_habit_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, RoutinelyError> {
    let body = body.0;
    let usecase = UpdateHabitUseCase {
        habit_id: path_params.habit_id.clone(),
        name: body.name,
        description: body.description,
        kind: body.kind,
    };

    execute(usecase, &ctx)
        .await
        .map(|habit| HttpResponse::Ok().json(APIResponse::new(habit)))
        .map_err(RoutinelyError::from)
}

#[derive(Debug)]
pub struct UpdateHabitUseCase {
    pub habit_id: ID,
    pub name: Option<String>,
    pub description: Option<String>,
    pub kind: Option<HabitKind>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    InvalidName,
    StorageError,
}

impl From<UseCaseError> for RoutinelyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(habit_id) => {
                Self::NotFound(format!("The habit with id: {}, was not found.", habit_id))
            }
            UseCaseError::InvalidName => {
                Self::BadClientData("Habit name must not be empty".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateHabitUseCase {
    type Response = Habit;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateHabit";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let mut habit = ctx
            .repos
            .habits
            .find(&self.habit_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.habit_id.clone()))?;

        if let Some(name) = &self.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(UseCaseError::InvalidName);
            }
            habit.name = name.to_string();
        }
        if let Some(description) = &self.description {
            habit.description = Some(description.clone());
        }
        if let Some(kind) = self.kind {
            habit.kind = kind;
        }
        habit.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .habits
            .save(&habit)
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
    async fn updates_given_fields_only() {
        let ctx = setup_context().await;
        let habit = Habit::new(ID::new(), "Stretch".into(), HabitKind::Good, 0);
        ctx.repos.habits.insert(&habit).await.unwrap();

        let mut usecase = UpdateHabitUseCase {
            habit_id: habit.id.clone(),
            name: Some("Stretch legs".into()),
            description: None,
            kind: None,
        };

        let updated = usecase.execute(&ctx).await.expect("To update habit");
        assert_eq!(updated.name, "Stretch legs");
        assert_eq!(updated.kind, habit.kind);
        assert_eq!(updated.description, habit.description);
        assert_eq!(ctx.repos.habits.find(&habit.id).await, Some(updated));
    }

    #[actix_web::test]
    async fn rejects_unknown_habit() {
        let ctx = setup_context().await;

        let mut usecase = UpdateHabitUseCase {
            habit_id: ID::new(),
            name: None,
            description: None,
            kind: None,
        };

        let res = usecase.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::NotFound(usecase.habit_id));
    }
}
