use crate::error::RoutinelyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use routinely_api_structs::add_habit_entry::*;
use routinely_domain::{HabitEntry, ID};
use routinely_infra::Context;

pub async fn add_habit_entry_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, RoutinelyError> {
    let body = body.0;
    let usecase = AddHabitEntryUseCase {
        habit_id: path_params.habit_id.clone(),
        day: body.day,
        completed: body.completed,
    };

    execute(usecase, &ctx)
        .await
        .map(|entry| HttpResponse::Created().json(APIResponse::new(entry)))
        .map_err(RoutinelyError::from)
}

#[derive(Debug)]
pub struct AddHabitEntryUseCase {
    pub habit_id: ID,
    pub day: NaiveDate,
    pub completed: bool,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    HabitNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for RoutinelyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::HabitNotFound(habit_id) => {
                Self::NotFound(format!("The habit with id: {}, was not found.", habit_id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for AddHabitEntryUseCase {
    type Response = HabitEntry;

    type Error = UseCaseError;

    const NAME: &'static str = "AddHabitEntry";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .habits
            .find(&self.habit_id)
            .await
            .ok_or_else(|| UseCaseError::HabitNotFound(self.habit_id.clone()))?;

        let entry = HabitEntry {
            habit_id: self.habit_id.clone(),
            day: self.day,
            completed: self.completed,
        };
        ctx.repos
            .habit_entries
            .upsert(&entry)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(entry)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use routinely_domain::{Habit, HabitKind};
    use routinely_infra::setup_context;

    #[actix_web::test]
    async fn tracks_day_and_replaces_same_day_entry() {
        let ctx = setup_context().await;
        let habit = Habit::new(ID::new(), "Stretch".into(), HabitKind::Good, 0);
        ctx.repos.habits.insert(&habit).await.unwrap();

        let mut usecase = AddHabitEntryUseCase {
            habit_id: habit.id.clone(),
            day: "2024-06-01".parse().unwrap(),
            completed: true,
        };
        usecase.execute(&ctx).await.expect("To add entry");

        usecase.completed = false;
        usecase.execute(&ctx).await.expect("To replace entry");

        let entries = ctx.repos.habit_entries.find_by_habit(&habit.id).await;
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].completed);
    }

    #[actix_web::test]
    async fn rejects_unknown_habit() {
        let ctx = setup_context().await;

        let mut usecase = AddHabitEntryUseCase {
            habit_id: ID::new(),
            day: "2024-06-01".parse().unwrap(),
            completed: true,
        };

        let res = usecase.execute(&ctx).await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseError::HabitNotFound(usecase.habit_id)
        );
    }
}
