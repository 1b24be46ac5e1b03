use crate::error::RoutinelyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use routinely_api_structs::delete_habit::*;
use routinely_domain::{Habit, ID};
use routinely_infra::Context;
use routinely_scheduler::SchedulerHandle;
use tracing::warn;

pub async fn delete_habit_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
    scheduler: web::Data<SchedulerHandle>,
) -> Result<HttpResponse, RoutinelyError> {
    let usecase = DeleteHabitUseCase {
        habit_id: path_params.habit_id.clone(),
        scheduler: scheduler.get_ref().clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|habit| HttpResponse::Ok().json(APIResponse::new(habit)))
        .map_err(RoutinelyError::from)
}

#[derive(Debug)]
pub struct DeleteHabitUseCase {
    pub habit_id: ID,
    pub scheduler: SchedulerHandle,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for RoutinelyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(habit_id) => {
                Self::NotFound(format!("The habit with id: {}, was not found.", habit_id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteHabitUseCase {
    type Response = Habit;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteHabit";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let habit = ctx
            .repos
            .habits
            .delete(&self.habit_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.habit_id.clone()))?;

        let reminders = ctx
            .repos
            .reminders
            .delete_by_habit(&self.habit_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        // Cancelling armed schedules is best effort: a reminder that slips
        // through fires against a deleted habit and gets consumed there.
        for reminder in reminders {
            if let Err(e) = self.scheduler.cancel(reminder.id.clone()).await {
                warn!(
                    reminder_id = %reminder.id,
                    "Unable to cancel schedule for deleted habit: {:?}", e
                );
            }
        }

        ctx.repos
            .habit_entries
            .delete_by_habit(&self.habit_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(habit)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use routinely_domain::{Frequency, HabitEntry, HabitKind, Reminder};
    use routinely_infra::setup_context;
    use routinely_scheduler::start_notification_scheduler;

    #[actix_web::test]
    async fn deletes_habit_with_entries_reminders_and_schedules() {
        let ctx = setup_context().await;
        let scheduler = start_notification_scheduler(ctx.clone());

        let habit = Habit::new(ID::new(), "Stretch".into(), HabitKind::Good, 0);
        ctx.repos.habits.insert(&habit).await.unwrap();
        let entry = HabitEntry {
            habit_id: habit.id.clone(),
            day: "2024-06-01".parse().unwrap(),
            completed: true,
        };
        ctx.repos.habit_entries.upsert(&entry).await.unwrap();
        let reminder = Reminder {
            id: ID::new(),
            habit_id: habit.id.clone(),
            user_id: habit.user_id.clone(),
            frequency: Frequency::Daily,
            time_of_day: "08:00".parse().unwrap(),
            enabled: true,
            created: 0,
            updated: 0,
        };
        ctx.repos.reminders.insert(&reminder).await.unwrap();
        scheduler
            .schedule(reminder.to_request())
            .await
            .expect("To schedule reminder");

        let mut usecase = DeleteHabitUseCase {
            habit_id: habit.id.clone(),
            scheduler: scheduler.clone(),
        };
        let deleted = usecase.execute(&ctx).await.expect("To delete habit");

        assert_eq!(deleted, habit);
        assert!(ctx.repos.habits.find(&habit.id).await.is_none());
        assert!(ctx.repos.reminders.find_by_habit(&habit.id).await.is_empty());
        assert!(ctx.repos.habit_entries.find_by_habit(&habit.id).await.is_empty());
        assert!(scheduler.pending().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn rejects_unknown_habit() {
        let ctx = setup_context().await;
        let scheduler = start_notification_scheduler(ctx.clone());

        let mut usecase = DeleteHabitUseCase {
            habit_id: ID::new(),
            scheduler,
        };

        let res = usecase.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::NotFound(usecase.habit_id));
    }
}
