use crate::error::RoutinelyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use routinely_api_structs::delete_reminder::*;
use routinely_domain::{Reminder, ID};
use routinely_infra::Context;
use routinely_scheduler::SchedulerHandle;

pub async fn delete_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
    scheduler: web::Data<SchedulerHandle>,
) -> Result<HttpResponse, RoutinelyError> {
    let usecase = DeleteReminderUseCase {
        reminder_id: path_params.reminder_id.clone(),
        scheduler: scheduler.get_ref().clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder, None)))
        .map_err(RoutinelyError::from)
}

#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub reminder_id: ID,
    pub scheduler: SchedulerHandle,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    SchedulerUnavailable,
}

impl From<UseCaseError> for RoutinelyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::SchedulerUnavailable => {
                Self::Unavailable("The notification scheduler is not running".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let reminder = ctx
            .repos
            .reminders
            .delete(&self.reminder_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.reminder_id.clone()))?;

        self.scheduler
            .cancel(reminder.id.clone())
            .await
            .map_err(|_| UseCaseError::SchedulerUnavailable)?;

        Ok(reminder)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use routinely_domain::{Frequency, Habit, HabitKind};
    use routinely_infra::setup_context;
    use routinely_scheduler::start_notification_scheduler;

    #[actix_web::test]
    async fn deletes_reminder_and_cancels_schedule() {
        let ctx = setup_context().await;
        let scheduler = start_notification_scheduler(ctx.clone());
        let habit = Habit::new(ID::new(), "Stretch".into(), HabitKind::Good, 0);
        ctx.repos.habits.insert(&habit).await.unwrap();
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

        let mut usecase = DeleteReminderUseCase {
            reminder_id: reminder.id.clone(),
            scheduler: scheduler.clone(),
        };
        let deleted = usecase.execute(&ctx).await.expect("To delete reminder");

        assert_eq!(deleted, reminder);
        assert!(ctx.repos.reminders.find(&reminder.id).await.is_none());
        assert!(scheduler.pending().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn rejects_unknown_reminder() {
        let ctx = setup_context().await;
        let scheduler = start_notification_scheduler(ctx.clone());

        let mut usecase = DeleteReminderUseCase {
            reminder_id: ID::new(),
            scheduler,
        };

        let res = usecase.execute(&ctx).await;
        assert!(matches!(res, Err(UseCaseError::NotFound(_))));
    }
}
