use crate::error::RoutinelyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use routinely_api_structs::update_reminder::*;
use routinely_domain::{Frequency, Reminder, ScheduledNotification, TimeOfDay, ID};
use routinely_infra::Context;
use routinely_scheduler::{ScheduleError, SchedulerHandle};

pub async fn update_reminder_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
    scheduler: web::Data<SchedulerHandle>,
) -> Result<HttpResponse, RoutinelyError> {
    let body = body.0;
    let usecase = UpdateReminderUseCase {
        reminder_id: path_params.reminder_id.clone(),
        frequency: body.frequency,
        time_of_day: body.time_of_day,
        enabled: body.enabled,
        scheduler: scheduler.get_ref().clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|(reminder, scheduled)| {
            HttpResponse::Ok().json(APIResponse::new(reminder, scheduled))
        })
        .map_err(RoutinelyError::from)
}

#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub reminder_id: ID,
    pub frequency: Option<Frequency>,
    pub time_of_day: Option<String>,
    pub enabled: Option<bool>,
    pub scheduler: SchedulerHandle,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    InvalidTimeOfDay(String),
    InvalidFrequency,
    SchedulerUnavailable,
    StorageError,
}

impl From<UseCaseError> for RoutinelyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::InvalidTimeOfDay(timestr) => Self::BadClientData(format!(
                "Invalid time of day: {}, expected HH:MM",
                timestr
            )),
            UseCaseError::InvalidFrequency => {
                Self::BadClientData("Invalid frequency specified for the reminder".into())
            }
            UseCaseError::SchedulerUnavailable => {
                Self::Unavailable("The notification scheduler is not running".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

impl From<ScheduleError> for UseCaseError {
    fn from(e: ScheduleError) -> Self {
        match e {
            ScheduleError::InvalidRequest(_) => UseCaseError::InvalidFrequency,
            ScheduleError::Store(_) => UseCaseError::StorageError,
            ScheduleError::Unavailable => UseCaseError::SchedulerUnavailable,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = (Reminder, Option<ScheduledNotification>);

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let mut reminder = ctx
            .repos
            .reminders
            .find(&self.reminder_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.reminder_id.clone()))?;

        if let Some(frequency) = &self.frequency {
            if !frequency.is_valid() {
                return Err(UseCaseError::InvalidFrequency);
            }
            reminder.frequency = frequency.clone();
        }
        if let Some(timestr) = &self.time_of_day {
            reminder.time_of_day = timestr
                .parse::<TimeOfDay>()
                .map_err(|_| UseCaseError::InvalidTimeOfDay(timestr.clone()))?;
        }
        if let Some(enabled) = self.enabled {
            reminder.enabled = enabled;
        }
        reminder.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .reminders
            .save(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        // The new request supersedes the old schedule: the engine cancels
        // the previous timer before arming the next occurrence.
        let scheduled = self.scheduler.schedule(reminder.to_request()).await?;

        Ok((reminder, scheduled))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use routinely_domain::{Habit, HabitKind};
    use routinely_infra::setup_context;
    use routinely_scheduler::start_notification_scheduler;

    struct TestContext {
        ctx: Context,
        scheduler: SchedulerHandle,
        reminder: Reminder,
    }

    async fn setup() -> TestContext {
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

        TestContext {
            ctx,
            scheduler,
            reminder,
        }
    }

    #[actix_web::test]
    async fn edit_before_fire_keeps_exactly_one_schedule() {
        let TestContext {
            ctx,
            scheduler,
            reminder,
        } = setup().await;

        let mut usecase = UpdateReminderUseCase {
            reminder_id: reminder.id.clone(),
            frequency: Some(Frequency::Weekends),
            time_of_day: Some("09:30".into()),
            enabled: None,
            scheduler: scheduler.clone(),
        };

        let (updated, scheduled) = usecase.execute(&ctx).await.expect("To update reminder");
        let scheduled = scheduled.expect("To arm an occurrence");

        assert_eq!(updated.frequency, Frequency::Weekends);
        assert_eq!(ctx.repos.reminders.find(&reminder.id).await, Some(updated));
        // The superseded schedule is gone, only the new occurrence remains
        assert_eq!(scheduler.pending().await.unwrap(), vec![scheduled]);
    }

    #[actix_web::test]
    async fn disabling_cancels_the_armed_schedule() {
        let TestContext {
            ctx,
            scheduler,
            reminder,
        } = setup().await;

        let mut usecase = UpdateReminderUseCase {
            reminder_id: reminder.id.clone(),
            frequency: None,
            time_of_day: None,
            enabled: Some(false),
            scheduler: scheduler.clone(),
        };

        let (updated, scheduled) = usecase.execute(&ctx).await.expect("To update reminder");

        assert!(!updated.enabled);
        assert!(scheduled.is_none());
        assert!(scheduler.pending().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn rejects_unknown_reminder() {
        let TestContext { ctx, scheduler, .. } = setup().await;

        let mut usecase = UpdateReminderUseCase {
            reminder_id: ID::new(),
            frequency: None,
            time_of_day: None,
            enabled: None,
            scheduler,
        };

        let res = usecase.execute(&ctx).await;
        assert!(matches!(res, Err(UseCaseError::NotFound(_))));
    }
}
