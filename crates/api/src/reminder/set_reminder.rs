use crate::error::RoutinelyError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use routinely_api_structs::set_reminder::*;
use routinely_domain::{Frequency, Reminder, ScheduledNotification, TimeOfDay, ID};
use routinely_infra::Context;
use routinely_scheduler::{ScheduleError, SchedulerHandle};

pub async fn set_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
    scheduler: web::Data<SchedulerHandle>,
) -> Result<HttpResponse, RoutinelyError> {
    let body = body.0;
    let usecase = SetReminderUseCase {
        habit_id: body.habit_id,
        user_id: body.user_id,
        frequency: body.frequency,
        time_of_day: body.time_of_day,
        enabled: body.enabled,
        scheduler: scheduler.get_ref().clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|(reminder, scheduled)| {
            HttpResponse::Created().json(APIResponse::new(reminder, scheduled))
        })
        .map_err(RoutinelyError::from)
}

#[derive(Debug)]
pub struct SetReminderUseCase {
    pub habit_id: ID,
    pub user_id: ID,
    pub frequency: Frequency,
    pub time_of_day: String,
    pub enabled: bool,
    pub scheduler: SchedulerHandle,
}

#[derive(Debug)]
pub enum UseCaseError {
    HabitNotFound(ID),
    InvalidTimeOfDay(String),
    InvalidFrequency,
    SchedulerUnavailable,
    StorageError,
}

impl From<UseCaseError> for RoutinelyError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::HabitNotFound(habit_id) => {
                Self::NotFound(format!("The habit with id: {}, was not found.", habit_id))
            }
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
impl UseCase for SetReminderUseCase {
    type Response = (Reminder, Option<ScheduledNotification>);

    type Error = UseCaseError;

    const NAME: &'static str = "SetReminder";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let time_of_day = self
            .time_of_day
            .parse::<TimeOfDay>()
            .map_err(|_| UseCaseError::InvalidTimeOfDay(self.time_of_day.clone()))?;
        if !self.frequency.is_valid() {
            return Err(UseCaseError::InvalidFrequency);
        }

        ctx.repos
            .habits
            .find(&self.habit_id)
            .await
            .ok_or_else(|| UseCaseError::HabitNotFound(self.habit_id.clone()))?;

        let now = ctx.sys.get_timestamp_millis();
        let reminder = Reminder {
            id: Default::default(),
            habit_id: self.habit_id.clone(),
            user_id: self.user_id.clone(),
            frequency: self.frequency.clone(),
            time_of_day,
            enabled: self.enabled,
            created: now,
            updated: now,
        };

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

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
        habit: Habit,
    }

    async fn setup() -> TestContext {
        let ctx = setup_context().await;
        let scheduler = start_notification_scheduler(ctx.clone());
        let habit = Habit::new(ID::new(), "Stretch".into(), HabitKind::Good, 0);
        ctx.repos.habits.insert(&habit).await.unwrap();

        TestContext {
            ctx,
            scheduler,
            habit,
        }
    }

    #[actix_web::test]
    async fn persists_reminder_and_arms_future_occurrence() {
        let TestContext {
            ctx,
            scheduler,
            habit,
        } = setup().await;

        let mut usecase = SetReminderUseCase {
            habit_id: habit.id.clone(),
            user_id: habit.user_id.clone(),
            frequency: Frequency::Daily,
            time_of_day: "08:00".into(),
            enabled: true,
            scheduler: scheduler.clone(),
        };

        let (reminder, scheduled) = usecase.execute(&ctx).await.expect("To set reminder");
        let scheduled = scheduled.expect("To arm an occurrence");

        assert_eq!(ctx.repos.reminders.find(&reminder.id).await, Some(reminder));
        assert!(scheduled.fire_time > ctx.sys.get_timestamp_millis());
        assert_eq!(scheduler.pending().await.unwrap(), vec![scheduled]);
    }

    #[actix_web::test]
    async fn disabled_reminder_is_saved_but_never_armed() {
        let TestContext {
            ctx,
            scheduler,
            habit,
        } = setup().await;

        let mut usecase = SetReminderUseCase {
            habit_id: habit.id.clone(),
            user_id: habit.user_id.clone(),
            frequency: Frequency::Daily,
            time_of_day: "08:00".into(),
            enabled: false,
            scheduler: scheduler.clone(),
        };

        let (reminder, scheduled) = usecase.execute(&ctx).await.expect("To set reminder");

        assert!(scheduled.is_none());
        assert!(!reminder.enabled);
        assert!(scheduler.pending().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn rejects_malformed_time_of_day() {
        let TestContext {
            ctx,
            scheduler,
            habit,
        } = setup().await;

        let mut usecase = SetReminderUseCase {
            habit_id: habit.id.clone(),
            user_id: habit.user_id.clone(),
            frequency: Frequency::Daily,
            time_of_day: "25:99".into(),
            enabled: true,
            scheduler,
        };

        let res = usecase.execute(&ctx).await;
        assert!(matches!(res, Err(UseCaseError::InvalidTimeOfDay(_))));
        assert!(ctx
            .repos
            .reminders
            .find_by_habit(&habit.id)
            .await
            .is_empty());
    }

    #[actix_web::test]
    async fn rejects_empty_custom_weekday_set() {
        let TestContext {
            ctx,
            scheduler,
            habit,
        } = setup().await;

        let mut usecase = SetReminderUseCase {
            habit_id: habit.id.clone(),
            user_id: habit.user_id.clone(),
            frequency: Frequency::Custom(Vec::new()),
            time_of_day: "08:00".into(),
            enabled: true,
            scheduler,
        };

        let res = usecase.execute(&ctx).await;
        assert!(matches!(res, Err(UseCaseError::InvalidFrequency)));
    }

    #[actix_web::test]
    async fn rejects_unknown_habit() {
        let TestContext { ctx, scheduler, .. } = setup().await;

        let mut usecase = SetReminderUseCase {
            habit_id: ID::new(),
            user_id: ID::new(),
            frequency: Frequency::Daily,
            time_of_day: "08:00".into(),
            enabled: true,
            scheduler,
        };

        let res = usecase.execute(&ctx).await;
        assert!(matches!(res, Err(UseCaseError::HabitNotFound(_))));
    }
}
