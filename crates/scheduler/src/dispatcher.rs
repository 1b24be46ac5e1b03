use routinely_domain::ScheduledNotification;
use routinely_infra::{Context, Notification, NotifyError};
use tracing::{error, warn};

/// Presents a due notification and consumes its durable record.
///
/// The row is deleted even when presentation fails (the occurrence is
/// consumed either way); a failed delete is only logged and gets resolved by
/// the next reconciliation pass, which may re-deliver once.
pub(crate) async fn dispatch(ctx: &Context, notification: &ScheduledNotification) {
    let habit = ctx.repos.habits.find(&notification.habit_id).await;
    let body = match &habit {
        Some(habit) => format!("It's time for your habit: {}", habit.name),
        None => format!("It's time for your reminder: {}", notification.reminder_id),
    };
    let payload = Notification {
        reminder_id: notification.reminder_id.clone(),
        habit_id: notification.habit_id.clone(),
        title: "Habit Reminder".into(),
        body,
        fired_at: ctx.sys.get_timestamp_millis(),
    };

    match ctx.notifier.present(&payload).await {
        Ok(()) => {}
        Err(NotifyError::PermissionDenied) => {
            warn!(
                reminder_id = %notification.reminder_id,
                "Notification presentation was not permitted, dropping"
            );
        }
        Err(e) => {
            error!(
                reminder_id = %notification.reminder_id,
                "Unable to present notification: {:?}", e
            );
        }
    }

    if let Err(e) = ctx
        .repos
        .scheduled_notifications
        .delete(&notification.reminder_id)
        .await
    {
        error!(
            reminder_id = %notification.reminder_id,
            "Unable to delete fired notification, retrying at next reconciliation: {:?}", e
        );
    }
}
