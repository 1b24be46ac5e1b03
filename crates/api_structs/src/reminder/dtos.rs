use routinely_domain::{Frequency, Reminder, ScheduledNotification, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub habit_id: ID,
    pub user_id: ID,
    pub frequency: Frequency,
    /// Wall-clock "HH:MM"
    pub time_of_day: String,
    pub enabled: bool,
    pub created: i64,
    pub updated: i64,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            habit_id: reminder.habit_id,
            user_id: reminder.user_id,
            frequency: reminder.frequency,
            time_of_day: reminder.time_of_day.to_string(),
            enabled: reminder.enabled,
            created: reminder.created,
            updated: reminder.updated,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledNotificationDTO {
    pub reminder_id: ID,
    pub habit_id: ID,
    pub fire_time: i64,
}

impl ScheduledNotificationDTO {
    pub fn new(notification: ScheduledNotification) -> Self {
        Self {
            reminder_id: notification.reminder_id,
            habit_id: notification.habit_id,
            fire_time: notification.fire_time,
        }
    }
}
