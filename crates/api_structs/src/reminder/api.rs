use crate::dtos::{ReminderDTO, ScheduledNotificationDTO};
use routinely_domain::{Reminder, ScheduledNotification, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub reminder: ReminderDTO,
    /// The occurrence armed by this save, absent when the reminder is
    /// disabled
    pub scheduled: Option<ScheduledNotificationDTO>,
}

impl ReminderResponse {
    pub fn new(reminder: Reminder, scheduled: Option<ScheduledNotification>) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder),
            scheduled: scheduled.map(ScheduledNotificationDTO::new),
        }
    }
}

pub mod set_reminder {
    use super::*;
    use routinely_domain::Frequency;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub habit_id: ID,
        pub user_id: ID,
        pub frequency: Frequency,
        /// Wall-clock "HH:MM"
        pub time_of_day: String,
        pub enabled: bool,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod update_reminder {
    use super::*;
    use routinely_domain::Frequency;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub frequency: Option<Frequency>,
        pub time_of_day: Option<String>,
        pub enabled: Option<bool>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod delete_reminder {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminders_by_habit {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub habit_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminders: Vec<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminders: Vec<Reminder>) -> Self {
            Self {
                reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
            }
        }
    }
}
