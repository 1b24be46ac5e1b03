use crate::dtos::ScheduledNotificationDTO;
use routinely_domain::ScheduledNotification;
use serde::{Deserialize, Serialize};

pub mod get_status {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
    }
}

pub mod get_pending_reminders {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub pending: Vec<ScheduledNotificationDTO>,
    }

    impl APIResponse {
        pub fn new(pending: Vec<ScheduledNotification>) -> Self {
            Self {
                pending: pending.into_iter().map(ScheduledNotificationDTO::new).collect(),
            }
        }
    }
}
