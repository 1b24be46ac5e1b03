use crate::base::{APIResponse, BaseClient};
use reqwest::StatusCode;
use routinely_api_structs::*;
use routinely_domain::{Frequency, ID};
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct SetReminderInput {
    pub habit_id: ID,
    pub user_id: ID,
    pub frequency: Frequency,
    /// Wall-clock "HH:MM"
    pub time_of_day: String,
    pub enabled: bool,
}

pub struct UpdateReminderInput {
    pub reminder_id: ID,
    pub frequency: Option<Frequency>,
    pub time_of_day: Option<String>,
    pub enabled: Option<bool>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn set(&self, input: SetReminderInput) -> APIResponse<set_reminder::APIResponse> {
        let body = set_reminder::RequestBody {
            habit_id: input.habit_id,
            user_id: input.user_id,
            frequency: input.frequency,
            time_of_day: input.time_of_day,
            enabled: input.enabled,
        };
        self.base
            .post(body, "reminder".into(), StatusCode::CREATED)
            .await
    }

    pub async fn update(
        &self,
        input: UpdateReminderInput,
    ) -> APIResponse<update_reminder::APIResponse> {
        let body = update_reminder::RequestBody {
            frequency: input.frequency,
            time_of_day: input.time_of_day,
            enabled: input.enabled,
        };
        self.base
            .put(
                body,
                format!("reminder/{}", input.reminder_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, reminder_id: ID) -> APIResponse<delete_reminder::APIResponse> {
        self.base
            .delete(format!("reminder/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn get_by_habit(
        &self,
        habit_id: ID,
    ) -> APIResponse<get_reminders_by_habit::APIResponse> {
        self.base
            .get(format!("habit/{}/reminder", habit_id), StatusCode::OK)
            .await
    }
}
