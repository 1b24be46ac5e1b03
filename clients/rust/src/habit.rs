use crate::base::{APIResponse, BaseClient};
use chrono::NaiveDate;
use reqwest::StatusCode;
use routinely_api_structs::*;
use routinely_domain::{HabitKind, ID};
use std::sync::Arc;

#[derive(Clone)]
pub struct HabitClient {
    base: Arc<BaseClient>,
}

pub struct CreateHabitInput {
    pub user_id: ID,
    pub name: String,
    pub description: Option<String>,
    pub kind: HabitKind,
}

pub struct UpdateHabitInput {
    pub habit_id: ID,
    pub name: Option<String>,
    pub description: Option<String>,
    pub kind: Option<HabitKind>,
}

pub struct AddHabitEntryInput {
    pub habit_id: ID,
    pub day: NaiveDate,
    pub completed: bool,
}

impl HabitClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateHabitInput) -> APIResponse<create_habit::APIResponse> {
        let body = create_habit::RequestBody {
            user_id: input.user_id,
            name: input.name,
            description: input.description,
            kind: input.kind,
        };
        self.base
            .post(body, "habit".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, habit_id: ID) -> APIResponse<get_habit::APIResponse> {
        self.base
            .get(format!("habit/{}", habit_id), StatusCode::OK)
            .await
    }

    pub async fn get_by_user(&self, user_id: ID) -> APIResponse<get_habits_by_user::APIResponse> {
        self.base
            .get(format!("user/{}/habit", user_id), StatusCode::OK)
            .await
    }

    pub async fn update(&self, input: UpdateHabitInput) -> APIResponse<update_habit::APIResponse> {
        let body = update_habit::RequestBody {
            name: input.name,
            description: input.description,
            kind: input.kind,
        };
        self.base
            .put(body, format!("habit/{}", input.habit_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, habit_id: ID) -> APIResponse<delete_habit::APIResponse> {
        self.base
            .delete(format!("habit/{}", habit_id), StatusCode::OK)
            .await
    }

    pub async fn add_entry(
        &self,
        input: AddHabitEntryInput,
    ) -> APIResponse<add_habit_entry::APIResponse> {
        let body = add_habit_entry::RequestBody {
            day: input.day,
            completed: input.completed,
        };
        self.base
            .post(
                body,
                format!("habit/{}/entry", input.habit_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn entries(&self, habit_id: ID) -> APIResponse<get_habit_entries::APIResponse> {
        self.base
            .get(format!("habit/{}/entries", habit_id), StatusCode::OK)
            .await
    }

    pub async fn stats(&self, habit_id: ID) -> APIResponse<get_habit_stats::APIResponse> {
        self.base
            .get(format!("habit/{}/stats", habit_id), StatusCode::OK)
            .await
    }
}
