use crate::base::{APIResponse, BaseClient};
use reqwest::StatusCode;
use routinely_api_structs::{get_pending_reminders, get_status};
use std::sync::Arc;

#[derive(Clone)]
pub struct StatusClient {
    base: Arc<BaseClient>,
}

impl StatusClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn check_health(&self) -> APIResponse<get_status::APIResponse> {
        self.base.get("".into(), StatusCode::OK).await
    }

    pub async fn pending_reminders(&self) -> APIResponse<get_pending_reminders::APIResponse> {
        self.base
            .get("scheduler/pending".into(), StatusCode::OK)
            .await
    }
}
