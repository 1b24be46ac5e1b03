use routinely_domain::ID;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Header carrying the key that lets the receiver verify the sender
pub const WEBHOOK_KEY_HEADER: &str = "routinely-webhook-key";

/// A user-visible notification about to be presented.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub reminder_id: ID,
    pub habit_id: ID,
    pub title: String,
    pub body: String,
    pub fired_at: i64,
}

#[derive(Error, Debug)]
pub enum NotifyError {
    /// The receiver rejected the delivery credentials
    #[error("Notification delivery was not permitted")]
    PermissionDenied,
    #[error("Notification delivery failed: {0}")]
    Delivery(String),
}

/// Presentation seam for fired notifications. Presentation failures are
/// reported but never retried; the occurrence is consumed either way.
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    async fn present(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// Delivers notifications to the webhook configured for this device.
pub struct WebhookNotifier {
    url: String,
    key: String,
    client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(url: String, key: String) -> Self {
        Self {
            url,
            key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl INotifier for WebhookNotifier {
    async fn present(&self, notification: &Notification) -> Result<(), NotifyError> {
        let res = self
            .client
            .post(&self.url)
            .header(WEBHOOK_KEY_HEADER, &self.key)
            .json(notification)
            .send()
            .await
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;

        match res.status() {
            status if status.is_success() => Ok(()),
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Err(NotifyError::PermissionDenied)
            }
            status => Err(NotifyError::Delivery(format!(
                "Webhook responded with status: {}",
                status
            ))),
        }
    }
}

/// Fallback when no webhook is configured: the notification becomes a
/// structured log line.
pub struct LogNotifier {}

#[async_trait::async_trait]
impl INotifier for LogNotifier {
    async fn present(&self, notification: &Notification) -> Result<(), NotifyError> {
        info!(
            reminder_id = %notification.reminder_id,
            habit_id = %notification.habit_id,
            body = %notification.body,
            "{}", notification.title
        );
        Ok(())
    }
}
