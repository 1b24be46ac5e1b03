mod inmemory;
mod sqlite;

pub use inmemory::InMemoryScheduledNotificationRepo;
pub use sqlite::SqliteScheduledNotificationRepo;

use routinely_domain::{ScheduledNotification, ID};

/// The durable store behind the notification scheduler. Keyed by reminder
/// id: `put` for an id that already has a row replaces it, so at most one
/// pending occurrence exists per reminder. Rows must survive a process
/// restart (the SQLite implementation); the in-memory implementation exists
/// for tests and ephemeral setups.
#[async_trait::async_trait]
pub trait IScheduledNotificationRepo: Send + Sync {
    async fn put(&self, notification: &ScheduledNotification) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> Option<ScheduledNotification>;
    async fn get_all(&self) -> anyhow::Result<Vec<ScheduledNotification>>;
    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<ScheduledNotification>>;
}
