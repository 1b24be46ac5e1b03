mod habit;
mod habit_entry;
mod reminder;
mod scheduled_notification;
mod shared;

pub use habit::{IHabitRepo, InMemoryHabitRepo, SqliteHabitRepo};
pub use habit_entry::{IHabitEntryRepo, InMemoryHabitEntryRepo, SqliteHabitEntryRepo};
pub use reminder::{IReminderRepo, InMemoryReminderRepo, SqliteReminderRepo};
pub use scheduled_notification::{
    IScheduledNotificationRepo, InMemoryScheduledNotificationRepo,
    SqliteScheduledNotificationRepo,
};
pub use shared::repo::DeleteResult;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub habits: Arc<dyn IHabitRepo>,
    pub habit_entries: Arc<dyn IHabitEntryRepo>,
    pub reminders: Arc<dyn IReminderRepo>,
    pub scheduled_notifications: Arc<dyn IScheduledNotificationRepo>,
}

impl Repos {
    pub async fn create_sqlite(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = create_sqlite_pool(connection_string).await?;
        info!("DB CHECKING CONNECTION ... [done]");
        Ok(Self {
            habits: Arc::new(SqliteHabitRepo::new(pool.clone())),
            habit_entries: Arc::new(SqliteHabitEntryRepo::new(pool.clone())),
            reminders: Arc::new(SqliteReminderRepo::new(pool.clone())),
            scheduled_notifications: Arc::new(SqliteScheduledNotificationRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            habits: Arc::new(InMemoryHabitRepo::new()),
            habit_entries: Arc::new(InMemoryHabitEntryRepo::new()),
            reminders: Arc::new(InMemoryReminderRepo::new()),
            scheduled_notifications: Arc::new(InMemoryScheduledNotificationRepo::new()),
        }
    }
}

pub(crate) async fn create_sqlite_pool(connection_string: &str) -> anyhow::Result<SqlitePool> {
    let options = connection_string
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true);
    // A single connection keeps `sqlite::memory:` databases shared between
    // all users of the pool; SQLite writes are serialized anyway.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    sqlx::migrate!().run(&pool).await?;
    Ok(pool)
}
