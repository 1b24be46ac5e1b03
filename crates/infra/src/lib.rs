mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{
    DeleteResult, IHabitEntryRepo, IHabitRepo, IReminderRepo, IScheduledNotificationRepo,
    InMemoryHabitEntryRepo, InMemoryHabitRepo, InMemoryReminderRepo,
    InMemoryScheduledNotificationRepo, Repos, SqliteHabitEntryRepo, SqliteHabitRepo,
    SqliteReminderRepo, SqliteScheduledNotificationRepo,
};
pub use services::{
    INotifier, LogNotifier, Notification, NotifyError, WebhookNotifier, WEBHOOK_KEY_HEADER,
};
pub use system::{ISys, RealSys, StaticTimeSys};

use std::sync::Arc;

#[derive(Clone)]
pub struct Context {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifier: Arc<dyn INotifier>,
}

impl Context {
    pub fn create(config: Config, repos: Repos) -> Self {
        let notifier: Arc<dyn INotifier> = match &config.webhook_url {
            Some(url) => Arc::new(WebhookNotifier::new(
                url.clone(),
                config.webhook_key.clone(),
            )),
            None => Arc::new(LogNotifier {}),
        };
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            notifier,
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> Context {
    let config = Config::new();
    let repos = match &config.database_url {
        Some(database_url) => Repos::create_sqlite(database_url)
            .await
            .expect("DATABASE_URL must point to a usable SQLite database"),
        None => Repos::create_inmemory(),
    };
    Context::create(config, repos)
}
