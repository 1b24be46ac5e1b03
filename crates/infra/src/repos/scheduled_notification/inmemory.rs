use super::IScheduledNotificationRepo;
use crate::repos::shared::inmemory_repo::*;
use routinely_domain::{ScheduledNotification, ID};

pub struct InMemoryScheduledNotificationRepo {
    notifications: std::sync::Mutex<Vec<ScheduledNotification>>,
}

impl InMemoryScheduledNotificationRepo {
    pub fn new() -> Self {
        Self {
            notifications: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IScheduledNotificationRepo for InMemoryScheduledNotificationRepo {
    async fn put(&self, notification: &ScheduledNotification) -> anyhow::Result<()> {
        find_and_delete_by(&self.notifications, |existing| {
            existing.reminder_id == notification.reminder_id
        });
        insert(notification, &self.notifications);
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<ScheduledNotification> {
        find_by(&self.notifications, |notification| {
            notification.reminder_id == *reminder_id
        })
        .into_iter()
        .next()
    }

    async fn get_all(&self) -> anyhow::Result<Vec<ScheduledNotification>> {
        Ok(find_by(&self.notifications, |_| true))
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<ScheduledNotification>> {
        Ok(find_and_delete_by(&self.notifications, |notification| {
            notification.reminder_id == *reminder_id
        })
        .into_iter()
        .next())
    }
}
