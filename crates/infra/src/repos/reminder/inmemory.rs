use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use routinely_domain::{Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        save(reminder, &self.reminders);
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    async fn find_by_habit(&self, habit_id: &ID) -> Vec<Reminder> {
        find_by(&self.reminders, |reminder| reminder.habit_id == *habit_id)
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        delete(reminder_id, &self.reminders)
    }

    async fn delete_by_habit(&self, habit_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_and_delete_by(&self.reminders, |reminder| {
            reminder.habit_id == *habit_id
        }))
    }
}
