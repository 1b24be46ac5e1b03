use super::IHabitEntryRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::repo::DeleteResult;
use routinely_domain::{HabitEntry, ID};

pub struct InMemoryHabitEntryRepo {
    entries: std::sync::Mutex<Vec<HabitEntry>>,
}

impl InMemoryHabitEntryRepo {
    pub fn new() -> Self {
        Self {
            entries: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IHabitEntryRepo for InMemoryHabitEntryRepo {
    async fn upsert(&self, entry: &HabitEntry) -> anyhow::Result<()> {
        find_and_delete_by(&self.entries, |existing| {
            existing.habit_id == entry.habit_id && existing.day == entry.day
        });
        insert(entry, &self.entries);
        Ok(())
    }

    async fn find_by_habit(&self, habit_id: &ID) -> Vec<HabitEntry> {
        find_by(&self.entries, |entry| entry.habit_id == *habit_id)
    }

    async fn delete_by_habit(&self, habit_id: &ID) -> anyhow::Result<DeleteResult> {
        let deleted = find_and_delete_by(&self.entries, |entry| entry.habit_id == *habit_id);
        Ok(DeleteResult {
            deleted_count: deleted.len() as i64,
        })
    }
}
