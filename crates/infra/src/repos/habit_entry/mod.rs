mod inmemory;
mod sqlite;

pub use inmemory::InMemoryHabitEntryRepo;
pub use sqlite::SqliteHabitEntryRepo;

use crate::repos::shared::repo::DeleteResult;
use routinely_domain::{HabitEntry, ID};

#[async_trait::async_trait]
pub trait IHabitEntryRepo: Send + Sync {
    /// Inserts the entry, replacing any existing entry for the same habit
    /// and day.
    async fn upsert(&self, entry: &HabitEntry) -> anyhow::Result<()>;
    async fn find_by_habit(&self, habit_id: &ID) -> Vec<HabitEntry>;
    async fn delete_by_habit(&self, habit_id: &ID) -> anyhow::Result<DeleteResult>;
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repos::create_sqlite_pool;
    use std::sync::Arc;

    async fn repos() -> Vec<Arc<dyn IHabitEntryRepo>> {
        let pool = create_sqlite_pool("sqlite::memory:")
            .await
            .expect("To create sqlite pool");
        vec![
            Arc::new(InMemoryHabitEntryRepo::new()),
            Arc::new(SqliteHabitEntryRepo::new(pool)),
        ]
    }

    fn entry(habit_id: &ID, day: &str, completed: bool) -> HabitEntry {
        HabitEntry {
            habit_id: habit_id.clone(),
            day: day.parse().expect("To parse date"),
            completed,
        }
    }

    #[tokio::test]
    async fn upsert_replaces_same_day_entry() {
        for repo in repos().await {
            let habit_id = ID::new();
            repo.upsert(&entry(&habit_id, "2024-06-01", true))
                .await
                .expect("To upsert entry");
            repo.upsert(&entry(&habit_id, "2024-06-02", true))
                .await
                .expect("To upsert entry");
            repo.upsert(&entry(&habit_id, "2024-06-01", false))
                .await
                .expect("To upsert entry");

            let mut entries = repo.find_by_habit(&habit_id).await;
            entries.sort_by_key(|e| e.day);
            assert_eq!(
                entries,
                vec![
                    entry(&habit_id, "2024-06-01", false),
                    entry(&habit_id, "2024-06-02", true),
                ]
            );
        }
    }

    #[tokio::test]
    async fn delete_by_habit_removes_only_that_habit() {
        for repo in repos().await {
            let habit_id = ID::new();
            let other_habit_id = ID::new();
            repo.upsert(&entry(&habit_id, "2024-06-01", true))
                .await
                .expect("To upsert entry");
            repo.upsert(&entry(&habit_id, "2024-06-02", true))
                .await
                .expect("To upsert entry");
            repo.upsert(&entry(&other_habit_id, "2024-06-01", true))
                .await
                .expect("To upsert entry");

            let res = repo
                .delete_by_habit(&habit_id)
                .await
                .expect("To delete entries");
            assert_eq!(res.deleted_count, 2);
            assert!(repo.find_by_habit(&habit_id).await.is_empty());
            assert_eq!(repo.find_by_habit(&other_habit_id).await.len(), 1);
        }
    }
}
