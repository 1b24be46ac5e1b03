mod inmemory;
mod sqlite;

pub use inmemory::InMemoryReminderRepo;
pub use sqlite::SqliteReminderRepo;

use routinely_domain::{Reminder, ID};

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    async fn find_by_habit(&self, habit_id: &ID) -> Vec<Reminder>;
    async fn delete(&self, reminder_id: &ID) -> Option<Reminder>;
    /// Deletes and returns every reminder of the habit, so callers can
    /// cancel the associated schedules.
    async fn delete_by_habit(&self, habit_id: &ID) -> anyhow::Result<Vec<Reminder>>;
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repos::create_sqlite_pool;
    use routinely_domain::{Frequency, TimeOfDay};
    use std::sync::Arc;

    async fn repos() -> Vec<Arc<dyn IReminderRepo>> {
        let pool = create_sqlite_pool("sqlite::memory:")
            .await
            .expect("To create sqlite pool");
        vec![
            Arc::new(InMemoryReminderRepo::new()),
            Arc::new(SqliteReminderRepo::new(pool)),
        ]
    }

    fn reminder(habit_id: &ID, frequency: Frequency) -> Reminder {
        Reminder {
            id: ID::new(),
            habit_id: habit_id.clone(),
            user_id: ID::new(),
            frequency,
            time_of_day: "08:00".parse::<TimeOfDay>().expect("To parse time"),
            enabled: true,
            created: 100,
            updated: 100,
        }
    }

    #[tokio::test]
    async fn crud_roundtrip_preserves_frequency() {
        for repo in repos().await {
            let habit_id = ID::new();
            let frequencies = vec![
                Frequency::Daily,
                Frequency::Weekdays,
                Frequency::Weekends,
                Frequency::Once,
                Frequency::Custom(vec![1, 3, 5]),
            ];
            for frequency in frequencies {
                let mut r = reminder(&habit_id, frequency);
                repo.insert(&r).await.expect("To insert reminder");
                assert_eq!(repo.find(&r.id).await, Some(r.clone()));

                r.enabled = false;
                r.time_of_day = "21:15".parse().expect("To parse time");
                r.updated = 200;
                repo.save(&r).await.expect("To save reminder");
                assert_eq!(repo.find(&r.id).await, Some(r.clone()));
            }
            assert_eq!(repo.find_by_habit(&habit_id).await.len(), 5);
        }
    }

    #[tokio::test]
    async fn delete_by_habit_returns_deleted_reminders() {
        for repo in repos().await {
            let habit_id = ID::new();
            let r1 = reminder(&habit_id, Frequency::Daily);
            let r2 = reminder(&habit_id, Frequency::Once);
            let other = reminder(&ID::new(), Frequency::Daily);
            for r in [&r1, &r2, &other] {
                repo.insert(r).await.expect("To insert reminder");
            }

            let mut deleted = repo
                .delete_by_habit(&habit_id)
                .await
                .expect("To delete reminders");
            deleted.sort_by_key(|r| r.id.as_string());
            let mut expected = vec![r1, r2];
            expected.sort_by_key(|r| r.id.as_string());
            assert_eq!(deleted, expected);
            assert!(repo.find_by_habit(&habit_id).await.is_empty());
            assert!(repo.find(&other.id).await.is_some());
        }
    }
}
