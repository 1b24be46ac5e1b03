mod inmemory;
mod sqlite;

pub use inmemory::InMemoryHabitRepo;
pub use sqlite::SqliteHabitRepo;

use routinely_domain::{Habit, ID};

#[async_trait::async_trait]
pub trait IHabitRepo: Send + Sync {
    async fn insert(&self, habit: &Habit) -> anyhow::Result<()>;
    async fn save(&self, habit: &Habit) -> anyhow::Result<()>;
    async fn find(&self, habit_id: &ID) -> Option<Habit>;
    async fn find_by_user(&self, user_id: &ID) -> Vec<Habit>;
    async fn delete(&self, habit_id: &ID) -> Option<Habit>;
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repos::create_sqlite_pool;
    use routinely_domain::HabitKind;
    use std::sync::Arc;

    async fn repos() -> Vec<Arc<dyn IHabitRepo>> {
        let pool = create_sqlite_pool("sqlite::memory:")
            .await
            .expect("To create sqlite pool");
        vec![
            Arc::new(InMemoryHabitRepo::new()),
            Arc::new(SqliteHabitRepo::new(pool)),
        ]
    }

    #[tokio::test]
    async fn crud_roundtrip() {
        for repo in repos().await {
            let mut habit = Habit::new(ID::new(), "Drink water".into(), HabitKind::Good, 100);
            habit.description = Some("Two liters".into());

            repo.insert(&habit).await.expect("To insert habit");
            assert_eq!(repo.find(&habit.id).await, Some(habit.clone()));

            habit.name = "Drink more water".into();
            habit.updated = 200;
            repo.save(&habit).await.expect("To save habit");
            assert_eq!(repo.find(&habit.id).await, Some(habit.clone()));

            let by_user = repo.find_by_user(&habit.user_id).await;
            assert_eq!(by_user, vec![habit.clone()]);
            assert!(repo.find_by_user(&ID::new()).await.is_empty());

            assert_eq!(repo.delete(&habit.id).await, Some(habit.clone()));
            assert!(repo.find(&habit.id).await.is_none());
            assert!(repo.delete(&habit.id).await.is_none());
        }
    }
}
