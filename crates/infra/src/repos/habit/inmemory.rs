use super::IHabitRepo;
use crate::repos::shared::inmemory_repo::*;
use routinely_domain::{Habit, ID};

pub struct InMemoryHabitRepo {
    habits: std::sync::Mutex<Vec<Habit>>,
}

impl InMemoryHabitRepo {
    pub fn new() -> Self {
        Self {
            habits: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IHabitRepo for InMemoryHabitRepo {
    async fn insert(&self, habit: &Habit) -> anyhow::Result<()> {
        insert(habit, &self.habits);
        Ok(())
    }

    async fn save(&self, habit: &Habit) -> anyhow::Result<()> {
        save(habit, &self.habits);
        Ok(())
    }

    async fn find(&self, habit_id: &ID) -> Option<Habit> {
        find(habit_id, &self.habits)
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Habit> {
        find_by(&self.habits, |habit| habit.user_id == *user_id)
    }

    async fn delete(&self, habit_id: &ID) -> Option<Habit> {
        delete(habit_id, &self.habits)
    }
}
