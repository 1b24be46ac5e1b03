use chrono::NaiveDate;
use routinely_domain::{Habit, HabitEntry, HabitKind, HabitStats, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitDTO {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    pub description: Option<String>,
    pub kind: HabitKind,
    pub created: i64,
    pub updated: i64,
}

impl HabitDTO {
    pub fn new(habit: Habit) -> Self {
        Self {
            id: habit.id,
            user_id: habit.user_id,
            name: habit.name,
            description: habit.description,
            kind: habit.kind,
            created: habit.created,
            updated: habit.updated,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitEntryDTO {
    pub habit_id: ID,
    pub day: NaiveDate,
    pub completed: bool,
}

impl HabitEntryDTO {
    pub fn new(entry: HabitEntry) -> Self {
        Self {
            habit_id: entry.habit_id,
            day: entry.day,
            completed: entry.completed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStatsDTO {
    pub total_completions: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub completion_rate: f64,
    pub milestones: Vec<u32>,
}

impl HabitStatsDTO {
    pub fn new(stats: HabitStats) -> Self {
        Self {
            total_completions: stats.total_completions,
            current_streak: stats.current_streak,
            longest_streak: stats.longest_streak,
            completion_rate: stats.completion_rate,
            milestones: stats.milestones,
        }
    }
}
