use crate::dtos::{HabitDTO, HabitEntryDTO, HabitStatsDTO};
use routinely_domain::{Habit, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitResponse {
    pub habit: HabitDTO,
}

impl HabitResponse {
    pub fn new(habit: Habit) -> Self {
        Self {
            habit: HabitDTO::new(habit),
        }
    }
}

pub mod create_habit {
    use super::*;
    use routinely_domain::HabitKind;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub user_id: ID,
        pub name: String,
        pub description: Option<String>,
        pub kind: HabitKind,
    }

    pub type APIResponse = HabitResponse;
}

pub mod get_habit {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub habit_id: ID,
    }

    pub type APIResponse = HabitResponse;
}

pub mod get_habits_by_user {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub habits: Vec<HabitDTO>,
    }

    impl APIResponse {
        pub fn new(habits: Vec<Habit>) -> Self {
            Self {
                habits: habits.into_iter().map(HabitDTO::new).collect(),
            }
        }
    }
}

pub mod update_habit {
    use super::*;
    use routinely_domain::HabitKind;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub habit_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: Option<String>,
        pub description: Option<String>,
        pub kind: Option<HabitKind>,
    }

    pub type APIResponse = HabitResponse;
}

pub mod delete_habit {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub habit_id: ID,
    }

    pub type APIResponse = HabitResponse;
}

pub mod add_habit_entry {
    use super::*;
    use chrono::NaiveDate;
    use routinely_domain::HabitEntry;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub habit_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub day: NaiveDate,
        pub completed: bool,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub entry: HabitEntryDTO,
    }

    impl APIResponse {
        pub fn new(entry: HabitEntry) -> Self {
            Self {
                entry: HabitEntryDTO::new(entry),
            }
        }
    }
}

pub mod get_habit_entries {
    use super::*;
    use routinely_domain::HabitEntry;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub habit_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub entries: Vec<HabitEntryDTO>,
    }

    impl APIResponse {
        pub fn new(entries: Vec<HabitEntry>) -> Self {
            Self {
                entries: entries.into_iter().map(HabitEntryDTO::new).collect(),
            }
        }
    }
}

pub mod get_habit_stats {
    use super::*;
    use routinely_domain::HabitStats;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub habit_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub stats: HabitStatsDTO,
    }

    impl APIResponse {
        pub fn new(stats: HabitStats) -> Self {
            Self {
                stats: HabitStatsDTO::new(stats),
            }
        }
    }
}
