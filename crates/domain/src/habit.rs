use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// Whether the habit is one the user wants to build or to break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HabitKind {
    Good,
    Bad,
}

/// A `Habit` is something the owning user tracks daily, e.g. "drink water"
/// or "no smoking". Reminders and tracking entries reference it by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Habit {
    pub id: ID,
    /// The user owning this `Habit`
    pub user_id: ID,
    pub name: String,
    pub description: Option<String>,
    pub kind: HabitKind,
    pub created: i64,
    pub updated: i64,
}

impl Habit {
    pub fn new(user_id: ID, name: String, kind: HabitKind, now: i64) -> Self {
        Self {
            id: Default::default(),
            user_id,
            name,
            description: None,
            kind,
            created: now,
            updated: now,
        }
    }
}

impl Entity for Habit {
    fn id(&self) -> &ID {
        &self.id
    }
}
