use crate::shared::entity::ID;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One tracking entry for a habit on a local calendar day. At most one entry
/// exists per habit and day; saving again for the same day replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitEntry {
    pub habit_id: ID,
    pub day: NaiveDate,
    pub completed: bool,
}
