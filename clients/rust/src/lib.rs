mod base;
mod habit;
mod reminder;
mod status;

use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use habit::HabitClient;
pub use habit::{AddHabitEntryInput, CreateHabitInput, UpdateHabitInput};
use reminder::ReminderClient;
pub use reminder::{SetReminderInput, UpdateReminderInput};
use status::StatusClient;
use std::sync::Arc;

pub use routinely_api_structs::dtos::*;
pub use routinely_domain::{Frequency, HabitKind, ID};

// Domain
pub use routinely_api_structs::dtos::HabitDTO as Habit;
pub use routinely_api_structs::dtos::HabitEntryDTO as HabitEntry;
pub use routinely_api_structs::dtos::HabitStatsDTO as HabitStats;
pub use routinely_api_structs::dtos::ReminderDTO as Reminder;
pub use routinely_api_structs::dtos::ScheduledNotificationDTO as ScheduledNotification;

/// Routinely Server SDK
///
/// The SDK contains methods for interacting with the Routinely server API.
#[derive(Clone)]
pub struct RoutinelySDK {
    pub habit: HabitClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl RoutinelySDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let habit = HabitClient::new(base.clone());
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            habit,
            reminder,
            status,
        }
    }
}
