mod entry;
mod habit;
mod occurrence;
mod reminder;
mod shared;
pub mod stats;

pub use chrono::Weekday;
pub use chrono_tz::Tz;
pub use entry::HabitEntry;
pub use habit::{Habit, HabitKind};
pub use occurrence::{next_fire_time, ScheduledNotification};
pub use reminder::{Frequency, InvalidTimeOfDayError, Reminder, ReminderRequest, TimeOfDay};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use stats::{HabitStats, STREAK_MILESTONES};
