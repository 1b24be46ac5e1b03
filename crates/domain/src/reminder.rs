use crate::shared::entity::{Entity, ID};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Wall-clock hour and minute, local to the device timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hours: u32,
    pub minutes: u32,
}

impl TimeOfDay {
    pub fn new(hours: u32, minutes: u32) -> Option<Self> {
        if hours > 23 || minutes > 59 {
            return None;
        }
        Some(Self { hours, minutes })
    }
}

#[derive(Error, Debug)]
pub enum InvalidTimeOfDayError {
    #[error("Time of day: {0} is malformed, expected HH:MM")]
    Malformed(String),
}

impl FromStr for TimeOfDay {
    type Err = InvalidTimeOfDayError;

    // "HH:MM", e.g. "08:00" or "8:00"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidTimeOfDayError::Malformed(s.to_string());
        let (hours, minutes) = s.split_once(':').ok_or_else(malformed)?;
        let hours = hours.parse::<u32>().map_err(|_| malformed())?;
        let minutes = minutes.parse::<u32>().map_err(|_| malformed())?;
        TimeOfDay::new(hours, minutes).ok_or_else(malformed)
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// How often a reminder should fire. `Custom` carries weekday indices with
/// the device-local convention 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Frequency {
    Daily,
    Weekdays,
    Weekends,
    Once,
    Custom(Vec<u32>),
}

impl Frequency {
    pub fn is_valid(&self) -> bool {
        match self {
            Frequency::Custom(days) => !days.is_empty() && days.iter().all(|day| *day <= 6),
            _ => true,
        }
    }

    pub fn matches(&self, weekday: Weekday) -> bool {
        let index = weekday.num_days_from_sunday();
        match self {
            Frequency::Daily | Frequency::Once => true,
            Frequency::Weekdays => (1..=5).contains(&index),
            Frequency::Weekends => index == 0 || index == 6,
            Frequency::Custom(days) => days.contains(&index),
        }
    }
}

/// Reminder configuration for a `Habit`, persisted alongside it. The armed
/// schedule derived from it lives in the scheduled notifications store and
/// is replaced wholesale whenever this configuration is saved.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    /// The `Habit` this `Reminder` is associated with
    pub habit_id: ID,
    /// The user owning the associated `Habit`
    pub user_id: ID,
    pub frequency: Frequency,
    pub time_of_day: TimeOfDay,
    /// When false no timers are armed and any existing schedule is cancelled
    pub enabled: bool,
    pub created: i64,
    pub updated: i64,
}

impl Reminder {
    /// The schedule request this configuration expands to. Constructed fresh
    /// on every save; never mutated afterwards.
    pub fn to_request(&self) -> ReminderRequest {
        ReminderRequest {
            reminder_id: self.id.clone(),
            habit_id: self.habit_id.clone(),
            frequency: self.frequency.clone(),
            time_of_day: self.time_of_day,
            enabled: self.enabled,
        }
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// A schedule request handed to the notification scheduler. A new request
/// for the same reminder id supersedes the previous schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderRequest {
    pub reminder_id: ID,
    pub habit_id: ID,
    pub frequency: Frequency,
    pub time_of_day: TimeOfDay,
    pub enabled: bool,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_parses_valid_times_of_day() {
        let valid = vec![
            ("00:00", 0, 0),
            ("8:5", 8, 5),
            ("08:00", 8, 0),
            ("20:30", 20, 30),
            ("23:59", 23, 59),
        ];
        for (timestr, hours, minutes) in valid {
            let time = timestr.parse::<TimeOfDay>().expect("To parse time of day");
            assert_eq!(time, TimeOfDay { hours, minutes });
        }
    }

    #[test]
    fn it_rejects_malformed_times_of_day() {
        for timestr in ["", "8", "24:00", "12:60", "ab:cd", "-1:30", "08:00:00"] {
            assert!(timestr.parse::<TimeOfDay>().is_err());
        }
    }

    #[test]
    fn it_formats_time_of_day_zero_padded() {
        let time = TimeOfDay { hours: 8, minutes: 5 };
        assert_eq!(time.to_string(), "08:05");
    }

    #[test]
    fn custom_frequency_needs_valid_weekday_indices() {
        assert!(!Frequency::Custom(Vec::new()).is_valid());
        assert!(!Frequency::Custom(vec![7]).is_valid());
        assert!(Frequency::Custom(vec![0, 6]).is_valid());
    }

    #[test]
    fn it_matches_weekdays_per_frequency() {
        assert!(Frequency::Daily.matches(Weekday::Sun));
        assert!(Frequency::Weekdays.matches(Weekday::Mon));
        assert!(!Frequency::Weekdays.matches(Weekday::Sat));
        assert!(Frequency::Weekends.matches(Weekday::Sat));
        assert!(Frequency::Weekends.matches(Weekday::Sun));
        assert!(!Frequency::Weekends.matches(Weekday::Wed));
        // 2 = Tuesday with 0 = Sunday
        assert!(Frequency::Custom(vec![2]).matches(Weekday::Tue));
        assert!(!Frequency::Custom(vec![2]).matches(Weekday::Wed));
    }
}
