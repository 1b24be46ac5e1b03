use crate::reminder::{Frequency, TimeOfDay};
use crate::shared::entity::ID;
use chrono::{Datelike, NaiveDate, TimeZone};
use chrono_tz::Tz;

/// One pending firing of a reminder: the durable record behind an armed
/// timer. `fire_time` is epoch millis and is strictly in the future at the
/// moment the record is written. At most one record exists per reminder id.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledNotification {
    /// The `Reminder` this occurrence was expanded from
    pub reminder_id: ID,
    /// The `Habit` the reminder belongs to, used for the notification body
    pub habit_id: ID,
    /// Absolute timestamp in millis, the sole ordering key
    pub fire_time: i64,
}

/// Computes the next occurrence of `frequency` at `time_of_day`, strictly
/// after `now` (epoch millis), using the local calendar of `tz`.
///
/// Today is included when the instant is still in the future; a past-due
/// request rolls forward to the next matching day. Returns `None` when no
/// day can match (empty `Custom` set) or when the local time is unmappable
/// for every candidate day (DST gaps roll to the next matching day).
pub fn next_fire_time(
    frequency: &Frequency,
    time_of_day: &TimeOfDay,
    now: i64,
    tz: &Tz,
) -> Option<i64> {
    let now_local = tz.timestamp_millis_opt(now).single()?;
    let mut day = now_local.date_naive();

    // Seven days always contain every weekday; the eighth covers rolling
    // past today's already-elapsed instant.
    for _ in 0..8 {
        if frequency.matches(day.weekday()) {
            if let Some(fire_time) = local_instant(day, time_of_day, tz) {
                if fire_time > now {
                    return Some(fire_time);
                }
            }
        }
        day = day.succ_opt()?;
    }
    None
}

fn local_instant(day: NaiveDate, time_of_day: &TimeOfDay, tz: &Tz) -> Option<i64> {
    let naive = day.and_hms_opt(time_of_day.hours, time_of_day.minutes, 0)?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|instant| instant.timestamp_millis())
}
