use crate::entry::HabitEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Streak lengths that count as milestones on the dashboard.
pub const STREAK_MILESTONES: [u32; 6] = [3, 7, 14, 30, 60, 100];

/// Statistics derived on demand from a habit's tracking entries. Nothing
/// here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStats {
    pub total_completions: u32,
    /// Consecutive completed days ending today or yesterday
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Completed days over days since the first entry (inclusive), in [0, 1]
    pub completion_rate: f64,
    /// Members of `STREAK_MILESTONES` reached by the longest streak
    pub milestones: Vec<u32>,
}

pub fn compute(entries: &[HabitEntry], today: NaiveDate) -> HabitStats {
    let mut days = entries
        .iter()
        .filter(|entry| entry.completed)
        .map(|entry| entry.day)
        .collect::<Vec<_>>();
    days.sort_unstable();
    days.dedup();

    let total_completions = days.len() as u32;

    let mut longest_streak = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;
    for &day in &days {
        run = match prev {
            Some(prev_day) if prev_day.succ_opt() == Some(day) => run + 1,
            _ => 1,
        };
        longest_streak = longest_streak.max(run);
        prev = Some(day);
    }

    let completed = |day: &NaiveDate| days.binary_search(day).is_ok();
    let mut current_streak = 0;
    let mut cursor = if completed(&today) {
        Some(today)
    } else {
        today.pred_opt().filter(completed)
    };
    while let Some(day) = cursor {
        current_streak += 1;
        cursor = day.pred_opt().filter(completed);
    }

    let first_day = entries.iter().map(|entry| entry.day).min();
    let completion_rate = match first_day {
        Some(first) if first <= today => {
            let span = (today - first).num_days() + 1;
            (f64::from(total_completions) / span as f64).min(1.0)
        }
        _ => 0.0,
    };

    let milestones = STREAK_MILESTONES
        .iter()
        .copied()
        .filter(|milestone| longest_streak >= *milestone)
        .collect();

    HabitStats {
        total_completions,
        current_streak,
        longest_streak,
        completion_rate,
        milestones,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::entity::ID;

    fn day(datestr: &str) -> NaiveDate {
        datestr.parse().expect("To parse date")
    }

    fn entries(habit_id: &ID, days: &[(&str, bool)]) -> Vec<HabitEntry> {
        days.iter()
            .map(|(datestr, completed)| HabitEntry {
                habit_id: habit_id.clone(),
                day: day(datestr),
                completed: *completed,
            })
            .collect()
    }

    #[test]
    fn no_entries_no_stats() {
        let stats = compute(&[], day("2024-06-10"));
        assert_eq!(stats.total_completions, 0);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.longest_streak, 0);
        assert_eq!(stats.completion_rate, 0.0);
        assert!(stats.milestones.is_empty());
    }

    #[test]
    fn it_counts_streak_ending_today() {
        let habit_id = ID::new();
        let entries = entries(
            &habit_id,
            &[
                ("2024-06-08", true),
                ("2024-06-09", true),
                ("2024-06-10", true),
            ],
        );
        let stats = compute(&entries, day("2024-06-10"));
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.longest_streak, 3);
        assert_eq!(stats.milestones, vec![3]);
    }

    #[test]
    fn streak_ending_yesterday_is_still_current() {
        let habit_id = ID::new();
        let entries = entries(&habit_id, &[("2024-06-08", true), ("2024-06-09", true)]);
        let stats = compute(&entries, day("2024-06-10"));
        assert_eq!(stats.current_streak, 2);
    }

    #[test]
    fn a_gap_breaks_the_current_streak() {
        let habit_id = ID::new();
        let entries = entries(
            &habit_id,
            &[
                ("2024-06-01", true),
                ("2024-06-02", true),
                ("2024-06-03", true),
                ("2024-06-04", true),
                // 5th and 6th missed
                ("2024-06-07", true),
            ],
        );
        let stats = compute(&entries, day("2024-06-10"));
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.longest_streak, 4);
        assert_eq!(stats.total_completions, 5);
        assert_eq!(stats.milestones, vec![3]);
    }

    #[test]
    fn uncompleted_entries_do_not_extend_streaks() {
        let habit_id = ID::new();
        let entries = entries(
            &habit_id,
            &[
                ("2024-06-08", true),
                ("2024-06-09", false),
                ("2024-06-10", true),
            ],
        );
        let stats = compute(&entries, day("2024-06-10"));
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.longest_streak, 1);
        assert_eq!(stats.total_completions, 2);
    }

    #[test]
    fn completion_rate_spans_first_entry_to_today() {
        let habit_id = ID::new();
        // 5 completed days over the 10 days from June 1st to June 10th
        let entries = entries(
            &habit_id,
            &[
                ("2024-06-01", true),
                ("2024-06-02", true),
                ("2024-06-03", true),
                ("2024-06-04", true),
                ("2024-06-07", true),
            ],
        );
        let stats = compute(&entries, day("2024-06-10"));
        assert!((stats.completion_rate - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn perfect_rate_caps_at_one() {
        let habit_id = ID::new();
        let entries = entries(&habit_id, &[("2024-06-10", true)]);
        let stats = compute(&entries, day("2024-06-10"));
        assert!((stats.completion_rate - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn duplicate_days_count_once() {
        let habit_id = ID::new();
        let entries = entries(&habit_id, &[("2024-06-10", true), ("2024-06-10", true)]);
        let stats = compute(&entries, day("2024-06-10"));
        assert_eq!(stats.total_completions, 1);
        assert_eq!(stats.current_streak, 1);
    }
}
