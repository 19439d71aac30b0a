//! Consecutive-day workout streak
//!
//! The streak only counts if it is still alive: the most recent logged
//! date must be `today` or yesterday, otherwise the streak is zero. This
//! boundary rule is product policy and is kept exactly as shipped.

use crate::store::types::Workout;
use chrono::{Days, NaiveDate};

/// Number of consecutive calendar days with at least one workout, walking
/// backward from the most recent logged date
///
/// Multiple workouts on one day count once. The walk stops at the first
/// gap.
pub fn current_streak(workouts: &[Workout], today: NaiveDate) -> u32 {
    if workouts.is_empty() {
        return 0;
    }

    let mut dates: Vec<NaiveDate> = workouts.iter().map(|w| w.date).collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();

    let latest = dates[0];
    if latest != today && latest != today - Days::new(1) {
        return 0;
    }

    let mut streak = 0;
    for (i, date) in dates.iter().enumerate() {
        if *date == latest - Days::new(i as u64) {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::types::Exercise;

    fn workout(id: i64, date: &str) -> Workout {
        Workout {
            id,
            name: format!("Workout {id}"),
            date: date.parse::<NaiveDate>().unwrap(),
            exercises: vec![Exercise::new("Squat", 1.0, 1.0, 100.0)],
            total_weight: 100.0,
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_log() {
        assert_eq!(current_streak(&[], date("2024-03-15")), 0);
    }

    #[test]
    fn test_run_ending_today() {
        let workouts = vec![
            workout(1, "2024-03-13"),
            workout(2, "2024-03-14"),
            workout(3, "2024-03-15"),
        ];
        assert_eq!(current_streak(&workouts, date("2024-03-15")), 3);
    }

    #[test]
    fn test_run_ending_yesterday_still_counts() {
        let workouts = vec![workout(1, "2024-03-13"), workout(2, "2024-03-14")];
        assert_eq!(current_streak(&workouts, date("2024-03-15")), 2);
    }

    #[test]
    fn test_stale_log_is_zero() {
        let workouts = vec![
            workout(1, "2024-03-12"),
            workout(2, "2024-03-13"),
        ];
        // Latest is two days before today
        assert_eq!(current_streak(&workouts, date("2024-03-15")), 0);
    }

    #[test]
    fn test_gap_breaks_the_walk() {
        let workouts = vec![
            workout(1, "2024-03-10"),
            workout(2, "2024-03-11"),
            // 2024-03-12 missing
            workout(3, "2024-03-13"),
            workout(4, "2024-03-14"),
            workout(5, "2024-03-15"),
        ];
        assert_eq!(current_streak(&workouts, date("2024-03-15")), 3);
    }

    #[test]
    fn test_same_day_workouts_count_once() {
        let workouts = vec![
            workout(1, "2024-03-14"),
            workout(2, "2024-03-15"),
            workout(3, "2024-03-15"),
        ];
        assert_eq!(current_streak(&workouts, date("2024-03-15")), 2);
    }

    #[test]
    fn test_two_consecutive_days_scenario() {
        let workouts = vec![workout(1, "2024-03-14"), workout(2, "2024-03-15")];
        assert_eq!(current_streak(&workouts, date("2024-03-15")), 2);
    }
}
