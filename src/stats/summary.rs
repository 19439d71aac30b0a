//! Yearly summaries over the workout log

use crate::store::types::Workout;
use chrono::Datelike;

/// Summed tonnage across all workouts logged in `year`
pub fn total_for_year(workouts: &[Workout], year: i32) -> f64 {
    workouts
        .iter()
        .filter(|w| w.date.year() == year)
        .map(|w| w.total_weight)
        .sum()
}

/// Distinct years present in the log, most recent first
pub fn distinct_years(workouts: &[Workout]) -> Vec<i32> {
    let mut years: Vec<i32> = workouts.iter().map(|w| w.date.year()).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Workouts logged in `year`, most recent first
///
/// The sort is stable: workouts sharing a date keep their stored relative
/// order.
pub fn filter_and_sort_by_year(workouts: &[Workout], year: i32) -> Vec<Workout> {
    let mut filtered: Vec<Workout> = workouts
        .iter()
        .filter(|w| w.date.year() == year)
        .cloned()
        .collect();
    filtered.sort_by(|a, b| b.date.cmp(&a.date));
    filtered
}
