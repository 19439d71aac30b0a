//! Per-exercise aggregates: totals, leaderboard, suggestions, comparison

use crate::store::types::Workout;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Leaderboard size the UI shows by default
pub const DEFAULT_TOP_EXERCISES: usize = 5;

/// An exercise name with its summed tonnage across the whole log
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseTotal {
    pub name: String,
    pub total: f64,
}

/// Summed tonnage of every entry whose name matches case-insensitively
///
/// The match is a case-fold only, no other normalization. A blank name
/// yields zero.
pub fn exercise_total(workouts: &[Workout], name: &str) -> f64 {
    if name.trim().is_empty() {
        return 0.0;
    }
    let needle = name.to_lowercase();
    workouts
        .iter()
        .flat_map(|w| &w.exercises)
        .filter(|e| e.name.to_lowercase() == needle)
        .map(|e| e.total)
        .sum()
}

/// Top `n` exercises by summed tonnage, grouped by exact stored name
///
/// Names are grouped as stored (already title-cased at save time). The
/// ranking is stable: equal totals keep first-encountered order.
pub fn top_exercises(workouts: &[Workout], n: usize) -> Vec<ExerciseTotal> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, f64> = HashMap::new();

    for exercise in workouts.iter().flat_map(|w| &w.exercises) {
        let sum = totals.entry(exercise.name.clone()).or_insert_with(|| {
            order.push(exercise.name.clone());
            0.0
        });
        *sum += exercise.total;
    }

    let mut ranked: Vec<ExerciseTotal> = order
        .into_iter()
        .map(|name| {
            let total = totals[&name];
            ExerciseTotal { name, total }
        })
        .collect();
    ranked.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
    ranked.truncate(n);
    ranked
}

/// Distinct exercise names starting with `prefix`, case-insensitively
///
/// Names are trimmed and blank ones skipped; results are alphabetical. A
/// blank prefix yields nothing (suggestions appear only once the user has
/// typed something).
pub fn name_suggestions(workouts: &[Workout], prefix: &str) -> Vec<String> {
    if prefix.trim().is_empty() {
        return Vec::new();
    }
    let needle = prefix.to_lowercase();

    let mut names: Vec<String> = workouts
        .iter()
        .flat_map(|w| &w.exercises)
        .map(|e| e.name.trim())
        .filter(|name| !name.is_empty() && name.to_lowercase().starts_with(&needle))
        .map(str::to_string)
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Two exercise totals side by side
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseComparison {
    pub first: ExerciseTotal,
    pub second: ExerciseTotal,
}

impl ExerciseComparison {
    /// The exercise with the higher total; `None` on a tie
    pub fn leader(&self) -> Option<&ExerciseTotal> {
        if self.first.total > self.second.total {
            Some(&self.first)
        } else if self.second.total > self.first.total {
            Some(&self.second)
        } else {
            None
        }
    }

    /// How far the leader is ahead, as a percentage of the trailing total
    ///
    /// Defined only when both totals are positive.
    pub fn percent_lead(&self) -> Option<f64> {
        if self.first.total > 0.0 && self.second.total > 0.0 {
            let hi = self.first.total.max(self.second.total);
            let lo = self.first.total.min(self.second.total);
            Some((hi / lo - 1.0) * 100.0)
        } else {
            None
        }
    }
}

/// Compare the lifetime tonnage of two exercises
pub fn compare_exercises(workouts: &[Workout], first: &str, second: &str) -> ExerciseComparison {
    ExerciseComparison {
        first: ExerciseTotal {
            name: first.to_string(),
            total: exercise_total(workouts, first),
        },
        second: ExerciseTotal {
            name: second.to_string(),
            total: exercise_total(workouts, second),
        },
    }
}
