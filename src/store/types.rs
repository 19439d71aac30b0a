//! Core data types for the Liftlog record store
//!
//! This module defines the fundamental types of the workout log:
//! - `Exercise`: one movement within a workout (sets x reps @ weight)
//! - `Workout`: a dated training session owning its exercises
//!
//! Both types round-trip through JSON with the on-disk field names; the
//! workout's summed tonnage is spelled `totalWeight` on the wire.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One exercise entry within a workout
///
/// `total` is the tonnage contribution of this entry: sets * reps * weight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Exercise name, stored title-cased (e.g. "Bench Press")
    pub name: String,
    /// Number of sets
    pub sets: f64,
    /// Repetitions per set
    pub reps: f64,
    /// Weight per repetition
    pub weight: f64,
    /// Precomputed tonnage: sets * reps * weight
    pub total: f64,
}

impl Exercise {
    /// Create an exercise with its tonnage computed from the inputs
    pub fn new(name: impl Into<String>, sets: f64, reps: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            sets,
            reps,
            weight,
            total: computed_total(sets, reps, weight),
        }
    }
}

/// Tonnage for one exercise entry; zero if any component is non-finite
fn computed_total(sets: f64, reps: f64, weight: f64) -> f64 {
    if sets.is_finite() && reps.is_finite() && weight.is_finite() {
        sets * reps * weight
    } else {
        0.0
    }
}

/// A logged training session
///
/// Owned by the record store; `id` is unique within the store and assigned
/// at creation time. `total_weight` always equals the sum of the exercise
/// totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Store-unique identifier (millisecond clock derived)
    pub id: i64,
    /// Session name as the user typed it (e.g. "Morning Lift")
    pub name: String,
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Exercises in entry order
    pub exercises: Vec<Exercise>,
    /// Summed tonnage across all exercises
    pub total_weight: f64,
}

impl Workout {
    /// Recompute every exercise total and the workout total from the raw
    /// sets/reps/weight fields, restoring the tonnage invariants.
    pub fn normalized(mut self) -> Self {
        for exercise in &mut self.exercises {
            exercise.total = computed_total(exercise.sets, exercise.reps, exercise.weight);
        }
        self.total_weight = self.exercises.iter().map(|e| e.total).sum();
        self
    }
}

/// Title-case a name: first letter of each space-separated word upper-cased,
/// the rest lower-cased. Leading/trailing whitespace is trimmed.
pub fn title_case(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    lowered
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
