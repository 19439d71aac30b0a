//! Boundary validation for incoming workout data
//!
//! The UI submits loosely-filled forms; these draft types hold that input
//! and decide whether it may enter the record store. Validation happens
//! here, once, so the store only ever holds records that satisfy the
//! tonnage invariants.

use crate::store::types::{title_case, Exercise, Workout};
use chrono::NaiveDate;
use thiserror::Error;

/// Why a draft was rejected at the boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Workout name is empty or whitespace
    #[error("workout name is empty")]
    EmptyWorkoutName,

    /// Workout has no exercises
    #[error("workout has no exercises")]
    NoExercises,

    /// An exercise name is empty or whitespace
    #[error("exercise {index}: name is empty")]
    EmptyExerciseName { index: usize },

    /// Sets, reps or weight was left blank
    #[error("exercise {index}: {field} is missing")]
    MissingField { index: usize, field: &'static str },

    /// Sets, reps or weight is NaN or infinite
    #[error("exercise {index}: {field} is not a number")]
    NonFiniteField { index: usize, field: &'static str },
}

/// One partially-filled exercise row
///
/// Numeric fields are `None` until the user enters them; `tonnage` reflects
/// the live preview the form shows, which is zero while any field is blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseDraft {
    pub name: String,
    pub sets: Option<f64>,
    pub reps: Option<f64>,
    pub weight: Option<f64>,
}

impl ExerciseDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder method: set sets
    pub fn sets(mut self, sets: f64) -> Self {
        self.sets = Some(sets);
        self
    }

    /// Builder method: set reps
    pub fn reps(mut self, reps: f64) -> Self {
        self.reps = Some(reps);
        self
    }

    /// Builder method: set weight
    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Tonnage of this row: sets * reps * weight, or zero while any
    /// component is absent or non-finite
    pub fn tonnage(&self) -> f64 {
        match (self.sets, self.reps, self.weight) {
            (Some(sets), Some(reps), Some(weight))
                if sets.is_finite() && reps.is_finite() && weight.is_finite() =>
            {
                sets * reps * weight
            }
            _ => 0.0,
        }
    }

    /// Finalize into a stored exercise: name trimmed and title-cased,
    /// tonnage computed. Assumes the draft validated.
    pub(crate) fn build(&self) -> Exercise {
        Exercise {
            name: title_case(&self.name),
            sets: self.sets.unwrap_or(0.0),
            reps: self.reps.unwrap_or(0.0),
            weight: self.weight.unwrap_or(0.0),
            total: self.tonnage(),
        }
    }
}

/// A workout as submitted by the form, before admission into the store
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDraft {
    pub name: String,
    pub date: NaiveDate,
    pub exercises: Vec<ExerciseDraft>,
}

impl WorkoutDraft {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
            exercises: Vec::new(),
        }
    }

    /// Builder method: append an exercise row
    pub fn exercise(mut self, exercise: ExerciseDraft) -> Self {
        self.exercises.push(exercise);
        self
    }

    /// Check whether this draft may be saved, reporting the first violation
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::EmptyWorkoutName);
        }
        if self.exercises.is_empty() {
            return Err(DraftError::NoExercises);
        }
        for (index, exercise) in self.exercises.iter().enumerate() {
            if exercise.name.trim().is_empty() {
                return Err(DraftError::EmptyExerciseName { index });
            }
            for (field, value) in [
                ("sets", exercise.sets),
                ("reps", exercise.reps),
                ("weight", exercise.weight),
            ] {
                match value {
                    None => return Err(DraftError::MissingField { index, field }),
                    Some(v) if !v.is_finite() => {
                        return Err(DraftError::NonFiniteField { index, field })
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }

    /// Summed tonnage across all rows (the form's running total)
    pub fn total(&self) -> f64 {
        self.exercises.iter().map(ExerciseDraft::tonnage).sum()
    }

    /// Finalize into a stored workout under the given id
    pub(crate) fn build_workout(&self, id: i64) -> Workout {
        let exercises: Vec<Exercise> = self.exercises.iter().map(ExerciseDraft::build).collect();
        let total_weight = exercises.iter().map(|e| e.total).sum();
        Workout {
            id,
            name: self.name.clone(),
            date: self.date,
            exercises,
            total_weight,
        }
    }
}
