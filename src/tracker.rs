//! The tracker facade
//!
//! This is the surface the presentation layer talks to. It composes the
//! workout store and the goal registry behind one handle, owns the
//! currently selected year, validates incoming drafts before they reach
//! the stores, and exposes the aggregation queries over the current
//! snapshot.
//!
//! Everything is synchronous: a command mutates, persists, and returns;
//! the next read recomputes from the fresh snapshot.

use crate::config::Config;
use crate::goals::{GoalError, GoalRegistry};
use crate::stats;
use crate::stats::{BucketPoint, ExerciseComparison, ExerciseTotal, Granularity};
use crate::store::backend::{FileStore, KeyValueStore};
use crate::store::draft::{DraftError, WorkoutDraft};
use crate::store::error::StoreError;
use crate::store::records::WorkoutStore;
use crate::store::types::Workout;
use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

/// Errors surfaced to the presentation layer
#[derive(Error, Debug)]
pub enum TrackerError {
    /// The submitted workout draft failed validation
    #[error("invalid workout: {0}")]
    Draft(#[from] DraftError),

    /// The goal mutation was rejected
    #[error("invalid goal: {0}")]
    Goal(#[from] GoalError),

    /// Persistence failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A year's tonnage position against its goal
#[derive(Debug, Clone, PartialEq)]
pub struct YearOverview {
    pub year: i32,
    /// Summed tonnage logged in the year
    pub total: f64,
    /// Target for the year, if one was set
    pub goal: Option<f64>,
    /// Progress percentage, clamped to [0, 100]
    pub percent: f64,
    /// Tonnage still to lift; negative once the goal is exceeded
    pub remaining: Option<f64>,
}

/// Workout log, goals and statistics behind one handle
pub struct Tracker<B: KeyValueStore> {
    workouts: WorkoutStore<B>,
    goals: GoalRegistry<B>,
    selected_year: i32,
}

impl Tracker<FileStore> {
    /// Open a file-backed tracker in the configured data directory,
    /// selecting the current year
    pub fn open(config: &Config) -> Self {
        let dir = config.storage.data_dir.as_str();
        Self::with_backends(
            FileStore::new(dir),
            FileStore::new(dir),
            Local::now().date_naive(),
        )
    }
}

impl<B: KeyValueStore> Tracker<B> {
    /// Open a tracker over explicit backends, selecting `today`'s year
    pub fn with_backends(workout_backend: B, goal_backend: B, today: NaiveDate) -> Self {
        Self {
            workouts: WorkoutStore::open(workout_backend),
            goals: GoalRegistry::open(goal_backend),
            selected_year: today.year(),
        }
    }

    // --- Write commands ---

    /// Validate and admit a new workout; returns the stored record
    pub fn add_workout(&mut self, draft: WorkoutDraft) -> Result<Workout, TrackerError> {
        draft.validate()?;
        Ok(self.workouts.add(&draft)?)
    }

    /// Validate a draft and replace the workout with the given id
    ///
    /// An unknown id leaves the log unchanged.
    pub fn update_workout(&mut self, id: i64, draft: WorkoutDraft) -> Result<Workout, TrackerError> {
        draft.validate()?;
        Ok(self.workouts.update(draft.build_workout(id))?)
    }

    /// Remove a workout; no-op if the id is unknown
    pub fn delete_workout(&mut self, id: i64) -> Result<(), TrackerError> {
        Ok(self.workouts.delete(id)?)
    }

    /// Set the tonnage target for a year
    pub fn set_goal(&mut self, year: i32, amount: f64) -> Result<(), TrackerError> {
        Ok(self.goals.set(year, amount)?)
    }

    /// Switch the year the summary views report on
    pub fn select_year(&mut self, year: i32) {
        self.selected_year = year;
    }

    // --- Read surface ---

    /// Snapshot of the full log in insertion order
    pub fn workouts(&self) -> &[Workout] {
        self.workouts.all()
    }

    /// Look up a workout by id
    pub fn workout(&self, id: i64) -> Option<&Workout> {
        self.workouts.get(id)
    }

    pub fn selected_year(&self) -> i32 {
        self.selected_year
    }

    /// Distinct years present in the log, most recent first
    pub fn years(&self) -> Vec<i32> {
        stats::distinct_years(self.workouts.all())
    }

    /// The selected year's workouts, most recent first
    pub fn workouts_for_selected_year(&self) -> Vec<Workout> {
        stats::filter_and_sort_by_year(self.workouts.all(), self.selected_year)
    }

    /// Target for a year, if one was set
    pub fn goal(&self, year: i32) -> Option<f64> {
        self.goals.get(year)
    }

    /// Total, goal, progress and remaining tonnage for a year
    pub fn year_overview(&self, year: i32) -> YearOverview {
        let total = stats::total_for_year(self.workouts.all(), year);
        YearOverview {
            year,
            total,
            goal: self.goals.get(year),
            percent: self.goals.progress(year, total),
            remaining: self.goals.remaining(year, total),
        }
    }

    /// Overview for the currently selected year
    pub fn selected_year_overview(&self) -> YearOverview {
        self.year_overview(self.selected_year)
    }

    /// Consecutive-day streak ending at `today` or yesterday
    pub fn streak(&self, today: NaiveDate) -> u32 {
        stats::current_streak(self.workouts.all(), today)
    }

    /// Chart series for a granularity, ending at `today`
    pub fn series(&self, granularity: Granularity, today: NaiveDate) -> Vec<BucketPoint> {
        stats::time_bucket_series(self.workouts.all(), granularity, today)
    }

    /// Top `n` exercises by lifetime tonnage
    pub fn top_exercises(&self, n: usize) -> Vec<ExerciseTotal> {
        stats::top_exercises(self.workouts.all(), n)
    }

    /// The leaderboard card: top exercises at the UI's default size
    pub fn leaderboard(&self) -> Vec<ExerciseTotal> {
        self.top_exercises(stats::DEFAULT_TOP_EXERCISES)
    }

    /// Lifetime tonnage of one exercise, matched case-insensitively
    pub fn exercise_total(&self, name: &str) -> f64 {
        stats::exercise_total(self.workouts.all(), name)
    }

    /// Autocomplete candidates for an exercise-name prefix
    pub fn name_suggestions(&self, prefix: &str) -> Vec<String> {
        stats::name_suggestions(self.workouts.all(), prefix)
    }

    /// Lifetime tonnage of two exercises side by side
    pub fn compare_exercises(&self, first: &str, second: &str) -> ExerciseComparison {
        stats::compare_exercises(self.workouts.all(), first, second)
    }
}
