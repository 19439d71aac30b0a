//! # Liftlog
//!
//! Personal workout tonnage tracking - a Rust library for logging workouts
//! and analyzing lifting volume over time.
//!
//! ## Features
//!
//! - **Workout log**: dated sessions of exercises (sets x reps @ weight),
//!   persisted whole on every mutation
//! - **Boundary validation**: typed drafts checked before admission, with
//!   structured rejection reasons
//! - **Yearly goals**: tonnage targets with clamped progress percentages
//! - **Statistics**: streaks, per-exercise leaderboards, daily/weekly/
//!   monthly chart series, exercise comparisons - recomputed from the
//!   snapshot on every query
//!
//! ## Modules
//!
//! - [`store`]: Workout records, drafts and persistence backends
//! - [`goals`]: Yearly tonnage targets
//! - [`stats`]: Pure aggregation functions over a snapshot
//! - [`tracker`]: The facade the UI drives
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use liftlog::{Config, ExerciseDraft, Granularity, Tracker, WorkoutDraft};
//! use chrono::NaiveDate;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let mut tracker = Tracker::open(&config);
//!
//!     // Log a session
//!     let draft = WorkoutDraft::new("Morning Lift", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
//!         .exercise(ExerciseDraft::new("squat").sets(3.0).reps(10.0).weight(135.0));
//!     let workout = tracker.add_workout(draft)?;
//!     println!("Logged {} lbs", workout.total_weight);
//!
//!     // Track the yearly goal
//!     tracker.set_goal(2024, 5000.0)?;
//!     let overview = tracker.year_overview(2024);
//!     println!("{}% of goal", overview.percent.round());
//!
//!     // Chart the last 8 weeks
//!     let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//!     for bucket in tracker.series(Granularity::Weekly, today) {
//!         println!("{}: {}", bucket.label, bucket.value);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod goals;
pub mod stats;
pub mod store;
pub mod tracker;

// Re-export top-level types for convenience
pub use store::{
    DraftError, Exercise, ExerciseDraft, FileStore, KeyValueStore, MemoryStore, StoreError,
    StoreResult, Workout, WorkoutDraft, WorkoutStore,
};

pub use goals::{GoalError, GoalRegistry};

pub use stats::{
    compare_exercises, current_streak, distinct_years, exercise_total, filter_and_sort_by_year,
    name_suggestions, time_bucket_series, top_exercises, total_for_year, BucketPoint,
    ExerciseComparison, ExerciseTotal, Granularity, DEFAULT_TOP_EXERCISES,
};

pub use tracker::{Tracker, TrackerError, YearOverview};

pub use config::{Config, ConfigError, LoggingConfig, StorageConfig};
