//! Liftlog record store
//!
//! This module provides the persistence core of the workout log:
//!
//! - **types**: Core data structures (Exercise, Workout)
//! - **draft**: Boundary validation for incoming form data
//! - **backend**: Key-value persistence interface and implementations
//! - **records**: The workout collection with load/add/update/delete
//! - **error**: Error types
//!
//! # Architecture
//!
//! ```text
//! Write Path:
//!   WorkoutDraft → validate → finalize (title-case, tonnage) → append → persist blob
//!
//! Read Path:
//!   snapshot (&[Workout]) → aggregation functions (see crate::stats)
//! ```

pub mod backend;
pub mod draft;
pub mod error;
pub mod records;
pub mod types;

// Re-export commonly used types
pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use draft::{DraftError, ExerciseDraft, WorkoutDraft};
pub use error::{StoreError, StoreResult};
pub use records::{WorkoutStore, WORKOUTS_KEY};
pub use types::{title_case, Exercise, Workout};
