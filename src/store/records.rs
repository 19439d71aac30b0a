//! The workout record store
//!
//! Owns the in-memory workout collection and is the sole writer of its
//! persisted blob. Every mutation synchronously rewrites the whole
//! collection under the `"workouts"` key; there is no append log and no
//! partial write to recover from.
//!
//! Loading fails soft: an absent or malformed blob yields an empty
//! collection, never an error.

use crate::store::backend::KeyValueStore;
use crate::store::draft::WorkoutDraft;
use crate::store::error::StoreResult;
use crate::store::types::Workout;
use chrono::Utc;

/// Persistence key for the workout collection
pub const WORKOUTS_KEY: &str = "workouts";

/// In-memory workout collection backed by a key-value store
pub struct WorkoutStore<B: KeyValueStore> {
    backend: B,
    workouts: Vec<Workout>,
    last_id: i64,
}

impl<B: KeyValueStore> WorkoutStore<B> {
    /// Open the store, loading any previously persisted collection
    ///
    /// Malformed or unreadable data is discarded with a warning; the store
    /// starts empty rather than failing.
    pub fn open(backend: B) -> Self {
        let workouts = match backend.get(WORKOUTS_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<Workout>>(&blob) {
                Ok(workouts) => workouts,
                Err(e) => {
                    tracing::warn!("Discarding malformed workout data: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read workout data: {}", e);
                Vec::new()
            }
        };

        let last_id = workouts.iter().map(|w| w.id).max().unwrap_or(0);
        tracing::debug!("Loaded {} workouts", workouts.len());

        Self {
            backend,
            workouts,
            last_id,
        }
    }

    /// Snapshot of all workouts in insertion order
    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    /// Look up a workout by id
    pub fn get(&self, id: i64) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Admit a validated draft: assign an id, finalize the exercises,
    /// append and persist. Returns the stored record.
    pub fn add(&mut self, draft: &WorkoutDraft) -> StoreResult<Workout> {
        let workout = draft.build_workout(self.next_id());
        self.workouts.push(workout.clone());
        self.persist()?;
        tracing::info!("Added workout {} ({})", workout.id, workout.name);
        Ok(workout)
    }

    /// Replace the record with a matching id, keeping the collection order
    ///
    /// The record is renormalized first so the tonnage invariants hold
    /// regardless of what the caller computed. An unknown id leaves the
    /// collection unchanged.
    pub fn update(&mut self, workout: Workout) -> StoreResult<Workout> {
        let workout = workout.normalized();
        if let Some(existing) = self.workouts.iter_mut().find(|w| w.id == workout.id) {
            *existing = workout.clone();
            tracing::info!("Updated workout {}", workout.id);
        }
        self.persist()?;
        Ok(workout)
    }

    /// Remove the record with a matching id; no-op if absent
    pub fn delete(&mut self, id: i64) -> StoreResult<()> {
        let before = self.workouts.len();
        self.workouts.retain(|w| w.id != id);
        if self.workouts.len() < before {
            tracing::info!("Deleted workout {}", id);
        }
        self.persist()
    }

    /// Next id: millisecond clock reading, bumped past the last issued id
    /// so ids stay strictly increasing even within one millisecond
    fn next_id(&mut self) -> i64 {
        let id = Utc::now().timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        id
    }

    fn persist(&mut self) -> StoreResult<()> {
        let blob = serde_json::to_string(&self.workouts)?;
        self.backend.set(WORKOUTS_KEY, &blob)
    }
}
