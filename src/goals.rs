//! Yearly tonnage goals
//!
//! A small persisted registry mapping a calendar year to its target
//! tonnage. At most one goal per year; setting a goal overwrites any
//! previous one, and goals are never deleted. Absence of an entry means
//! "no goal set", not zero.

use crate::store::backend::KeyValueStore;
use crate::store::error::{StoreError, StoreResult};
use std::collections::BTreeMap;
use thiserror::Error;

/// Persistence key for the goal map
pub const GOALS_KEY: &str = "yearlyGoals";

/// Errors from goal mutations
#[derive(Error, Debug)]
pub enum GoalError {
    /// Goal amounts must be positive and finite
    #[error("goal must be a positive amount, got {0}")]
    InvalidAmount(f64),

    /// Persisting the goal map failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Year-to-target registry backed by a key-value store
pub struct GoalRegistry<B: KeyValueStore> {
    backend: B,
    goals: BTreeMap<i32, f64>,
}

impl<B: KeyValueStore> GoalRegistry<B> {
    /// Open the registry, loading any previously persisted map
    ///
    /// Malformed or unreadable data is discarded with a warning; the
    /// registry starts empty rather than failing.
    pub fn open(backend: B) -> Self {
        let goals = match backend.get(GOALS_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<BTreeMap<i32, f64>>(&blob) {
                Ok(goals) => goals,
                Err(e) => {
                    tracing::warn!("Discarding malformed goal data: {}", e);
                    BTreeMap::new()
                }
            },
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                tracing::warn!("Failed to read goal data: {}", e);
                BTreeMap::new()
            }
        };

        Self { backend, goals }
    }

    /// Set the target for a year, overwriting any existing entry
    pub fn set(&mut self, year: i32, amount: f64) -> Result<(), GoalError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(GoalError::InvalidAmount(amount));
        }
        self.goals.insert(year, amount);
        self.persist()?;
        tracing::info!("Set goal for {}: {}", year, amount);
        Ok(())
    }

    /// Target for a year, if one was set
    pub fn get(&self, year: i32) -> Option<f64> {
        self.goals.get(&year).copied()
    }

    /// Progress toward a year's goal as a percentage in [0, 100]
    ///
    /// Zero when no goal is set; clamped at 100 once the goal is exceeded
    /// so a progress ring never overdraws.
    pub fn progress(&self, year: i32, total: f64) -> f64 {
        match self.get(year) {
            Some(goal) if goal > 0.0 => (total / goal * 100.0).min(100.0),
            _ => 0.0,
        }
    }

    /// Tonnage still to lift before reaching the year's goal
    ///
    /// `None` without a goal; negative once the goal is exceeded.
    pub fn remaining(&self, year: i32, total: f64) -> Option<f64> {
        self.get(year).map(|goal| goal - total)
    }

    fn persist(&mut self) -> StoreResult<()> {
        let blob = serde_json::to_string(&self.goals)?;
        self.backend.set(GOALS_KEY, &blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::backend::{FileStore, MemoryStore};
    use tempfile::tempdir;

    #[test]
    fn test_set_and_get() {
        let mut goals = GoalRegistry::open(MemoryStore::new());
        assert_eq!(goals.get(2024), None);

        goals.set(2024, 5000.0).unwrap();
        assert_eq!(goals.get(2024), Some(5000.0));

        // Overwrite
        goals.set(2024, 6000.0).unwrap();
        assert_eq!(goals.get(2024), Some(6000.0));
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let mut goals = GoalRegistry::open(MemoryStore::new());

        assert!(matches!(goals.set(2024, 0.0), Err(GoalError::InvalidAmount(_))));
        assert!(matches!(goals.set(2024, -10.0), Err(GoalError::InvalidAmount(_))));
        assert!(matches!(
            goals.set(2024, f64::NAN),
            Err(GoalError::InvalidAmount(_))
        ));
        assert_eq!(goals.get(2024), None);
    }

    #[test]
    fn test_progress_clamped() {
        let mut goals = GoalRegistry::open(MemoryStore::new());
        goals.set(2024, 5000.0).unwrap();

        assert_eq!(goals.progress(2024, 0.0), 0.0);
        assert!((goals.progress(2024, 4050.0) - 81.0).abs() < 1e-9);
        assert_eq!(goals.progress(2024, 5000.0), 100.0);
        assert_eq!(goals.progress(2024, 99999.0), 100.0);
    }

    #[test]
    fn test_progress_without_goal_is_zero() {
        let goals = GoalRegistry::open(MemoryStore::new());
        assert_eq!(goals.progress(2024, 4050.0), 0.0);
    }

    #[test]
    fn test_remaining() {
        let mut goals = GoalRegistry::open(MemoryStore::new());
        assert_eq!(goals.remaining(2024, 4050.0), None);

        goals.set(2024, 5000.0).unwrap();
        assert_eq!(goals.remaining(2024, 4050.0), Some(950.0));
        assert_eq!(goals.remaining(2024, 6000.0), Some(-1000.0));
    }

    #[test]
    fn test_goal_map_round_trips() {
        let dir = tempdir().unwrap();

        let mut goals = GoalRegistry::open(FileStore::new(dir.path()));
        goals.set(2023, 4000.0).unwrap();
        goals.set(2024, 5000.0).unwrap();
        drop(goals);

        let reopened = GoalRegistry::open(FileStore::new(dir.path()));
        assert_eq!(reopened.get(2023), Some(4000.0));
        assert_eq!(reopened.get(2024), Some(5000.0));
    }

    #[test]
    fn test_malformed_blob_starts_empty() {
        let mut backend = MemoryStore::new();
        backend.set(GOALS_KEY, "{broken").unwrap();

        let goals = GoalRegistry::open(backend);
        assert_eq!(goals.get(2024), None);
    }
}
