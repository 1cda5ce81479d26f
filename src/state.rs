//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the goal store behind a single mutex: the duplicate scan over the
//! goal list and the read-then-increment on the per-user count must be
//! atomic together, so one lock guards both. Handlers never hold the lock
//! across an await point.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

// =============================================================================
// GOAL
// =============================================================================

/// A user-authored goal. Created once, never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Stored exactly as submitted; trimming is applied only during validation.
    #[serde(rename = "goalTitle")]
    pub goal_title: String,
    /// RFC 3339 UTC timestamp assigned at creation.
    pub created_at: String,
}

// =============================================================================
// GOAL STORE
// =============================================================================

/// In-memory goal storage: the goal list plus a per-user count kept in sync
/// on every insert.
///
/// Invariant: `counts[user_id]` equals the number of goals in `goals` with
/// that `user_id`, for every user that has created at least one goal.
pub struct GoalStore {
    goals: Vec<Goal>,
    counts: HashMap<String, usize>,
}

impl GoalStore {
    #[must_use]
    pub fn new() -> Self {
        Self { goals: Vec::new(), counts: HashMap::new() }
    }

    /// Number of goals the user has created so far.
    #[must_use]
    pub fn count_for(&self, user_id: &str) -> usize {
        self.counts.get(user_id).copied().unwrap_or(0)
    }

    /// Whether an identical (user, title) pair already exists. Titles are
    /// compared untrimmed.
    #[must_use]
    pub fn contains(&self, user_id: &str, goal_title: &str) -> bool {
        self.goals
            .iter()
            .any(|goal| goal.user_id == user_id && goal.goal_title == goal_title)
    }

    /// Append a goal and bump its user's count.
    pub fn insert(&mut self, goal: Goal) {
        *self.counts.entry(goal.user_id.clone()).or_default() += 1;
        self.goals.push(goal);
    }

    /// All goals belonging to `user_id`, in insertion order.
    #[must_use]
    pub fn goals_for(&self, user_id: &str) -> Vec<Goal> {
        self.goals
            .iter()
            .filter(|goal| goal.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Total number of stored goals, across all users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}

impl Default for GoalStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — the store is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<GoalStore>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self { store: Arc::new(Mutex::new(GoalStore::new())) }
    }

    /// Lock the store for the duration of one request transaction.
    ///
    /// Poisoning is absorbed: validation precedes mutation, so the store
    /// never holds an invalid intermediate state.
    pub fn lock_store(&self) -> MutexGuard<'_, GoalStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
