//! Goal service — validation, cap enforcement, and creation.
//!
//! DESIGN
//! ======
//! `create_goal` runs the full check sequence against the store under the
//! caller's lock, so the duplicate scan and the count increment are atomic
//! per request. Check order is part of the observable contract: a user at
//! the cap submitting a duplicate must see the limit error, not the
//! duplicate one.

use chrono::{SecondsFormat, Utc};

use crate::state::{Goal, GoalStore};

/// Maximum number of goals any single user may create.
pub const MAX_GOALS_PER_USER: usize = 3;

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Validation failures for goal creation. Display strings are the wire error
/// messages returned to clients verbatim.
#[derive(Debug, thiserror::Error)]
pub enum GoalError {
    #[error("User ID and goalTitle are required.")]
    MissingField,
    #[error("Invalid userId format.")]
    InvalidUserId,
    #[error("Goal title cannot be empty.")]
    EmptyTitle,
    #[error("User {0} has reached the maximum limit of goals ({MAX_GOALS_PER_USER}).")]
    LimitExceeded(String),
    #[error("Goal already exists for this user.")]
    DuplicateGoal,
}

// =============================================================================
// VALIDATION
// =============================================================================

/// A valid user id is the literal prefix `user` followed by one or more
/// ASCII decimal digits, nothing else.
#[must_use]
pub fn is_valid_user_id(user_id: &str) -> bool {
    match user_id.strip_prefix("user") {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Create a goal after running the full validation sequence.
///
/// Inputs arrive as options because the request body may omit either field;
/// empty strings count as missing, matching the wire contract.
///
/// # Errors
///
/// Returns the first failing check in contract order: missing field, invalid
/// userId format, empty title, per-user cap, duplicate.
pub fn create_goal(
    store: &mut GoalStore,
    user_id: Option<&str>,
    goal_title: Option<&str>,
) -> Result<Goal, GoalError> {
    create_goal_at(store, user_id, goal_title, now_rfc3339())
}

/// Internal: create with an explicit timestamp (for testing).
pub(crate) fn create_goal_at(
    store: &mut GoalStore,
    user_id: Option<&str>,
    goal_title: Option<&str>,
    created_at: String,
) -> Result<Goal, GoalError> {
    let (Some(user_id), Some(goal_title)) = (non_empty(user_id), non_empty(goal_title)) else {
        return Err(GoalError::MissingField);
    };
    if !is_valid_user_id(user_id) {
        return Err(GoalError::InvalidUserId);
    }
    if goal_title.trim().is_empty() {
        return Err(GoalError::EmptyTitle);
    }
    if store.count_for(user_id) >= MAX_GOALS_PER_USER {
        return Err(GoalError::LimitExceeded(user_id.to_owned()));
    }
    if store.contains(user_id, goal_title) {
        return Err(GoalError::DuplicateGoal);
    }

    let goal = Goal {
        user_id: user_id.to_owned(),
        goal_title: goal_title.to_owned(),
        created_at,
    };
    store.insert(goal.clone());
    Ok(goal)
}

/// All goals belonging to `user_id`, in creation order.
///
/// No format validation on this path: a malformed id simply matches nothing.
#[must_use]
pub fn list_goals(store: &GoalStore, user_id: &str) -> Vec<Goal> {
    store.goals_for(user_id)
}

/// Current UTC time as an RFC 3339 string with millisecond precision.
fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "goal_test.rs"]
mod tests;
