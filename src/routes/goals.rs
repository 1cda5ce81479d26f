//! Goal routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::services::goal::{self, GoalError};
use crate::state::{AppState, Goal};

#[derive(Deserialize)]
pub struct CreateGoalBody {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    #[serde(rename = "goalTitle")]
    pub goal_title: Option<String>,
}

/// `POST /goals` — create a goal for a user.
pub async fn create_goal(
    State(state): State<AppState>,
    Json(body): Json<CreateGoalBody>,
) -> Result<(StatusCode, Json<Goal>), (StatusCode, Json<serde_json::Value>)> {
    let mut store = state.lock_store();
    let goal = goal::create_goal(&mut store, body.user_id.as_deref(), body.goal_title.as_deref())
        .map_err(goal_error_to_response)?;
    Ok((StatusCode::CREATED, Json(goal)))
}

/// `GET /goals/{user_id}` — list a user's goals in creation order.
pub async fn list_goals(State(state): State<AppState>, Path(user_id): Path<String>) -> Json<Vec<Goal>> {
    let store = state.lock_store();
    Json(goal::list_goals(&store, &user_id))
}

pub(crate) fn goal_error_to_status(err: &GoalError) -> StatusCode {
    match err {
        GoalError::MissingField | GoalError::InvalidUserId | GoalError::EmptyTitle => StatusCode::BAD_REQUEST,
        GoalError::LimitExceeded(_) => StatusCode::FORBIDDEN,
        GoalError::DuplicateGoal => StatusCode::CONFLICT,
    }
}

fn goal_error_to_response(err: GoalError) -> (StatusCode, Json<serde_json::Value>) {
    (goal_error_to_status(&err), Json(serde_json::json!({ "error": err.to_string() })))
}

#[cfg(test)]
#[path = "goals_test.rs"]
mod tests;
