/// API route handlers
///
/// Organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: Login and signup
/// - `catalog`: Plan browsing, categories and exercises
/// - `authoring`: Building plans (plan, category, week, day, assignment)
/// - `assignment`: Which plan and week a user is following
/// - `weekly_plan`: A user's week, grouped by day
/// - `tracking`: Per-set weight and reps

pub mod assignment;
pub mod authoring;
pub mod catalog;
pub mod health;
pub mod tracking;
pub mod users;
pub mod weekly_plan;

use crate::error::{ApiError, ApiResult};
use liftlab_shared::auth::middleware::AuthContext;
use serde::{Deserialize, Serialize};

/// Acknowledgement for writes that return no data: `{"status":"ok"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub status: String,
}

impl Ack {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Rejects a body `user_id` that is not the token's user
pub(crate) fn ensure_caller(auth: &AuthContext, user_id: i32) -> ApiResult<()> {
    if auth.is_user(user_id) {
        Ok(())
    } else {
        tracing::warn!(
            caller = auth.user_id(),
            requested = user_id,
            "Rejected request for another user"
        );
        Err(ApiError::Forbidden(
            "user_id does not match the authenticated user".to_string(),
        ))
    }
}
