/// Which plan, and which week of it, a user is following
///
/// - `POST /setPlan` - Point the user at a plan (last write wins)
/// - `POST /currentWeek` - `[{"week": 2}]`, or `[]` for an unknown user
/// - `POST /setCurrentWeek` - Move the user to another week

use super::{ensure_caller, Ack};
use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, Extension, Json};
use liftlab_shared::{auth::middleware::AuthContext, models::user::User};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct SetPlanRequest {
    pub user_id: i32,
    pub plan_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub user_id: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SetWeekRequest {
    pub user_id: i32,

    #[validate(range(min = 1, message = "Week must be at least 1"))]
    pub week: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentWeek {
    pub week: i32,
}

/// Overwrites the user's plan pointer
///
/// # Errors
///
/// - `400 Bad Request`: No plan with that id
/// - `403 Forbidden`: `user_id` is not the caller
/// - `404 Not Found`: The user no longer exists
pub async fn set_plan(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<SetPlanRequest>,
) -> ApiResult<Json<Ack>> {
    ensure_caller(&auth, req.user_id)?;

    if !User::set_plan(&state.db, req.user_id, req.plan_id).await? {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    tracing::info!(user_id = req.user_id, plan_id = req.plan_id, "Plan assigned");

    Ok(Json(Ack::ok()))
}

pub async fn current_week(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<UserRequest>,
) -> ApiResult<Json<Vec<CurrentWeek>>> {
    ensure_caller(&auth, req.user_id)?;

    let week = User::current_week(&state.db, req.user_id).await?;

    Ok(Json(week.map(|week| CurrentWeek { week }).into_iter().collect()))
}

pub async fn set_current_week(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<SetWeekRequest>,
) -> ApiResult<Json<Ack>> {
    req.validate()?;
    ensure_caller(&auth, req.user_id)?;

    if !User::set_current_week(&state.db, req.user_id, req.week).await? {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    Ok(Json(Ack::ok()))
}
