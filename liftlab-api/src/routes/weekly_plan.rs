/// The week a user is following
///
/// ```text
/// POST /plan        {user_id, week}  -> {"1": [AssignmentView, ...], "3": [...]}
/// POST /plan/name   {user_id}        -> [{"name": "5x5"}] or []
/// ```
///
/// Day keys ascend; assignments within a day keep insertion order. A user
/// with no plan, or a plan without that week, gets `{}`. Week numbers are
/// not validated here; a week below 1 simply matches nothing.

use super::ensure_caller;
use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Extension, Json};
use liftlab_shared::{
    auth::middleware::AuthContext,
    models::{
        weekly_plan::{self, WeeklyPlan},
        workout_plan::WorkoutPlan,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct WeekRequest {
    pub user_id: i32,
    pub week: i32,
}

#[derive(Debug, Deserialize)]
pub struct PlanNameRequest {
    pub user_id: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlanName {
    pub name: String,
}

pub async fn week(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<WeekRequest>,
) -> ApiResult<Json<WeeklyPlan>> {
    ensure_caller(&auth, req.user_id)?;

    let plan = weekly_plan::for_user(&state.db, req.user_id, req.week).await?;
    tracing::debug!(user_id = req.user_id, week = req.week, days = plan.len(), "Weekly plan read");

    Ok(Json(plan))
}

pub async fn plan_name(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<PlanNameRequest>,
) -> ApiResult<Json<Vec<PlanName>>> {
    ensure_caller(&auth, req.user_id)?;

    let name = WorkoutPlan::name_for_user(&state.db, req.user_id).await?;

    Ok(Json(name.map(|name| PlanName { name }).into_iter().collect()))
}
