/// Per-set tracking
///
/// An entry is keyed by `(day_to_week_id, user_id, set)` and holds what the
/// user actually lifted. Clients write on every keystroke; each write is an
/// independent upsert of one field, so weight and reps never clobber each
/// other.
///
/// ```text
/// POST /setUserPlanWeight  {user_id, day_to_week_id, set, weight}  -> {"status":"ok"}
/// POST /setUserPlanReps    {user_id, day_to_week_id, set, reps}    -> {"status":"ok"}
/// POST /getUserPlanWeight  {user_id, day_to_week_id, set}          -> [{"weight":"100"}] or []
/// POST /getUserPlanReps    {user_id, day_to_week_id, set}          -> [{"reps":"5"}] or []
/// ```
///
/// Values are stored as entered. Set numbers are not range-checked: a set
/// outside the assignment's prescribed sets is stored and read like any other.

use super::{ensure_caller, Ack};
use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Extension, Json};
use liftlab_shared::{
    auth::middleware::AuthContext,
    models::tracking::{TrackingEntry, TrackingKey},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct EntryRequest {
    pub user_id: i32,
    pub day_to_week_id: i32,
    pub set: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SetWeightRequest {
    pub user_id: i32,
    pub day_to_week_id: i32,
    pub set: i32,

    #[validate(length(max = 32, message = "Weight must be at most 32 characters"))]
    pub weight: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SetRepsRequest {
    pub user_id: i32,
    pub day_to_week_id: i32,
    pub set: i32,

    #[validate(length(max = 32, message = "Reps must be at most 32 characters"))]
    pub reps: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeightValue {
    pub weight: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RepsValue {
    pub reps: String,
}

/// Tracking key for the caller's own entry
fn checked_key(
    auth: &AuthContext,
    user_id: i32,
    day_to_week_id: i32,
    set: i32,
) -> ApiResult<TrackingKey> {
    ensure_caller(auth, user_id)?;
    Ok(TrackingKey {
        day_to_week_id,
        user_id,
        set,
    })
}

pub async fn set_weight(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<SetWeightRequest>,
) -> ApiResult<Json<Ack>> {
    req.validate()?;
    let key = checked_key(&auth, req.user_id, req.day_to_week_id, req.set)?;

    TrackingEntry::set_weight(&state.db, key, &req.weight).await?;

    Ok(Json(Ack::ok()))
}

pub async fn set_reps(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<SetRepsRequest>,
) -> ApiResult<Json<Ack>> {
    req.validate()?;
    let key = checked_key(&auth, req.user_id, req.day_to_week_id, req.set)?;

    TrackingEntry::set_reps(&state.db, key, &req.reps).await?;

    Ok(Json(Ack::ok()))
}

pub async fn get_weight(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<EntryRequest>,
) -> ApiResult<Json<Vec<WeightValue>>> {
    let key = checked_key(&auth, req.user_id, req.day_to_week_id, req.set)?;

    let weight = TrackingEntry::weight(&state.db, key).await?;

    Ok(Json(
        weight.map(|weight| WeightValue { weight }).into_iter().collect(),
    ))
}

pub async fn get_reps(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<EntryRequest>,
) -> ApiResult<Json<Vec<RepsValue>>> {
    let key = checked_key(&auth, req.user_id, req.day_to_week_id, req.set)?;

    let reps = TrackingEntry::reps(&state.db, key).await?;

    Ok(Json(reps.map(|reps| RepsValue { reps }).into_iter().collect()))
}
