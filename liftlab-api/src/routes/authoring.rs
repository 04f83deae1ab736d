/// Plan-authoring endpoints (bearer token required)
///
/// A plan is built top-down, each call returning the id the next one needs:
///
/// ```text
/// POST /addPlan            {user_id, name, description}        -> {plan_id}
/// POST /addCategoryToPlan  {plan_id, category}                 -> {status}
/// POST /addWeek            {plan_id, week}                     -> {week_id}
/// POST /addDay             {week_id, day}                      -> {day_id}
/// POST /addExerciseToPlan  {day_id, exercise_id, sets, reps}   -> {day_to_week_id}
/// POST /addExercise        {name, description?, image?, muscle_groups?} -> {exercise_id}
/// ```
///
/// Unknown parent ids are rejected by foreign keys (`400`). A week number
/// the plan already has, or a category already attached, is `409`.

use super::{ensure_caller, Ack};
use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, Extension, Json};
use liftlab_shared::{
    auth::middleware::AuthContext,
    models::{
        category::Category,
        exercise::{CreateExercise, Exercise},
        schedule::{Day, DayExerciseAssignment, NewAssignment, Week},
        workout_plan::{CreatePlan, WorkoutPlan},
    },
};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct AddPlanRequest {
    /// Author; must be the caller
    pub user_id: i32,

    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddPlanResponse {
    pub plan_id: i32,
}

/// A category given by id or by label
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(i32),
    Label(String),
}

#[derive(Debug, Deserialize)]
pub struct AddCategoryRequest {
    pub plan_id: i32,
    pub category: CategoryRef,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddWeekRequest {
    pub plan_id: i32,

    #[validate(range(min = 1, message = "Week must be at least 1"))]
    pub week: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddWeekResponse {
    pub week_id: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddDayRequest {
    pub week_id: i32,

    #[validate(range(min = 1, message = "Day must be at least 1"))]
    pub day: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddDayResponse {
    pub day_id: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddAssignmentRequest {
    pub day_id: i32,
    pub exercise_id: i32,

    #[validate(range(min = 1, message = "Sets must be at least 1"))]
    pub sets: i32,

    #[validate(range(min = 1, message = "Reps must be at least 1"))]
    pub reps: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddAssignmentResponse {
    pub day_to_week_id: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddExerciseRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(url(message = "Image must be a URL"))]
    pub image: Option<String>,

    #[serde(default)]
    pub muscle_groups: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddExerciseResponse {
    pub exercise_id: i32,
}

pub async fn add_plan(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<AddPlanRequest>,
) -> ApiResult<Json<AddPlanResponse>> {
    req.validate()?;
    ensure_caller(&auth, req.user_id)?;

    let plan = WorkoutPlan::create(
        &state.db,
        CreatePlan {
            user_id: req.user_id,
            name: req.name,
            description: req.description,
        },
    )
    .await?;

    tracing::info!(plan_id = plan.plan_id, user_id = plan.user_id, "Plan created");

    Ok(Json(AddPlanResponse {
        plan_id: plan.plan_id,
    }))
}

/// Tags a plan with a category
///
/// `category` is either the category id or its label (case-insensitive):
///
/// ```json
/// { "plan_id": 10, "category": "Powerlifting" }
/// ```
pub async fn add_category_to_plan(
    State(state): State<AppState>,
    Json(req): Json<AddCategoryRequest>,
) -> ApiResult<Json<Ack>> {
    let category_id = match req.category {
        CategoryRef::Id(id) => id,
        CategoryRef::Label(label) => Category::find_by_label(&state.db, &label)
            .await?
            .map(|category| category.category_id)
            .ok_or_else(|| ApiError::BadRequest(format!("Unknown category: {}", label)))?,
    };

    WorkoutPlan::attach_category(&state.db, req.plan_id, category_id).await?;

    Ok(Json(Ack::ok()))
}

pub async fn add_week(
    State(state): State<AppState>,
    Json(req): Json<AddWeekRequest>,
) -> ApiResult<Json<AddWeekResponse>> {
    req.validate()?;

    let week = Week::create(&state.db, req.plan_id, req.week).await?;

    Ok(Json(AddWeekResponse {
        week_id: week.week_id,
    }))
}

pub async fn add_day(
    State(state): State<AppState>,
    Json(req): Json<AddDayRequest>,
) -> ApiResult<Json<AddDayResponse>> {
    req.validate()?;

    let day = Day::create(&state.db, req.week_id, req.day).await?;

    Ok(Json(AddDayResponse { day_id: day.day_id }))
}

pub async fn add_exercise_to_plan(
    State(state): State<AppState>,
    Json(req): Json<AddAssignmentRequest>,
) -> ApiResult<Json<AddAssignmentResponse>> {
    req.validate()?;

    let assignment = DayExerciseAssignment::create(
        &state.db,
        NewAssignment {
            day_id: req.day_id,
            exercise_id: req.exercise_id,
            sets: req.sets,
            reps: req.reps,
        },
    )
    .await?;

    Ok(Json(AddAssignmentResponse {
        day_to_week_id: assignment.day_to_week_id,
    }))
}

pub async fn add_exercise(
    State(state): State<AppState>,
    Json(req): Json<AddExerciseRequest>,
) -> ApiResult<Json<AddExerciseResponse>> {
    req.validate()?;

    let exercise = Exercise::create(
        &state.db,
        CreateExercise {
            name: req.name,
            description: req.description,
            image: req.image,
            muscle_groups: req.muscle_groups,
        },
    )
    .await?;

    tracing::info!(exercise_id = exercise.exercise_id, name = %exercise.name, "Exercise created");

    Ok(Json(AddExerciseResponse {
        exercise_id: exercise.exercise_id,
    }))
}
