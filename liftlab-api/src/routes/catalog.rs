/// Catalog endpoints (public)
///
/// - `GET  /getAllPlans` - Every plan
/// - `POST /getPlanByCategory` - Plans tagged with a category label
/// - `POST /searchPlans` - Plans whose name or description contains a string
/// - `GET  /categories` - Category labels
/// - `GET  /getExercises` - Exercise library
///
/// Plan listings are arrays of `{plan_id, user_id, name, description}`
/// ordered by plan id.

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use liftlab_shared::models::{category::Category, exercise::Exercise, workout_plan::PlanSummary};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CategoryQuery {
    /// Category label, matched case-insensitively
    #[validate(length(min = 1, max = 100, message = "Category must be 1-100 characters"))]
    pub category: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SearchQuery {
    /// Matched literally; an empty string matches every plan
    #[validate(length(max = 200, message = "Search must be at most 200 characters"))]
    pub search: String,
}

pub async fn all_plans(State(state): State<AppState>) -> ApiResult<Json<Vec<PlanSummary>>> {
    Ok(Json(PlanSummary::list_all(&state.db).await?))
}

/// Plans in a category
///
/// ```text
/// POST /getPlanByCategory
/// { "category": "powerlifting" }
/// ```
///
/// An unknown category is an empty list, not an error.
pub async fn plans_by_category(
    State(state): State<AppState>,
    Json(req): Json<CategoryQuery>,
) -> ApiResult<Json<Vec<PlanSummary>>> {
    req.validate()?;

    Ok(Json(
        PlanSummary::list_by_category(&state.db, &req.category).await?,
    ))
}

/// Case-insensitive substring search over plan name and description
///
/// ```text
/// POST /searchPlans
/// { "search": "5x5" }
/// ```
pub async fn search_plans(
    State(state): State<AppState>,
    Json(req): Json<SearchQuery>,
) -> ApiResult<Json<Vec<PlanSummary>>> {
    req.validate()?;

    let plans = PlanSummary::search(&state.db, &req.search).await?;
    tracing::debug!(query = %req.search, results = plans.len(), "Plan search");

    Ok(Json(plans))
}

pub async fn categories(State(state): State<AppState>) -> ApiResult<Json<Vec<Category>>> {
    Ok(Json(Category::list(&state.db).await?))
}

pub async fn exercises(State(state): State<AppState>) -> ApiResult<Json<Vec<Exercise>>> {
    Ok(Json(Exercise::list(&state.db).await?))
}
