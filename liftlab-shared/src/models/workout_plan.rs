/// Workout plans and the plan catalog
///
/// A plan is created once by its author and never edited afterwards; its
/// schedule (weeks, days, exercises) hangs off it in `schedule`.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE workout_plan (
///     plan_id INTEGER GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
///     user_id INTEGER NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
///     name VARCHAR(255) NOT NULL,
///     description TEXT NOT NULL DEFAULT '',
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
///
/// CREATE TABLE plan_category (
///     plan_id INTEGER NOT NULL REFERENCES workout_plan(plan_id) ON DELETE CASCADE,
///     category_id INTEGER NOT NULL REFERENCES category(category_id) ON DELETE CASCADE,
///     PRIMARY KEY (plan_id, category_id)
/// );
/// ```
///
/// # Catalog queries
///
/// None of the catalog queries paginate; the whole catalog is returned.
/// Results are ordered by `plan_id` so clients see a stable list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A workout plan row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WorkoutPlan {
    pub plan_id: i32,

    /// Author of the plan
    pub user_id: i32,

    pub name: String,

    pub description: String,

    pub created_at: DateTime<Utc>,
}

/// Catalog listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlanSummary {
    pub plan_id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: String,
}

/// Input for creating a plan
#[derive(Debug, Clone)]
pub struct CreatePlan {
    /// Author
    pub user_id: i32,
    pub name: String,
    pub description: String,
}

impl WorkoutPlan {
    /// Inserts a plan and returns it with its generated id
    pub async fn create(pool: &PgPool, data: CreatePlan) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, WorkoutPlan>(
            r#"
            INSERT INTO workout_plan (user_id, name, description)
            VALUES ($1, $2, $3)
            RETURNING plan_id, user_id, name, description, created_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.name)
        .bind(data.description)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, plan_id: i32) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, WorkoutPlan>(
            "SELECT plan_id, user_id, name, description, created_at FROM workout_plan WHERE plan_id = $1",
        )
        .bind(plan_id)
        .fetch_optional(pool)
        .await
    }

    /// Tags a plan with a category
    ///
    /// # Errors
    ///
    /// A unique violation on `plan_category_pkey` when the pair already exists,
    /// a foreign key violation when either id is unknown.
    pub async fn attach_category(
        pool: &PgPool,
        plan_id: i32,
        category_id: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO plan_category (plan_id, category_id) VALUES ($1, $2)")
            .bind(plan_id)
            .bind(category_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Name of the plan `user_id` is following, None if they follow none
    pub async fn name_for_user(pool: &PgPool, user_id: i32) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            SELECT workout_plan.name
            FROM users
            JOIN workout_plan ON workout_plan.plan_id = users.plan_id
            WHERE users.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }
}

impl PlanSummary {
    /// Every plan in the catalog
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, PlanSummary>(
            "SELECT plan_id, user_id, name, description FROM workout_plan ORDER BY plan_id",
        )
        .fetch_all(pool)
        .await
    }

    /// Plans tagged with `category`, matched exactly but ignoring case
    pub async fn list_by_category(pool: &PgPool, category: &str) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, PlanSummary>(
            r#"
            SELECT DISTINCT p.plan_id, p.user_id, p.name, p.description
            FROM workout_plan p
            JOIN plan_category pc ON pc.plan_id = p.plan_id
            JOIN category c ON c.category_id = pc.category_id
            WHERE LOWER(c.category) = LOWER($1)
            ORDER BY p.plan_id
            "#,
        )
        .bind(category)
        .fetch_all(pool)
        .await
    }

    /// Plans whose name or description contains `query`, ignoring case
    ///
    /// The query is matched literally with `strpos`, so `%` and `_` in user
    /// input are ordinary characters. An empty query matches every plan.
    pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, PlanSummary>(
            r#"
            SELECT plan_id, user_id, name, description
            FROM workout_plan
            WHERE strpos(LOWER(name), LOWER($1)) > 0
               OR strpos(LOWER(description), LOWER($1)) > 0
            ORDER BY plan_id
            "#,
        )
        .bind(query)
        .fetch_all(pool)
        .await
    }
}
