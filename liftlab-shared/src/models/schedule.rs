/// Plan schedule: weeks, days and exercise assignments
///
/// A plan owns a tree of weeks, each week owns its days, and each day owns
/// the exercises prescribed for it (`day_to_week` rows). The tree is built
/// one insert at a time while the author is creating a plan, so every insert
/// returns the generated id the next step needs.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE week (
///     week_id INTEGER GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
///     plan_id INTEGER NOT NULL REFERENCES workout_plan(plan_id) ON DELETE CASCADE,
///     week INTEGER NOT NULL CHECK (week > 0),
///     CONSTRAINT week_plan_id_week_key UNIQUE (plan_id, week)
/// );
///
/// CREATE TABLE day (
///     day_id INTEGER GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
///     week_id INTEGER NOT NULL REFERENCES week(week_id) ON DELETE CASCADE,
///     day INTEGER NOT NULL CHECK (day > 0)
/// );
///
/// CREATE TABLE day_to_week (
///     day_to_week_id INTEGER GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
///     day_id INTEGER NOT NULL REFERENCES day(day_id) ON DELETE CASCADE,
///     exercise_id INTEGER NOT NULL REFERENCES exercise(exercise_id),
///     sets INTEGER NOT NULL CHECK (sets > 0),
///     reps INTEGER NOT NULL CHECK (reps > 0)
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use liftlab_shared::models::schedule::{Day, DayExerciseAssignment, NewAssignment, Week};
/// # use sqlx::PgPool;
/// # async fn example(pool: PgPool, plan_id: i32) -> Result<(), sqlx::Error> {
/// let week = Week::create(&pool, plan_id, 1).await?;
/// let day = Day::create(&pool, week.week_id, 1).await?;
/// DayExerciseAssignment::create(&pool, NewAssignment {
///     day_id: day.day_id,
///     exercise_id: 5,
///     sets: 3,
///     reps: 5,
/// }).await?;
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Week of a plan; `week` is unique within the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Week {
    pub week_id: i32,
    pub plan_id: i32,

    /// Week number, starting at 1
    pub week: i32,
}

/// Training day within a week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Day {
    pub day_id: i32,
    pub week_id: i32,

    /// Day number within the week
    pub day: i32,
}

/// Exercise prescribed for a day with target sets and reps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DayExerciseAssignment {
    pub day_to_week_id: i32,
    pub day_id: i32,
    pub exercise_id: i32,
    pub sets: i32,
    pub reps: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct NewAssignment {
    pub day_id: i32,
    pub exercise_id: i32,
    pub sets: i32,
    pub reps: i32,
}

impl Week {
    /// # Errors
    ///
    /// A unique violation on `week_plan_id_week_key` if the plan already has
    /// this week number.
    pub async fn create(pool: &PgPool, plan_id: i32, week: i32) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Week>(
            "INSERT INTO week (plan_id, week) VALUES ($1, $2) RETURNING week_id, plan_id, week",
        )
        .bind(plan_id)
        .bind(week)
        .fetch_one(pool)
        .await
    }

    pub async fn find(pool: &PgPool, plan_id: i32, week: i32) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Week>(
            "SELECT week_id, plan_id, week FROM week WHERE plan_id = $1 AND week = $2",
        )
        .bind(plan_id)
        .bind(week)
        .fetch_optional(pool)
        .await
    }

    pub async fn list_for_plan(pool: &PgPool, plan_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Week>(
            "SELECT week_id, plan_id, week FROM week WHERE plan_id = $1 ORDER BY week",
        )
        .bind(plan_id)
        .fetch_all(pool)
        .await
    }
}

impl Day {
    pub async fn create(pool: &PgPool, week_id: i32, day: i32) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Day>(
            "INSERT INTO day (week_id, day) VALUES ($1, $2) RETURNING day_id, week_id, day",
        )
        .bind(week_id)
        .bind(day)
        .fetch_one(pool)
        .await
    }

    pub async fn list_for_week(pool: &PgPool, week_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Day>(
            "SELECT day_id, week_id, day FROM day WHERE week_id = $1 ORDER BY day, day_id",
        )
        .bind(week_id)
        .fetch_all(pool)
        .await
    }
}

impl DayExerciseAssignment {
    pub async fn create(pool: &PgPool, data: NewAssignment) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, DayExerciseAssignment>(
            r#"
            INSERT INTO day_to_week (day_id, exercise_id, sets, reps)
            VALUES ($1, $2, $3, $4)
            RETURNING day_to_week_id, day_id, exercise_id, sets, reps
            "#,
        )
        .bind(data.day_id)
        .bind(data.exercise_id)
        .bind(data.sets)
        .bind(data.reps)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        day_to_week_id: i32,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, DayExerciseAssignment>(
            "SELECT day_to_week_id, day_id, exercise_id, sets, reps FROM day_to_week WHERE day_to_week_id = $1",
        )
        .bind(day_to_week_id)
        .fetch_optional(pool)
        .await
    }
}
