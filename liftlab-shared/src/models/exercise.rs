/// Exercise library
///
/// Exercises are shared reference data: any plan may assign any exercise.
///
/// ```sql
/// CREATE TABLE exercise (
///     exercise_id INTEGER GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
///     name VARCHAR(255) NOT NULL,
///     description TEXT NOT NULL DEFAULT '',
///     image VARCHAR(512),
///     muscle_groups TEXT[] NOT NULL DEFAULT '{}'
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Exercise {
    pub exercise_id: i32,

    pub name: String,

    pub description: String,

    /// Demonstration image reference
    pub image: Option<String>,

    /// Muscle group tags, e.g. `["Chest", "Triceps"]`
    pub muscle_groups: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateExercise {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub muscle_groups: Vec<String>,
}

impl Exercise {
    pub async fn create(pool: &PgPool, data: CreateExercise) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Exercise>(
            r#"
            INSERT INTO exercise (name, description, image, muscle_groups)
            VALUES ($1, $2, $3, $4)
            RETURNING exercise_id, name, description, image, muscle_groups
            "#,
        )
        .bind(data.name)
        .bind(data.description)
        .bind(data.image)
        .bind(data.muscle_groups)
        .fetch_one(pool)
        .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Exercise>(
            "SELECT exercise_id, name, description, image, muscle_groups FROM exercise ORDER BY exercise_id",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, exercise_id: i32) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Exercise>(
            "SELECT exercise_id, name, description, image, muscle_groups FROM exercise WHERE exercise_id = $1",
        )
        .bind(exercise_id)
        .fetch_optional(pool)
        .await
    }
}
