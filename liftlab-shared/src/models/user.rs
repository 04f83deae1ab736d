/// User model and database operations
///
/// A user owns their tracking data and points at the one plan they are
/// currently following.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     user_id INTEGER GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
///     username VARCHAR(64) NOT NULL,          -- unique on LOWER(username)
///     email VARCHAR(255) NOT NULL,            -- unique on LOWER(email)
///     first_name VARCHAR(100) NOT NULL,
///     last_name VARCHAR(100) NOT NULL,
///     password_hash VARCHAR(255) NOT NULL,
///     week INTEGER NOT NULL DEFAULT 1,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     plan_id INTEGER REFERENCES workout_plan(plan_id) ON DELETE SET NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use liftlab_shared::models::user::{CreateUser, User};
/// use liftlab_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::from_url("postgresql://localhost/liftlab")).await?;
///
/// let user = User::create(&pool, CreateUser {
///     username: "alice".to_string(),
///     email: "alice@example.com".to_string(),
///     first_name: "Alice".to_string(),
///     last_name: "Smith".to_string(),
///     password_hash: "$argon2id$...".to_string(),
/// }).await?;
///
/// User::set_plan(&pool, user.user_id, 10).await?;
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub user_id: i32,

    /// Login name, unique ignoring case
    pub username: String,

    /// Email address, unique ignoring case
    pub email: String,

    pub first_name: String,

    pub last_name: String,

    /// Argon2id PHC string, never serialized
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Plan the user is currently following
    pub plan_id: Option<i32>,

    /// Week of the plan the user is on
    pub week: i32,

    pub created_at: DateTime<Utc>,
}

/// Input for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,

    /// Already hashed credential (NOT the plaintext password)
    pub password_hash: String,
}

const USER_COLUMNS: &str =
    "user_id, username, email, first_name, last_name, password_hash, plan_id, week, created_at";

impl User {
    /// Inserts a user row
    ///
    /// # Errors
    ///
    /// Fails with a unique violation on `users_username_key` or
    /// `users_email_key` when the identity is already taken.
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (username, email, first_name, last_name, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(data.username)
        .bind(data.email)
        .bind(data.first_name)
        .bind(data.last_name)
        .bind(data.password_hash)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_id(pool: &PgPool, user_id: i32) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    /// Case-insensitive lookup by login name
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE LOWER(username) = LOWER($1)"
        ))
        .bind(username)
        .fetch_optional(pool)
        .await
    }

    /// Whether the username or the email is already registered
    pub async fn identity_taken(
        pool: &PgPool,
        username: &str,
        email: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM users
                WHERE LOWER(username) = LOWER($1) OR LOWER(email) = LOWER($2)
            )
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_one(pool)
        .await
    }

    /// Points the user at `plan_id`, replacing whatever was there
    ///
    /// Returns false when the user does not exist.
    pub async fn set_plan(pool: &PgPool, user_id: i32, plan_id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET plan_id = $2 WHERE user_id = $1")
            .bind(user_id)
            .bind(plan_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Week number the user is on, None for an unknown user
    pub async fn current_week(pool: &PgPool, user_id: i32) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar("SELECT week FROM users WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Moves the user to `week`; returns false when the user does not exist
    pub async fn set_current_week(
        pool: &PgPool,
        user_id: i32,
        week: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET week = $2 WHERE user_id = $1")
            .bind(user_id)
            .bind(week)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes the user with their plans and tracking entries
    pub async fn delete(pool: &PgPool, user_id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
