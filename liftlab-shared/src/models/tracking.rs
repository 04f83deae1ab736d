/// Per-set tracking entries
///
/// A tracking entry holds what a user actually lifted for one set of one
/// assignment. The client writes on every edit, so each write is a single
/// atomic upsert keyed by `(day_to_week_id, user_id, set)` that touches only
/// the field being edited. Concurrent writes to the same key resolve to
/// whichever commits last.
///
/// Weight and reps are stored as the text the user typed, which lets a
/// half-entered value like `"102."` round-trip unchanged.
///
/// Set numbers are not checked against the assignment's prescribed `sets`;
/// any set number is accepted.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE user_track (
///     day_to_week_id INTEGER NOT NULL REFERENCES day_to_week(day_to_week_id) ON DELETE CASCADE,
///     user_id INTEGER NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
///     "set" INTEGER NOT NULL,
///     weight VARCHAR(32),
///     reps VARCHAR(32),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     PRIMARY KEY (day_to_week_id, user_id, "set")
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use liftlab_shared::models::tracking::{TrackingEntry, TrackingKey};
/// # use sqlx::PgPool;
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// let key = TrackingKey { day_to_week_id: 42, user_id: 1, set: 1 };
///
/// TrackingEntry::set_weight(&pool, key, "100").await?;
/// assert_eq!(TrackingEntry::weight(&pool, key).await?, Some("100".to_string()));
/// assert_eq!(TrackingEntry::reps(&pool, key).await?, None);
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Upsert key for a tracking entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackingKey {
    /// Assignment being tracked
    pub day_to_week_id: i32,

    pub user_id: i32,

    /// Set number, starting at 1
    pub set: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TrackingEntry {
    pub day_to_week_id: i32,
    pub user_id: i32,
    pub set: i32,
    pub weight: Option<String>,
    pub reps: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl TrackingEntry {
    /// Records the weight for a set, leaving reps untouched
    pub async fn set_weight(pool: &PgPool, key: TrackingKey, weight: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO user_track (day_to_week_id, user_id, "set", weight)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (day_to_week_id, user_id, "set")
            DO UPDATE SET weight = EXCLUDED.weight, updated_at = NOW()
            "#,
        )
        .bind(key.day_to_week_id)
        .bind(key.user_id)
        .bind(key.set)
        .bind(weight)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Records the reps for a set, leaving weight untouched
    pub async fn set_reps(pool: &PgPool, key: TrackingKey, reps: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO user_track (day_to_week_id, user_id, "set", reps)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (day_to_week_id, user_id, "set")
            DO UPDATE SET reps = EXCLUDED.reps, updated_at = NOW()
            "#,
        )
        .bind(key.day_to_week_id)
        .bind(key.user_id)
        .bind(key.set)
        .bind(reps)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Recorded weight; None when the set has no entry or no weight yet
    pub async fn weight(pool: &PgPool, key: TrackingKey) -> Result<Option<String>, sqlx::Error> {
        let weight: Option<Option<String>> = sqlx::query_scalar(
            r#"SELECT weight FROM user_track WHERE day_to_week_id = $1 AND user_id = $2 AND "set" = $3"#,
        )
        .bind(key.day_to_week_id)
        .bind(key.user_id)
        .bind(key.set)
        .fetch_optional(pool)
        .await?;

        Ok(weight.flatten())
    }

    /// Recorded reps; None when the set has no entry or no reps yet
    pub async fn reps(pool: &PgPool, key: TrackingKey) -> Result<Option<String>, sqlx::Error> {
        let reps: Option<Option<String>> = sqlx::query_scalar(
            r#"SELECT reps FROM user_track WHERE day_to_week_id = $1 AND user_id = $2 AND "set" = $3"#,
        )
        .bind(key.day_to_week_id)
        .bind(key.user_id)
        .bind(key.set)
        .fetch_optional(pool)
        .await?;

        Ok(reps.flatten())
    }

    pub async fn find(pool: &PgPool, key: TrackingKey) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, TrackingEntry>(
            r#"
            SELECT day_to_week_id, user_id, "set", weight, reps, updated_at
            FROM user_track
            WHERE day_to_week_id = $1 AND user_id = $2 AND "set" = $3
            "#,
        )
        .bind(key.day_to_week_id)
        .bind(key.user_id)
        .bind(key.set)
        .fetch_optional(pool)
        .await
    }

    /// Number of entries a user has recorded
    pub async fn count_for_user(pool: &PgPool, user_id: i32) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_track WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
