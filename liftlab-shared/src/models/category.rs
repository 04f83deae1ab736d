/// Plan categories
///
/// Static reference data, seeded by migration and never written at runtime.
///
/// ```sql
/// CREATE TABLE category (
///     category_id INTEGER GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
///     category VARCHAR(100) NOT NULL      -- unique on LOWER(category)
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub category_id: i32,

    /// Display label, e.g. "Powerlifting"
    pub category: String,
}

impl Category {
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "SELECT category_id, category FROM category ORDER BY category_id",
        )
        .fetch_all(pool)
        .await
    }

    /// Case-insensitive lookup by label
    pub async fn find_by_label(pool: &PgPool, label: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "SELECT category_id, category FROM category WHERE LOWER(category) = LOWER($1)",
        )
        .bind(label)
        .fetch_optional(pool)
        .await
    }
}
