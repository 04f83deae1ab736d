/// Weekly plan view
///
/// Resolves user → assigned plan → week → days → exercise assignments in a
/// single query and groups the rows by day number. This is what the client
/// renders on the workout screen for the week the user picks.
///
/// A user without an assigned plan, an unknown user, or a plan without the
/// requested week all produce an empty view rather than an error; the caller
/// shows "no plan" in that case.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::collections::BTreeMap;

/// One prescribed exercise as shown on a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AssignmentView {
    /// Day number the assignment belongs to
    pub day: i32,

    /// Assignment id; the key tracking entries hang off
    pub day_to_week_id: i32,

    pub exercise_id: i32,

    /// Prescribed sets
    pub sets: i32,

    /// Prescribed reps per set
    pub reps: i32,

    /// Exercise name
    pub name: String,

    /// Exercise description
    pub description: String,

    /// Exercise demonstration image
    pub image: Option<String>,
}

/// Assignments keyed by day number, days ascending
pub type WeeklyPlan = BTreeMap<i32, Vec<AssignmentView>>;

/// Groups rows by `day`, keeping row order within each day
pub fn group_by_day(rows: Vec<AssignmentView>) -> WeeklyPlan {
    let mut days = WeeklyPlan::new();
    for row in rows {
        days.entry(row.day).or_default().push(row);
    }
    days
}

/// Week `week` of the plan `user_id` is following
pub async fn for_user(pool: &PgPool, user_id: i32, week: i32) -> Result<WeeklyPlan, sqlx::Error> {
    let rows = sqlx::query_as::<_, AssignmentView>(
        r#"
        SELECT d.day, dtw.day_to_week_id, dtw.exercise_id, dtw.sets, dtw.reps,
               e.name, e.description, e.image
        FROM users u
        JOIN week w ON w.plan_id = u.plan_id AND w.week = $2
        JOIN day d ON d.week_id = w.week_id
        JOIN day_to_week dtw ON dtw.day_id = d.day_id
        JOIN exercise e ON e.exercise_id = dtw.exercise_id
        WHERE u.user_id = $1
        ORDER BY d.day, dtw.day_to_week_id
        "#,
    )
    .bind(user_id)
    .bind(week)
    .fetch_all(pool)
    .await?;

    tracing::debug!(user_id, week, assignments = rows.len(), "Loaded weekly plan");

    Ok(group_by_day(rows))
}
