/// Database models for Lift Lab
///
/// Each module owns one table family and exposes its queries as associated
/// functions taking `&PgPool`. Every query binds its inputs as parameters.
///
/// # Models
///
/// - `user`: Accounts, assigned plan pointer and current week
/// - `workout_plan`: Plans, plan categories and catalog queries
/// - `category`: Category reference data
/// - `exercise`: Exercise library
/// - `schedule`: Weeks, days and exercise assignments
/// - `weekly_plan`: Read projection of one week of a user's plan
/// - `tracking`: Per-set weight/reps entries

pub mod category;
pub mod exercise;
pub mod schedule;
pub mod tracking;
pub mod user;
pub mod weekly_plan;
pub mod workout_plan;
