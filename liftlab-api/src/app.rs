/// Application state and router builder
///
/// # Example
///
/// ```no_run
/// use liftlab_api::{app::{build_router, AppState}, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let app = build_router(AppState::new(pool, config));
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, error::ApiError, middleware::security::SecurityHeadersLayer};
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
    routing::{get, post},
    Router,
};
use liftlab_shared::auth::{jwt::TokenSettings, middleware::authenticate};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state, cloned into every handler
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,

    /// Signing settings for login and signup tokens
    pub tokens: Arc<TokenSettings>,
}

impl AppState {
    pub fn new(db: PgPool, config: Config) -> Self {
        let tokens = Arc::new(config.token_settings());
        Self {
            db,
            config: Arc::new(config),
            tokens,
        }
    }

    pub fn jwt_secret(&self) -> &str {
        &self.tokens.secret
    }
}

/// Builds the complete router
///
/// ```text
/// public
///   GET  /health
///   POST /users/login, /users/signup
///   GET  /getAllPlans, /categories, /getExercises
///   POST /getPlanByCategory, /searchPlans
/// bearer token
///   POST /setPlan, /currentWeek, /setCurrentWeek
///   POST /addPlan, /addCategoryToPlan, /addWeek, /addDay,
///        /addExerciseToPlan, /addExercise
///   POST /plan, /plan/name
///   POST /setUserPlanWeight, /setUserPlanReps,
///        /getUserPlanWeight, /getUserPlanReps
/// ```
///
/// Layers, innermost first: bearer auth (protected group only), tracing,
/// compression, CORS, security headers.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let public_routes = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/users/login", post(routes::users::login))
        .route("/users/signup", post(routes::users::signup))
        .route("/getAllPlans", get(routes::catalog::all_plans))
        .route("/getPlanByCategory", post(routes::catalog::plans_by_category))
        .route("/searchPlans", post(routes::catalog::search_plans))
        .route("/categories", get(routes::catalog::categories))
        .route("/getExercises", get(routes::catalog::exercises));

    let protected_routes = Router::new()
        .route("/setPlan", post(routes::assignment::set_plan))
        .route("/currentWeek", post(routes::assignment::current_week))
        .route("/setCurrentWeek", post(routes::assignment::set_current_week))
        .route("/addPlan", post(routes::authoring::add_plan))
        .route(
            "/addCategoryToPlan",
            post(routes::authoring::add_category_to_plan),
        )
        .route("/addWeek", post(routes::authoring::add_week))
        .route("/addDay", post(routes::authoring::add_day))
        .route(
            "/addExerciseToPlan",
            post(routes::authoring::add_exercise_to_plan),
        )
        .route("/addExercise", post(routes::authoring::add_exercise))
        .route("/plan", post(routes::weekly_plan::week))
        .route("/plan/name", post(routes::weekly_plan::plan_name))
        .route("/setUserPlanWeight", post(routes::tracking::set_weight))
        .route("/setUserPlanReps", post(routes::tracking::set_reps))
        .route("/getUserPlanWeight", post(routes::tracking::get_weight))
        .route("/getUserPlanReps", post(routes::tracking::get_reps))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_layer,
        ));

    let cors = cors_layer(&state.config.api.cors_origins);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(SecurityHeadersLayer::new(state.config.api.production))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600))
}

/// Validates the bearer token and stores the caller's `AuthContext` in the
/// request extensions
async fn jwt_auth_layer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_context = authenticate(req.headers(), state.jwt_secret())?;

    tracing::debug!(user_id = auth_context.user_id(), "Authenticated request");
    req.extensions_mut().insert(auth_context);

    Ok(next.run(req).await)
}
