/// Identity endpoints
///
/// - `POST /users/login` - Check credentials and get a token
/// - `POST /users/signup` - Register and get a token
///
/// Both answer `{"token": "eyJ..."}`. The token carries the user's id,
/// username and names, signed with the server secret.

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use liftlab_shared::auth::identity::{self, Signup};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Signup request
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    #[validate(length(min = 1, max = 128, message = "Password must be 1-128 characters"))]
    pub password: String,
}

/// Token response for login and signup
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Login
///
/// # Endpoint
///
/// ```text
/// POST /users/login
/// Content-Type: application/json
///
/// { "username": "alice", "password": "pw123" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request` (`invalid_credentials`): Unknown username or wrong password
/// - `422 Unprocessable Entity`: Validation failed
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    req.validate()?;

    let token = identity::login(&state.db, &state.tokens, &req.username, &req.password).await?;

    tracing::info!(username = %req.username, "User logged in");

    Ok(Json(TokenResponse { token }))
}

/// Signup
///
/// # Endpoint
///
/// ```text
/// POST /users/signup
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email": "alice@example.com",
///   "first_name": "Alice",
///   "last_name": "Smith",
///   "password": "pw123"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request` (`duplicate_identity`): Username or email already registered
/// - `422 Unprocessable Entity`: Validation failed
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<Json<TokenResponse>> {
    req.validate()?;

    let token = identity::signup(
        &state.db,
        &state.tokens,
        Signup {
            username: req.username,
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            password: req.password,
        },
    )
    .await?;

    Ok(Json(TokenResponse { token }))
}
