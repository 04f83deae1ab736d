/// Login and signup
///
/// Both flows end by issuing an identity token (see [`super::jwt`]). Nothing
/// is persisted on login. Argon2 work runs on the blocking pool so it does
/// not stall the async runtime.
///
/// # Example
///
/// ```no_run
/// use liftlab_shared::auth::identity::{login, signup, Signup};
/// use liftlab_shared::auth::jwt::TokenSettings;
/// # use sqlx::PgPool;
/// # async fn example(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// let tokens = TokenSettings::new("your-secret-key-at-least-32-bytes", 10_000);
///
/// signup(&pool, &tokens, Signup {
///     username: "alice".to_string(),
///     email: "alice@example.com".to_string(),
///     first_name: "Alice".to_string(),
///     last_name: "Smith".to_string(),
///     password: "pw123".to_string(),
/// }).await?;
///
/// let token = login(&pool, &tokens, "alice", "pw123").await?;
/// # Ok(())
/// # }
/// ```

use sqlx::PgPool;
use tracing::{debug, info};

use super::jwt::{JwtError, TokenSettings};
use super::password::{self, PasswordError};
use crate::models::user::{CreateUser, User};

/// Error type for login and signup
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// Unknown username or wrong password
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Username or email already registered
    #[error("Username or email already exists")]
    DuplicateIdentity,

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Token(#[from] JwtError),

    #[error("Storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Signup form
#[derive(Debug, Clone)]
pub struct Signup {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,

    /// Plaintext password, hashed before it reaches the database
    pub password: String,
}

/// Checks credentials and issues a token
pub async fn login(
    pool: &PgPool,
    tokens: &TokenSettings,
    username: &str,
    password: &str,
) -> Result<String, IdentityError> {
    let user = User::find_by_username(pool, username)
        .await?
        .ok_or_else(|| {
            debug!(username, "Login for unknown username");
            IdentityError::InvalidCredentials
        })?;

    let candidate = password.to_string();
    let stored = user.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || password::verify_password(&candidate, &stored))
        .await
        .map_err(|e| PasswordError::VerifyError(e.to_string()))??;

    if !valid {
        debug!(user_id = user.user_id, "Login with wrong password");
        return Err(IdentityError::InvalidCredentials);
    }

    Ok(tokens.issue(&user)?)
}

/// Registers a user and issues a token
///
/// A username or email that is already taken, including one registered by a
/// concurrent signup between the check and the insert, fails with
/// [`IdentityError::DuplicateIdentity`] and leaves the users table unchanged.
pub async fn signup(
    pool: &PgPool,
    tokens: &TokenSettings,
    form: Signup,
) -> Result<String, IdentityError> {
    if User::identity_taken(pool, &form.username, &form.email).await? {
        return Err(IdentityError::DuplicateIdentity);
    }

    let plaintext = form.password;
    let password_hash = tokio::task::spawn_blocking(move || password::hash_password(&plaintext))
        .await
        .map_err(|e| PasswordError::HashError(e.to_string()))??;

    let user = User::create(
        pool,
        CreateUser {
            username: form.username,
            email: form.email,
            first_name: form.first_name,
            last_name: form.last_name,
            password_hash,
        },
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            IdentityError::DuplicateIdentity
        }
        other => IdentityError::Storage(other),
    })?;

    info!(user_id = user.user_id, username = %user.username, "User signed up");

    Ok(tokens.issue(&user)?)
}
