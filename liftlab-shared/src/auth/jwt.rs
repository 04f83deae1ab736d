/// Identity tokens
///
/// Tokens are HS256-signed JWTs that carry the user's identity so the client
/// can show who is logged in without another round trip, and so the server
/// can trust the user id on identity-bearing calls.
///
/// # Payload
///
/// ```json
/// {
///   "user": { "id": 1, "username": "alice", "first_name": "Alice", "last_name": "Smith" },
///   "iss": "liftlab",
///   "iat": 1700000000,
///   "nbf": 1700000000,
///   "exp": 1700010000
/// }
/// ```
///
/// There is no refresh flow: when a token expires the user logs in again.
///
/// # Example
///
/// ```
/// use liftlab_shared::auth::jwt::{create_token, validate_token, Claims, TokenUser};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let user = TokenUser {
///     id: 1,
///     username: "alice".to_string(),
///     first_name: "Alice".to_string(),
///     last_name: "Smith".to_string(),
/// };
///
/// let claims = Claims::new(user, chrono::Duration::seconds(10_000));
/// let token = create_token(&claims, "your-secret-key-at-least-32-bytes")?;
///
/// let validated = validate_token(&token, "your-secret-key-at-least-32-bytes")?;
/// assert_eq!(validated.user.id, 1);
/// # Ok(())
/// # }
/// ```

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::user::User;

/// Issuer claim stamped on every token
pub const ISSUER: &str = "liftlab";

/// Token lifetime when none is configured
pub const DEFAULT_EXPIRY_SECONDS: i64 = 10_000;

/// Error type for JWT operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    /// Failed to create token
    #[error("Failed to create token: {0}")]
    CreateError(String),

    /// Signature, format or claim check failed
    #[error("Failed to validate token: {0}")]
    ValidationError(String),

    /// Token has expired
    #[error("Token has expired")]
    Expired,

    /// Token was issued by someone else
    #[error("Invalid issuer: expected {expected}")]
    InvalidIssuer { expected: String },
}

/// Identity embedded in the token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUser {
    /// User ID
    pub id: i32,

    pub username: String,

    pub first_name: String,

    pub last_name: String,
}

impl From<&User> for TokenUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated user
    pub user: TokenUser,

    /// Issuer, always [`ISSUER`]
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Not before (Unix timestamp)
    pub nbf: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Claims for `user` that expire `expires_in` from now
    pub fn new(user: TokenUser, expires_in: Duration) -> Self {
        let now = Utc::now();

        Self {
            user,
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: (now + expires_in).timestamp(),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Time left before expiry, None once expired
    pub fn time_until_expiration(&self) -> Option<Duration> {
        let now = Utc::now().timestamp();
        if self.exp > now {
            Some(Duration::seconds(self.exp - now))
        } else {
            None
        }
    }
}

/// Signs `claims` with HS256
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&Header::new(Algorithm::HS256), claims, &key)
        .map_err(|e| JwtError::CreateError(format!("Token encoding failed: {}", e)))
}

/// Verifies signature, issuer, expiry and not-before, returning the claims
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.validate_exp = true;
    validation.validate_nbf = true;
    validation.leeway = 0;

    let data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidIssuer => JwtError::InvalidIssuer {
            expected: ISSUER.to_string(),
        },
        _ => JwtError::ValidationError(format!("Token validation failed: {}", e)),
    })?;

    Ok(data.claims)
}

/// Token settings handed to login/signup
#[derive(Debug, Clone)]
pub struct TokenSettings {
    /// HS256 signing secret
    pub secret: String,

    /// Token lifetime
    pub expires_in: Duration,
}

impl TokenSettings {
    pub fn new(secret: impl Into<String>, expiry_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            expires_in: Duration::seconds(expiry_seconds),
        }
    }

    /// Issues a token for `user`
    pub fn issue(&self, user: &User) -> Result<String, JwtError> {
        let claims = Claims::new(TokenUser::from(user), self.expires_in);
        create_token(&claims, &self.secret)
    }
}
