/// Bearer token authentication for Axum
///
/// Identity-bearing routes require `Authorization: Bearer <token>`. The
/// router's middleware calls [`authenticate`] and stores the resulting
/// [`AuthContext`] in the request extensions, where handlers pick it up with
/// `Extension<AuthContext>`.
///
/// # Example
///
/// ```
/// use axum::Extension;
/// use liftlab_shared::auth::middleware::AuthContext;
///
/// async fn handler(Extension(auth): Extension<AuthContext>) -> String {
///     format!("Hello, {}!", auth.user.username)
/// }
/// ```

use axum::http::{header, HeaderMap};
use serde::{Deserialize, Serialize};

use super::jwt::{validate_token, JwtError, TokenUser};

/// Identity of the caller, taken from a validated token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    pub user: TokenUser,
}

impl AuthContext {
    pub fn user_id(&self) -> i32 {
        self.user.id
    }

    /// Whether the token belongs to `user_id`
    pub fn is_user(&self, user_id: i32) -> bool {
        self.user.id == user_id
    }
}

/// Error type for authentication middleware
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    /// No Authorization header
    MissingCredentials,

    /// Authorization header is not `Bearer <token>`
    InvalidFormat(String),

    /// Token failed validation
    InvalidToken(String),
}

/// Extracts and validates the bearer token in `headers`
pub fn authenticate(headers: &HeaderMap, secret: &str) -> Result<AuthContext, AuthError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingCredentials)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::InvalidFormat("Expected Bearer token".to_string()))?;

    let claims = validate_token(token.trim(), secret).map_err(|e| match e {
        JwtError::Expired => AuthError::InvalidToken("Token expired".to_string()),
        JwtError::InvalidIssuer { .. } => AuthError::InvalidToken("Invalid issuer".to_string()),
        _ => AuthError::InvalidToken(format!("Invalid token: {}", e)),
    })?;

    Ok(AuthContext { user: claims.user })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::{create_token, Claims};
    use axum::http::HeaderValue;
    use chrono::Duration;

    const SECRET: &str = "test-secret-key-at-least-32-bytes-long";

    fn token_for(id: i32, expires_in: Duration) -> String {
        let user = TokenUser {
            id,
            username: "alice".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
        };
        create_token(&Claims::new(user, expires_in), SECRET).unwrap()
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_authenticate_valid_token() {
        let headers = headers_with(&format!("Bearer {}", token_for(7, Duration::minutes(5))));

        let context = authenticate(&headers, SECRET).unwrap();
        assert_eq!(context.user_id(), 7);
        assert!(context.is_user(7));
        assert!(!context.is_user(8));
    }

    #[test]
    fn test_authenticate_missing_header() {
        assert_eq!(
            authenticate(&HeaderMap::new(), SECRET),
            Err(AuthError::MissingCredentials)
        );
    }

    #[test]
    fn test_authenticate_wrong_scheme() {
        let headers = headers_with("Basic YWxpY2U6cHcxMjM=");
        assert!(matches!(
            authenticate(&headers, SECRET),
            Err(AuthError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_authenticate_expired_token() {
        let headers = headers_with(&format!("Bearer {}", token_for(7, Duration::seconds(-60))));
        assert_eq!(
            authenticate(&headers, SECRET),
            Err(AuthError::InvalidToken("Token expired".to_string()))
        );
    }
}
