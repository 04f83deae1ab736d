/// Authentication utilities
///
/// # Modules
///
/// - [`password`]: Argon2id credential hashing
/// - [`jwt`]: Identity token creation and validation
/// - [`identity`]: Login and signup flows
/// - [`middleware`]: Bearer token extraction for Axum routes
///
/// # Example
///
/// ```
/// use liftlab_shared::auth::password::{hash_password, verify_password};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
/// # Ok(())
/// # }
/// ```

pub mod identity;
pub mod jwt;
pub mod middleware;
pub mod password;
