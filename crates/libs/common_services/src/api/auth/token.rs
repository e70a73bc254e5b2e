use crate::api::auth::error::AuthError;
use crate::database::UserRole;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims carried by the stateless bearer token.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct AuthClaims {
    /// Subject (user id).
    pub sub: i32,
    pub role: UserRole,
    /// Issued at, unix seconds.
    pub iat: i64,
    /// Expiration time, unix seconds.
    pub exp: i64,
}

/// Signs a bearer token for the given user id and role.
///
/// # Errors
///
/// * `jsonwebtoken::encode` if token encoding fails.
pub fn create_token(
    jwt_secret: &str,
    expiry_days: i64,
    user_id: i32,
    role: UserRole,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = AuthClaims {
        sub: user_id,
        role,
        iat: now.timestamp(),
        exp: (now + Duration::days(expiry_days)).timestamp(),
    };
    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )?)
}

/// Verifies signature and expiry, returning the decoded claims.
///
/// # Errors
///
/// * `AuthError::InvalidToken` for tampered, malformed or expired tokens.
pub fn decode_token(token: &str, jwt_secret: &str) -> Result<AuthClaims, AuthError> {
    decode::<AuthClaims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::{create_token, decode_token};
    use crate::database::UserRole;

    const SECRET: &str = "test-secret";

    #[test]
    fn token_round_trips() {
        let token = create_token(SECRET, 30, 42, UserRole::RoleUser).unwrap();
        let claims = decode_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, UserRole::RoleUser);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_token(SECRET, 30, 42, UserRole::RoleUser).unwrap();
        assert!(decode_token(&token, "other-secret").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        // Negative expiry puts `exp` in the past.
        let token = create_token(SECRET, -1, 42, UserRole::RoleUser).unwrap();
        assert!(decode_token(&token, SECRET).is_err());
    }

    #[test]
    fn tampered_token_is_rejected() {
        let mut token = create_token(SECRET, 30, 42, UserRole::RoleUser).unwrap();
        token.push('x');
        assert!(decode_token(&token, SECRET).is_err());
    }
}
