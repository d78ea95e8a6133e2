//! Authentication service
//!
//! Tokens are minted by the identity provider; this service only verifies
//! them and turns the claims into a caller.

use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    #[serde(default)]
    pub username: Option<String>,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Verify a token and build the caller it identifies
    pub fn authenticate(token: &str, secret: &str) -> AppResult<AuthenticatedUser> {
        let claims = Self::verify_token(token, secret)?;
        let id = claims.sub.parse::<i64>().map_err(|_| AppError::InvalidToken)?;

        Ok(AuthenticatedUser {
            id,
            username: claims.username,
            role: claims.role,
        })
    }
}
