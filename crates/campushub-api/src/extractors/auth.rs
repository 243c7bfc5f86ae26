//! `AuthUser` extractor: pulls the JWT from the Authorization header,
//! validates it, and injects a request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campushub_core::error::AppError;
use campushub_entity::user::UserRole;
use campushub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// JWT claims issued by the identity service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The user id.
    pub sub: Uuid,
    /// The username.
    pub username: String,
    /// The user's role at issue time.
    pub role: UserRole,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = state.config.auth.leeway_seconds;

        let key = DecodingKey::from_secret(state.config.auth.jwt_secret.as_bytes());
        let claims = decode::<Claims>(token, &key, &validation)
            .map_err(|_| AppError::unauthorized("Invalid or expired token"))?
            .claims;

        Ok(AuthUser(RequestContext::new(
            claims.sub,
            claims.role,
            claims.username,
        )))
    }
}
