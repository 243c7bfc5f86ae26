//! Authentication configuration.
//!
//! Token issuance lives in the hosted identity service; this section only
//! configures verification of the bearer tokens it mints.

use serde::{Deserialize, Serialize};

/// Bearer-token verification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT verification (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Clock-skew leeway in seconds applied to `exp` validation.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_leeway() -> u64 {
    30
}
