use axum::http::HeaderMap;
use subtle::ConstantTimeEq;

use crate::server::error::{auth::AuthError, AppError};

/// Header the SSO gateway sends its shared token in.
pub const GATEWAY_TOKEN_HEADER: &str = "x-gateway-token";

/// Verifies that a login request was forwarded by the SSO gateway.
///
/// Only the gateway knows the shared token, so only it can bind a user id to a session.
pub struct GatewayGuard<'a> {
    expected_token: &'a str,
}

impl<'a> GatewayGuard<'a> {
    pub fn new(expected_token: &'a str) -> Self {
        Self { expected_token }
    }

    /// Requires the gateway token header to match the configured token.
    ///
    /// # Returns
    /// - `Ok(())` - Header present and matching
    /// - `Err(AppError::AuthErr(AuthError::GatewayTokenRejected))` - Header missing, not
    ///   valid UTF-8 or not matching
    pub fn require_gateway(&self, headers: &HeaderMap) -> Result<(), AppError> {
        let presented = headers
            .get(GATEWAY_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        let matches: bool = presented
            .as_bytes()
            .ct_eq(self.expected_token.as_bytes())
            .into();

        if presented.is_empty() || !matches {
            return Err(AuthError::GatewayTokenRejected.into());
        }

        Ok(())
    }
}
