use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Resolves the acting user of a request from its session.
pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Requires a logged-in user.
    ///
    /// # Returns
    /// - `Ok(String)` - Id of the acting user
    /// - `Err(AppError::AuthErr(AuthError::UserNotInSession))` - No user bound to the session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn require_user(&self) -> Result<String, AppError> {
        match AuthSession::new(self.session).get_user_id().await? {
            Some(user_id) if !user_id.trim().is_empty() => Ok(user_id),
            _ => Err(AuthError::UserNotInSession.into()),
        }
    }
}
