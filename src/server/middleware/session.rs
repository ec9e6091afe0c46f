//! Type-safe session management wrappers.
//!
//! Wraps the tower-sessions `Session` so session keys and value types are defined in one
//! place. The session is the only source of the acting user's identity.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Stores the user id handed over by the upstream identity provider once it has verified
/// the user.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Binds a user id to the session, replacing the session id first.
    ///
    /// # Returns
    /// - `Ok(())` - User id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to cycle the session or store the id
    pub async fn login(&self, user_id: &str) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.set_user_id(user_id).await
    }

    /// Stores the user id in the session.
    pub async fn set_user_id(&self, user_id: &str) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the user id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_AUTH_USER_ID).await?)
    }

    /// Clears all data from the session.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
