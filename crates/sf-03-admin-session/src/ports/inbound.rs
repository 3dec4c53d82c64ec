//! # Inbound Port - AdminSessionApi

use crate::domain::{AdminUser, SessionError};

/// Admin console session operations.
pub trait AdminSessionApi {
    /// Exact match against the allow-list. State is unchanged on failure.
    fn login(&mut self, username: &str, password: &str) -> Result<AdminUser, SessionError>;

    /// Ends the session and removes the record. Logging out twice is fine.
    fn logout(&mut self);

    fn is_logged_in(&self) -> bool;

    fn current_admin(&self) -> Option<&AdminUser>;

    /// Guard for admin-only actions.
    fn require_admin(&self) -> Result<&AdminUser, SessionError> {
        self.current_admin().ok_or(SessionError::NotLoggedIn)
    }
}
