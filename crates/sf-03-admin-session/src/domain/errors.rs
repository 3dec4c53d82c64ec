use thiserror::Error;

/// Admin session errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Admin login required")]
    NotLoggedIn,
}
