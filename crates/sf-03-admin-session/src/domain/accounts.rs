//! Built-in admin allow-list.

use super::session::AdminUser;

/// Storage key of the persisted session.
pub const ADMIN_SESSION_KEY: &str = "admin-session";

/// One allow-listed admin credential pair.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminAccount {
    pub id: String,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl AdminAccount {
    pub fn new(id: &str, username: &str, password: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        }
    }

    /// Exact, case-sensitive match on both fields.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    /// Session record for this account. The password is not carried over.
    pub fn to_user(&self) -> AdminUser {
        AdminUser {
            id: self.id.clone(),
            username: self.username.clone(),
            name: self.name.clone(),
        }
    }
}

// Keeps passwords out of logs.
impl std::fmt::Debug for AdminAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAccount")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The five built-in admin accounts.
pub fn default_accounts() -> Vec<AdminAccount> {
    vec![
        AdminAccount::new("1", "admin1", "admin123", "Admin One"),
        AdminAccount::new("2", "admin2", "admin456", "Admin Two"),
        AdminAccount::new("3", "admin3", "admin789", "Admin Three"),
        AdminAccount::new("4", "admin4", "admin101", "Admin Four"),
        AdminAccount::new("5", "admin5", "admin202", "Admin Five"),
    ]
}

/// Admin guard configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub accounts: Vec<AdminAccount>,
    /// Storage key of the session record (default: `admin-session`).
    pub storage_key: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            accounts: default_accounts(),
            storage_key: ADMIN_SESSION_KEY.to_string(),
        }
    }
}
