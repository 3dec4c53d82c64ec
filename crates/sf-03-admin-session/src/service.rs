//! Admin Session Guard service.

use crate::domain::{AdminConfig, AdminUser, SessionError};
use crate::ports::AdminSessionApi;
use shared_bus::{EventPublisher, StorefrontEvent};
use shared_storage::KeyValueStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Session guard bound to a storage handle and a bus.
pub struct AdminSessionGuard<S: KeyValueStore + ?Sized> {
    config: AdminConfig,
    session: Option<AdminUser>,
    storage: Arc<S>,
    publisher: Arc<dyn EventPublisher>,
}

impl<S: KeyValueStore + ?Sized> AdminSessionGuard<S> {
    /// Builds the guard, reading the session record once.
    ///
    /// A record that does not parse is removed and the guard starts logged
    /// out. Storage read errors also leave it logged out.
    pub fn hydrate(config: AdminConfig, storage: Arc<S>, publisher: Arc<dyn EventPublisher>) -> Self {
        let key = config.storage_key.as_str();
        let session = match storage.get(key) {
            Ok(Some(raw)) => match AdminUser::decode(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(key, error = %e, "[sf-03] Discarding corrupt admin session");
                    if let Err(remove_err) = storage.remove(key) {
                        warn!(key, error = %remove_err, "[sf-03] Failed to remove corrupt admin session");
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(key, error = %e, "[sf-03] Admin session unreadable");
                None
            }
        };

        if let Some(user) = &session {
            info!(username = %user.username, "[sf-03] Admin session restored");
        }

        Self {
            config,
            session,
            storage,
            publisher,
        }
    }

    pub fn config(&self) -> &AdminConfig {
        &self.config
    }
}

impl<S: KeyValueStore + ?Sized> AdminSessionApi for AdminSessionGuard<S> {
    fn login(&mut self, username: &str, password: &str) -> Result<AdminUser, SessionError> {
        let Some(account) = self
            .config
            .accounts
            .iter()
            .find(|a| a.matches(username, password))
        else {
            warn!(username, "[sf-03] Admin login rejected");
            return Err(SessionError::InvalidCredentials);
        };

        let user = account.to_user();
        let key = self.config.storage_key.as_str();
        match user.encode() {
            Ok(raw) => {
                if let Err(e) = self.storage.set(key, &raw) {
                    warn!(key, error = %e, "[sf-03] Failed to persist admin session");
                }
            }
            Err(e) => warn!(key, error = %e, "[sf-03] Failed to encode admin session"),
        }

        info!(username = %user.username, "[sf-03] Admin logged in");
        self.session = Some(user.clone());
        self.publisher.publish(StorefrontEvent::AdminLoggedIn {
            username: user.username.clone(),
        });
        Ok(user)
    }

    fn logout(&mut self) {
        let key = self.config.storage_key.as_str();
        if let Err(e) = self.storage.remove(key) {
            warn!(key, error = %e, "[sf-03] Failed to remove admin session");
        }
        if let Some(user) = self.session.take() {
            info!(username = %user.username, "[sf-03] Admin logged out");
            self.publisher.publish(StorefrontEvent::AdminLoggedOut);
        }
    }

    fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    fn current_admin(&self) -> Option<&AdminUser> {
        self.session.as_ref()
    }
}
