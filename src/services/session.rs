use chrono::{Duration, Utc};
use uuid::Uuid;

use std::sync::Arc;

use crate::common::StoreError;
use crate::models::{Session, SessionRecord};
use crate::services::{PasswordManager, SessionStore};

/// Resolves and manages per-request authentication state.
///
/// The provider never caches: every call reads the store afresh.
#[derive(Clone)]
pub struct SessionProvider {
    store: Arc<dyn SessionStore>,
    ttl: Duration,
}

impl SessionProvider {
    pub fn new(store: Arc<dyn SessionStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Without a token the request is anonymous and the store is not consulted.
    pub async fn current_session(&self, token: Option<Uuid>) -> Result<Session, StoreError> {
        let Some(token) = token else {
            return Ok(Session::anonymous());
        };

        let user = self.store.find_session_user(token, Utc::now()).await?;
        Ok(Session { user })
    }

    /// Checks the credentials and opens a new session. `Ok(None)` means
    /// the email is unknown or the password does not match.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<SessionRecord>, StoreError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Ok(None);
        }

        let Some(user) = self.store.find_user_by_email(email).await? else {
            PasswordManager::verify_dummy(password);
            return Ok(None);
        };

        let matches = PasswordManager::verify_password(password, &user.password_hash)
            .map_err(StoreError::PasswordHash)?;
        if !matches {
            return Ok(None);
        }

        let record = self
            .store
            .create_session(user.id, Utc::now() + self.ttl)
            .await?;
        log::info!("Opened session for user {}", user.id);

        Ok(Some(record))
    }

    pub async fn sign_out(&self, token: Uuid) -> Result<(), StoreError> {
        self.store.delete_session(token).await
    }
}
