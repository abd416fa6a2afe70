use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, error, warn};

use crate::config::AuthConfig;
use crate::db::storage_service::StorageService;
use crate::types::error::AppError;
use crate::utils::clock::Clock;
use crate::utils::token::{constant_time_eq, encrypt, new_token, verify};

/// Password login and cookie sessions for the single admin.
///
/// Only argon2 hashes of session tokens are persisted, so checking a token
/// means verifying it against every live hash. That is fine for the handful
/// of sessions one parent produces.
pub struct SessionAuthenticator {
    storage: Arc<StorageService>,
    clock: Arc<dyn Clock>,
    admin_password: Option<String>,
    ttl: Duration,
}

impl SessionAuthenticator {
    pub fn new(storage: Arc<StorageService>, config: &AuthConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            storage,
            clock,
            admin_password: config.admin_password.clone(),
            ttl: Duration::hours(config.session_ttl_hours),
        }
    }

    /// Fails closed when no admin password is configured.
    pub fn verify_password(&self, password: &str) -> bool {
        let Some(expected) = self.admin_password.as_deref() else {
            error!("ADMIN_PASSWORD is not set, rejecting admin login");
            return false;
        };
        constant_time_eq(password.as_bytes(), expected.as_bytes())
    }

    /// Issues a new token, stores its hash and sweeps expired sessions.
    /// The plaintext token is only ever returned, never stored.
    pub async fn create_session(&self) -> Result<String, AppError> {
        let token = new_token();
        let token_hash = encrypt(&token)
            .map_err(|e| AppError::Internal(format!("hashing session token failed: {e}")))?;

        let now = self.clock.now();
        let id = self
            .storage
            .insert_admin_session(token_hash, now + self.ttl, now)
            .await?;
        debug!(session_id = %id, "admin session stored");

        let purged = self.storage.purge_expired_admin_sessions(now).await?;
        if purged > 0 {
            debug!(purged, "removed expired admin sessions");
        }

        Ok(token)
    }

    pub async fn validate_session(&self, token: &str) -> Result<bool, AppError> {
        let now = self.clock.now();
        self.storage.purge_expired_admin_sessions(now).await?;

        let live = self.storage.list_live_admin_sessions(now).await?;
        Ok(live.iter().any(|session| token_matches(token, &session.token_hash)))
    }

    /// Removes the session for `token`, expired or not. Unknown tokens are a no-op.
    pub async fn delete_session(&self, token: &str) -> Result<(), AppError> {
        let sessions = self.storage.list_admin_sessions().await?;

        if let Some(session) = sessions
            .into_iter()
            .find(|session| token_matches(token, &session.token_hash))
        {
            self.storage.delete_admin_session(&session.id).await?;
        }
        Ok(())
    }
}

fn token_matches(token: &str, token_hash: &str) -> bool {
    match verify(token, token_hash) {
        Ok(matches) => matches,
        Err(e) => {
            warn!("skipping admin session with unreadable hash: {e}");
            false
        }
    }
}
