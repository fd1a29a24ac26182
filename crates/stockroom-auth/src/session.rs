//! Session store — login, logout and restore orchestration over the
//! durable key-value surface.

use std::sync::LazyLock;

use regex::Regex;
use stockroom_core::error::StockroomError;
use stockroom_core::models::identity::Identity;
use stockroom_core::models::session::Session;
use stockroom_core::repository::{CredentialDirectory, KeyValueStore};
use tracing::{info, warn};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;
use crate::state::{SessionEvent, SessionState};
use crate::token;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

/// Input for the login flow.
#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// The login form's field rules. Checked before the directory is
    /// consulted.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.trim().is_empty() {
            return Err(AuthError::Validation("Please input your email!".into()));
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(AuthError::Validation("Please enter a valid email!".into()));
        }
        if self.password.is_empty() {
            return Err(AuthError::Validation("Please input your password!".into()));
        }
        Ok(())
    }
}

/// Owns the single logical session of the process.
///
/// Generic over the directory and key-value implementations so the
/// auth layer has no dependency on the storage crate. Built once at
/// start-up and passed by reference to whoever needs it.
pub struct SessionStore<D: CredentialDirectory, K: KeyValueStore> {
    directory: D,
    storage: K,
    config: AuthConfig,
    state: SessionState,
}

impl<D: CredentialDirectory, K: KeyValueStore> SessionStore<D, K> {
    pub fn new(directory: D, storage: K, config: AuthConfig) -> Self {
        Self {
            directory,
            storage,
            config,
            state: SessionState::Unknown,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current(&self) -> Option<&Session> {
        self.state.session()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Read the persisted session, if any.
    ///
    /// Absent keys, unreadable storage and an identity that does not
    /// parse all yield `None`; nothing is surfaced to the caller.
    pub fn restore(&mut self) -> Option<Session> {
        self.apply(SessionEvent::SetLoading(true));

        let restored = match self.read_persisted() {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "Discarding persisted session");
                None
            }
        };

        if let Some(session) = &restored {
            info!(
                user_id = session.identity.id,
                role = %session.role(),
                token = %token::fingerprint(&session.token),
                "Restored persisted session"
            );
        }

        self.apply(SessionEvent::Restored(restored.clone()));
        restored
    }

    /// Authenticate against the directory and persist the new session.
    ///
    /// On failure nothing is written and the previous session, in
    /// memory and in storage, is left as it was.
    pub async fn login(&mut self, input: LoginInput) -> Result<Session, AuthError> {
        input.validate()?;
        self.apply(SessionEvent::SetLoading(true));

        let result = match self.authenticate(&input).await {
            Ok(identity) => self.persist(identity),
            Err(e) => Err(e),
        };

        match result {
            Ok(session) => {
                info!(
                    user_id = session.identity.id,
                    role = %session.role(),
                    token = %token::fingerprint(&session.token),
                    "Login succeeded"
                );
                self.apply(SessionEvent::LoggedIn(session.clone()));
                Ok(session)
            }
            Err(e) => {
                warn!(email = %input.email, error = %e, "Login failed");
                self.apply(SessionEvent::SetLoading(false));
                Err(e)
            }
        }
    }

    /// Clear the persisted and in-memory session. Idempotent.
    pub fn logout(&mut self) {
        for key in [&self.config.token_key, &self.config.user_key] {
            if let Err(e) = self.storage.remove(key) {
                warn!(key = %key, error = %e, "Failed to clear persisted session key");
            }
        }
        if let Some(session) = self.state.session() {
            info!(user_id = session.identity.id, "Logged out");
        }
        self.apply(SessionEvent::LoggedOut);
    }

    fn apply(&mut self, event: SessionEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = state.transition(event);
    }

    async fn authenticate(&self, input: &LoginInput) -> Result<Identity, AuthError> {
        let record = match self.directory.find_by_email(&input.email).await {
            Ok(record) => record,
            Err(StockroomError::NotFound { .. }) => return Err(AuthError::InvalidCredentials),
            Err(e) => return Err(AuthError::Directory(e.to_string())),
        };

        let valid = password::verify_password(
            &input.password,
            &record.password_hash,
            self.config.pepper.as_deref(),
        )?;
        if !valid {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(record.identity())
    }

    fn read_persisted(&self) -> Result<Option<Session>, AuthError> {
        let token = self
            .storage
            .get(&self.config.token_key)
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        let user = self
            .storage
            .get(&self.config.user_key)
            .map_err(|e| AuthError::Storage(e.to_string()))?;

        let (Some(token), Some(user)) = (token, user) else {
            return Ok(None);
        };
        if token.is_empty() || user.is_empty() {
            return Ok(None);
        }

        let identity: Identity = serde_json::from_str(&user)
            .map_err(|e| AuthError::MalformedPersistedSession(e.to_string()))?;
        Ok(Some(Session::new(identity, token)))
    }

    fn persist(&self, identity: Identity) -> Result<Session, AuthError> {
        let token = token::generate_session_token(&self.config.token_prefix);
        let user = serde_json::to_string(&identity)
            .map_err(|e| AuthError::Storage(format!("serialize identity: {e}")))?;

        self.storage
            .set(&self.config.user_key, &user)
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        if let Err(e) = self.storage.set(&self.config.token_key, &token) {
            // Never leave an identity without its token.
            if let Err(rollback) = self.storage.remove(&self.config.user_key) {
                warn!(
                    key = %self.config.user_key,
                    error = %rollback,
                    "Failed to roll back persisted identity"
                );
            }
            return Err(AuthError::Storage(e.to_string()));
        }

        Ok(Session::new(identity, token))
    }
}
