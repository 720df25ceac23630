//! Session lifecycle: login, logout, restore, role checks.
//!
//! The session is a small state machine over
//! {[`LoggedOut`](SessionState::LoggedOut), [`LoggingIn`](SessionState::LoggingIn),
//! [`LoggedIn`](SessionState::LoggedIn), [`Error`](SessionState::Error)}
//! published through a `tokio::sync::watch` channel. The store is the
//! single writer; UI layers subscribe and re-render on change.
//!
//! Invariant: a `LoggedIn` state always corresponds to a present,
//! non-expired token in storage plus a persisted user and session expiry.
//! Every mutating operation here keeps the pieces in lock-step, and
//! [`SessionStore::check_session`] enforces the invariant on restore.

mod persist;
mod token;

pub use persist::SessionStorage;
pub use token::TokenStore;

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::watch;
use tracing::{info, instrument, warn};

use addy_fitness_core::UserRole;

use crate::api::ApiClient;
use crate::config::{BackendCredential, ModeCredentials};
use crate::error::{ApiError, SessionError};
use crate::models::User;

/// Session lifetime in seconds (1 hour).
const SESSION_TTL_SECONDS: i64 = 60 * 60;

/// Current session state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// No authenticated user.
    #[default]
    LoggedOut,
    /// A login flow is in flight.
    LoggingIn,
    /// An authenticated user with a validity window.
    LoggedIn {
        user: User,
        expires_at: DateTime<Utc>,
    },
    /// A login or restore failed; `message` is user-facing. Functionally
    /// logged out.
    Error { message: String },
}

impl SessionState {
    /// The authenticated user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::LoggedIn { user, .. } => Some(user),
            _ => None,
        }
    }

    /// Whether a login flow is currently in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::LoggingIn)
    }

    /// The recorded user-facing error message, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// Reactive session store.
///
/// Cheap to clone; all clones share state. The design assumes a single
/// active login flow at a time - two concurrent `login` calls race on
/// storage writes and the loser's state wins.
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

#[derive(Debug)]
struct SessionStoreInner {
    api: ApiClient,
    tokens: TokenStore,
    storage: SessionStorage,
    credentials: ModeCredentials,
    state: watch::Sender<SessionState>,
}

impl SessionStore {
    pub(crate) fn new(
        api: ApiClient,
        tokens: TokenStore,
        storage: SessionStorage,
        credentials: ModeCredentials,
    ) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            inner: Arc::new(SessionStoreInner {
                api,
                tokens,
                storage,
                credentials,
                state,
            }),
        }
    }

    /// Subscribe to session state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// Log in with a mode password.
    ///
    /// The mode password is mapped to a backend email/password pair via
    /// the configured credential table, then two sequential calls run:
    /// authenticate (obtain token), then fetch the current-user profile
    /// with that token. On any failure in either call the session and
    /// token are fully cleared - a profile-fetch failure after a
    /// successful authenticate still ends logged out, never half way.
    ///
    /// # Errors
    ///
    /// [`SessionError::UnknownModePassword`] if the mode password is not
    /// configured (no network call is made, nothing is persisted), or
    /// [`SessionError::Api`] if either backend call fails.
    #[instrument(skip(self, mode_password))]
    pub async fn login(&self, mode_password: &str) -> Result<User, SessionError> {
        let Some(credential) = self.inner.credentials.lookup(mode_password) else {
            return Err(SessionError::UnknownModePassword);
        };

        self.inner.state.send_replace(SessionState::LoggingIn);

        match self.login_with(credential).await {
            Ok(user) => {
                info!(user_id = %user.id, role = %user.role, "login succeeded");
                Ok(user)
            }
            Err(e) => {
                warn!(error = %e, "login failed, clearing session");
                self.clear_persisted();
                self.inner.state.send_replace(SessionState::Error {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    async fn login_with(&self, credential: &BackendCredential) -> Result<User, SessionError> {
        let token = self
            .inner
            .api
            .authenticate(&credential.email, &credential.password)
            .await?;
        self.inner.tokens.set_token(&token.access_token);

        // Needs the token persisted above; order matters.
        let user = self.inner.api.get_me().await?;

        let expires_at = Utc::now() + TimeDelta::seconds(SESSION_TTL_SECONDS);
        let user_json = serde_json::to_value(&user)
            .map_err(|e| SessionError::Api(ApiError::Parse(e.to_string())))?;
        self.inner.storage.update(|r| {
            r.user = Some(user_json);
            r.session_expires_at = Some(expires_at);
        });
        self.inner.state.send_replace(SessionState::LoggedIn {
            user: user.clone(),
            expires_at,
        });

        Ok(user)
    }

    /// Log out: clear reactive state, the persisted user and expiry, and
    /// the token. Idempotent.
    pub fn logout(&self) {
        self.clear_persisted();
        self.inner.state.send_replace(SessionState::LoggedOut);
    }

    /// Restore a persisted session at startup/reload.
    ///
    /// Restores `LoggedIn` only if the persisted user, session expiry, and
    /// token are all present, the expiry has not passed, and the user
    /// deserializes. A user that no longer parses is corrupt state: the
    /// session is fully cleared and the restore error is recorded. Any
    /// other shortfall is a plain logout.
    ///
    /// No network access - purely a storage check.
    pub fn check_session(&self) -> SessionState {
        let (user_json, expires_at) = self
            .inner
            .storage
            .read(|r| (r.user.clone(), r.session_expires_at));
        let token = self.inner.tokens.get_token();

        match (user_json, expires_at, token) {
            (Some(user_json), Some(expires_at), Some(_)) if Utc::now() < expires_at => {
                match serde_json::from_value::<User>(user_json) {
                    Ok(user) => {
                        self.inner
                            .state
                            .send_replace(SessionState::LoggedIn { user, expires_at });
                    }
                    Err(e) => {
                        warn!(error = %e, "persisted user corrupt, clearing session");
                        self.clear_persisted();
                        self.inner.state.send_replace(SessionState::Error {
                            message: SessionError::Restore.to_string(),
                        });
                    }
                }
            }
            _ => self.logout(),
        }

        self.state()
    }

    /// The current user's role, if logged in. Reads reactive state only.
    #[must_use]
    pub fn user_role(&self) -> Option<UserRole> {
        self.inner.state.borrow().user().map(|u| u.role)
    }

    /// Whether the current user's role is one of `roles`. Always false
    /// when no user is logged in.
    #[must_use]
    pub fn has_role(&self, roles: &[UserRole]) -> bool {
        self.user_role().is_some_and(|role| roles.contains(&role))
    }

    fn clear_persisted(&self) {
        // One atomic record write covers all four persisted fields.
        self.inner.storage.update(|r| {
            r.clear_token();
            r.clear_session();
        });
    }
}
