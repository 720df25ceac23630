//! Data-access layer for the Addy Fitness admin portal.
//!
//! Wraps the Addy Fitness REST backend with thin per-resource clients and
//! manages a bearer-token session persisted to local storage. There is no
//! business logic here: permission enforcement, role filtering, and record
//! validation are all backend-side, and this crate passes records through
//! untouched.
//!
//! # Modules
//!
//! - [`api`] - HTTP client and per-resource operations
//! - [`session`] - login/logout/restore lifecycle and token storage
//! - [`config`] - environment-driven configuration
//! - [`data`] - static service category reference data
//! - [`models`] - backend record shapes
//! - [`error`] - error taxonomy
//! - [`media`] - storage URL translation
//!
//! # Example
//!
//! ```rust,ignore
//! use addy_fitness_client::Portal;
//!
//! let portal = Portal::from_env()?;
//!
//! // Restore a persisted session, or prompt for a mode password.
//! if portal.session().check_session().user().is_none() {
//!     portal.session().login("operationsmode").await?;
//! }
//!
//! let assignments = portal.api().get_all_assignments(false).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod media;
pub mod models;
pub mod session;

pub use api::{ApiClient, patient_appointments};
pub use config::{ConfigError, ModeCredentials, PortalConfig};
pub use error::{ApiError, SessionError};
pub use session::{SessionState, SessionStorage, SessionStore, TokenStore};

/// Wired-up entry point: one HTTP client plus one session store sharing a
/// token store and persisted state.
#[derive(Debug, Clone)]
pub struct Portal {
    api: ApiClient,
    session: SessionStore,
}

impl Portal {
    /// Wire up the portal from an already-loaded configuration.
    #[must_use]
    pub fn new(config: &PortalConfig) -> Self {
        let storage = SessionStorage::open(&config.state_dir);
        let tokens = TokenStore::new(storage.clone());
        let api = ApiClient::new(&config.api_base_url, tokens.clone());
        let session = SessionStore::new(
            api.clone(),
            tokens,
            storage,
            config.mode_credentials.clone(),
        );
        Self { api, session }
    }

    /// Load configuration from the environment and wire up the portal.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if required environment variables are
    /// missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(&PortalConfig::from_env()?))
    }

    /// The backend API client.
    #[must_use]
    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    /// The session store.
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }
}
