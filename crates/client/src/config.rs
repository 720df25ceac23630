//! Portal configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ADDY_STATE_DIR` - Directory for persisted session state
//! - `ADDY_MODE_CREDENTIALS` - JSON map of mode password to backend
//!   credential pair, e.g.
//!   `{"godmode": {"email": "ops@addyfitness.com", "password": "..."}}`
//!
//! ## Optional
//! - `ADDY_API_BASE_URL` - Backend base URL (default: production API)
//!
//! The mode-credential table is a shorthand login gate layered in front of
//! real backend authentication. It is configuration, not a security
//! boundary - but it still must never be embedded in source.

use std::collections::HashMap;
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use addy_fitness_core::Email;

/// Default backend base URL (production).
pub const DEFAULT_API_BASE_URL: &str = "https://api.addyfitness.com";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "insert",
    "enter-",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Portal application configuration.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Backend base URL; all resource paths are relative to it.
    pub api_base_url: String,
    /// Directory where the persisted session record lives.
    pub state_dir: PathBuf,
    /// Mode password to backend credential mapping.
    pub mode_credentials: ModeCredentials,
}

impl PortalConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid,
    /// or if a mode-credential password looks like a placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = get_env_or_default("ADDY_API_BASE_URL", DEFAULT_API_BASE_URL);
        // Trailing slashes would double up when paths are appended.
        let api_base_url = api_base_url.trim_end_matches('/').to_owned();
        Url::parse(&api_base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("ADDY_API_BASE_URL".to_owned(), e.to_string())
        })?;

        let state_dir = PathBuf::from(get_env("ADDY_STATE_DIR")?);

        let raw = get_env("ADDY_MODE_CREDENTIALS")?;
        let mode_credentials = ModeCredentials::parse(&raw)?;

        Ok(Self {
            api_base_url,
            state_dir,
            mode_credentials,
        })
    }
}

/// A backend email/password pair behind a mode password.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct BackendCredential {
    /// Backend account email. The login endpoint's form field is named
    /// `username` even though it carries this email.
    pub email: Email,
    /// Backend account password.
    pub password: SecretString,
}

impl std::fmt::Debug for BackendCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendCredential")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// The mode password to backend credential lookup table.
///
/// The portal issues role-specific "mode" passwords rather than raw
/// backend credentials; this table maps one to the other.
#[derive(Debug, Clone, Default)]
pub struct ModeCredentials(HashMap<String, BackendCredential>);

#[derive(Deserialize)]
struct RawCredential {
    email: String,
    password: String,
}

impl ModeCredentials {
    /// Parse the credential table from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the JSON is malformed, an email fails
    /// validation, or a password matches a placeholder pattern.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let parsed: HashMap<String, RawCredential> = serde_json::from_str(raw).map_err(|e| {
            ConfigError::InvalidEnvVar("ADDY_MODE_CREDENTIALS".to_owned(), e.to_string())
        })?;

        let mut table = HashMap::with_capacity(parsed.len());
        for (mode, cred) in parsed {
            let email = Email::parse(&cred.email).map_err(|e| {
                ConfigError::InvalidEnvVar(
                    "ADDY_MODE_CREDENTIALS".to_owned(),
                    format!("entry {mode}: {e}"),
                )
            })?;
            validate_secret_strength(&cred.password, &format!("ADDY_MODE_CREDENTIALS[{mode}]"))?;
            table.insert(
                mode,
                BackendCredential {
                    email,
                    password: SecretString::from(cred.password),
                },
            );
        }

        Ok(Self(table))
    }

    /// Look up the backend credential for a mode password.
    #[must_use]
    pub fn lookup(&self, mode_password: &str) -> Option<&BackendCredential> {
        self.0.get(mode_password)
    }

    /// Number of configured mode passwords.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Get a required environment variable.
fn get_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_owned()))
}

/// Get an environment variable with a default fallback.
fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_owned())
}

/// Reject secrets that look like unfilled placeholders.
fn validate_secret_strength(secret: &str, name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                name.to_owned(),
                format!("looks like a placeholder (contains {pattern:?})"),
            ));
        }
    }
    Ok(())
}
