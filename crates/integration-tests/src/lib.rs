//! Shared fixtures for integration tests.
//!
//! Each test gets its own mock backend and its own state directory, so
//! tests never share persisted session records.

use std::sync::Once;

use tempfile::TempDir;
use wiremock::MockServer;

use addy_fitness_client::{ModeCredentials, Portal, PortalConfig};

/// The mode password the test credential table maps.
pub const TEST_MODE_PASSWORD: &str = "godmode";

/// The backend email behind [`TEST_MODE_PASSWORD`].
pub const TEST_BACKEND_EMAIL: &str = "ayush@addyfitness.com";

static TRACING: Once = Once::new();

/// A mock backend plus the configuration to wire portals against it.
pub struct TestPortal {
    pub server: MockServer,
    pub config: PortalConfig,
    /// Holds the state directory alive for the duration of the test.
    pub state_dir: TempDir,
}

impl TestPortal {
    /// Wire a portal against the mock backend.
    ///
    /// Construct the portal after seeding any persisted state - the
    /// portal caches the session record it reads at construction time.
    #[must_use]
    pub fn portal(&self) -> Portal {
        Portal::new(&self.config)
    }
}

/// Start a mock backend and prepare portal configuration for it.
///
/// # Panics
///
/// Panics on fixture setup failure (test-only code).
#[must_use]
pub async fn test_portal() -> TestPortal {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });

    let server = MockServer::start().await;
    let state_dir = tempfile::tempdir().expect("create state dir");

    let mode_credentials = ModeCredentials::parse(&format!(
        r#"{{"{TEST_MODE_PASSWORD}": {{"email": "{TEST_BACKEND_EMAIL}", "password": "gm-pass-8841"}}}}"#
    ))
    .expect("valid credential table");

    let config = PortalConfig {
        api_base_url: server.uri(),
        state_dir: state_dir.path().to_path_buf(),
        mode_credentials,
    };

    TestPortal {
        server,
        config,
        state_dir,
    }
}

/// The user record the mock profile endpoint serves.
#[must_use]
pub fn doctor_profile() -> serde_json::Value {
    serde_json::json!({
        "id": 5,
        "email": "doc@addyfitness.com",
        "role": "doctor",
        "full_name": "Dr. Mehta",
        "specialty": "general-physician"
    })
}
