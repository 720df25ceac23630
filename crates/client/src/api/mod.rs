//! Addy Fitness backend API client.
//!
//! One shared request core with status-code classification, plus one
//! sibling module of resource methods per backend resource:
//!
//! - [`assignments`] - staff-client assignment management (admin)
//! - [`users`] - user profile management
//! - [`doctor`] - doctor/healthcare operations
//! - [`trainer`] - trainer operations
//! - [`nutrition`] - nutritionist operations
//! - [`orders`] - order listings
//!
//! Every method is a thin 1:1 mapping to one backend endpoint; permission
//! enforcement and role-based filtering are entirely backend-side. Errors
//! are normalized into [`ApiError`] and propagate unchanged to callers.

pub mod assignments;
pub mod doctor;
pub mod nutrition;
pub mod orders;
pub mod trainer;
pub mod users;

pub use doctor::patient_appointments;

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use addy_fitness_core::Email;

use crate::error::ApiError;
use crate::models::TokenResponse;
use crate::session::TokenStore;

/// Request timeout in seconds.
const TIMEOUT_SECS: u64 = 30;

/// Connection timeout in seconds.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// HTTP client for the Addy Fitness backend.
///
/// Cheap to clone; all clones share one pooled `reqwest::Client` and the
/// same token store. A valid stored bearer token is attached to every
/// request automatically, and a 401 response clears it again as a side
/// effect regardless of the request path or method.
///
/// The shared client carries 30s request / 10s connect timeouts. These
/// are transport defaults on the pool, not per-request policy; no
/// operation tunes them.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenStore,
}

/// Error body shape the backend uses for non-2xx responses.
#[derive(serde::Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl ApiClient {
    /// Create a client for `base_url` (no trailing slash) using `tokens`
    /// for bearer authentication.
    #[must_use]
    pub(crate) fn new(base_url: &str, tokens: TokenStore) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            inner: Arc::new(ApiClientInner {
                http,
                base_url: base_url.trim_end_matches('/').to_owned(),
                tokens,
            }),
        }
    }

    /// The backend base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Authenticate against `POST /auth/login`.
    ///
    /// The body is form-urlencoded and the field is named `username` even
    /// though it carries an email - that is the backend's contract. The
    /// returned token is NOT stored here; the session store owns the
    /// decision to persist it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if authentication is rejected or the request
    /// fails.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn authenticate(
        &self,
        username: &Email,
        password: &SecretString,
    ) -> Result<TokenResponse, ApiError> {
        let form = [
            ("username", username.as_str()),
            ("password", password.expose_secret()),
        ];
        let response = self
            .inner
            .http
            .post(self.url("/auth/login"))
            .form(&form)
            .send()
            .await
            .map_err(ApiError::Network)?;
        self.handle_response(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    /// Attach the shared headers: JSON content type always, bearer token
    /// when a valid one is stored.
    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header(CONTENT_TYPE, "application/json");
        match self.inner.tokens.get_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Execute a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .prepare(self.inner.http.get(self.url(path)))
            .send()
            .await
            .map_err(ApiError::Network)?;
        self.handle_response(response).await
    }

    /// Execute a POST request with a JSON body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .prepare(self.inner.http.post(self.url(path)).json(body))
            .send()
            .await
            .map_err(ApiError::Network)?;
        self.handle_response(response).await
    }

    /// Execute a PUT request with a JSON body.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .prepare(self.inner.http.put(self.url(path)).json(body))
            .send()
            .await
            .map_err(ApiError::Network)?;
        self.handle_response(response).await
    }

    /// Execute a DELETE request.
    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .prepare(self.inner.http.delete(self.url(path)))
            .send()
            .await
            .map_err(ApiError::Network)?;
        self.handle_response(response).await
    }

    /// Classify the response status and parse the JSON body.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // Token invalid or expired - drop it so the next request does
            // not resend a credential the backend already rejected.
            self.inner.tokens.clear_token();
            return Err(ApiError::AuthExpired);
        }

        if status == StatusCode::FORBIDDEN {
            return Err(ApiError::Forbidden);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail)
                .unwrap_or_else(|| format!("API Error: {}", status.as_u16()));
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}
