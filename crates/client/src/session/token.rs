//! Bearer token storage with time-based expiry.

use chrono::{TimeDelta, Utc};

use super::persist::SessionStorage;

/// Token lifetime in seconds (24 hours - must match the backend-issued
/// token lifetime).
const TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;

/// Accessor for the persisted bearer token.
///
/// Pure storage - no network calls. Shares the session record with
/// [`super::SessionStore`] but only ever touches the token half.
#[derive(Debug, Clone)]
pub struct TokenStore {
    storage: SessionStorage,
}

impl TokenStore {
    /// Create a token store over an opened session storage handle.
    #[must_use]
    pub const fn new(storage: SessionStorage) -> Self {
        Self { storage }
    }

    /// Return the stored token if present and not expired.
    ///
    /// An expired token is cleared from storage as a side effect, so a
    /// second call is an ordinary absent result rather than an error.
    #[must_use]
    pub fn get_token(&self) -> Option<String> {
        let (token, expires_at) = self
            .storage
            .read(|r| (r.token.clone(), r.token_expires_at));

        let token = token?;
        let expires_at = expires_at?;

        if Utc::now() > expires_at {
            self.clear_token();
            return None;
        }

        Some(token)
    }

    /// Persist a freshly issued token with expiry = now + 24 hours.
    pub fn set_token(&self, token: &str) {
        let expires_at = Utc::now() + TimeDelta::seconds(TOKEN_TTL_SECONDS);
        self.storage.update(|r| {
            r.token = Some(token.to_owned());
            r.token_expires_at = Some(expires_at);
        });
    }

    /// Remove both persisted token fields unconditionally.
    pub fn clear_token(&self) {
        self.storage.update(super::persist::SessionRecord::clear_token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &std::path::Path) -> TokenStore {
        TokenStore::new(SessionStorage::open(dir))
    }

    #[test]
    fn set_then_get_returns_token() {
        let dir = tempfile::tempdir().expect("tempdir");
        let tokens = store_in(dir.path());

        tokens.set_token("tok-abc");
        assert_eq!(tokens.get_token(), Some("tok-abc".to_owned()));
    }

    #[test]
    fn expired_token_is_cleared_and_stays_absent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = SessionStorage::open(dir.path());
        storage.update(|r| {
            r.token = Some("stale".to_owned());
            r.token_expires_at = Some(Utc::now() - TimeDelta::seconds(1));
        });

        let tokens = TokenStore::new(storage.clone());
        assert_eq!(tokens.get_token(), None);
        // Side effect: storage was wiped, so the second call is also a
        // plain absent result.
        assert_eq!(tokens.get_token(), None);
        assert_eq!(storage.read(|r| r.token.clone()), None);
    }

    #[test]
    fn token_without_expiry_is_absent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = SessionStorage::open(dir.path());
        storage.update(|r| r.token = Some("orphan".to_owned()));

        let tokens = TokenStore::new(storage);
        assert_eq!(tokens.get_token(), None);
    }

    #[test]
    fn clear_token_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let tokens = store_in(dir.path());

        tokens.set_token("tok");
        tokens.clear_token();
        tokens.clear_token();
        assert_eq!(tokens.get_token(), None);
    }
}
