//! On-disk persistence for session state.
//!
//! The original portal kept four independent browser-storage entries
//! (token, token expiry, cached user, session expiry), which left a window
//! where a crash between writes could strand a token without session data.
//! Here all four fields live in one JSON record written atomically
//! (temp file + rename), while the token and session halves stay
//! independently clearable.
//!
//! Storage trouble never propagates as an error: unreadable or corrupt
//! files degrade to the empty record, and failed writes are logged and
//! dropped. The worst outcome of a broken disk is a logged-out session.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// File name of the session record inside the state directory.
const SESSION_FILE: &str = "session.json";

/// The persisted session record.
///
/// `user` is kept as raw JSON rather than a typed `User` so that restore
/// can treat a shape mismatch as corrupt data instead of failing the
/// initial file read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct SessionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_expires_at: Option<DateTime<Utc>>,
}

impl SessionRecord {
    /// Drop the token half of the record.
    pub(crate) fn clear_token(&mut self) {
        self.token = None;
        self.token_expires_at = None;
    }

    /// Drop the session half of the record.
    pub(crate) fn clear_session(&mut self) {
        self.user = None;
        self.session_expires_at = None;
    }
}

/// Handle to the persisted session record.
///
/// Cheap to clone; all clones share one in-memory copy of the record and
/// the same backing file.
#[derive(Debug, Clone)]
pub struct SessionStorage {
    inner: Arc<SessionStorageInner>,
}

#[derive(Debug)]
struct SessionStorageInner {
    path: PathBuf,
    record: Mutex<SessionRecord>,
}

impl SessionStorage {
    /// Open (or lazily create) the session record in `state_dir`.
    ///
    /// A missing or unreadable file yields the empty record; this is a
    /// fresh logged-out state, not an error.
    #[must_use]
    pub fn open(state_dir: &std::path::Path) -> Self {
        let path = state_dir.join(SESSION_FILE);
        let record = Self::load(&path);
        Self {
            inner: Arc::new(SessionStorageInner {
                path,
                record: Mutex::new(record),
            }),
        }
    }

    fn load(path: &std::path::Path) -> SessionRecord {
        match fs::read(path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "session record corrupt, starting empty");
                SessionRecord::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => SessionRecord::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "session record unreadable, starting empty");
                SessionRecord::default()
            }
        }
    }

    /// Read the current record.
    pub(crate) fn read<T>(&self, f: impl FnOnce(&SessionRecord) -> T) -> T {
        let record = self
            .inner
            .record
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&record)
    }

    /// Mutate the record and flush it to disk atomically.
    pub(crate) fn update(&self, f: impl FnOnce(&mut SessionRecord)) {
        let mut record = self
            .inner
            .record
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut record);
        self.flush(&record);
    }

    /// Write the record atomically: temp file in the same directory, then
    /// rename over the target.
    fn flush(&self, record: &SessionRecord) {
        let path = &self.inner.path;
        if let Some(dir) = path.parent()
            && let Err(e) = fs::create_dir_all(dir)
        {
            warn!(dir = %dir.display(), error = %e, "cannot create state directory");
            return;
        }

        let bytes = match serde_json::to_vec_pretty(record) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "cannot serialize session record");
                return;
            }
        };

        let temp_path = path.with_extension("json.tmp");
        if let Err(e) = fs::write(&temp_path, &bytes) {
            warn!(path = %temp_path.display(), error = %e, "cannot write session record");
            return;
        }
        if let Err(e) = fs::rename(&temp_path, path) {
            warn!(path = %path.display(), error = %e, "cannot replace session record");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_empty_record() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = SessionStorage::open(dir.path());
        assert_eq!(storage.read(Clone::clone), SessionRecord::default());
    }

    #[test]
    fn update_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");

        let storage = SessionStorage::open(dir.path());
        storage.update(|r| {
            r.token = Some("tok-1".to_owned());
            r.token_expires_at = Some(Utc::now() + chrono::TimeDelta::hours(1));
        });

        let reopened = SessionStorage::open(dir.path());
        assert_eq!(reopened.read(|r| r.token.clone()), Some("tok-1".to_owned()));
        // No stray temp file left behind.
        assert!(!dir.path().join("session.json.tmp").exists());
    }

    #[test]
    fn corrupt_file_degrades_to_empty_record() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(SESSION_FILE), b"{ not json").expect("write garbage");

        let storage = SessionStorage::open(dir.path());
        assert_eq!(storage.read(Clone::clone), SessionRecord::default());
    }

    #[test]
    fn clearing_one_half_keeps_the_other() {
        let mut record = SessionRecord {
            token: Some("tok".to_owned()),
            token_expires_at: Some(Utc::now()),
            user: Some(serde_json::json!({"id": 1})),
            session_expires_at: Some(Utc::now()),
        };

        record.clear_token();
        assert!(record.token.is_none());
        assert!(record.user.is_some());

        record.clear_session();
        assert_eq!(record, SessionRecord::default());
    }
}
