//! Persisted session slice
//!
//! The only state that survives a restart: the signed-in identity and the
//! authenticated flag, written synchronously on every login and logout
//! and read once at startup.

use desk_model::User;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name under the storage directory.
const STORAGE_KEY: &str = "auth-storage.json";

/// Snapshot of the authentication state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSlice {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

/// Failure while persisting the session slice.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// File-backed storage for the session slice.
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    /// Storage rooted at the given directory; the directory is created
    /// lazily on first save.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(STORAGE_KEY),
        }
    }

    /// Read the persisted slice. A missing or unreadable file yields
    /// `None`; the caller starts anonymous.
    pub fn load(&self) -> Option<SessionSlice> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(slice) => Some(slice),
            Err(e) => {
                tracing::warn!("discarding unreadable session file: {e}");
                None
            }
        }
    }

    /// Write the slice synchronously.
    pub fn save(&self, slice: &SessionSlice) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(slice)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use desk_model::{EntityId, UserRole};

    fn temp_storage_dir() -> PathBuf {
        std::env::temp_dir().join(format!("desk-auth-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_round_trip_restores_identity_and_flag() {
        let dir = temp_storage_dir();
        let file = SessionFile::new(&dir);

        let slice = SessionSlice {
            user: Some(User {
                id: EntityId::new(),
                name: "John Admin".into(),
                email: "admin@company.com".into(),
                role: UserRole::Admin,
                department_id: None,
                is_active: true,
                created_at: Utc::now(),
            }),
            is_authenticated: true,
        };

        file.save(&slice).unwrap();
        let restored = SessionFile::new(&dir).load().unwrap();
        assert_eq!(restored, slice);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_loads_as_none() {
        let file = SessionFile::new(temp_storage_dir());
        assert!(file.load().is_none());
    }

    #[test]
    fn test_corrupt_file_loads_as_none() {
        let dir = temp_storage_dir();
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(STORAGE_KEY), "{not json").unwrap();

        assert!(SessionFile::new(&dir).load().is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
