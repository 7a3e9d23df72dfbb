//! OpenDesk Session Store
//!
//! Holds the signed-in identity and authenticated flag for the admin
//! dashboard, and persists that slice across restarts.
//!
//! Authentication here is a demo placeholder: a fixed identity directory
//! and a fixed literal password. It is not a security boundary; a real
//! deployment replaces the credential check with a verification service
//! behind the same login surface.

pub mod session;

use desk_model::{EntityId, User, UserRole};
use parking_lot::RwLock;
use std::path::Path;

pub use session::{SessionError, SessionFile, SessionSlice};

/// The demo password accepted for every directory identity.
const DEMO_PASSWORD: &str = "password";

/// Session state container.
///
/// Two states: anonymous and authenticated. `login` moves anonymous to
/// authenticated on a credential match; `logout` moves back
/// unconditionally. The slice is written through to disk on every
/// transition.
pub struct AuthStore {
    directory: Vec<User>,
    file: SessionFile,
    state: RwLock<SessionSlice>,
}

impl AuthStore {
    /// Store backed by the demo identity directory, restoring any
    /// previously persisted session from `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Self {
        Self::with_directory(demo_directory(), dir)
    }

    /// Store authenticating against the given identity directory.
    pub fn with_directory(directory: Vec<User>, dir: impl AsRef<Path>) -> Self {
        let file = SessionFile::new(dir);
        let state = RwLock::new(file.load().unwrap_or_default());
        Self {
            directory,
            file,
            state,
        }
    }

    /// Attempt to sign in.
    ///
    /// Exact email match against the directory plus the demo password.
    /// On success the identity and flag are set and persisted; on
    /// failure nothing changes. The result deliberately does not
    /// distinguish unknown users from wrong passwords.
    ///
    /// Async for the benefit of callers doing surrounding async work;
    /// the credential check itself never suspends.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let user = self.directory.iter().find(|u| u.email == email);
        match user {
            Some(user) if password == DEMO_PASSWORD => {
                let slice = SessionSlice {
                    user: Some(user.clone()),
                    is_authenticated: true,
                };
                *self.state.write() = slice.clone();
                self.persist(&slice);
                tracing::debug!("session opened for {email}");
                true
            }
            _ => false,
        }
    }

    /// Clear identity and flag unconditionally.
    pub fn logout(&self) {
        let slice = SessionSlice::default();
        *self.state.write() = slice.clone();
        self.persist(&slice);
    }

    /// Current authenticated flag. No expiry or token validation.
    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated
    }

    /// Currently signed-in identity, if any.
    pub fn current_user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    fn persist(&self, slice: &SessionSlice) {
        // A failed write leaves the in-memory session intact.
        if let Err(e) = self.file.save(slice) {
            tracing::warn!("failed to persist session slice: {e}");
        }
    }
}

/// The two identities the demo ships with.
fn demo_directory() -> Vec<User> {
    let now = chrono::Utc::now();
    vec![
        User {
            id: EntityId::new(),
            name: "John Admin".to_string(),
            email: "admin@company.com".to_string(),
            role: UserRole::Admin,
            department_id: None,
            is_active: true,
            created_at: now,
        },
        User {
            id: EntityId::new(),
            name: "Jane SubAdmin".to_string(),
            email: "subadmin@company.com".to_string(),
            role: UserRole::SubAdmin,
            department_id: None,
            is_active: true,
            created_at: now,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_storage_dir() -> PathBuf {
        std::env::temp_dir().join(format!("desk-auth-{}", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_login_with_demo_admin() {
        let dir = temp_storage_dir();
        let store = AuthStore::open(&dir);

        assert!(store.login("admin@company.com", "password").await);
        assert!(store.is_authenticated());
        let user = store.current_user().unwrap();
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.email, "admin@company.com");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_wrong_password_leaves_state_unchanged() {
        let dir = temp_storage_dir();
        let store = AuthStore::open(&dir);

        assert!(!store.login("admin@company.com", "wrong").await);
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_unknown_email_fails() {
        let dir = temp_storage_dir();
        let store = AuthStore::open(&dir);

        assert!(!store.login("nobody@company.com", "password").await);
        assert!(!store.is_authenticated());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let dir = temp_storage_dir();
        let store = AuthStore::open(&dir);

        assert!(store.login("subadmin@company.com", "password").await);
        store.logout();
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_session_survives_reopen() {
        let dir = temp_storage_dir();
        let store = AuthStore::open(&dir);
        assert!(store.login("admin@company.com", "password").await);
        let before = store.current_user().unwrap();
        drop(store);

        let reopened = AuthStore::open(&dir);
        assert!(reopened.is_authenticated());
        assert_eq!(reopened.current_user().unwrap(), before);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_logout_persists_across_reopen() {
        let dir = temp_storage_dir();
        let store = AuthStore::open(&dir);
        assert!(store.login("admin@company.com", "password").await);
        store.logout();
        drop(store);

        let reopened = AuthStore::open(&dir);
        assert!(!reopened.is_authenticated());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
