//! Session storage boundary

use std::sync::RwLock;

use crate::types::UserProfile;

/// Key-value boundary holding the current session.
///
/// Implementations are plain storage: no parsing, no network calls. The one
/// invariant every implementation must uphold is that [`clear`](Self::clear)
/// removes the token and the cached profile together, so a revoked session
/// never leaves an orphaned profile behind.
///
/// Access is synchronous; host environments with synchronous storage (browser
/// storage, in-memory) map onto this directly.
pub trait SessionStore: Send + Sync {
    /// Current access token, if any.
    fn token(&self) -> Option<String>;

    /// Replace the access token, leaving any cached profile in place.
    ///
    /// This is the refresh path: the credential rotates, the identity does
    /// not.
    fn set_token(&self, token: &str);

    /// Cached profile of the signed-in user, if any.
    fn profile(&self) -> Option<UserProfile>;

    /// Cache the signed-in user's profile.
    fn set_profile(&self, profile: &UserProfile);

    /// Drop the token and the cached profile in one operation.
    fn clear(&self);
}

/// In-memory [`SessionStore`].
///
/// The default backing store for headless use and the test double for
/// everything else. Host adapters (browser storage, keychains) implement the
/// same trait.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RwLock<Session>,
}

#[derive(Debug, Default)]
struct Session {
    token: Option<String>,
    profile: Option<UserProfile>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.inner.read().expect("session lock poisoned").token.clone()
    }

    fn set_token(&self, token: &str) {
        self.inner.write().expect("session lock poisoned").token = Some(token.to_string());
    }

    fn profile(&self) -> Option<UserProfile> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .profile
            .clone()
    }

    fn set_profile(&self, profile: &UserProfile) {
        self.inner.write().expect("session lock poisoned").profile = Some(profile.clone());
    }

    fn clear(&self) {
        let mut session = self.inner.write().expect("session lock poisoned");
        session.token = None;
        session.profile = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    fn profile() -> UserProfile {
        UserProfile {
            user_id: "user-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            contact: "5550100000".to_string(),
            role: Role::Reader,
            library_id: Some("lib-1".to_string()),
        }
    }

    #[test]
    fn token_round_trip() {
        let store = MemorySessionStore::new();
        assert_eq!(store.token(), None);
        store.set_token("abc.def.ghi");
        assert_eq!(store.token().as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn clear_drops_token_and_profile_together() {
        let store = MemorySessionStore::new();
        store.set_token("abc.def.ghi");
        store.set_profile(&profile());
        store.clear();
        assert_eq!(store.token(), None);
        assert_eq!(store.profile(), None);
    }

    #[test]
    fn set_token_preserves_profile() {
        let store = MemorySessionStore::new();
        store.set_profile(&profile());
        store.set_token("first.token.sig");
        store.set_token("second.token.sig");
        assert_eq!(store.token().as_deref(), Some("second.token.sig"));
        assert_eq!(store.profile(), Some(profile()));
    }
}
