//! Credential storage seam
//!
//! The session credential is a single opaque bearer token read from three
//! independent call sites: request building, response handling, and the
//! navigation guard. All of them go through [`TokenStore`] so the token's
//! home (browser `localStorage`, process memory) is an injection decision
//! and tests never need a real browser.

use std::sync::Mutex;

/// Storage for the session bearer token.
///
/// `get` never yields an empty token: an empty or missing entry reads as
/// `None`, keeping "token present" checks consistent between the request
/// path and the navigation guard. Concurrent writers race benignly; the
/// store holds a single scalar and last-write-wins.
pub trait TokenStore: Send + Sync {
    /// Read the current token, if one is stored.
    fn get(&self) -> Option<String>;

    /// Store `token`, replacing any previous value.
    fn set(&self, token: &str);

    /// Delete the stored token.
    fn remove(&self);
}

/// In-memory token store, used outside the browser and as a test double.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token
            .lock()
            .expect("token store lock poisoned")
            .clone()
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) {
        let mut slot = self.token.lock().expect("token store lock poisoned");
        *slot = Some(token.to_string());
    }

    fn remove(&self) {
        let mut slot = self.token.lock().expect("token store lock poisoned");
        *slot = None;
    }
}
