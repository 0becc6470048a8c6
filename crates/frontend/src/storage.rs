//! Browser-backed token storage

use agronome_client::TokenStore;
use web_sys::Storage;

use crate::config::AppConfig;

/// Get localStorage
fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// [`TokenStore`] backed by browser `localStorage` under
/// [`AppConfig::TOKEN_KEY`].
///
/// Storage failures (private browsing, storage disabled) are swallowed: a
/// token that cannot be written simply reads back as absent and the user
/// logs in again. An empty stored value also reads as absent.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        local_storage()
            .and_then(|storage| storage.get_item(AppConfig::TOKEN_KEY).ok().flatten())
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(AppConfig::TOKEN_KEY, token);
        }
    }

    fn remove(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(AppConfig::TOKEN_KEY);
        }
    }
}
