//! Client configuration and initialization

use std::sync::{Arc, Mutex};

use agronome_client::{ApiClient, ClientError};
use once_cell::sync::Lazy;

use crate::config::AppConfig;
use crate::session::SessionRedirect;
use crate::storage::BrowserTokenStore;

/// Global client instance
static API_CLIENT: Lazy<Mutex<Option<ApiClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the shared API client, building it on first use.
///
/// The client reads its bearer token from [`BrowserTokenStore`] on every
/// request, so one shared instance serves both the anonymous login call
/// and everything after it.
pub fn api_client() -> Result<ApiClient, ClientError> {
    let mut client_lock = API_CLIENT.lock().expect("Failed to acquire API client lock");

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = ApiClient::builder()
        .base_url(AppConfig::API_BASE_URL)
        .token_store(Arc::new(BrowserTokenStore))
        .login_redirect(Arc::new(SessionRedirect))
        .build()?;
    *client_lock = Some(client.clone());
    Ok(client)
}
