//! Agronome API client
//!
//! A thin wrapper over a shared `reqwest::Client` that resolves the bearer
//! token from the injected [`TokenStore`] on every request and routes every
//! response through the session pipeline in [`crate::session`]. The typed
//! endpoint methods live in [`crate::api`].

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, ClientBuilder, Method, header};

use crate::error::ClientError;
use crate::session::{self, LoginRedirect};
use crate::token::{MemoryTokenStore, TokenStore};

/// Client for the Agronome advisory backend.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    login_redirect: Option<Arc<dyn LoginRedirect>>,
}

impl ApiClient {
    /// Create a new client with default configuration.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The credential store this client reads from and writes to.
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Create a request builder for `path`, relative to the base URL.
    ///
    /// The bearer token is resolved from the store here, at call time, so
    /// a rotation applied by an earlier response is picked up by the next
    /// request without rebuilding the client. No token, no header.
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(token) = self.tokens.get() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        request
    }

    /// Send a request through the session pipeline and return the raw
    /// response.
    ///
    /// Every response is classified first: a rotated token is stored
    /// before the response is handed back, and a 401 clears the store and
    /// fires the login redirect exactly once before the error surfaces to
    /// the caller. Transport failures propagate unmodified.
    pub async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if let Some(event) = session::classify(status, response.headers()) {
            session::apply(&event, self.tokens.as_ref(), self.login_redirect.as_deref());
        }

        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }

    /// Execute a request and decode the JSON body.
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }
}

/// Builder for [`ApiClient`].
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    tokens: Option<Arc<dyn TokenStore>>,
    login_redirect: Option<Arc<dyn LoginRedirect>>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    /// Set the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the credential store. Defaults to a fresh [`MemoryTokenStore`].
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.tokens = Some(store);
        self
    }

    /// Set the hook fired when the server invalidates the session.
    /// Without one, expiry still clears the store but nothing navigates.
    pub fn login_redirect(mut self, redirect: Arc<dyn LoginRedirect>) -> Self {
        self.login_redirect = Some(redirect);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        if let Some(user_agent) = self.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        } else {
            client_builder = client_builder.user_agent("agronome-client/0.1.0");
        }

        let tokens = self
            .tokens
            .unwrap_or_else(|| Arc::new(MemoryTokenStore::new()));

        Ok(ApiClient {
            client: client_builder.build()?,
            base_url,
            tokens,
            login_redirect: self.login_redirect,
        })
    }
}
