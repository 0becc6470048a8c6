//! Authentication API client methods

use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{LoginRequest, TokenResponse};

impl ApiClient {
    /// Log in with email and password, returning the issued bearer token.
    ///
    /// The token is returned, not stored: writing it to the credential
    /// store is the caller's move (the login view does so on success), at
    /// which point every subsequent request picks it up.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ClientError> {
        let request = self
            .request(Method::POST, "/api/v1/auth/login")
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            });
        self.execute(request).await
    }
}
