//! Advisory Q&A API client methods
//!
//! The `ask` endpoint answers as a `text/event-stream`; [`ApiClient::ask`]
//! collects the whole answer, [`ApiClient::ask_stream`] hands back the raw
//! chunks for incremental rendering. Either way the response still runs
//! through the session pipeline first, so a token rotated on the answer's
//! headers lands in the store before the body is consumed.

use bytes::Bytes;
use futures::{Stream, TryStreamExt};
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{Acknowledgement, ChatMessage, QuestionRequest};

impl ApiClient {
    /// Conversation history for the authenticated user.
    pub async fn history(&self) -> Result<Vec<ChatMessage>, ClientError> {
        let request = self.request(Method::GET, "/api/v1/qa/history");
        self.execute(request).await
    }

    /// Ask a question and collect the full streamed answer.
    pub async fn ask(&self, question: QuestionRequest) -> Result<String, ClientError> {
        let request = self.request(Method::POST, "/api/v1/qa/ask").json(&question);
        let response = self.send(request).await?;
        Ok(response.text().await?)
    }

    /// Ask a question and stream the answer chunks as they arrive.
    pub async fn ask_stream(
        &self,
        question: QuestionRequest,
    ) -> Result<impl Stream<Item = Result<Bytes, ClientError>>, ClientError> {
        let request = self.request(Method::POST, "/api/v1/qa/ask").json(&question);
        let response = self.send(request).await?;
        Ok(response.bytes_stream().map_err(ClientError::from))
    }

    /// Drop the server-side conversation context.
    pub async fn clear_context(&self) -> Result<Acknowledgement, ClientError> {
        let request = self.request(Method::POST, "/api/v1/qa/clear-context");
        self.execute(request).await
    }
}
