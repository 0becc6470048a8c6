//! Wire types for the Agronome backend API
//!
//! Timestamps come back as zone-less ISO-8601 strings, hence
//! `NaiveDateTime` rather than anything timezone-aware.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Credentials submitted to the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Bearer token issued on successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
}

/// A document stored in the knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub file_path: String,
    pub file_type: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Set once the document's embeddings have been indexed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_id: Option<String>,
}

/// One page of a paged listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub size: i64,
}

/// A knowledge-base category node; `children` is populated when the node
/// comes back as part of the category tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Category>>,
}

/// Payload for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

/// The full category tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTree {
    pub categories: Vec<Category>,
}

/// A semantic search hit from the knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub content: String,
    pub score: f64,
    pub metadata: JsonValue,
}

/// A question submitted to the advisory endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<JsonValue>,
}

impl QuestionRequest {
    /// A plain question with no extra context.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            context: None,
        }
    }
}

/// One entry of the stored conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `"user"` or `"assistant"`.
    #[serde(rename = "type")]
    pub role: String,
    pub content: String,
}

/// Message-only acknowledgement returned by delete and clear endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
}
