//! Integration tests for the Agronome HTTP client

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use agronome_client::types::{CategoryCreate, QuestionRequest};
use agronome_client::{ApiClient, ClientError, LoginRedirect, MemoryTokenStore, TokenStore};
use futures::{StreamExt, pin_mut};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

/// Matches only requests that carry no Authorization header at all.
struct NoAuthorizationHeader;

impl Match for NoAuthorizationHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

#[derive(Default)]
struct RecordingRedirect {
    calls: AtomicUsize,
}

impl RecordingRedirect {
    fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LoginRedirect for RecordingRedirect {
    fn redirect_to_login(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn test_client_builder() {
    let client = ApiClient::builder()
        .base_url("http://localhost:8000/")
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.base_url(), "http://localhost:8000");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = ApiClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_bearer_token_attached_when_stored() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/qa/history"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    store.set("abc");

    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .token_store(store)
        .build()
        .unwrap();

    let history = client.history().await.unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn test_no_bearer_header_without_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/qa/history"))
        .and(NoAuthorizationHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();

    let result = client.history().await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_empty_stored_token_sends_no_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/qa/history"))
        .and(NoAuthorizationHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    store.set("");

    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .token_store(store)
        .build()
        .unwrap();

    assert!(client.history().await.is_ok());
}

#[tokio::test]
async fn test_rotated_token_is_stored_and_reused() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/qa/history"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-new-token", "xyz")
                .set_body_json(json!([])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/knowledge/categories"))
        .and(header("authorization", "Bearer xyz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "categories": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    store.set("abc");

    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .token_store(store.clone())
        .build()
        .unwrap();

    client.history().await.unwrap();
    assert_eq!(store.get().as_deref(), Some("xyz"));

    // The very next request authenticates with the rotated token.
    let tree = client.categories().await.unwrap();
    assert!(tree.categories.is_empty());
}

#[tokio::test]
async fn test_unauthorized_clears_token_and_redirects_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/qa/history"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Could not validate credentials"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    store.set("stale");
    let redirect = Arc::new(RecordingRedirect::default());

    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .token_store(store.clone())
        .login_redirect(redirect.clone())
        .build()
        .unwrap();

    let result = client.history().await;

    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));
    assert_eq!(store.get(), None);
    assert_eq!(redirect.count(), 1);
}

#[tokio::test]
async fn test_unauthorized_without_redirect_hook_still_clears_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/qa/history"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    store.set("stale");

    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .token_store(store.clone())
        .build()
        .unwrap();

    let result = client.history().await;
    assert!(result.unwrap_err().is_auth_failure());
    assert_eq!(store.get(), None);
}

#[tokio::test]
async fn test_error_status_mapping() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/knowledge/documents"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Document not found"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/knowledge/categories"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();

    let not_found = client.documents(None, 1, 10).await;
    assert!(matches!(not_found, Err(ClientError::NotFound(_))));

    let server_error = client.categories().await;
    assert!(matches!(
        server_error,
        Err(ClientError::ServerError { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_login_posts_credentials_and_returns_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({
            "email": "farmer@example.com",
            "password": "admin123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "jwt-token",
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();

    let token = client.login("farmer@example.com", "admin123").await.unwrap();
    assert_eq!(token.access_token, "jwt-token");
    assert_eq!(token.token_type, "bearer");
}

#[tokio::test]
async fn test_documents_paging_and_filters() {
    let mock_server = MockServer::start().await;

    let body = json!({
        "items": [{
            "id": 1,
            "title": "Winter wheat sowing windows",
            "category": "agronomy",
            "file_path": "./data/uploads/wheat.pdf",
            "file_type": "pdf",
            "created_at": "2024-03-20T10:00:00",
            "updated_at": "2024-03-21T08:30:00",
            "vector_id": "vec-1"
        }],
        "total": 1,
        "page": 1,
        "size": 10
    });

    Mock::given(method("GET"))
        .and(path("/api/v1/knowledge/documents"))
        .and(query_param("page", "1"))
        .and(query_param("size", "10"))
        .and(query_param("category", "agronomy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();

    let page = client.documents(Some("agronomy"), 1, 10).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].title, "Winter wheat sowing windows");
    assert_eq!(page.items[0].vector_id.as_deref(), Some("vec-1"));
}

#[tokio::test]
async fn test_search_documents() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/knowledge/documents/search"))
        .and(query_param("query", "rice blast"))
        .and(query_param("top_k", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "content": "Apply tricyclazole at tillering.",
            "score": 0.87,
            "metadata": { "doc_id": 4 }
        }])))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();

    let hits = client.search_documents("rice blast", 3).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert!(hits[0].score > 0.8);
}

#[tokio::test]
async fn test_delete_document() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/knowledge/documents/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Document deleted successfully" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();

    let ack = client.delete_document(7).await.unwrap();
    assert_eq!(ack.message, "Document deleted successfully");
}

#[tokio::test]
async fn test_upload_document() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/knowledge/documents/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2,
            "title": "Soil acidity handbook",
            "category": "soils",
            "file_path": "./data/uploads/soil.pdf",
            "file_type": "pdf",
            "created_at": "2024-04-01T09:00:00",
            "updated_at": "2024-04-01T09:00:00",
            "vector_id": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();

    let doc = client
        .upload_document("Soil acidity handbook", "soils", "soil.pdf", b"%PDF-1.4".to_vec())
        .await
        .unwrap();
    assert_eq!(doc.id, 2);
    assert_eq!(doc.category, "soils");
}

#[tokio::test]
async fn test_create_category() {
    let mock_server = MockServer::start().await;

    // An unset parent is omitted from the payload, not sent as null.
    Mock::given(method("POST"))
        .and(path("/api/v1/knowledge/categories"))
        .and(body_json(json!({
            "name": "Soil health",
            "description": "Soil biology and fertility"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "name": "Soil health",
            "description": "Soil biology and fertility",
            "parent_id": null,
            "children": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();

    let created = client
        .create_category(CategoryCreate {
            name: "Soil health".into(),
            description: Some("Soil biology and fertility".into()),
            parent_id: None,
        })
        .await
        .unwrap();

    assert_eq!(created.id, 7);
    assert_eq!(created.name, "Soil health");
    assert_eq!(created.parent_id, None);
}

#[tokio::test]
async fn test_ask_collects_streamed_answer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/qa/ask"))
        .and(body_json(json!({ "question": "When should I sow winter wheat?" })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .insert_header("x-new-token", "rotated-mid-answer")
                .set_body_string("Sow from late September to mid October."),
        )
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    store.set("abc");

    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .token_store(store.clone())
        .build()
        .unwrap();

    let answer = client
        .ask(QuestionRequest::new("When should I sow winter wheat?"))
        .await
        .unwrap();

    assert_eq!(answer, "Sow from late September to mid October.");
    // Rotation came on the answer's headers and is already effective.
    assert_eq!(store.get().as_deref(), Some("rotated-mid-answer"));
}

#[tokio::test]
async fn test_ask_stream_yields_chunks() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/qa/ask"))
        .and(body_json(json!({ "question": "How should I split nitrogen on wheat?" })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .insert_header("x-new-token", "rotated-before-body")
                .set_body_string("Split the dressing between tillering and booting."),
        )
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    store.set("abc");

    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .token_store(store.clone())
        .build()
        .unwrap();

    let stream = client
        .ask_stream(QuestionRequest::new("How should I split nitrogen on wheat?"))
        .await
        .unwrap();

    // The rotation is already in the store while the body is still unread.
    assert_eq!(store.get().as_deref(), Some("rotated-before-body"));

    pin_mut!(stream);
    let mut answer = Vec::new();
    while let Some(chunk) = stream.next().await {
        answer.extend_from_slice(&chunk.unwrap());
    }
    assert_eq!(
        String::from_utf8(answer).unwrap(),
        "Split the dressing between tillering and booting."
    );
}

#[tokio::test]
async fn test_clear_context() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/qa/clear-context"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Context cleared" })),
        )
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();

    let ack = client.clear_context().await.unwrap();
    assert_eq!(ack.message, "Context cleared");
}
