//! Knowledge-base API client methods

use reqwest::{Method, multipart};

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::{
    Acknowledgement, Category, CategoryCreate, CategoryTree, Document, Page, SearchHit,
};

impl ApiClient {
    /// List documents, optionally filtered by category, one page at a time.
    pub async fn documents(
        &self,
        category: Option<&str>,
        page: i64,
        size: i64,
    ) -> Result<Page<Document>, ClientError> {
        let mut request = self
            .request(Method::GET, "/api/v1/knowledge/documents")
            .query(&[("page", page), ("size", size)]);

        if let Some(category) = category {
            request = request.query(&[("category", category)]);
        }

        self.execute(request).await
    }

    /// Semantic search over the knowledge base.
    pub async fn search_documents(
        &self,
        query: &str,
        top_k: u32,
    ) -> Result<Vec<SearchHit>, ClientError> {
        let request = self
            .request(Method::GET, "/api/v1/knowledge/documents/search")
            .query(&[("query", query)])
            .query(&[("top_k", top_k)]);
        self.execute(request).await
    }

    /// Fetch the category tree.
    pub async fn categories(&self) -> Result<CategoryTree, ClientError> {
        let request = self.request(Method::GET, "/api/v1/knowledge/categories");
        self.execute(request).await
    }

    /// Create a category.
    pub async fn create_category(&self, category: CategoryCreate) -> Result<Category, ClientError> {
        let request = self
            .request(Method::POST, "/api/v1/knowledge/categories")
            .json(&category);
        self.execute(request).await
    }

    /// Upload a document into the knowledge base.
    ///
    /// The backend takes multipart form data: the file contents plus
    /// `title` and `category` fields.
    pub async fn upload_document(
        &self,
        title: &str,
        category: &str,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<Document, ClientError> {
        let file = multipart::Part::bytes(contents).file_name(file_name.to_string());
        let form = multipart::Form::new()
            .part("file", file)
            .text("title", title.to_string())
            .text("category", category.to_string());

        let request = self
            .request(Method::POST, "/api/v1/knowledge/documents/upload")
            .multipart(form);
        self.execute(request).await
    }

    /// Delete a document.
    pub async fn delete_document(&self, doc_id: i64) -> Result<Acknowledgement, ClientError> {
        let request =
            self.request(Method::DELETE, &format!("/api/v1/knowledge/documents/{doc_id}"));
        self.execute(request).await
    }
}
