// web_app/api/mod.rs - Access to the inventory REST backend
//
// The admin controller only talks to the backend through the `ProductApi`
// trait. `HttpProductApi` is the real implementation over reqwest; tests
// plug in `fixtures::InMemoryBackend` instead.
//
// Futures are not required to be Send: the same client runs inside the
// browser, where reqwest futures are tied to the JS event loop.

pub mod client;

pub use client::HttpProductApi;

use async_trait::async_trait;
use thiserror::Error;

use crate::web_app::model::*;

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while talking to the backend
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx reply, with the `message` field of the body when present
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// The request never produced a reply
    #[error("network error: {0}")]
    Network(String),

    /// The reply did not have the expected shape
    #[error("invalid response: {0}")]
    Decode(String),

    /// 2xx reply that reports `success: false`
    #[error("request rejected by the server")]
    Rejected { message: Option<String> },
}

impl ApiError {
    /// Message provided by the backend, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } | ApiError::Rejected { message } => {
                message.as_deref().filter(|m| !m.trim().is_empty())
            }
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Operations the admin screens need from the backend
#[async_trait(?Send)]
pub trait ProductApi {
    /// `GET /api/products?page&per_page&search`
    async fn list_products(&self, query: &ListQuery) -> ApiResult<ListResponse>;

    /// `GET /api/products` without parameters, the whole inventory
    async fn list_all_products(&self) -> ApiResult<Vec<Product>>;

    /// `POST /api/products`
    async fn create_product(&self, payload: &ProductPayload) -> ApiResult<MutationResponse>;

    /// `PUT /api/products/{id}`
    async fn update_product(
        &self,
        id: ProductId,
        payload: &ProductPayload,
    ) -> ApiResult<MutationResponse>;

    /// `DELETE /api/products/{id}`
    async fn delete_product(&self, id: ProductId) -> ApiResult<MutationResponse>;

    /// `POST /upload-csv` with the file in multipart field `file`
    async fn upload_csv(&self, upload: &CsvUpload) -> ApiResult<CsvUploadResponse>;

    /// `POST /search` with form field `sku`
    async fn lookup_sku(&self, sku: &str) -> ApiResult<SkuLookup>;

    /// Whether a product with this SKU exists, compared case-insensitively.
    ///
    /// The backend has no existence endpoint, so this scans the full list.
    /// Implementations backed by a dedicated query should override it.
    async fn sku_exists(&self, sku: &str) -> ApiResult<bool> {
        let products = self.list_all_products().await?;
        Ok(products.iter().any(|product| product.has_sku(sku)))
    }
}
