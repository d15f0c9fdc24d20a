// web_app/api/client.rs - reqwest implementation of ProductApi
//
// Every request goes to `{base_url}{path}`. Non-2xx replies are turned
// into `ApiError::Status` carrying the `message` of the JSON body, so the
// controller can show the backend's own wording to the user.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, ProductApi};
use crate::config::AdminConfig;
use crate::web_app::model::*;

/// HTTP client for the inventory backend
#[derive(Clone, Debug)]
pub struct HttpProductApi {
    base_url: String,
    client: Client,
}

impl HttpProductApi {
    /// Client with reqwest defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Reuse an existing reqwest client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    /// Client configured from `AdminConfig` (timeouts apply natively only)
    pub fn from_config(config: &AdminConfig) -> ApiResult<Self> {
        let builder = Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout());

        let client = builder.build()?;
        Ok(Self::with_client(config.api_base_url.clone(), client))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn product_url(&self, id: ProductId) -> String {
        self.url(&format!("/api/products/{}", id))
    }
}

/// Decode a 2xx body, or capture the backend's error message
async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|body| body.message);
        tracing::debug!("Backend replied {}: {:?}", status, message);
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    response.json::<T>().await.map_err(ApiError::from)
}

/// `success: false` on a 2xx reply is still a failure
fn require_success(response: MutationResponse) -> ApiResult<MutationResponse> {
    if response.success {
        Ok(response)
    } else {
        Err(ApiError::Rejected {
            message: response.message,
        })
    }
}

#[async_trait(?Send)]
impl ProductApi for HttpProductApi {
    async fn list_products(&self, query: &ListQuery) -> ApiResult<ListResponse> {
        tracing::debug!(
            "GET /api/products page={} per_page={} search='{}'",
            query.page,
            query.per_page,
            query.search
        );
        let response = self
            .client
            .get(self.url("/api/products"))
            .query(query)
            .send()
            .await?;
        decode(response).await
    }

    async fn list_all_products(&self) -> ApiResult<Vec<Product>> {
        tracing::debug!("GET /api/products (full inventory)");
        let response = self.client.get(self.url("/api/products")).send().await?;
        decode(response).await
    }

    async fn create_product(&self, payload: &ProductPayload) -> ApiResult<MutationResponse> {
        tracing::debug!("POST /api/products sku={}", payload.sku);
        let response = self
            .client
            .post(self.url("/api/products"))
            .json(payload)
            .send()
            .await?;
        decode(response).await.and_then(require_success)
    }

    async fn update_product(
        &self,
        id: ProductId,
        payload: &ProductPayload,
    ) -> ApiResult<MutationResponse> {
        tracing::debug!("PUT /api/products/{} sku={}", id, payload.sku);
        let response = self
            .client
            .put(self.product_url(id))
            .json(payload)
            .send()
            .await?;
        decode(response).await.and_then(require_success)
    }

    async fn delete_product(&self, id: ProductId) -> ApiResult<MutationResponse> {
        tracing::debug!("DELETE /api/products/{}", id);
        let response = self.client.delete(self.product_url(id)).send().await?;
        decode(response).await.and_then(require_success)
    }

    async fn upload_csv(&self, upload: &CsvUpload) -> ApiResult<CsvUploadResponse> {
        tracing::debug!(
            "POST /upload-csv file={} ({} bytes)",
            upload.file_name,
            upload.contents.len()
        );
        let part = Part::bytes(upload.contents.clone())
            .file_name(upload.file_name.clone())
            .mime_str("text/csv")?;
        let form = Form::new().part("file", part);
        let response = self
            .client
            .post(self.url("/upload-csv"))
            .multipart(form)
            .send()
            .await?;
        decode(response).await
    }

    async fn lookup_sku(&self, sku: &str) -> ApiResult<SkuLookup> {
        tracing::debug!("POST /search sku={}", sku);
        let response = self
            .client
            .post(self.url("/search"))
            .form(&[("sku", sku)])
            .send()
            .await?;
        decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let api = HttpProductApi::new("http://localhost:5000/");
        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(api.url("/api/products"), "http://localhost:5000/api/products");
    }

    #[test]
    fn test_product_url() {
        let api = HttpProductApi::new("http://inventory.local");
        assert_eq!(api.product_url(42), "http://inventory.local/api/products/42");
    }

    #[test]
    fn test_require_success() {
        let ok = MutationResponse {
            success: true,
            message: None,
        };
        assert!(require_success(ok).is_ok());

        let rejected = MutationResponse {
            success: false,
            message: Some("All fields are required".to_string()),
        };
        assert_eq!(
            require_success(rejected),
            Err(ApiError::Rejected {
                message: Some("All fields are required".to_string())
            })
        );
    }
}
