// web_app/model/mod.rs - Shared data models for the admin client
//
// These structs mirror the JSON exchanged with the inventory backend and
// the page state the admin screens operate on. They are used by the HTTP
// client, the controller, the view models and both front-ends.

use serde::{Deserialize, Serialize};

/// Default number of rows per page
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 10;

/// Backend identifier of a product
pub type ProductId = i64;

/// Product as returned by the backend
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    /// Older backends omit the name column entirely
    #[serde(default)]
    pub name: String,
    pub display_case: String,
    pub column: u32,
    pub row: u32,
}

impl Product {
    /// Case-insensitive SKU comparison, the backend stores SKUs upper-cased
    pub fn has_sku(&self, sku: &str) -> bool {
        normalize_sku(&self.sku) == normalize_sku(sku)
    }
}

/// Body of create and update requests
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub sku: String,
    pub name: String,
    pub display_case: String,
    pub column: u32,
    pub row: u32,
}

/// Query string of the paginated list endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
}

/// One page of products
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    pub products: Vec<Product>,
    pub total: u64,
    pub pages: u32,
}

/// Reply to create, update and delete
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply to a CSV upload
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvUploadResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

/// Reply to a single-SKU lookup
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuLookup {
    pub found: bool,
    #[serde(default)]
    pub product: Option<Product>,
}

/// Error body the backend attaches to failed requests
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// A file picked for bulk import
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvUpload {
    pub file_name: String,
    pub contents: Vec<u8>,
}

/// Pagination and search state of the product list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub current_page: u32,
    pub items_per_page: u32,
    pub current_search: String,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl PageState {
    /// First page, no search, the given page size (at least one row)
    pub fn new(items_per_page: u32) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            current_search: String::new(),
        }
    }

    /// Query for the page this state points at
    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.current_page,
            per_page: self.items_per_page,
            search: self.current_search.clone(),
        }
    }

    pub fn is_searching(&self) -> bool {
        !self.current_search.is_empty()
    }
}

/// Trim and upper-case a SKU the way the backend stores it
pub fn normalize_sku(sku: &str) -> String {
    sku.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_product() -> Product {
        Product {
            id: 7,
            sku: "ABC-123".to_string(),
            name: "Ring".to_string(),
            display_case: "II".to_string(),
            column: 1,
            row: 4,
        }
    }

    #[test]
    fn test_page_state_default() {
        let state = PageState::default();
        assert_eq!(state.current_page, 1);
        assert_eq!(state.items_per_page, DEFAULT_ITEMS_PER_PAGE);
        assert!(state.current_search.is_empty());
        assert!(!state.is_searching());
    }

    #[test]
    fn test_page_state_never_zero_per_page() {
        let state = PageState::new(0);
        assert_eq!(state.items_per_page, 1);
    }

    #[test]
    fn test_page_state_query() {
        let state = PageState {
            current_page: 3,
            items_per_page: 25,
            current_search: "ring".to_string(),
        };
        let query = state.query();
        assert_eq!(query.page, 3);
        assert_eq!(query.per_page, 25);
        assert_eq!(query.search, "ring");
    }

    #[test]
    fn test_sku_matching_ignores_case_and_padding() {
        let product = create_test_product();
        assert!(product.has_sku("abc-123"));
        assert!(product.has_sku("  ABC-123 "));
        assert!(!product.has_sku("ABC-124"));
    }

    #[test]
    fn test_product_without_name_deserializes() {
        let json = r#"{"id": 1, "sku": "X1", "display_case": "I", "column": 2, "row": 7}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.name, "");
        assert_eq!(product.column, 2);
        assert_eq!(product.row, 7);
    }

    #[test]
    fn test_csv_response_without_errors() {
        let response: CsvUploadResponse =
            serde_json::from_str(r#"{"message": "Processed 3 products successfully, 0 errors"}"#)
                .unwrap();
        assert!(response.errors.is_none());
        assert!(response.message.starts_with("Processed 3"));
    }

    #[test]
    fn test_sku_lookup_not_found() {
        let lookup: SkuLookup = serde_json::from_str(r#"{"found": false}"#).unwrap();
        assert!(!lookup.found);
        assert!(lookup.product.is_none());
    }
}
