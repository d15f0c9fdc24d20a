// tests/http_client_tests.rs - HttpProductApi against a mock backend
//
// Verifies the exact requests the reqwest client sends (method, path,
// query, JSON body, multipart field, form field) and how replies and
// failures are mapped onto ApiError.

use inventory_admin::web_app::admin::{AdminState, ProductAdmin, ProductForm};
use inventory_admin::web_app::api::{ApiError, HttpProductApi, ProductApi};
use inventory_admin::web_app::model::*;
use serde_json::json;
use wiremock::matchers::{body_json, body_string, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn payload() -> ProductPayload {
    ProductPayload {
        sku: "ABC-1".to_string(),
        name: "Opal ring".to_string(),
        display_case: "II".to_string(),
        column: 1,
        row: 3,
    }
}

fn product_json(id: i64, sku: &str) -> serde_json::Value {
    json!({
        "id": id,
        "sku": sku,
        "name": "Opal ring",
        "display_case": "II",
        "column": 1,
        "row": 3
    })
}

// ========== List ==========

#[tokio::test]
async fn test_list_products_sends_paging_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "10"))
        .and(query_param("search", "opal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [product_json(11, "ABC-1")],
            "total": 11,
            "pages": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpProductApi::new(server.uri());
    let reply = api
        .list_products(&ListQuery {
            page: 2,
            per_page: 10,
            search: "opal".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(reply.total, 11);
    assert_eq!(reply.pages, 2);
    assert_eq!(reply.products[0].sku, "ABC-1");
}

#[tokio::test]
async fn test_missing_name_defaults_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "sku": "OLD-1", "display_case": "I", "column": 2, "row": 7 }
        ])))
        .mount(&server)
        .await;

    let api = HttpProductApi::new(server.uri());
    let products = api.list_all_products().await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "");
}

#[tokio::test]
async fn test_sku_exists_scans_full_list_case_insensitively() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([product_json(1, "ABC-1")])),
        )
        .expect(2)
        .mount(&server)
        .await;

    let api = HttpProductApi::new(server.uri());
    assert!(api.sku_exists("abc-1").await.unwrap());
    assert!(!api.sku_exists("ABC-2").await.unwrap());
}

// ========== Mutations ==========

#[tokio::test]
async fn test_create_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/products"))
        .and(body_json(json!({
            "sku": "ABC-1",
            "name": "Opal ring",
            "display_case": "II",
            "column": 1,
            "row": 3
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpProductApi::new(server.uri());
    let reply = api.create_product(&payload()).await.unwrap();
    assert!(reply.success);
}

#[tokio::test]
async fn test_update_puts_to_product_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/products/7"))
        .and(body_json(&payload()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpProductApi::new(format!("{}/", server.uri()));
    api.update_product(7, &payload()).await.unwrap();
}

#[tokio::test]
async fn test_delete_uses_product_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/products/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpProductApi::new(server.uri());
    api.delete_product(7).await.unwrap();
}

#[tokio::test]
async fn test_success_false_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/products/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Product is locked"
        })))
        .mount(&server)
        .await;

    let api = HttpProductApi::new(server.uri());
    let err = api.delete_product(7).await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Rejected {
            message: Some("Product is locked".to_string())
        }
    );
    assert_eq!(err.server_message(), Some("Product is locked"));
}

// ========== Errors ==========

#[tokio::test]
async fn test_error_body_message_is_captured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "Product with this SKU already exists"
        })))
        .mount(&server)
        .await;

    let api = HttpProductApi::new(server.uri());
    let err = api.create_product(&payload()).await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Status {
            status: 400,
            message: Some("Product with this SKU already exists".to_string()),
        }
    );
}

#[tokio::test]
async fn test_non_json_error_body_has_no_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<h1>Internal Server Error</h1>"))
        .mount(&server)
        .await;

    let api = HttpProductApi::new(server.uri());
    let err = api.list_all_products().await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Status {
            status: 500,
            message: None
        }
    );
    assert_eq!(err.server_message(), None);
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "rows": [] })))
        .mount(&server)
        .await;

    let api = HttpProductApi::new(server.uri());
    let err = api
        .list_products(&ListQuery {
            page: 1,
            per_page: 10,
            search: String::new(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Port 9 (discard) is not expected to accept HTTP connections
    let api = HttpProductApi::new("http://127.0.0.1:9");
    let err = api.list_all_products().await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)), "got {:?}", err);
}

// ========== CSV upload and lookup ==========

#[tokio::test]
async fn test_upload_sends_multipart_file_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-csv"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"stock.csv\""))
        .and(body_string_contains("ABC-1,II,1,3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Processed 1 products successfully, 1 errors",
            "errors": ["Row has incorrect number of columns: ['x']"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpProductApi::new(server.uri());
    let reply = api
        .upload_csv(&CsvUpload {
            file_name: "stock.csv".to_string(),
            contents: b"sku,display_case,column,row\nABC-1,II,1,3\nx\n".to_vec(),
        })
        .await
        .unwrap();

    assert_eq!(reply.errors.map(|errors| errors.len()), Some(1));
}

#[tokio::test]
async fn test_upload_reply_without_errors_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-csv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Processed 3 products successfully, 0 errors"
        })))
        .mount(&server)
        .await;

    let api = HttpProductApi::new(server.uri());
    let reply = api
        .upload_csv(&CsvUpload {
            file_name: "stock.csv".to_string(),
            contents: Vec::new(),
        })
        .await
        .unwrap();

    assert_eq!(reply.errors, None);
}

#[tokio::test]
async fn test_lookup_posts_form_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("sku=ABC-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "found": true,
            "product": product_json(1, "ABC-1")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpProductApi::new(server.uri());
    let lookup = api.lookup_sku("ABC-1").await.unwrap();

    assert!(lookup.found);
    assert_eq!(lookup.product.unwrap().display_case, "II");
}

// ========== Controller over HTTP ==========

#[tokio::test]
async fn test_duplicate_sku_never_reaches_create_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([product_json(1, "ABC-1")])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "success": true })))
        .expect(0)
        .mount(&server)
        .await;

    let admin = ProductAdmin::new(HttpProductApi::new(server.uri()));
    let mut state = AdminState::new(10);
    let form = ProductForm {
        sku: "abc-1".to_string(),
        name: "Copy".to_string(),
        display_case: "I".to_string(),
        column: "1".to_string(),
        row: "1".to_string(),
    };

    let err = admin.create_product(&mut state, &form).await.unwrap_err();
    assert_eq!(err.to_string(), "The SKU already exists. Please use a unique SKU.");
}

#[tokio::test]
async fn test_search_over_http_requests_page_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "5"))
        .and(query_param("search", "opal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [product_json(1, "ABC-1")],
            "total": 1,
            "pages": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let admin = ProductAdmin::new(HttpProductApi::new(server.uri()));
    let mut state = AdminState::new(5);
    state.page.current_page = 4;

    admin.search(&mut state, " opal ").await.unwrap();

    let listing = state.listing.unwrap();
    assert_eq!(listing.rows.len(), 1);
    assert!(listing.pagination.is_none());
}
