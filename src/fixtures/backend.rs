// fixtures/backend.rs
//
// An in-process stand-in for the inventory server. It follows the same
// rules the real backend enforces (upper-case SKUs, unique SKUs, column
// 1-2, row 1-7, CSV upsert) and answers with the same messages, so the
// controller can be exercised end to end without a network.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;

use crate::web_app::api::{ApiError, ApiResult, ProductApi};
use crate::web_app::model::*;

/// A request the backend received
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiCall {
    ListPage(ListQuery),
    ListAll,
    Create(ProductPayload),
    Update(ProductId, ProductPayload),
    Delete(ProductId),
    UploadCsv(String),
    Lookup(String),
}

impl ApiCall {
    pub fn kind(&self) -> CallKind {
        match self {
            ApiCall::ListPage(_) => CallKind::ListPage,
            ApiCall::ListAll => CallKind::ListAll,
            ApiCall::Create(_) => CallKind::Create,
            ApiCall::Update(..) => CallKind::Update,
            ApiCall::Delete(_) => CallKind::Delete,
            ApiCall::UploadCsv(_) => CallKind::UploadCsv,
            ApiCall::Lookup(_) => CallKind::Lookup,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
    ListPage,
    ListAll,
    Create,
    Update,
    Delete,
    UploadCsv,
    Lookup,
}

#[derive(Debug, Default)]
pub struct InMemoryBackend {
    products: RefCell<Vec<Product>>,
    next_id: Cell<ProductId>,
    calls: RefCell<Vec<ApiCall>>,
    failures: RefCell<HashMap<CallKind, ApiError>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            products: RefCell::new(products),
            next_id: Cell::new(next_id),
            ..Self::default()
        }
    }

    /// Make every call of `kind` fail with `err` until `recover` is called
    pub fn fail(&self, kind: CallKind, err: ApiError) {
        self.failures.borrow_mut().insert(kind, err);
    }

    pub fn recover(&self, kind: CallKind) {
        self.failures.borrow_mut().remove(&kind);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, kind: CallKind) -> usize {
        self.calls.borrow().iter().filter(|c| c.kind() == kind).count()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn products(&self) -> Vec<Product> {
        self.products.borrow().clone()
    }

    fn record(&self, call: ApiCall) -> ApiResult<()> {
        let kind = call.kind();
        self.calls.borrow_mut().push(call);
        match self.failures.borrow().get(&kind) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn find_sku(&self, sku: &str) -> Option<Product> {
        self.products.borrow().iter().find(|p| p.has_sku(sku)).cloned()
    }

    fn allocate_id(&self) -> ProductId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn import_line(&self, line: &str) -> Result<(), String> {
        let cells: Vec<&str> = line.split(',').map(str::trim).collect();
        let (sku, name, display_case, column, row) = match cells.as_slice() {
            [sku, display_case, column, row] => (*sku, "", *display_case, *column, *row),
            [sku, name, display_case, column, row] => (*sku, *name, *display_case, *column, *row),
            _ => return Err(format!("Row has incorrect number of columns: {:?}", cells)),
        };
        let sku = normalize_sku(sku);

        let (column, row) = match (column.parse::<u32>(), row.parse::<u32>()) {
            (Ok(column), Ok(row)) => (column, row),
            _ => return Err(format!("Column and row must be numbers for SKU {}", sku)),
        };
        if !(1..=2).contains(&column) {
            return Err(format!("Invalid column value for SKU {}. Column must be 1 or 2.", sku));
        }
        if !(1..=7).contains(&row) {
            return Err(format!("Invalid row value for SKU {}. Row must be between 1 and 7.", sku));
        }

        let mut products = self.products.borrow_mut();
        if let Some(existing) = products.iter_mut().find(|p| p.has_sku(&sku)) {
            existing.display_case = display_case.to_string();
            existing.column = column;
            existing.row = row;
            if !name.is_empty() {
                existing.name = name.to_string();
            }
        } else {
            products.push(Product {
                id: self.allocate_id(),
                sku,
                name: name.to_string(),
                display_case: display_case.to_string(),
                column,
                row,
            });
        }
        Ok(())
    }
}

fn bad_request(message: &str) -> ApiError {
    ApiError::Status {
        status: 400,
        message: Some(message.to_string()),
    }
}

fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        message: None,
    }
}

fn check_payload(payload: &ProductPayload) -> ApiResult<()> {
    if payload.sku.trim().is_empty() || payload.display_case.trim().is_empty() {
        return Err(bad_request("All fields are required"));
    }
    if !(1..=2).contains(&payload.column) || !(1..=7).contains(&payload.row) {
        return Err(bad_request("Invalid column or row value"));
    }
    Ok(())
}

fn ok() -> MutationResponse {
    MutationResponse {
        success: true,
        message: None,
    }
}

#[async_trait(?Send)]
impl ProductApi for InMemoryBackend {
    async fn list_products(&self, query: &ListQuery) -> ApiResult<ListResponse> {
        self.record(ApiCall::ListPage(query.clone()))?;

        let needle = query.search.trim().to_lowercase();
        let matching: Vec<Product> = self
            .products
            .borrow()
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.sku.to_lowercase().contains(&needle)
                    || p.name.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        let per_page = query.per_page.max(1) as usize;
        let total = matching.len();
        let pages = total.div_ceil(per_page) as u32;
        let skip = (query.page.max(1) as usize - 1) * per_page;
        let products = matching.into_iter().skip(skip).take(per_page).collect();

        Ok(ListResponse {
            products,
            total: total as u64,
            pages,
        })
    }

    async fn list_all_products(&self) -> ApiResult<Vec<Product>> {
        self.record(ApiCall::ListAll)?;
        Ok(self.products())
    }

    async fn create_product(&self, payload: &ProductPayload) -> ApiResult<MutationResponse> {
        self.record(ApiCall::Create(payload.clone()))?;

        if self.find_sku(&payload.sku).is_some() {
            return Err(bad_request("Product with this SKU already exists"));
        }
        check_payload(payload)?;

        let product = Product {
            id: self.allocate_id(),
            sku: normalize_sku(&payload.sku),
            name: payload.name.clone(),
            display_case: payload.display_case.clone(),
            column: payload.column,
            row: payload.row,
        };
        self.products.borrow_mut().push(product);
        Ok(ok())
    }

    async fn update_product(
        &self,
        id: ProductId,
        payload: &ProductPayload,
    ) -> ApiResult<MutationResponse> {
        self.record(ApiCall::Update(id, payload.clone()))?;

        if !self.products.borrow().iter().any(|p| p.id == id) {
            return Err(not_found());
        }
        if self.find_sku(&payload.sku).is_some_and(|other| other.id != id) {
            return Err(bad_request("Product with this SKU already exists"));
        }
        check_payload(payload)?;

        let mut products = self.products.borrow_mut();
        if let Some(product) = products.iter_mut().find(|p| p.id == id) {
            product.sku = normalize_sku(&payload.sku);
            product.name = payload.name.clone();
            product.display_case = payload.display_case.clone();
            product.column = payload.column;
            product.row = payload.row;
        }
        Ok(ok())
    }

    async fn delete_product(&self, id: ProductId) -> ApiResult<MutationResponse> {
        self.record(ApiCall::Delete(id))?;

        let mut products = self.products.borrow_mut();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(not_found());
        }
        Ok(ok())
    }

    async fn upload_csv(&self, upload: &CsvUpload) -> ApiResult<CsvUploadResponse> {
        self.record(ApiCall::UploadCsv(upload.file_name.clone()))?;

        if upload.file_name.is_empty() {
            return Err(bad_request("No selected file"));
        }
        if !upload.file_name.ends_with(".csv") {
            return Err(bad_request("File must be a CSV"));
        }
        let text = String::from_utf8(upload.contents.clone()).map_err(|e| ApiError::Status {
            status: 500,
            message: Some(e.to_string()),
        })?;

        let mut imported = 0;
        let mut errors = Vec::new();
        // First line is the header
        for line in text.lines().skip(1).filter(|l| !l.trim().is_empty()) {
            match self.import_line(line) {
                Ok(()) => imported += 1,
                Err(e) => errors.push(e),
            }
        }

        Ok(CsvUploadResponse {
            message: format!(
                "Processed {} products successfully, {} errors",
                imported,
                errors.len()
            ),
            errors: Some(errors),
        })
    }

    async fn lookup_sku(&self, sku: &str) -> ApiResult<SkuLookup> {
        self.record(ApiCall::Lookup(sku.to_string()))?;

        let product = self.find_sku(sku);
        Ok(SkuLookup {
            found: product.is_some(),
            product,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_products;

    #[tokio::test]
    async fn test_pages_are_counted_like_the_server() {
        let backend = InMemoryBackend::with_products(sample_products());
        let reply = backend
            .list_products(&ListQuery {
                page: 3,
                per_page: 5,
                search: String::new(),
            })
            .await
            .unwrap();
        assert_eq!(reply.total, 12);
        assert_eq!(reply.pages, 3);
        assert_eq!(reply.products.len(), 2);
    }

    #[tokio::test]
    async fn test_injected_failure_is_returned_and_recorded() {
        let backend = InMemoryBackend::new();
        backend.fail(CallKind::ListAll, ApiError::Network("down".to_string()));
        assert!(backend.list_all_products().await.is_err());
        assert_eq!(backend.count(CallKind::ListAll), 1);

        backend.recover(CallKind::ListAll);
        assert!(backend.list_all_products().await.is_ok());
    }

    #[tokio::test]
    async fn test_csv_rows_are_validated() {
        let backend = InMemoryBackend::new();
        let upload = CsvUpload {
            file_name: "stock.csv".to_string(),
            contents: b"sku,display_case,column,row\nab-1,I,1,1\nab-2,I,3,1\nbroken\n".to_vec(),
        };
        let reply = backend.upload_csv(&upload).await.unwrap();
        assert_eq!(reply.message, "Processed 1 products successfully, 2 errors");
        assert_eq!(backend.products()[0].sku, "AB-1");
    }
}
