// web_app/admin/mod.rs - Product administration controller
//
// `ProductAdmin` holds the backend client; every handler receives the
// `AdminState` it works on and updates it in place. After each successful
// mutation the current page is fetched again, so `AdminState::listing`
// always mirrors the latest successful list reply.
//
// A front-end that runs handlers concurrently gives each a copy of the
// state and folds the result back with `AdminState::merge_outcome`. Two
// overlapping list loads are not coordinated: whichever finishes last is
// what the state shows.

pub mod error;
pub mod forms;

pub use error::{AdminAction, AdminError, AdminResult};
pub use forms::{DeleteTarget, EditForm, FormField, ProductForm};

use crate::web_app::api::ProductApi;
use crate::web_app::model::*;
use crate::web_app::view::{CsvResultView, ListView, ProductRow};

/// Dialog currently open on the admin page
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Modal {
    AddProduct,
    EditProduct(EditForm),
    ConfirmDelete(DeleteTarget),
    UploadCsv,
}

/// Everything the admin page shows
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminState {
    pub page: PageState,
    pub modal: Option<Modal>,
    pub listing: Option<ListView>,
    pub csv_result: Option<CsvResultView>,
}

impl AdminState {
    pub fn new(items_per_page: u32) -> Self {
        Self {
            page: PageState::new(items_per_page),
            ..Self::default()
        }
    }

    pub fn open_add(&mut self) {
        self.modal = Some(Modal::AddProduct);
    }

    /// Edit dialog pre-filled from the row's data
    pub fn open_edit(&mut self, row: &ProductRow) {
        self.modal = Some(Modal::EditProduct(EditForm::from(row)));
    }

    /// First step of a delete: ask for confirmation
    pub fn open_delete(&mut self, row: &ProductRow) {
        self.modal = Some(Modal::ConfirmDelete(DeleteTarget::from(row)));
    }

    pub fn open_upload(&mut self) {
        self.csv_result = None;
        self.modal = Some(Modal::UploadCsv);
    }

    /// Closing the upload dialog also discards its results
    pub fn close_modal(&mut self) {
        if matches!(self.modal, Some(Modal::UploadCsv)) {
            self.csv_result = None;
        }
        self.modal = None;
    }

    /// Fold the outcome of a handler that ran on a copy of `before` into
    /// the live state. Only parts the handler changed are taken over. The
    /// dialog is only replaced while the live one is still the one the
    /// handler started from.
    pub fn merge_outcome(&mut self, before: &AdminState, after: AdminState) {
        let AdminState {
            page,
            modal,
            listing,
            csv_result,
        } = after;

        if page != before.page {
            self.page = page;
        }
        if listing != before.listing {
            self.listing = listing;
        }
        if csv_result != before.csv_result {
            self.csv_result = csv_result;
        }
        if modal != before.modal && self.modal == before.modal {
            self.modal = modal;
        }
    }
}

/// Controller for the product admin screens
#[derive(Clone, Debug)]
pub struct ProductAdmin<A> {
    api: A,
}

impl<A: ProductApi> ProductAdmin<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the page `state.page` points at and replace the listing
    pub async fn load_products(&self, state: &mut AdminState) -> AdminResult<()> {
        let mut response = self.fetch_page(&state.page).await?;

        // The page we were on vanished (e.g. its last row was deleted)
        if response.products.is_empty()
            && response.total > 0
            && state.page.current_page > response.pages.max(1)
        {
            let last = response.pages.max(1);
            tracing::info!(
                "Page {} is past the end, moving to page {}",
                state.page.current_page,
                last
            );
            state.page.current_page = last;
            response = self.fetch_page(&state.page).await?;
        }

        let view = ListView::build(&response, &state.page);
        tracing::info!(
            "Showing page {} of {} ({} rows, {} total)",
            view.page,
            view.total_pages,
            view.rows.len(),
            response.total
        );
        state.listing = Some(view);
        Ok(())
    }

    async fn fetch_page(&self, page: &PageState) -> AdminResult<ListResponse> {
        self.api.list_products(&page.query()).await.map_err(|e| {
            tracing::error!("Loading products failed: {}", e);
            AdminError::request(AdminAction::LoadProducts, e)
        })
    }

    /// New search term; always restarts from page 1
    pub async fn search(&self, state: &mut AdminState, term: &str) -> AdminResult<()> {
        state.page.current_search = term.trim().to_string();
        state.page.current_page = 1;
        tracing::info!("Searching for '{}'", state.page.current_search);
        self.load_products(state).await
    }

    /// Follow a pagination link. Returns `false` when the link is disabled,
    /// out of range or points at the page already shown.
    pub async fn go_to_page(&self, state: &mut AdminState, page: u32) -> AdminResult<bool> {
        let accepted = state
            .listing
            .as_ref()
            .and_then(|listing| listing.pagination.as_ref())
            .is_some_and(|pagination| pagination.accepts(page));

        if !accepted {
            tracing::debug!("Ignoring navigation to page {}", page);
            return Ok(false);
        }

        state.page.current_page = page;
        self.load_products(state).await?;
        Ok(true)
    }

    /// Best-effort uniqueness check. A failed check lets the request
    /// through and leaves the decision to the backend.
    pub async fn sku_taken(&self, sku: &str) -> bool {
        match self.api.sku_exists(sku).await {
            Ok(exists) => exists,
            Err(e) => {
                tracing::warn!("SKU check for {} failed, assuming it is free: {}", sku, e);
                false
            }
        }
    }

    pub async fn create_product(
        &self,
        state: &mut AdminState,
        form: &ProductForm,
    ) -> AdminResult<()> {
        let payload = form.validate()?;

        if self.sku_taken(&payload.sku).await {
            tracing::info!("Refusing duplicate SKU {}", payload.sku);
            return Err(AdminError::DuplicateSku(payload.sku));
        }

        self.api.create_product(&payload).await.map_err(|e| {
            tracing::error!("Creating {} failed: {}", payload.sku, e);
            AdminError::request(AdminAction::CreateProduct, e)
        })?;

        tracing::info!("Created product {}", payload.sku);
        state.close_modal();
        self.load_products(state).await
    }

    /// Save the edit dialog. Uniqueness is only re-checked when the SKU
    /// differs from the one the dialog was opened with.
    pub async fn update_product(
        &self,
        state: &mut AdminState,
        edit: &EditForm,
    ) -> AdminResult<()> {
        let payload = edit.form.validate()?;

        if edit.sku_changed() && self.sku_taken(&payload.sku).await {
            tracing::info!("Refusing to rename product {} to {}", edit.id, payload.sku);
            return Err(AdminError::DuplicateSku(payload.sku));
        }

        self.api
            .update_product(edit.id, &payload)
            .await
            .map_err(|e| {
                tracing::error!("Updating product {} failed: {}", edit.id, e);
                AdminError::request(AdminAction::UpdateProduct, e)
            })?;

        tracing::info!("Updated product {} ({})", edit.id, payload.sku);
        state.close_modal();
        self.load_products(state).await
    }

    /// Second step of a delete, for the product named in the open dialog
    pub async fn confirm_delete(&self, state: &mut AdminState) -> AdminResult<()> {
        let target = match &state.modal {
            Some(Modal::ConfirmDelete(target)) => target.clone(),
            _ => return Err(AdminError::NothingSelected),
        };

        self.api.delete_product(target.id).await.map_err(|e| {
            tracing::error!("Deleting product {} failed: {}", target.id, e);
            AdminError::request(AdminAction::DeleteProduct, e)
        })?;

        tracing::info!("Deleted product {} ({})", target.id, target.sku);
        state.close_modal();
        self.load_products(state).await
    }

    /// Bulk import. The list is reloaded even when some rows were rejected.
    pub async fn upload_csv(
        &self,
        state: &mut AdminState,
        upload: Option<CsvUpload>,
    ) -> AdminResult<()> {
        let upload = upload.ok_or(AdminError::NoFileSelected)?;

        let response = self.api.upload_csv(&upload).await.map_err(|e| {
            tracing::error!("Uploading {} failed: {}", upload.file_name, e);
            AdminError::request(AdminAction::UploadCsv, e)
        })?;

        let result = CsvResultView::from(response);
        tracing::info!(
            "Imported {}: {} ({} row errors)",
            upload.file_name,
            result.message,
            result.errors.len()
        );
        state.csv_result = Some(result);
        self.load_products(state).await
    }

    /// Where a single SKU is stored, `None` when it does not exist
    pub async fn lookup_sku(&self, raw_sku: &str) -> AdminResult<Option<ProductRow>> {
        let sku = normalize_sku(raw_sku);
        if sku.is_empty() {
            return Err(AdminError::MissingSku);
        }

        let lookup = self.api.lookup_sku(&sku).await.map_err(|e| {
            tracing::error!("Looking up {} failed: {}", sku, e);
            AdminError::request(AdminAction::LookupSku, e)
        })?;

        Ok(lookup
            .product
            .filter(|_| lookup.found)
            .as_ref()
            .map(ProductRow::from))
    }
}
