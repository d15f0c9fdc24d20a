// web_app/view/mod.rs - View models for the admin screens
//
// The controller never builds markup. It turns backend replies into these
// plain structs and the front-ends render them: Leptos as escaped text
// nodes and attributes, the CLI as a text table.

pub mod pagination;

pub use pagination::{page_window, NavLink, PageLink, PaginationView, MAX_PAGE_LINKS};

use crate::web_app::model::{CsvUploadResponse, ListResponse, PageState, Product, ProductId};

/// One table row, also carrying what the edit and delete buttons need
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductRow {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub display_case: String,
    pub column: u32,
    pub row: u32,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            sku: product.sku.clone(),
            name: product.name.clone(),
            display_case: product.display_case.clone(),
            column: product.column,
            row: product.row,
        }
    }
}

impl ProductRow {
    /// Human-readable storage location
    pub fn location(&self) -> String {
        format!(
            "Display case {}, column {}, row {}",
            self.display_case, self.column, self.row
        )
    }
}

/// Message shown instead of the table when a page has no rows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyState {
    /// A search is active and nothing matched
    NoMatches,
    /// The inventory is empty
    NoProducts,
}

impl EmptyState {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::NoMatches => "No products match your search.",
            EmptyState::NoProducts => {
                "No products registered yet. Add a new product or upload a CSV file."
            }
        }
    }
}

impl std::fmt::Display for EmptyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// "Showing start to end of total"
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListSummary {
    pub start: u64,
    pub end: u64,
    pub total: u64,
}

impl std::fmt::Display for ListSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} products",
            self.start, self.end, self.total
        )
    }
}

/// Everything the product list renders for one page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListView {
    pub page: u32,
    pub total_pages: u32,
    pub rows: Vec<ProductRow>,
    pub summary: Option<ListSummary>,
    pub pagination: Option<PaginationView>,
    pub empty: Option<EmptyState>,
}

impl ListView {
    pub fn build(response: &ListResponse, state: &PageState) -> Self {
        let page = state.current_page;

        if response.products.is_empty() {
            let empty = if state.is_searching() {
                EmptyState::NoMatches
            } else {
                EmptyState::NoProducts
            };
            return Self {
                page,
                total_pages: response.pages,
                rows: Vec::new(),
                summary: None,
                pagination: None,
                empty: Some(empty),
            };
        }

        let per_page = u64::from(state.items_per_page);
        let start = u64::from(page.saturating_sub(1)) * per_page + 1;
        let end = (start + response.products.len() as u64 - 1).min(response.total);

        Self {
            page,
            total_pages: response.pages,
            rows: response.products.iter().map(ProductRow::from).collect(),
            summary: Some(ListSummary {
                start,
                end,
                total: response.total,
            }),
            pagination: PaginationView::build(page, response.pages),
            empty: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, id: ProductId) -> Option<&ProductRow> {
        self.rows.iter().find(|row| row.id == id)
    }
}

/// Result panel of a CSV import
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvResultView {
    pub message: String,
    pub errors: Vec<String>,
}

impl CsvResultView {
    /// The error container is only visible when there is something to list
    pub fn show_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl From<CsvUploadResponse> for CsvResultView {
    fn from(response: CsvUploadResponse) -> Self {
        Self {
            message: response.message,
            errors: response.errors.unwrap_or_default(),
        }
    }
}
