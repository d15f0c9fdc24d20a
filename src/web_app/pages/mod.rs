// web_app/pages/mod.rs - Page-level components
//
// - lookup.rs: Find where a SKU is stored (landing page)
// - products.rs: Product administration (list, search, add, edit, delete, import)

pub mod lookup;
pub mod products;

pub use lookup::LookupPage;
pub use products::ProductsPage;

use crate::config::AdminConfig;
use crate::web_app::admin::ProductAdmin;
use crate::web_app::api::HttpProductApi;

/// Controller talking to the backend this page was served from
pub(crate) fn browser_admin() -> (AdminConfig, ProductAdmin<HttpProductApi>) {
    let config = AdminConfig::from_browser();
    let api = HttpProductApi::from_config(&config).unwrap_or_else(|e| {
        tracing::warn!("Falling back to a default HTTP client: {}", e);
        HttpProductApi::new(config.api_base_url.clone())
    });
    (config, ProductAdmin::new(api))
}
