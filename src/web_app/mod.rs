// web_app/mod.rs - Root module for the inventory admin client
//
// Architecture:
// - model/: Wire types and page state (shared by everything)
// - api/: ProductApi trait and its reqwest implementation
// - admin/: Controller handlers operating on AdminState
// - view/: View models the front-ends render (rows, pagination, messages)
// - components/, pages/, app.rs: Leptos UI (csr feature only)

pub mod admin;
pub mod api;
pub mod model;
pub mod view;

pub use admin::{AdminState, ProductAdmin};
pub use api::{HttpProductApi, ProductApi};

cfg_if::cfg_if! {
    if #[cfg(feature = "csr")] {
        pub mod app;
        pub mod components;
        pub mod pages;

        pub use app::App;
    }
}

/// WASM entry point, runs as soon as the module is loaded
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
