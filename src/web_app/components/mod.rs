// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the admin client.
//
// Structure:
// - common.rs: Reusable atomic components (Button, Modal, TextInput, etc.)
// - search.rs: Search bar, list summary and pagination controls
// - product.rs: Product table, product form fields, lookup card
// - csv.rs: CSV upload form and import results

pub mod common;
pub mod csv;
pub mod product;
pub mod search;

// Re-export commonly used components for convenience
pub use common::*;
pub use csv::*;
pub use product::*;
pub use search::*;
