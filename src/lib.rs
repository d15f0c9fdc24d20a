// lib.rs - Root module for the inventory_admin library
//
// Client side of the product inventory: a typed REST client, the admin
// controller and its view models, plus the browser and terminal
// front-ends built on top of them (behind the `csr` and `cli` features).

/// Runtime settings (backend URL, page size, timeouts)
pub mod config;

/// In-memory backend and sample inventory for tests
pub mod fixtures;

pub mod web_app;
