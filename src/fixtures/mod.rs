// fixtures/mod.rs - Test fixtures module
//
// Reusable test setup for the admin controller. Instead of standing up a
// real inventory server in every test, tests build an `InMemoryBackend`
// seeded with `sample_products()` and hand it to `ProductAdmin`.
//
// The backend records every call it receives, so a test can assert not
// only on the rendered state but also on which requests were (or were
// not) sent.

pub mod backend;
pub mod products;

pub use backend::{ApiCall, CallKind, InMemoryBackend};
pub use products::{product, sample_products};
