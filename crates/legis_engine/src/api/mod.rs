//! HTTP retrieval API.
//!
//! The service implements the `HttpService` trait from legis_base, so it
//! runs unchanged under `RealPal` (production, tiny_http) and `MockPal`
//! (tests, in-process dispatch).

mod service;

pub use service::ApiService;
