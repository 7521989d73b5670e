//! Engine crate: the bill data model, the in-memory store, seed data,
//! configuration, and the read-only retrieval API service.

pub mod api;
pub mod bill;
pub mod config;
pub mod seed;
pub mod store;

pub use api::ApiService;
pub use bill::{Bill, BillDraft, BillId, User, UserDraft, UserId};
pub use config::{Config, load_config};
pub use seed::seed_store;
pub use store::{BillStore, MemStore, StoreHandle};
