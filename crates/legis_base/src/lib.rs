//! Foundation crate: error handling, tracing setup, and the platform
//! abstraction layer (PAL) shared by all legis crates.

pub mod error;
pub mod pal;
pub mod tracing;

// Re-export commonly used types for convenience
pub use error::{LegisError, LegisResult, ResultExt};
pub use pal::{FilePath, MockPal, Pal, PalHandle, RealPal};
