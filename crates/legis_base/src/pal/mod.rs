//! Platform abstraction layer (PAL).
//!
//! The PAL is a trait-based seam over the filesystem and the HTTP server,
//! so that the engine can be driven either by the real platform (`RealPal`)
//! or by a deterministic in-memory double (`MockPal`) in tests.

mod file_path;
pub mod http;
pub mod mock;
pub mod real_pal;
mod traits;

pub use file_path::FilePath;
pub use mock::MockPal;
pub use real_pal::RealPal;
pub use traits::{Pal, PalHandle, ReadSeek};
