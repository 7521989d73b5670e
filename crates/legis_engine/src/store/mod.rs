pub mod memory;
pub mod traits;

pub use memory::MemStore;
pub use traits::{BillStore, StoreHandle};
