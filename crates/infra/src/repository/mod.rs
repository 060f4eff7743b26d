//! Persistence boundary for the inventory list.
//!
//! The interactive loop only talks to [`InventoryRepository`]; the file-backed
//! adapter is used by the binary and the in-memory one by tests.

pub mod file;
pub mod in_memory;
pub mod r#trait;

pub use file::FileInventoryRepository;
pub use in_memory::InMemoryInventoryRepository;
pub use r#trait::{InventoryRepository, LoadOutcome, PersistenceError};
