//! Infrastructure layer: the persisted text file, its codec, and configuration.

pub mod codec;
pub mod config;
pub mod repository;

pub use codec::{Decoded, decode, encode};
pub use config::StockroomConfig;
pub use repository::{
    FileInventoryRepository, InMemoryInventoryRepository, InventoryRepository, LoadOutcome,
    PersistenceError,
};
