//! Runtime configuration.
//!
//! There is no config file and there are no flags: the tool always works on
//! `inventory.txt` in the current directory. The struct exists so tests and
//! embedders can point it elsewhere.

use std::path::PathBuf;

use stockroom_inventory::DEFAULT_CAPACITY;

use crate::repository::FileInventoryRepository;

/// File name of the persisted inventory, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "inventory.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockroomConfig {
    pub data_path: PathBuf,
    pub capacity: usize,
}

impl Default for StockroomConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl StockroomConfig {
    pub fn repository(&self) -> FileInventoryRepository {
        FileInventoryRepository::new(self.data_path.clone())
    }
}
