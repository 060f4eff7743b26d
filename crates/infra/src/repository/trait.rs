use std::io;
use std::path::PathBuf;

use thiserror::Error;

use stockroom_inventory::Item;

use crate::codec::Decoded;

/// What was found when loading persisted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing was persisted (or it could not be opened). Start empty.
    Missing,
    /// Persisted state was read; possibly cut short by a malformed record.
    Loaded(Decoded),
}

impl LoadOutcome {
    pub fn is_missing(&self) -> bool {
        matches!(self, LoadOutcome::Missing)
    }

    pub fn into_items(self) -> Vec<Item> {
        match self {
            LoadOutcome::Missing => Vec::new(),
            LoadOutcome::Loaded(decoded) => decoded.items,
        }
    }
}

/// Persistence operation error.
///
/// These are **infrastructure errors** (files, handles) as opposed to domain errors
/// (validation, capacity).
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("cannot open {} for writing: {source}", .path.display())]
    OpenForWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("storage is read-only")]
    ReadOnly,
}

/// Where the inventory lives between runs.
///
/// ## Semantics
///
/// - `load` never fails: anything that prevents reading is reported as
///   [`LoadOutcome::Missing`] and the run starts from an empty inventory.
/// - `check_writable` is called once at startup; it must not destroy existing data.
/// - `save` replaces the persisted state in full (truncate, then write).
pub trait InventoryRepository {
    fn load(&self) -> LoadOutcome;

    fn check_writable(&self) -> Result<(), PersistenceError>;

    fn save(&self, items: &[Item]) -> Result<(), PersistenceError>;
}

impl<R: InventoryRepository + ?Sized> InventoryRepository for &R {
    fn load(&self) -> LoadOutcome {
        (**self).load()
    }

    fn check_writable(&self) -> Result<(), PersistenceError> {
        (**self).check_writable()
    }

    fn save(&self, items: &[Item]) -> Result<(), PersistenceError> {
        (**self).save(items)
    }
}
