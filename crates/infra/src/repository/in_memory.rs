use std::sync::{PoisonError, RwLock};

use stockroom_inventory::Item;

use super::r#trait::{InventoryRepository, LoadOutcome, PersistenceError};
use crate::codec;

/// In-memory stand-in for the persisted file.
///
/// Holds the encoded text exactly as the file adapter would write it, so tests
/// exercise the same codec. Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryInventoryRepository {
    contents: RwLock<Option<String>>,
    read_only: bool,
}

impl InMemoryInventoryRepository {
    /// Nothing persisted yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: RwLock::new(Some(contents.into())),
            read_only: false,
        }
    }

    /// Refuse `check_writable` and `save`, like a file that cannot be opened.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Current persisted text, if anything was ever stored.
    pub fn contents(&self) -> Option<String> {
        self.contents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl InventoryRepository for InMemoryInventoryRepository {
    fn load(&self) -> LoadOutcome {
        match self.contents() {
            Some(text) => LoadOutcome::Loaded(codec::decode(&text)),
            None => LoadOutcome::Missing,
        }
    }

    fn check_writable(&self) -> Result<(), PersistenceError> {
        if self.read_only {
            return Err(PersistenceError::ReadOnly);
        }
        Ok(())
    }

    fn save(&self, items: &[Item]) -> Result<(), PersistenceError> {
        self.check_writable()?;
        let text = codec::encode_to_string(items);
        *self
            .contents
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(text);
        Ok(())
    }
}
