use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use stockroom_inventory::Item;

use super::r#trait::{InventoryRepository, LoadOutcome, PersistenceError};
use crate::codec;

/// Inventory persisted as a plain text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInventoryRepository {
    path: PathBuf,
}

impl FileInventoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_error(&self, source: io::Error) -> PersistenceError {
        PersistenceError::OpenForWrite {
            path: self.path.clone(),
            source,
        }
    }
}

impl InventoryRepository for FileInventoryRepository {
    fn load(&self) -> LoadOutcome {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no persisted inventory");
                return LoadOutcome::Missing;
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "cannot open persisted inventory");
                return LoadOutcome::Missing;
            }
        };

        match codec::read_from(BufReader::new(file)) {
            Ok(decoded) => {
                tracing::info!(
                    path = %self.path.display(),
                    items = decoded.items.len(),
                    complete = decoded.is_complete(),
                    "inventory loaded"
                );
                LoadOutcome::Loaded(decoded)
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "cannot read persisted inventory");
                LoadOutcome::Missing
            }
        }
    }

    fn check_writable(&self) -> Result<(), PersistenceError> {
        // No truncate: the startup probe must leave the previous run's data alone.
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map(drop)
            .map_err(|err| self.open_error(err))
    }

    fn save(&self, items: &[Item]) -> Result<(), PersistenceError> {
        let file = File::create(&self.path).map_err(|err| self.open_error(err))?;

        codec::encode(BufWriter::new(file), items).map_err(|source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(path = %self.path.display(), items = items.len(), "inventory saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use stockroom_inventory::{ItemName, Price, Quantity};
    use tempfile::TempDir;

    fn item(name: &str, quantity: u32, price: &str) -> Item {
        Item::new(
            ItemName::new(name).unwrap(),
            Quantity::new(quantity).unwrap(),
            Price::parse(price).unwrap(),
        )
    }

    #[test]
    fn load_of_missing_file_is_missing() {
        let dir = TempDir::new().unwrap();
        let repo = FileInventoryRepository::new(dir.path().join("inventory.txt"));
        assert!(repo.load().is_missing());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let repo = FileInventoryRepository::new(dir.path().join("inventory.txt"));
        let items = vec![item("A", 2, "3.50"), item("B", 1, "10.00")];

        repo.save(&items).unwrap();
        assert_eq!(
            fs::read_to_string(repo.path()).unwrap(),
            "A 2 3.50\nB 1 10.00\n"
        );
        assert_eq!(repo.load().into_items(), items);
    }

    #[test]
    fn save_truncates_previous_contents() {
        let dir = TempDir::new().unwrap();
        let repo = FileInventoryRepository::new(dir.path().join("inventory.txt"));
        repo.save(&[item("A", 1, "1"), item("B", 1, "1"), item("C", 1, "1")])
            .unwrap();

        repo.save(&[item("Z", 9, "9")]).unwrap();
        assert_eq!(fs::read_to_string(repo.path()).unwrap(), "Z 9 9.00\n");
    }

    #[test]
    fn check_writable_keeps_existing_data() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.txt");
        fs::write(&path, "A 1 1.00\n").unwrap();
        let repo = FileInventoryRepository::new(&path);

        repo.check_writable().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "A 1 1.00\n");
    }

    #[test]
    fn check_writable_fails_for_unreachable_path() {
        let dir = TempDir::new().unwrap();
        let repo = FileInventoryRepository::new(dir.path().join("no-such-dir").join("inventory.txt"));

        let err = repo.check_writable().unwrap_err();
        assert!(matches!(err, PersistenceError::OpenForWrite { .. }));
        assert!(repo.save(&[]).is_err());
    }

    #[test]
    fn load_keeps_records_before_malformed_one() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.txt");
        fs::write(&path, "A 1 1.00\nB x 1.00\n").unwrap();

        match FileInventoryRepository::new(&path).load() {
            LoadOutcome::Loaded(decoded) => {
                assert_eq!(decoded.items, vec![item("A", 1, "1.00")]);
                assert_eq!(decoded.stopped_at, Some(2));
            }
            LoadOutcome::Missing => panic!("Expected Loaded outcome"),
        }
    }
}
