use super::SnapshotStore;
use crate::error::{Result, TallyError};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Default snapshot file, relative to the working directory.
pub const DEFAULT_SNAPSHOT_FILE: &str = "inventory.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<BTreeMap<String, u64>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                TallyError::SnapshotMissing(self.path.clone())
            } else {
                TallyError::Io(e)
            }
        })?;
        let stock = serde_json::from_str(&content).map_err(TallyError::Serialization)?;
        Ok(stock)
    }

    fn save(&mut self, stock: &BTreeMap<String, u64>) -> Result<()> {
        // 4-space indentation, matching the documented snapshot format.
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        stock
            .serialize(&mut ser)
            .map_err(TallyError::Serialization)?;
        fs::write(&self.path, buf).map_err(TallyError::Io)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stock() -> BTreeMap<String, u64> {
        let mut stock = BTreeMap::new();
        stock.insert("apple".to_string(), 7);
        stock.insert("banana".to_string(), 5);
        stock
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("inventory.json"));

        let stock = sample_stock();
        store.save(&stock).unwrap();
        assert_eq!(store.load().unwrap(), stock);
    }

    #[test]
    fn snapshot_is_indented_with_four_spaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let mut store = FileStore::new(path.clone());

        store.save(&sample_stock()).unwrap();
        let written = fs::read_to_string(path).unwrap();
        assert!(written.contains("    \"apple\": 7"), "got: {}", written);
        assert!(written.starts_with('{'));
    }

    #[test]
    fn missing_file_is_snapshot_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        assert!(matches!(
            store.load(),
            Err(TallyError::SnapshotMissing(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(path);
        assert!(matches!(store.load(), Err(TallyError::Serialization(_))));
    }
}
