use super::DataStore;
use crate::catalog::Catalog;
use crate::error::{Result, RolodexError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_failure(&self, source: std::io::Error) -> RolodexError {
        RolodexError::StorageWriteFailure {
            path: self.path.clone(),
            source,
        }
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Catalog> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(RolodexError::StorageMissing(self.path.clone()));
            }
            Err(e) => return Err(RolodexError::Io(e)),
        };

        let catalog: Catalog =
            serde_json::from_slice(&content).map_err(|source| RolodexError::StorageCorrupt {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), customers = catalog.len(), "loaded store");
        Ok(catalog)
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        let content = serde_json::to_string_pretty(catalog)?;

        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| self.write_failure(e))?;
        }

        // Write next to the target and rename, so a failed save never truncates the store.
        let tmp_file = dir.join(format!(".rolodex-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_file, content + "\n") {
            let _ = fs::remove_file(&tmp_file);
            return Err(self.write_failure(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(self.write_failure(e));
        }

        debug!(path = %self.path.display(), customers = catalog.len(), "saved store");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Customer;
    use tempfile::TempDir;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add(Customer::new("Alice", "a@b.com", "12345")).unwrap();
        catalog.add(Customer::new("Bjørn", "bjorn@fjord.no", "4790000")).unwrap();
        catalog
    }

    #[test]
    fn missing_file_is_storage_missing() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("customers.json"));
        assert!(matches!(store.load(), Err(RolodexError::StorageMissing(_))));
    }

    #[test]
    fn garbage_is_storage_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("customers.json");
        fs::write(&path, "{ this is not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.load(), Err(RolodexError::StorageCorrupt { .. })));
    }

    #[test]
    fn wrong_shape_is_storage_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("customers.json");
        fs::write(&path, r#"["Alice", "Bob"]"#).unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.load(), Err(RolodexError::StorageCorrupt { .. })));
    }

    #[test]
    fn invalid_utf8_is_storage_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("customers.json");
        fs::write(&path, b"{\"Alice\": {\"email\": \"a@b.com\", \"phone\": \"1\xff\"}}").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.load(), Err(RolodexError::StorageCorrupt { .. })));
    }

    #[test]
    fn directory_in_place_of_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("customers.json");
        fs::create_dir_all(&path).unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.load(), Err(RolodexError::Io(_))));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("customers.json"));
        let catalog = sample();

        store.save(&catalog).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, catalog);
        let names: Vec<_> = loaded.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bjørn"]);
    }

    #[test]
    fn save_writes_indented_utf8_and_no_leftovers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("customers.json");
        let mut store = FileStore::new(&path);
        store.save(&sample()).unwrap();

        let on_disk = fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains("\n  \"Alice\": {\n    \"email\": \"a@b.com\""));
        assert!(on_disk.contains("Bjørn"));

        for entry in fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("customers.json");
        let mut store = FileStore::new(&path);

        store.save(&sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("customers.json"));
        store.save(&sample()).unwrap();

        let mut smaller = sample();
        smaller.remove("Alice").unwrap();
        store.save(&smaller).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(!loaded.contains("Alice"));
    }

    #[test]
    fn unwritable_target_is_write_failure() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes the rename fail.
        let path = dir.path().join("customers.json");
        fs::create_dir_all(path.join("occupied")).unwrap();

        let mut store = FileStore::new(&path);
        assert!(matches!(
            store.save(&sample()),
            Err(RolodexError::StorageWriteFailure { .. })
        ));
    }
}
