use super::DataStore;
use crate::directory::Directory;
use crate::error::{CbookError, Result};
use crate::model::Contact;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
    // Set when unreadable data could not be moved aside
    locked: bool,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            locked: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(CbookError::Io)?;
            }
        }
        Ok(())
    }

    /// First free name among `<file>.bak`, `<file>.bak.1`, `<file>.bak.2`, ...
    fn backup_path(&self) -> PathBuf {
        let mut base = self.path.clone().into_os_string();
        base.push(".bak");
        let mut candidate = PathBuf::from(&base);
        let mut n = 1;
        while candidate.exists() {
            let mut numbered = base.clone();
            numbered.push(format!(".{}", n));
            candidate = PathBuf::from(numbered);
            n += 1;
        }
        candidate
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Option<Vec<Contact>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(CbookError::Io)?;
        let contacts: Vec<Contact> =
            serde_json::from_str(&content).map_err(CbookError::Serialization)?;
        Ok(Some(contacts))
    }

    fn save(&mut self, directory: &Directory) -> Result<()> {
        if self.locked {
            return Err(CbookError::Store(format!(
                "refusing to overwrite unreadable {}",
                self.path.display()
            )));
        }
        self.ensure_parent()?;
        let contacts: Vec<&Contact> = directory.iter().collect();
        let content =
            serde_json::to_string_pretty(&contacts).map_err(CbookError::Serialization)?;
        // Write next to the target and rename, so a killed process never
        // leaves a half-written file behind.
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        fs::write(&tmp, content).map_err(CbookError::Io)?;
        fs::rename(&tmp, &self.path).map_err(CbookError::Io)?;
        Ok(())
    }

    fn set_aside(&mut self) -> Result<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let backup = self.backup_path();
        if let Err(e) = fs::rename(&self.path, &backup) {
            self.locked = true;
            return Err(CbookError::Io(e));
        }
        Ok(Some(backup))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_directory() -> Directory {
        let mut ann = Contact::new("Ann").unwrap();
        ann.add_phone("12345").unwrap();
        ann.set_birthday("2000-01-01").unwrap();
        let mut bob = Contact::new("Bob").unwrap();
        bob.add_phone("111").unwrap();
        bob.add_phone("222").unwrap();
        [ann, bob].into_iter().collect()
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("contacts.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_keeps_contacts_and_order() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("contacts.json"));
        let directory = sample_directory();

        store.save(&directory).unwrap();
        let loaded: Directory = store.load().unwrap().unwrap().into_iter().collect();
        assert_eq!(loaded, directory);
    }

    #[test]
    fn save_rewrites_the_whole_file() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("contacts.json"));
        let mut directory = sample_directory();
        store.save(&directory).unwrap();

        directory.remove("Ann").unwrap();
        store.save(&directory).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name(), "Bob");
    }

    #[test]
    fn file_format_is_a_json_array() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("contacts.json"));
        store.save(&sample_directory()).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"name": "Ann", "phones": ["12345"], "birthday": "2000-01-01"},
                {"name": "Bob", "phones": ["111", "222"]}
            ])
        );
    }

    #[test]
    fn corrupt_or_invalid_data_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        let store = FileStore::new(&path);

        fs::write(&path, "not json").unwrap();
        assert!(matches!(store.load(), Err(CbookError::Serialization(_))));

        fs::write(&path, r#"[{"name": "Ann", "phones": ["+1"]}]"#).unwrap();
        assert!(matches!(store.load(), Err(CbookError::Serialization(_))));
    }

    #[test]
    fn unreadable_data_is_moved_aside_not_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        let original = r#"[{"name": "Ann", "phones": ["111"]}, {"name": "Bob", "phones": ["+222"]}]"#;
        fs::write(&path, original).unwrap();
        let mut store = FileStore::new(&path);

        let directory = Directory::load(&mut store);
        assert!(directory.is_empty());
        assert!(!path.exists());

        store.save(&directory).unwrap();
        let backup = dir.path().join("contacts.json.bak");
        assert_eq!(fs::read_to_string(backup).unwrap(), original);
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn backups_are_never_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        let mut store = FileStore::new(&path);

        fs::write(&path, "first").unwrap();
        store.set_aside().unwrap();
        fs::write(&path, "second").unwrap();
        let second = store.set_aside().unwrap().unwrap();

        assert_eq!(second, dir.path().join("contacts.json.bak.1"));
        assert_eq!(fs::read_to_string(dir.path().join("contacts.json.bak")).unwrap(), "first");
        assert_eq!(fs::read_to_string(second).unwrap(), "second");
    }

    #[test]
    fn missing_file_has_nothing_to_set_aside() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("contacts.json"));
        assert!(store.set_aside().unwrap().is_none());
    }
}
