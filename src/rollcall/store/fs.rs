use super::DataStore;
use crate::error::{Result, RollcallError};
use crate::model::Student;
use std::fs;
use std::path::PathBuf;

/// File-backed storage: one JSON array of student records.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(RollcallError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Option<Vec<Student>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(RollcallError::Io)?;
        let students: Vec<Student> =
            serde_json::from_str(&content).map_err(RollcallError::Serialization)?;
        Ok(Some(students))
    }

    fn save(&mut self, students: &[Student]) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(students).map_err(RollcallError::Serialization)?;
        fs::write(&self.path, content).map_err(RollcallError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_roster;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("students.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("students.json"));

        let mut students = sample_roster();
        students[0].checked_in_time = Some("2026-08-07 08:00:00".into());
        store.save(&students).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, students);
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("students.json"));
        store.save(&sample_roster()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("students.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::new(path);
        assert!(matches!(
            store.load(),
            Err(RollcallError::Serialization(_))
        ));
    }

    #[test]
    fn file_is_pretty_printed_with_wire_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("students.json");
        let mut store = FileStore::new(path.clone());
        store.save(&sample_roster()).unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert!(on_disk.starts_with('['));
        assert!(on_disk.contains("\"givenName\": \"John\""));
        assert!(on_disk.contains("\"checkedInTime\": null"));
    }
}
