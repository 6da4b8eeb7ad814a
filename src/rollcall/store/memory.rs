use super::DataStore;
use crate::error::{Result, RollcallError};
use crate::model::Student;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Option<Vec<Student>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start out holding an already-saved collection, as if a previous
    /// process had written it.
    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            saved: Some(students),
        }
    }

    /// What the last `save` wrote, if anything.
    pub fn saved(&self) -> Option<&[Student]> {
        self.saved.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Option<Vec<Student>>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, students: &[Student]) -> Result<()> {
        self.saved = Some(students.to_vec());
        Ok(())
    }
}

/// Storage that accepts reads but refuses every write. Used to test that
/// callers roll back in-memory state when persistence fails.
pub struct FailingStore {
    inner: InMemoryStore,
}

impl FailingStore {
    pub fn new(students: Vec<Student>) -> Self {
        Self {
            inner: InMemoryStore::with_students(students),
        }
    }
}

impl DataStore for FailingStore {
    fn load(&self) -> Result<Option<Vec<Student>>> {
        self.inner.load()
    }

    fn save(&mut self, _students: &[Student]) -> Result<()> {
        Err(RollcallError::Store("write refused".to_string()))
    }
}
