//! # Storage Layer
//!
//! The durable side of the roster. The [`DataStore`] trait abstracts one
//! named blob resource with read-all/write-all semantics: the whole
//! collection is loaded at startup and rewritten wholesale after every
//! mutation. There is no per-record persistence.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a pretty-printed JSON array
//!   (`students.json`) in the data directory
//! - [`memory::InMemoryStore`]: in-memory storage for tests
//!
//! ## Consistency
//!
//! [`roster::Roster`] owns the in-memory collection and a `DataStore`
//! handle; all mutation goes through it. Exclusive `&mut` access
//! serializes each read-modify-write-persist cycle, so no internal
//! locking is needed. If a write fails the in-memory mutation is rolled
//! back, keeping memory and disk in agreement.

use crate::error::Result;
use crate::model::Student;

pub mod fs;
pub mod memory;
pub mod roster;

/// Abstract interface for roster persistence.
///
/// `load` returns `Ok(None)` when the underlying resource does not exist
/// yet, which callers treat as "seed a fresh roster".
pub trait DataStore {
    /// Read the full collection, or `None` if the resource is absent.
    fn load(&self) -> Result<Option<Vec<Student>>>;

    /// Overwrite the resource with the full collection.
    fn save(&mut self, students: &[Student]) -> Result<()>;
}
