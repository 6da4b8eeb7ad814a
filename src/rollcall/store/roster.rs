use super::DataStore;
use crate::error::{Result, RollcallError};
use crate::model::{sample_roster, timestamp_now, Student};

/// The attendance record store.
///
/// Owns the ordered in-memory collection plus the durable-storage handle.
/// Insertion order is preserved, records are unique by id, and nothing is
/// ever deleted. Every successful mutation rewrites the full collection
/// through the backing [`DataStore`] before returning; if that write
/// fails the in-memory change is rolled back and the error is returned.
pub struct Roster<S: DataStore> {
    students: Vec<Student>,
    store: S,
}

impl<S: DataStore> Roster<S> {
    /// Load the roster from storage. An absent resource seeds (and
    /// persists) the sample roster; an unreadable one falls back to an
    /// empty collection so a damaged file never blocks startup.
    pub fn open(store: S) -> Result<Self> {
        let mut roster = match store.load() {
            Ok(Some(students)) => Self { students, store },
            Ok(None) => {
                let mut roster = Self {
                    students: sample_roster(),
                    store,
                };
                roster.store.save(&roster.students)?;
                roster
            }
            Err(_) => Self {
                students: Vec::new(),
                store,
            },
        };
        roster.dedupe_ids();
        Ok(roster)
    }

    // Unique-by-id is a collection invariant; a hand-edited file can
    // violate it. First occurrence wins, matching lookup semantics.
    fn dedupe_ids(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.students.retain(|s| seen.insert(s.id.clone()));
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Snapshot of every record, insertion order.
    pub fn list_all(&self) -> Vec<Student> {
        self.students.clone()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// First match wins; barcode uniqueness is not enforced.
    pub fn find_by_barcode(&self, barcode: &str) -> Result<&Student> {
        self.students
            .iter()
            .find(|s| s.barcode == barcode)
            .ok_or_else(|| RollcallError::NotFound(barcode.to_string()))
    }

    pub fn check_in(&mut self, id: &str) -> Result<Student> {
        self.mutate_one(id, |s| s.check_in(timestamp_now()).map_err(Into::into))
    }

    pub fn check_out(&mut self, id: &str) -> Result<Student> {
        self.mutate_one(id, |s| s.check_out(timestamp_now()).map_err(Into::into))
    }

    pub fn reset_one(&mut self, id: &str) -> Result<Student> {
        self.mutate_one(id, |s| {
            s.reset();
            Ok(())
        })
    }

    /// Return every record to Absent. One write for the whole batch.
    pub fn reset_all(&mut self) -> Result<usize> {
        let before = self.students.clone();
        for student in &mut self.students {
            student.reset();
        }
        if let Err(e) = self.store.save(&self.students) {
            self.students = before;
            return Err(e);
        }
        Ok(self.students.len())
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.students
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| RollcallError::NotFound(id.to_string()))
    }

    fn mutate_one<F>(&mut self, id: &str, apply: F) -> Result<Student>
    where
        F: FnOnce(&mut Student) -> Result<()>,
    {
        let idx = self.index_of(id)?;
        let before = self.students[idx].clone();
        apply(&mut self.students[idx])?;
        if let Err(e) = self.store.save(&self.students) {
            self.students[idx] = before;
            return Err(e);
        }
        Ok(self.students[idx].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransitionError;
    use crate::model::AttendanceStatus;
    use crate::store::memory::{FailingStore, InMemoryStore};

    fn roster() -> Roster<InMemoryStore> {
        Roster::open(InMemoryStore::new()).unwrap()
    }

    #[test]
    fn open_seeds_and_persists_sample_roster() {
        let r = roster();
        assert_eq!(r.len(), 2);
        assert_eq!(r.find_by_id("1001").unwrap().given_name, "John");
        // The seed write happened.
        assert_eq!(r.store.saved().unwrap().len(), 2);
    }

    #[test]
    fn open_keeps_existing_collection_and_order() {
        let students = vec![
            Student::new("3", "Ada", "Lovelace", "3"),
            Student::new("1", "Alan", "Turing", "1"),
            Student::new("2", "Grace", "Hopper", "2"),
        ];
        let r = Roster::open(InMemoryStore::with_students(students.clone())).unwrap();
        assert_eq!(r.list_all(), students);
    }

    #[test]
    fn open_drops_duplicate_ids_first_wins() {
        let students = vec![
            Student::new("1", "Alan", "Turing", "a"),
            Student::new("1", "Imposter", "Turing", "b"),
        ];
        let r = Roster::open(InMemoryStore::with_students(students)).unwrap();
        assert_eq!(r.len(), 1);
        assert_eq!(r.find_by_id("1").unwrap().given_name, "Alan");
    }

    #[test]
    fn check_in_scenario() {
        let mut r = roster();

        let s = r.check_in("1001").unwrap();
        assert_eq!(s.status(), AttendanceStatus::Present);
        assert!(s.checked_in_time.is_some());

        let err = r.check_in("1001").unwrap_err();
        assert!(matches!(
            err,
            RollcallError::InvalidTransition(TransitionError::AlreadyCheckedIn)
        ));

        let s = r.check_out("1001").unwrap();
        assert_eq!(s.status(), AttendanceStatus::Completed);

        let err = r.check_out("1001").unwrap_err();
        assert!(matches!(
            err,
            RollcallError::InvalidTransition(TransitionError::AlreadyCheckedOut)
        ));

        let s = r.reset_one("1001").unwrap();
        assert_eq!(s.status(), AttendanceStatus::Absent);
        assert!(s.checked_in_time.is_none());
        assert!(s.checked_out_time.is_none());
    }

    #[test]
    fn check_out_before_check_in_is_rejected() {
        let mut r = roster();
        let err = r.check_out("1001").unwrap_err();
        assert!(matches!(
            err,
            RollcallError::InvalidTransition(TransitionError::NotCheckedIn)
        ));
        assert_eq!(
            r.find_by_id("1001").unwrap().status(),
            AttendanceStatus::Absent
        );
    }

    #[test]
    fn unknown_id_is_not_found_and_leaves_collection_untouched() {
        let mut r = roster();
        let before = r.list_all();

        for result in [
            r.check_in("9999"),
            r.check_out("9999"),
            r.reset_one("9999"),
        ] {
            assert!(matches!(result, Err(RollcallError::NotFound(_))));
        }
        assert_eq!(r.list_all(), before);
    }

    #[test]
    fn find_by_barcode_first_match_wins() {
        let students = vec![
            Student::new("1", "Alan", "Turing", "dup"),
            Student::new("2", "Grace", "Hopper", "dup"),
        ];
        let r = Roster::open(InMemoryStore::with_students(students)).unwrap();
        assert_eq!(r.find_by_barcode("dup").unwrap().id, "1");
        assert!(matches!(
            r.find_by_barcode("missing"),
            Err(RollcallError::NotFound(_))
        ));
    }

    #[test]
    fn reset_all_returns_every_record_to_absent() {
        let mut r = roster();
        r.check_in("1001").unwrap();
        r.check_in("1002").unwrap();
        r.check_out("1002").unwrap();

        let count = r.reset_all().unwrap();
        assert_eq!(count, 2);
        for s in r.list_all() {
            assert_eq!(s.status(), AttendanceStatus::Absent);
        }
    }

    #[test]
    fn every_successful_mutation_is_persisted() {
        let mut r = roster();
        r.check_in("1001").unwrap();

        let saved = r.store.saved().unwrap();
        assert!(saved[0].checked_in_time.is_some());
    }

    #[test]
    fn failed_write_rolls_back_check_in() {
        let mut r = Roster::open(FailingStore::new(sample_roster())).unwrap();
        let err = r.check_in("1001").unwrap_err();
        assert!(matches!(err, RollcallError::Store(_)));
        assert_eq!(
            r.find_by_id("1001").unwrap().status(),
            AttendanceStatus::Absent
        );
    }

    #[test]
    fn failed_write_rolls_back_reset_all() {
        let mut seeded = sample_roster();
        seeded[0].checked_in_time = Some("2026-08-07 08:00:00".into());
        let mut r = Roster::open(FailingStore::new(seeded.clone())).unwrap();

        assert!(r.reset_all().is_err());
        assert_eq!(r.list_all(), seeded);
    }
}
