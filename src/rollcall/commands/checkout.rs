use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RollcallError};
use crate::store::roster::Roster;
use crate::store::DataStore;

/// Check a student out by id. Symmetric to [`crate::commands::checkin`].
pub fn run<S: DataStore>(roster: &mut Roster<S>, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match roster.check_out(id) {
        Ok(student) => {
            result.add_message(CmdMessage::success(format!(
                "Check-out successful: {} at {}",
                student.full_name(),
                student.checked_out_time.as_deref().unwrap_or_default(),
            )));
            result.affected.push(student);
        }
        Err(RollcallError::InvalidTransition(reason)) => {
            result.add_message(CmdMessage::warning(reason.to_string()));
            if let Some(student) = roster.find_by_id(id) {
                result.affected.push(student.clone());
            }
        }
        Err(e) => return Err(e),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::AttendanceStatus;
    use crate::store::memory::InMemoryStore;

    fn roster() -> Roster<InMemoryStore> {
        Roster::open(InMemoryStore::new()).unwrap()
    }

    #[test]
    fn check_out_completes_a_present_student() {
        let mut r = roster();
        r.check_in("1001").unwrap();

        let result = run(&mut r, "1001").unwrap();
        assert!(result.is_clean());
        assert_eq!(result.affected[0].status(), AttendanceStatus::Completed);
    }

    #[test]
    fn check_out_without_check_in_warns() {
        let mut r = roster();
        let result = run(&mut r, "1001").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "Student must check in first");
        assert_eq!(
            r.find_by_id("1001").unwrap().status(),
            AttendanceStatus::Absent
        );
    }

    #[test]
    fn double_check_out_warns() {
        let mut r = roster();
        r.check_in("1001").unwrap();
        r.check_out("1001").unwrap();

        let result = run(&mut r, "1001").unwrap();
        assert_eq!(
            result.messages[0].content,
            "Student has already checked out"
        );
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut r = roster();
        assert!(matches!(
            run(&mut r, "9999"),
            Err(RollcallError::NotFound(_))
        ));
    }
}
