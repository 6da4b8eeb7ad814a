use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RollcallError};
use crate::store::roster::Roster;
use crate::store::DataStore;

/// Check a student in by id.
///
/// A state-machine rejection is a warning in the result, not an error:
/// the caller gets the reason plus the unchanged record. An unknown id
/// propagates as [`RollcallError::NotFound`].
pub fn run<S: DataStore>(roster: &mut Roster<S>, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match roster.check_in(id) {
        Ok(student) => {
            result.add_message(CmdMessage::success(format!(
                "Check-in successful: {} at {}",
                student.full_name(),
                student.checked_in_time.as_deref().unwrap_or_default(),
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
    fn first_check_in_succeeds() {
        let mut r = roster();
        let result = run(&mut r, "1001").unwrap();

        assert!(result.is_clean());
        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.affected[0].status(), AttendanceStatus::Present);
        assert!(result.messages[0].content.starts_with("Check-in successful"));
    }

    #[test]
    fn second_check_in_warns_and_keeps_state() {
        let mut r = roster();
        run(&mut r, "1001").unwrap();
        let first_time = r.find_by_id("1001").unwrap().checked_in_time.clone();

        let result = run(&mut r, "1001").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "Student is already checked in");
        assert_eq!(r.find_by_id("1001").unwrap().checked_in_time, first_time);
        // The unchanged record still comes back for display.
        assert_eq!(result.affected.len(), 1);
    }

    #[test]
    fn completed_student_cannot_check_in_again() {
        let mut r = roster();
        r.check_in("1001").unwrap();
        r.check_out("1001").unwrap();

        let result = run(&mut r, "1001").unwrap();
        assert_eq!(
            result.messages[0].content,
            "Student has already completed attendance for today"
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
