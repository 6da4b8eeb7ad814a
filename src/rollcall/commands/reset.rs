use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::roster::Roster;
use crate::store::DataStore;

/// Return one student to Absent, whatever their current state.
pub fn one<S: DataStore>(roster: &mut Roster<S>, id: &str) -> Result<CmdResult> {
    let student = roster.reset_one(id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student status reset successfully: {}",
        student.full_name()
    )));
    result.affected.push(student);
    Ok(result)
}

/// Return every student to Absent in a single persisted batch.
pub fn all<S: DataStore>(roster: &mut Roster<S>) -> Result<CmdResult> {
    let count = roster.reset_all()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "All student statuses reset successfully ({count} students)"
    )));
    result.affected = roster.list_all();
    Ok(result)
}
