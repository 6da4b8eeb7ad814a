use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::roster::Roster;
use crate::store::DataStore;

/// Snapshot of the whole roster, insertion order.
pub fn run<S: DataStore>(roster: &Roster<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed(roster.list_all());
    if result.listed.is_empty() {
        result.add_message(CmdMessage::info("No students on the roster."));
    }
    Ok(result)
}
