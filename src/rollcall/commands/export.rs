use crate::barcode::Code128;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RollcallError};
use crate::layout::SheetLayout;
use crate::model::Student;
use crate::sheet::write_sheet;
use crate::store::roster::Roster;
use crate::store::DataStore;
use chrono::Local;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const ABSENT_IN: &str = "Not checked in";
const ABSENT_OUT: &str = "Not checked out";

/// Export the roster as an attendance spreadsheet (CSV).
pub fn spreadsheet<S: DataStore>(roster: &Roster<S>, output: Option<PathBuf>) -> Result<CmdResult> {
    let students = roster.list_all();
    let path = output.unwrap_or_else(|| {
        PathBuf::from(format!("attendance-{}.csv", Local::now().format("%Y-%m-%d")))
    });

    let mut file = File::create(&path).map_err(RollcallError::Io)?;
    write_spreadsheet(&mut file, &students)?;

    Ok(exported(path, students))
}

/// Export a printable barcode sheet for the selected students (all of
/// them when `ids` is empty).
pub fn barcodes<S: DataStore>(
    roster: &Roster<S>,
    ids: &[String],
    output: Option<PathBuf>,
    sheet_title: &str,
) -> Result<CmdResult> {
    let students = select(roster.list_all(), ids);
    if students.is_empty() {
        return Err(RollcallError::EmptySelection);
    }
    let path = output.unwrap_or_else(|| PathBuf::from("student_barcodes.pdf"));

    let mut file = File::create(&path).map_err(RollcallError::Io)?;
    write_sheet(
        &mut file,
        &students,
        &SheetLayout::default(),
        &Code128::default(),
        sheet_title,
    )?;

    Ok(exported(path, students))
}

/// Keep roster order while filtering down to the requested ids.
fn select(students: Vec<Student>, ids: &[String]) -> Vec<Student> {
    if ids.is_empty() {
        return students;
    }
    students
        .into_iter()
        .filter(|s| ids.iter().any(|id| *id == s.id))
        .collect()
}

fn exported(path: impl AsRef<Path>, students: Vec<Student>) -> CmdResult {
    let mut result = CmdResult::default().with_listed(students);
    result.add_message(CmdMessage::success(format!(
        "Exported {} students to {}",
        result.listed.len(),
        path.as_ref().display()
    )));
    result
}

/// Write the six-column attendance table. Absent timestamps render as
/// placeholder text rather than empty cells.
pub fn write_spreadsheet<W: Write>(writer: &mut W, students: &[Student]) -> Result<()> {
    write_row(
        writer,
        [
            "ID",
            "Given Name",
            "Surname",
            "Checked In Time",
            "Checked Out Time",
            "Barcode",
        ],
    )?;
    for s in students {
        write_row(
            writer,
            [
                s.id.as_str(),
                s.given_name.as_str(),
                s.surname.as_str(),
                s.checked_in_time.as_deref().unwrap_or(ABSENT_IN),
                s.checked_out_time.as_deref().unwrap_or(ABSENT_OUT),
                s.barcode.as_str(),
            ],
        )?;
    }
    Ok(())
}

fn write_row<W: Write>(writer: &mut W, cells: [&str; 6]) -> Result<()> {
    let line = cells.map(quote_cell).join(",");
    writeln!(writer, "{line}").map_err(RollcallError::Io)
}

fn quote_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
