use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rollcall")]
#[command(about = "Barcode-driven student attendance tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the roster and config (defaults to the
    /// platform data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the roster with each student's attendance status
    #[command(alias = "ls")]
    List,

    /// Look up a single student by scanned barcode (or by id)
    Find {
        /// Barcode to look up
        #[arg(required_unless_present = "id")]
        barcode: Option<String>,

        /// Look up by student id instead
        #[arg(long, conflicts_with = "barcode")]
        id: Option<String>,
    },

    /// Check a student in
    #[command(alias = "in")]
    Checkin {
        /// Student id
        id: String,
    },

    /// Check a student out
    #[command(alias = "out")]
    Checkout {
        /// Student id
        id: String,
    },

    /// Clear attendance for one student, or for everyone
    Reset {
        /// Student id
        #[arg(required_unless_present = "all")]
        id: Option<String>,

        /// Reset every student
        #[arg(long, conflicts_with = "id")]
        all: bool,
    },

    /// Write attendance data to a file
    #[command(subcommand)]
    Export(ExportFormat),
}

#[derive(Subcommand, Debug)]
pub enum ExportFormat {
    /// Attendance spreadsheet (CSV)
    Spreadsheet {
        /// Output file (defaults to attendance-<date>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Printable barcode sheet (PDF)
    Barcodes {
        /// Output file (defaults to student_barcodes.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Limit the sheet to these student ids (repeatable)
        #[arg(long = "id", value_name = "ID")]
        ids: Vec<String>,
    },
}
