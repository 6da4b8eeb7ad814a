use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::TransitionError;

/// Timestamp format used everywhere a check-in/check-out time is recorded
/// or displayed. Second granularity, local clock.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time in the canonical textual form.
pub fn timestamp_now() -> String {
    Local::now().format(TIME_FORMAT).to_string()
}

/// Where a student is in the daily attendance lifecycle.
///
/// Derived from the two timestamps; a record is always in exactly one
/// state. `checked_out_time` can only be set while `checked_in_time` is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    Absent,
    Present,
    Completed,
}

/// One student's identity plus current attendance timestamps.
///
/// `id` is the primary key and immutable once created. `barcode` is a
/// secondary lookup key for scan-based check-in; uniqueness is not
/// enforced, lookups take the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub given_name: String,
    pub surname: String,
    pub barcode: String,
    pub checked_in_time: Option<String>,
    pub checked_out_time: Option<String>,
}

impl Student {
    pub fn new(
        id: impl Into<String>,
        given_name: impl Into<String>,
        surname: impl Into<String>,
        barcode: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            given_name: given_name.into(),
            surname: surname.into(),
            barcode: barcode.into(),
            checked_in_time: None,
            checked_out_time: None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.surname)
    }

    pub fn status(&self) -> AttendanceStatus {
        match (&self.checked_in_time, &self.checked_out_time) {
            (None, _) => AttendanceStatus::Absent,
            (Some(_), None) => AttendanceStatus::Present,
            (Some(_), Some(_)) => AttendanceStatus::Completed,
        }
    }

    /// Mark arrival at `at`. Rejected once checked in or completed.
    pub fn check_in(&mut self, at: String) -> Result<(), TransitionError> {
        match self.status() {
            AttendanceStatus::Completed => Err(TransitionError::AlreadyCompleted),
            AttendanceStatus::Present => Err(TransitionError::AlreadyCheckedIn),
            AttendanceStatus::Absent => {
                self.checked_in_time = Some(at);
                Ok(())
            }
        }
    }

    /// Mark departure at `at`. Requires a prior check-in, at most once.
    pub fn check_out(&mut self, at: String) -> Result<(), TransitionError> {
        match self.status() {
            AttendanceStatus::Absent => Err(TransitionError::NotCheckedIn),
            AttendanceStatus::Completed => Err(TransitionError::AlreadyCheckedOut),
            AttendanceStatus::Present => {
                self.checked_out_time = Some(at);
                Ok(())
            }
        }
    }

    /// Clear both timestamps unconditionally, returning to Absent.
    pub fn reset(&mut self) {
        self.checked_in_time = None;
        self.checked_out_time = None;
    }
}

/// Roster a fresh installation starts out with.
pub fn sample_roster() -> Vec<Student> {
    vec![
        Student::new("1001", "John", "Doe", "1001"),
        Student::new("1002", "Jane", "Smith", "1002"),
    ]
}
