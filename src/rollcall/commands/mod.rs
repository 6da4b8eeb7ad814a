use crate::model::Student;

pub mod checkin;
pub mod checkout;
pub mod export;
pub mod find;
pub mod list;
pub mod reset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command. The library never prints; the CLI
/// renders messages and records however it sees fit.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records a mutating command touched (or tried to touch).
    pub affected: Vec<Student>,
    /// Records a query command returned, in roster order.
    pub listed: Vec<Student>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, students: Vec<Student>) -> Self {
        self.listed = students;
        self
    }

    /// True when no message carries `Warning` or `Error` level.
    pub fn is_clean(&self) -> bool {
        !self
            .messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}
