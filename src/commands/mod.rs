//! Business logic for each menu operation.
//!
//! Command functions are pure with respect to the terminal: they take the
//! store plus plain arguments and return a [`CmdResult`] for the CLI layer
//! to render. No command writes to stdout or stderr.

use crate::model::Employee;

pub mod add;
pub mod delete;
pub mod list;
pub mod search;
pub mod update;

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

/// Structured outcome of a command: the records it touched or listed, plus
/// leveled messages for the UI.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Employee>,
    pub listed: Vec<Employee>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, employees: Vec<Employee>) -> Self {
        self.affected = employees;
        self
    }

    pub fn with_listed(mut self, employees: Vec<Employee>) -> Self {
        self.listed = employees;
        self
    }
}
