use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("an employee with ID {0} already exists")]
    DuplicateId(u32),

    #[error("no employee with ID {0}")]
    NotFound(u32),

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("maximum attempts reached for {0}, returning to menu")]
    RetryExhausted(&'static str),

    #[error("malformed record on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RosterError {
    /// Everything except file/terminal IO is recovered at the menu.
    pub fn is_fatal(&self) -> bool {
        matches!(self, RosterError::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
