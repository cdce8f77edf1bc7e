use thiserror::Error;

pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Advisory errors surfaced to the user. Transforms are total over
/// non-empty strings, so nothing here represents a parse failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("No {tool} content to process")]
    EmptyInput { tool: &'static str },

    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Invalid year '{value}': expected four digits")]
    InvalidYear { value: String },

    #[error("Course name '{value}' reduces to an empty filename segment")]
    EmptyCourseName { value: String },

    #[error("Bulletin number {value} is out of range: must be 1-99")]
    BulletinNumberOutOfRange { value: u32 },

    #[error("Unknown catalog section '{section}'")]
    UnknownSection { section: String },

    #[error("I/O error: {0}")]
    Io(String),
}
