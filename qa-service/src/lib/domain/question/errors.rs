use thiserror::Error;

/// Error for QuestionId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuestionIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Title validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TitleError {
    #[error("Title must not be empty")]
    Empty,

    #[error("Title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for Tag validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TagError {
    #[error("Tag must not be empty")]
    Empty,

    #[error("Tag too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for question operations
#[derive(Debug, Clone, Error)]
pub enum QuestionError {
    #[error("Invalid question ID: {0}")]
    InvalidQuestionId(#[from] QuestionIdError),

    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] TitleError),

    #[error("Invalid tag: {0}")]
    InvalidTag(#[from] TagError),

    #[error("Question not found: {0}")]
    NotFound(String),

    /// The acting subject is not the question's author.
    #[error("Only the question's author may modify it")]
    Forbidden,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
