use thiserror::Error;

use crate::question::errors::QuestionError;

/// Top-level error for answer operations
#[derive(Debug, Clone, Error)]
pub enum AnswerError {
    #[error("Answer body must not be empty")]
    EmptyBody,

    /// Answers always hang off a question; referencing a missing one is a
    /// not-found, never a silent success.
    #[error("Question not found: {0}")]
    QuestionNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<QuestionError> for AnswerError {
    fn from(err: QuestionError) -> Self {
        match err {
            QuestionError::NotFound(id) => AnswerError::QuestionNotFound(id),
            other => AnswerError::DatabaseError(other.to_string()),
        }
    }
}
