use async_trait::async_trait;

use crate::account::models::AccountId;
use crate::question::errors::QuestionError;
use crate::question::models::CreateQuestionCommand;
use crate::question::models::EditQuestionCommand;
use crate::question::models::Question;
use crate::question::models::QuestionId;
use crate::question::models::Tag;

/// Port for question domain service operations.
#[async_trait]
pub trait QuestionServicePort: Send + Sync + 'static {
    /// Create a new question authored by the given account.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_question(
        &self,
        author_id: AccountId,
        command: CreateQuestionCommand,
    ) -> Result<Question, QuestionError>;

    /// Find questions whose title contains the given substring,
    /// case-insensitively. Public read.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn search_by_title(&self, title: &str) -> Result<Vec<Question>, QuestionError>;

    /// Find questions sharing at least one tag with the given set
    /// (non-empty intersection). Public read; an empty tag set matches
    /// nothing.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn search_by_tags(&self, tags: &[Tag]) -> Result<Vec<Question>, QuestionError>;

    /// Replace a question's content, author only.
    ///
    /// # Errors
    /// * `NotFound` - Question does not exist
    /// * `Forbidden` - The editor is not the question's author
    /// * `DatabaseError` - Database operation failed
    async fn edit_question(
        &self,
        id: QuestionId,
        editor: AccountId,
        command: EditQuestionCommand,
    ) -> Result<Question, QuestionError>;

    /// Delete a question, author only.
    ///
    /// # Errors
    /// * `NotFound` - Question does not exist
    /// * `Forbidden` - The editor is not the question's author
    /// * `DatabaseError` - Database operation failed
    async fn delete_question(&self, id: QuestionId, editor: AccountId)
        -> Result<(), QuestionError>;
}

/// Persistence operations for the question aggregate.
#[async_trait]
pub trait QuestionRepository: Send + Sync + 'static {
    /// Persist a new question.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, question: Question) -> Result<Question, QuestionError>;

    /// Retrieve a question by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, QuestionError>;

    /// Retrieve questions by case-insensitive title substring.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn search_by_title(&self, title: &str) -> Result<Vec<Question>, QuestionError>;

    /// Retrieve questions with a non-empty tag intersection.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_tags(&self, tags: &[Tag]) -> Result<Vec<Question>, QuestionError>;

    /// Update an existing question in storage.
    ///
    /// # Errors
    /// * `NotFound` - Question does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, question: Question) -> Result<Question, QuestionError>;

    /// Remove a question from storage.
    ///
    /// # Errors
    /// * `NotFound` - Question does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &QuestionId) -> Result<(), QuestionError>;
}
