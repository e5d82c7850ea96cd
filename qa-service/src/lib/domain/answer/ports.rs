use async_trait::async_trait;

use crate::account::models::AccountId;
use crate::answer::errors::AnswerError;
use crate::answer::models::Answer;
use crate::question::models::QuestionId;

/// Port for answer domain service operations.
#[async_trait]
pub trait AnswerServicePort: Send + Sync + 'static {
    /// Post an answer to an existing question.
    ///
    /// # Errors
    /// * `EmptyBody` - Answer body is empty or whitespace only
    /// * `QuestionNotFound` - The question does not exist
    /// * `DatabaseError` - Database operation failed
    async fn post_answer(
        &self,
        question_id: QuestionId,
        author_id: AccountId,
        body: String,
    ) -> Result<Answer, AnswerError>;

    /// List a question's answers in chronological order. Public read.
    ///
    /// # Errors
    /// * `QuestionNotFound` - The question does not exist
    /// * `DatabaseError` - Database operation failed
    async fn answers_for_question(
        &self,
        question_id: QuestionId,
    ) -> Result<Vec<Answer>, AnswerError>;
}

/// Persistence operations for answers.
#[async_trait]
pub trait AnswerRepository: Send + Sync + 'static {
    /// Persist a new answer.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, answer: Answer) -> Result<Answer, AnswerError>;

    /// Retrieve all answers for a question, oldest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_question(&self, question_id: &QuestionId)
        -> Result<Vec<Answer>, AnswerError>;
}
