use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::account::models::AccountId;
use crate::question::errors::QuestionError;
use crate::question::models::CreateQuestionCommand;
use crate::question::models::EditQuestionCommand;
use crate::question::models::Question;
use crate::question::models::QuestionId;
use crate::question::models::Tag;
use crate::question::ports::QuestionRepository;
use crate::question::ports::QuestionServicePort;

/// Domain service implementation for question operations.
///
/// Enforces the authorship invariant: edits and deletes require the acting
/// subject to be the question's author.
pub struct QuestionService<QR>
where
    QR: QuestionRepository,
{
    repository: Arc<QR>,
}

impl<QR> QuestionService<QR>
where
    QR: QuestionRepository,
{
    pub fn new(repository: Arc<QR>) -> Self {
        Self { repository }
    }

    async fn load_owned(
        &self,
        id: &QuestionId,
        editor: AccountId,
    ) -> Result<Question, QuestionError> {
        let question = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(QuestionError::NotFound(id.to_string()))?;

        if question.author_id != editor {
            return Err(QuestionError::Forbidden);
        }

        Ok(question)
    }
}

#[async_trait]
impl<QR> QuestionServicePort for QuestionService<QR>
where
    QR: QuestionRepository,
{
    async fn create_question(
        &self,
        author_id: AccountId,
        command: CreateQuestionCommand,
    ) -> Result<Question, QuestionError> {
        let question = Question {
            id: QuestionId::new(),
            author_id,
            title: command.title,
            body: command.body,
            tags: command.tags,
            created_at: Utc::now(),
        };

        self.repository.create(question).await
    }

    async fn search_by_title(&self, title: &str) -> Result<Vec<Question>, QuestionError> {
        self.repository.search_by_title(title).await
    }

    async fn search_by_tags(&self, tags: &[Tag]) -> Result<Vec<Question>, QuestionError> {
        // Intersection with the empty set is empty; skip the round trip.
        if tags.is_empty() {
            return Ok(Vec::new());
        }

        self.repository.find_by_tags(tags).await
    }

    async fn edit_question(
        &self,
        id: QuestionId,
        editor: AccountId,
        command: EditQuestionCommand,
    ) -> Result<Question, QuestionError> {
        let mut question = self.load_owned(&id, editor).await?;

        question.title = command.title;
        question.body = command.body;
        question.tags = command.tags;

        self.repository.update(question).await
    }

    async fn delete_question(
        &self,
        id: QuestionId,
        editor: AccountId,
    ) -> Result<(), QuestionError> {
        self.load_owned(&id, editor).await?;
        self.repository.delete(&id).await
    }
}
