use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::account::models::AccountId;
use crate::answer::errors::AnswerError;
use crate::answer::models::Answer;
use crate::answer::models::AnswerId;
use crate::answer::ports::AnswerRepository;
use crate::answer::ports::AnswerServicePort;
use crate::question::models::QuestionId;
use crate::question::ports::QuestionRepository;

/// Domain service implementation for answer operations.
///
/// Holds the question repository as a collaborator to check that the target
/// question exists before any answer read or write.
pub struct AnswerService<AR, QR>
where
    AR: AnswerRepository,
    QR: QuestionRepository,
{
    answers: Arc<AR>,
    questions: Arc<QR>,
}

impl<AR, QR> AnswerService<AR, QR>
where
    AR: AnswerRepository,
    QR: QuestionRepository,
{
    pub fn new(answers: Arc<AR>, questions: Arc<QR>) -> Self {
        Self { answers, questions }
    }

    async fn ensure_question_exists(&self, question_id: &QuestionId) -> Result<(), AnswerError> {
        self.questions
            .find_by_id(question_id)
            .await?
            .ok_or(AnswerError::QuestionNotFound(question_id.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl<AR, QR> AnswerServicePort for AnswerService<AR, QR>
where
    AR: AnswerRepository,
    QR: QuestionRepository,
{
    async fn post_answer(
        &self,
        question_id: QuestionId,
        author_id: AccountId,
        body: String,
    ) -> Result<Answer, AnswerError> {
        let body = body.trim().to_string();
        if body.is_empty() {
            return Err(AnswerError::EmptyBody);
        }

        self.ensure_question_exists(&question_id).await?;

        let answer = Answer {
            id: AnswerId::new(),
            question_id,
            author_id,
            body,
            created_at: Utc::now(),
        };

        self.answers.create(answer).await
    }

    async fn answers_for_question(
        &self,
        question_id: QuestionId,
    ) -> Result<Vec<Answer>, AnswerError> {
        self.ensure_question_exists(&question_id).await?;
        self.answers.find_by_question(&question_id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::question::errors::QuestionError;
    use crate::question::models::Question;
    use crate::question::models::Tag;
    use crate::question::models::Title;

    mock! {
        pub TestAnswerRepository {}

        #[async_trait]
        impl AnswerRepository for TestAnswerRepository {
            async fn create(&self, answer: Answer) -> Result<Answer, AnswerError>;
            async fn find_by_question(&self, question_id: &QuestionId) -> Result<Vec<Answer>, AnswerError>;
        }
    }

    mock! {
        pub TestQuestionRepository {}

        #[async_trait]
        impl QuestionRepository for TestQuestionRepository {
            async fn create(&self, question: Question) -> Result<Question, QuestionError>;
            async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, QuestionError>;
            async fn search_by_title(&self, title: &str) -> Result<Vec<Question>, QuestionError>;
            async fn find_by_tags(&self, tags: &[Tag]) -> Result<Vec<Question>, QuestionError>;
            async fn update(&self, question: Question) -> Result<Question, QuestionError>;
            async fn delete(&self, id: &QuestionId) -> Result<(), QuestionError>;
        }
    }

    fn existing_question() -> Question {
        Question {
            id: QuestionId::new(),
            author_id: AccountId::new(),
            title: Title::new("Q1".to_string()).unwrap(),
            body: "body".to_string(),
            tags: vec![],
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_post_answer_to_existing_question() {
        let mut answers = MockTestAnswerRepository::new();
        let mut questions = MockTestQuestionRepository::new();
        let question = existing_question();
        let question_id = question.id;
        let author_id = AccountId::new();

        questions
            .expect_find_by_id()
            .withf(move |id| *id == question_id)
            .times(1)
            .returning(move |_| Ok(Some(question.clone())));
        answers
            .expect_create()
            .withf(move |answer| {
                answer.question_id == question_id
                    && answer.author_id == author_id
                    && answer.body == "Turn it off and on again"
            })
            .times(1)
            .returning(|answer| Ok(answer));

        let service = AnswerService::new(Arc::new(answers), Arc::new(questions));

        let answer = service
            .post_answer(
                question_id,
                author_id,
                "  Turn it off and on again  ".to_string(),
            )
            .await
            .unwrap();
        assert_eq!(answer.question_id, question_id);
    }

    #[tokio::test]
    async fn test_post_answer_to_missing_question() {
        let mut answers = MockTestAnswerRepository::new();
        let mut questions = MockTestQuestionRepository::new();

        questions
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        answers.expect_create().times(0);

        let service = AnswerService::new(Arc::new(answers), Arc::new(questions));

        let result = service
            .post_answer(QuestionId::new(), AccountId::new(), "body".to_string())
            .await;
        assert!(matches!(result, Err(AnswerError::QuestionNotFound(_))));
    }

    #[tokio::test]
    async fn test_post_answer_rejects_blank_body() {
        let answers = MockTestAnswerRepository::new();
        let questions = MockTestQuestionRepository::new();

        let service = AnswerService::new(Arc::new(answers), Arc::new(questions));

        let result = service
            .post_answer(QuestionId::new(), AccountId::new(), "   ".to_string())
            .await;
        assert!(matches!(result, Err(AnswerError::EmptyBody)));
    }

    #[tokio::test]
    async fn test_answers_for_question_checks_existence() {
        let mut answers = MockTestAnswerRepository::new();
        let mut questions = MockTestQuestionRepository::new();

        questions
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        answers.expect_find_by_question().times(0);

        let service = AnswerService::new(Arc::new(answers), Arc::new(questions));

        let result = service.answers_for_question(QuestionId::new()).await;
        assert!(matches!(result, Err(AnswerError::QuestionNotFound(_))));
    }
}
