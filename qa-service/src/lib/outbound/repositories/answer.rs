use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::account::models::AccountId;
use crate::answer::errors::AnswerError;
use crate::answer::models::Answer;
use crate::answer::models::AnswerId;
use crate::answer::ports::AnswerRepository;
use crate::question::models::QuestionId;

pub struct PostgresAnswerRepository {
    pool: PgPool,
}

impl PostgresAnswerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_answer(row: &PgRow) -> Answer {
        Answer {
            id: AnswerId(row.get("id")),
            question_id: QuestionId(row.get("question_id")),
            author_id: AccountId(row.get("author_id")),
            body: row.get("body"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl AnswerRepository for PostgresAnswerRepository {
    async fn create(&self, answer: Answer) -> Result<Answer, AnswerError> {
        sqlx::query(
            r#"
            INSERT INTO answers (id, question_id, author_id, body, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(answer.id.0)
        .bind(answer.question_id.0)
        .bind(answer.author_id.0)
        .bind(&answer.body)
        .bind(answer.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                // The question may have been deleted between the service's
                // existence check and this insert.
                if db_err.is_foreign_key_violation() {
                    return AnswerError::QuestionNotFound(answer.question_id.to_string());
                }
            }
            AnswerError::DatabaseError(e.to_string())
        })?;

        Ok(answer)
    }

    async fn find_by_question(
        &self,
        question_id: &QuestionId,
    ) -> Result<Vec<Answer>, AnswerError> {
        let rows = sqlx::query(
            r#"
            SELECT id, question_id, author_id, body, created_at
            FROM answers
            WHERE question_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(question_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AnswerError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(Self::row_to_answer).collect())
    }
}
