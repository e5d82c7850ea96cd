use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::account::models::AccountId;
use crate::question::errors::QuestionError;
use crate::question::models::Question;
use crate::question::models::QuestionId;
use crate::question::models::Tag;
use crate::question::models::Title;
use crate::question::ports::QuestionRepository;

pub struct PostgresQuestionRepository {
    pool: PgPool,
}

impl PostgresQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_question(row: &PgRow) -> Result<Question, QuestionError> {
        let tags: Vec<String> = row.get("tags");
        let tags = tags
            .into_iter()
            .map(Tag::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Question {
            id: QuestionId(row.get("id")),
            author_id: AccountId(row.get("author_id")),
            title: Title::new(row.get("title"))?,
            body: row.get("body"),
            tags,
            created_at: row.get("created_at"),
        })
    }

    fn rows_to_questions(rows: Vec<PgRow>) -> Result<Vec<Question>, QuestionError> {
        rows.iter().map(Self::row_to_question).collect()
    }
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    async fn create(&self, question: Question) -> Result<Question, QuestionError> {
        let tags: Vec<String> = question.tags.iter().map(|t| t.as_str().to_string()).collect();

        sqlx::query(
            r#"
            INSERT INTO questions (id, author_id, title, body, tags, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(question.id.0)
        .bind(question.author_id.0)
        .bind(question.title.as_str())
        .bind(&question.body)
        .bind(&tags)
        .bind(question.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| QuestionError::DatabaseError(e.to_string()))?;

        Ok(question)
    }

    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, QuestionError> {
        let row = sqlx::query(
            r#"
            SELECT id, author_id, title, body, tags, created_at
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| QuestionError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_question).transpose()
    }

    async fn search_by_title(&self, title: &str) -> Result<Vec<Question>, QuestionError> {
        let rows = sqlx::query(
            r#"
            SELECT id, author_id, title, body, tags, created_at
            FROM questions
            WHERE title ILIKE '%' || $1 || '%'
            ORDER BY created_at DESC
            "#,
        )
        .bind(title)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| QuestionError::DatabaseError(e.to_string()))?;

        Self::rows_to_questions(rows)
    }

    async fn find_by_tags(&self, tags: &[Tag]) -> Result<Vec<Question>, QuestionError> {
        let tags: Vec<String> = tags.iter().map(|t| t.as_str().to_string()).collect();

        // Array overlap: at least one tag in common.
        let rows = sqlx::query(
            r#"
            SELECT id, author_id, title, body, tags, created_at
            FROM questions
            WHERE tags && $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(&tags)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| QuestionError::DatabaseError(e.to_string()))?;

        Self::rows_to_questions(rows)
    }

    async fn update(&self, question: Question) -> Result<Question, QuestionError> {
        let tags: Vec<String> = question.tags.iter().map(|t| t.as_str().to_string()).collect();

        let result = sqlx::query(
            r#"
            UPDATE questions
            SET title = $2, body = $3, tags = $4
            WHERE id = $1
            "#,
        )
        .bind(question.id.0)
        .bind(question.title.as_str())
        .bind(&question.body)
        .bind(&tags)
        .execute(&self.pool)
        .await
        .map_err(|e| QuestionError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(QuestionError::NotFound(question.id.to_string()));
        }

        Ok(question)
    }

    async fn delete(&self, id: &QuestionId) -> Result<(), QuestionError> {
        let result = sqlx::query(
            r#"
            DELETE FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| QuestionError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(QuestionError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
