use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::answer::models::Answer;

pub mod list_answers;
pub mod post_answer;

/// Response body shared by the answer handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerData {
    pub id: String,
    pub question_id: String,
    pub author_id: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Answer> for AnswerData {
    fn from(answer: &Answer) -> Self {
        Self {
            id: answer.id.to_string(),
            question_id: answer.question_id.to_string(),
            author_id: answer.author_id.to_string(),
            body: answer.body.clone(),
            created_at: answer.created_at,
        }
    }
}
