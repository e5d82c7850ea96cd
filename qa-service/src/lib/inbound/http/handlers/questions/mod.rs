use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::question::errors::TagError;
use crate::question::models::Question;
use crate::question::models::Tag;

pub mod create_question;
pub mod delete_question;
pub mod edit_question;
pub mod search_questions;

/// Response body shared by the question handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionData {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Question> for QuestionData {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.to_string(),
            author_id: question.author_id.to_string(),
            title: question.title.as_str().to_string(),
            body: question.body.clone(),
            tags: question.tags.iter().map(|t| t.as_str().to_string()).collect(),
            created_at: question.created_at,
        }
    }
}

/// Validate raw tag strings into a duplicate-free tag set, preserving the
/// order of first appearance.
pub(super) fn parse_tags(raw: Vec<String>) -> Result<Vec<Tag>, TagError> {
    let mut tags: Vec<Tag> = Vec::with_capacity(raw.len());
    for tag in raw {
        let tag = Tag::new(tag)?;
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_dedupes_after_normalization() {
        let tags = parse_tags(vec![
            "WiFi".to_string(),
            "wifi ".to_string(),
            "breakfast".to_string(),
        ])
        .unwrap();

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].as_str(), "wifi");
        assert_eq!(tags[1].as_str(), "breakfast");
    }

    #[test]
    fn test_parse_tags_propagates_invalid() {
        assert!(parse_tags(vec!["  ".to_string()]).is_err());
    }
}
