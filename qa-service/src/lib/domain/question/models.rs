use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::account::models::AccountId;
use crate::question::errors::QuestionIdError;
use crate::question::errors::TagError;
use crate::question::errors::TitleError;

/// Question unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionId(pub Uuid);

impl QuestionId {
    /// Generate a new random question ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a question ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, QuestionIdError> {
        Uuid::parse_str(s)
            .map(QuestionId)
            .map_err(|e| QuestionIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for QuestionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Question title value type
///
/// Non-empty after trimming, at most 150 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    const MAX_LENGTH: usize = 150;

    /// Create a new valid title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty or whitespace only
    /// * `TooLong` - Title longer than 150 characters
    pub fn new(title: String) -> Result<Self, TitleError> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(TitleError::Empty);
        }
        let length = title.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(TitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Tag value type, normalized to lowercase.
///
/// Tag matching is case-insensitive by construction: "WiFi" and "wifi" are
/// the same tag once validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    const MAX_LENGTH: usize = 32;

    /// Create a new valid tag.
    ///
    /// # Errors
    /// * `Empty` - Tag is empty or whitespace only
    /// * `TooLong` - Tag longer than 32 characters
    pub fn new(tag: String) -> Result<Self, TagError> {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() {
            return Err(TagError::Empty);
        }
        let length = tag.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(TagError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Question aggregate entity.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: QuestionId,
    pub author_id: AccountId,
    pub title: Title,
    pub body: String,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
}

/// Command to create a new question with domain types
#[derive(Debug)]
pub struct CreateQuestionCommand {
    pub title: Title,
    pub body: String,
    pub tags: Vec<Tag>,
}

/// Command to replace a question's content.
///
/// Edits are whole-content replacements: title, body, and tags all travel
/// together, matching the create payload.
#[derive(Debug)]
pub struct EditQuestionCommand {
    pub title: Title,
    pub body: String,
    pub tags: Vec<Tag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_trims_and_bounds() {
        let title = Title::new("  How do I reset the wifi?  ".to_string()).unwrap();
        assert_eq!(title.as_str(), "How do I reset the wifi?");

        assert!(matches!(Title::new("  ".to_string()), Err(TitleError::Empty)));
        assert!(matches!(
            Title::new("q".repeat(151)),
            Err(TitleError::TooLong { .. })
        ));
    }

    #[test]
    fn test_tag_is_normalized() {
        let tag = Tag::new(" WiFi ".to_string()).unwrap();
        assert_eq!(tag.as_str(), "wifi");
        assert_eq!(tag, Tag::new("wifi".to_string()).unwrap());

        assert!(matches!(Tag::new("".to_string()), Err(TagError::Empty)));
        assert!(matches!(
            Tag::new("t".repeat(33)),
            Err(TagError::TooLong { .. })
        ));
    }
}
