//! Topic value object

use serde::{Deserialize, Serialize};

/// The subject under discussion (Value Object)
///
/// Represents the question or statement the panel debates across all
/// four rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    content: String,
}

impl Topic {
    /// Create a new topic
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Topic cannot be empty");
        Self { content }
    }

    /// Try to create a new topic, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the topic content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Topic {
    fn from(s: &str) -> Self {
        Topic::new(s)
    }
}

impl From<String> for Topic {
    fn from(s: String) -> Self {
        Topic::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_creation() {
        let topic = Topic::new("Is remote work more productive?");
        assert_eq!(topic.content(), "Is remote work more productive?");
    }

    #[test]
    fn test_topic_from_str() {
        let topic: Topic = "Is X true?".into();
        assert_eq!(topic.content(), "Is X true?");
    }

    #[test]
    #[should_panic]
    fn test_empty_topic_panics() {
        Topic::new("");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(Topic::try_new("").is_none());
        assert!(Topic::try_new("   ").is_none());
    }

    #[test]
    fn test_try_new_valid() {
        assert!(Topic::try_new("Is X true?").is_some());
    }
}
