//! FAQ value types
//!
//! The synthesizer produces bare [`FaqPair`]s; callers stamp them into
//! [`FaqItem`] records with provenance and lifecycle fields before
//! persisting or returning them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One generated question/answer pair, as returned by the synthesizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqPair {
    pub question: String,
    pub answer: String,
}

/// Publication state of a stored FAQ entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaqStatus {
    /// Newly generated, awaiting review. Every item starts here.
    Draft,

    /// Approved and visible to readers
    Published,
}

impl FaqStatus {
    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published)
    }
}

impl fmt::Display for FaqStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => f.write_str("draft"),
            Self::Published => f.write_str("published"),
        }
    }
}

/// A FAQ entry with provenance and lifecycle fields, ready to persist
#[derive(Debug, Clone, Serialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,

    /// URL of the page the answer was synthesized from
    pub source_url: String,

    pub status: FaqStatus,
    pub created_at: DateTime<Utc>,
}

impl FaqItem {
    /// Stamps a generated pair with its source and an initial draft status
    pub fn from_pair(pair: FaqPair, source_url: &str) -> Self {
        Self {
            question: pair.question,
            answer: pair.answer,
            source_url: source_url.to_string(),
            status: FaqStatus::Draft,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pair_starts_as_draft() {
        let pair = FaqPair {
            question: "What is this?".to_string(),
            answer: "A test.".to_string(),
        };

        let item = FaqItem::from_pair(pair, "https://example.com/");

        assert_eq!(item.status, FaqStatus::Draft);
        assert!(!item.status.is_published());
        assert_eq!(item.source_url, "https://example.com/");
        assert_eq!(item.question, "What is this?");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&FaqStatus::Draft).unwrap();
        assert_eq!(json, "\"draft\"");
        let json = serde_json::to_string(&FaqStatus::Published).unwrap();
        assert_eq!(json, "\"published\"");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(FaqStatus::Draft.to_string(), "draft");
        assert_eq!(FaqStatus::Published.to_string(), "published");
    }
}
