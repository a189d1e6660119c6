//! Structured document produced by an extraction

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Structured, denoised representation of a fetched page
///
/// Produced and consumed within a single request; callers may persist it as
/// a crawled-page record, but the extractor itself has no notion of storage.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedDocument {
    /// Normalized absolute URL the page was fetched from
    pub url: String,

    /// Best-effort page title, never empty (falls back to "Untitled")
    pub title: String,

    /// Meta description, when the page provides one
    pub description: Option<String>,

    /// Headings per level, in document order
    pub headings: Headings,

    /// Paragraph texts longer than the boilerplate cutoff, in document order
    pub paragraphs: Vec<String>,

    /// Full text of the detected main content region, pre-normalization
    pub raw_text: String,

    /// `raw_text` after whitespace normalization
    pub cleaned_text: String,

    /// Derived counts and the capture timestamp
    pub metadata: DocumentMetadata,
}

/// Heading texts grouped by level, each list in document order
#[derive(Debug, Clone, Default, Serialize)]
pub struct Headings {
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
    pub h4: Vec<String>,
    pub h5: Vec<String>,
    pub h6: Vec<String>,
}

impl Headings {
    /// Mutable access to the list for a heading level (1-6)
    pub fn level_mut(&mut self, level: u8) -> Option<&mut Vec<String>> {
        match level {
            1 => Some(&mut self.h1),
            2 => Some(&mut self.h2),
            3 => Some(&mut self.h3),
            4 => Some(&mut self.h4),
            5 => Some(&mut self.h5),
            6 => Some(&mut self.h6),
            _ => None,
        }
    }

    /// Total number of headings across all levels
    pub fn total(&self) -> usize {
        self.h1.len()
            + self.h2.len()
            + self.h3.len()
            + self.h4.len()
            + self.h5.len()
            + self.h6.len()
    }
}

/// Counts and capture timestamp for an extraction
#[derive(Debug, Clone, Serialize)]
pub struct DocumentMetadata {
    pub heading_count: usize,
    pub paragraph_count: usize,
    pub raw_text_length: usize,
    pub cleaned_text_length: usize,

    /// When the extraction ran (serialized as RFC 3339)
    pub extracted_at: DateTime<Utc>,
}
