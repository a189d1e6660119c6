//! Extractor module: URL in, structured document out
//!
//! This module contains the first pipeline stage:
//! - URL normalization and a single bounded HTTP fetch
//! - Failure classification into the fetch taxonomy
//! - HTML parsing with noise exclusion
//! - Whitespace normalization and metadata assembly
//!
//! The extractor performs no retries and knows nothing about persistence
//! or the generation stage.

mod document;
mod fetcher;
mod parser;
mod text;

pub use document::{DocumentMetadata, ExtractedDocument, Headings};
pub use fetcher::{build_http_client, classify_status, classify_transport, fetch_page};
pub use parser::{parse_document, ParsedContent};
pub use text::clean_text;

use crate::config::FetcherConfig;
use crate::url::normalize_url;
use crate::ExtractResult;
use chrono::Utc;
use reqwest::Client;

/// Turns a page URL into an [`ExtractedDocument`]
///
/// Holds only an HTTP client; safe to share and call concurrently for
/// different URLs.
#[derive(Debug, Clone)]
pub struct Extractor {
    client: Client,
}

impl Extractor {
    /// Create an extractor from fetcher configuration
    pub fn new(config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    /// Create an extractor around an existing HTTP client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetches a page and reduces it to structured, denoised text
    ///
    /// Returns whatever the page yielded, even when the content is empty;
    /// minimum-length policy belongs to the caller.
    ///
    /// # Arguments
    ///
    /// * `url` - Page URL; `https://` is assumed when no scheme is given
    ///
    /// # Errors
    ///
    /// * [`crate::ExtractError::InvalidUrl`] - input could not be normalized
    /// * [`crate::ExtractError::Fetch`] - classified network/HTTP failure
    pub async fn extract(&self, url: &str) -> ExtractResult<ExtractedDocument> {
        let url = normalize_url(url)?;

        tracing::info!(url = %url, "fetching page");
        let html = fetch_page(&self.client, &url).await?;
        tracing::debug!(url = %url, bytes = html.len(), "fetched HTML");

        let content = parse_document(&html);
        let cleaned_text = clean_text(&content.raw_text);

        let metadata = document::DocumentMetadata {
            heading_count: content.headings.total(),
            paragraph_count: content.paragraphs.len(),
            raw_text_length: content.raw_text.chars().count(),
            cleaned_text_length: cleaned_text.chars().count(),
            extracted_at: Utc::now(),
        };

        tracing::info!(
            url = %url,
            headings = metadata.heading_count,
            paragraphs = metadata.paragraph_count,
            cleaned_chars = metadata.cleaned_text_length,
            "extraction complete"
        );

        Ok(ExtractedDocument {
            url: url.to_string(),
            title: content.title,
            description: content.description,
            headings: content.headings,
            paragraphs: content.paragraphs,
            raw_text: content.raw_text,
            cleaned_text,
            metadata,
        })
    }
}
