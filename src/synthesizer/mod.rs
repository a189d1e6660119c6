//! FAQ synthesizer: cleaned text in, exactly-N validated pairs out
//!
//! This module contains the second pipeline stage:
//! - Input validation, count clamping, and silent input truncation
//! - Prompt construction and submission through the generator trait
//! - Sequential retry with exponential backoff for transient failures
//! - Defensive response parsing and asymmetric count reconciliation
//!
//! A call either fully succeeds with exactly the clamped count of pairs or
//! fails with one typed error; partial results are never returned.

mod parse;
mod prompt;

pub use parse::parse_faq_response;
pub use prompt::build_faq_prompt;

use crate::faq::FaqPair;
use crate::generator::{GenerationParams, TextGenerator};
use crate::{SynthResult, SynthesizerError};
use std::time::Duration;

/// Smallest FAQ set a caller can request
pub const MIN_FAQ_COUNT: u32 = 5;

/// Largest FAQ set a caller can request
pub const MAX_FAQ_COUNT: u32 = 10;

/// Count used when the caller does not supply a usable number
pub const DEFAULT_FAQ_COUNT: u32 = 5;

/// Input ceiling in characters; keeps prompts inside provider token limits
pub const DEFAULT_MAX_INPUT_CHARS: usize = 10_000;

/// Additional attempts after the first failed submission
const MAX_RETRIES: u32 = 2;

/// Clamps a raw numeric count from an untyped boundary (JSON, query
/// strings) into the supported range
///
/// Non-finite values fall back to the default; fractional values floor
/// before clamping.
pub fn clamp_requested_count(raw: f64) -> u32 {
    if !raw.is_finite() {
        return DEFAULT_FAQ_COUNT;
    }

    (raw.floor() as i64).clamp(MIN_FAQ_COUNT as i64, MAX_FAQ_COUNT as i64) as u32
}

/// Truncates input text to the character ceiling, appending an ellipsis
/// marker when anything was cut
///
/// Truncation is silent. The synthesizer optimizes for best effort from
/// what fits, not completeness.
fn truncate_input(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push('…');
    cut
}

/// Drives a text generator into an exact-count FAQ list
///
/// Generic over the provider so the prompt, retry, parsing, and
/// reconciliation logic is written once and shared across backends.
pub struct FaqSynthesizer<G: TextGenerator> {
    generator: G,
    params: GenerationParams,
    max_input_chars: usize,
}

impl<G: TextGenerator> FaqSynthesizer<G> {
    /// Create a synthesizer with default generation parameters
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            params: GenerationParams::default(),
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }

    /// Override the generation parameters
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Override the input character ceiling
    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }

    /// Generates exactly `clamp(requested, 5, 10)` question/answer pairs
    /// from the given text
    ///
    /// # Arguments
    ///
    /// * `text` - Cleaned page text; truncated silently when over the ceiling
    /// * `requested` - Desired pair count; `None` uses the default of 5
    ///
    /// # Errors
    ///
    /// * [`SynthesizerError::Input`] - empty or whitespace-only text
    /// * [`SynthesizerError::Upstream`] - provider failure after retries
    /// * [`SynthesizerError::Parse`] - undecodable or structurally invalid output
    /// * [`SynthesizerError::Count`] - provider under-delivered
    pub async fn generate(
        &self,
        text: &str,
        requested: Option<u32>,
    ) -> SynthResult<Vec<FaqPair>> {
        if text.trim().is_empty() {
            return Err(SynthesizerError::Input(
                "cannot generate FAQs from empty text".to_string(),
            ));
        }

        let count = self.effective_count(requested);
        let input = truncate_input(text, self.max_input_chars);

        tracing::info!(
            requested = ?requested,
            count,
            input_chars = input.chars().count(),
            "generating FAQ set"
        );

        let prompt = build_faq_prompt(&input, count);
        let raw = self.submit_with_retry(&prompt).await?;

        let mut pairs = parse_faq_response(&raw)?;

        // Count reconciliation is asymmetric: excess is trimmed, deficit
        // is an error. Downstream consumers depend on the exact count.
        if pairs.len() > count {
            tracing::warn!(
                returned = pairs.len(),
                count,
                "generator over-delivered, trimming excess"
            );
            pairs.truncate(count);
        } else if pairs.len() < count {
            return Err(SynthesizerError::Count {
                expected: count,
                actual: pairs.len(),
            });
        }

        Ok(pairs)
    }

    /// The count actually used for a request: clamped, defaulted when absent
    pub fn effective_count(&self, requested: Option<u32>) -> usize {
        match requested {
            Some(n) => n.clamp(MIN_FAQ_COUNT, MAX_FAQ_COUNT) as usize,
            None => DEFAULT_FAQ_COUNT as usize,
        }
    }

    /// Submits the prompt, retrying transient failures with exponential
    /// backoff (1s, 2s) before giving up
    ///
    /// Retries are sequential, and the backoff sleeps are plain futures, so
    /// a caller-imposed deadline cancels them cleanly.
    async fn submit_with_retry(&self, prompt: &str) -> SynthResult<String> {
        let mut attempt: u32 = 0;

        loop {
            match self.generator.generate(prompt, &self.params).await {
                Ok(raw) => return Ok(raw),
                Err(err) if err.retriable && attempt < MAX_RETRIES => {
                    let delay = Duration::from_secs(1 << attempt);
                    tracing::warn!(
                        attempt = attempt + 1,
                        delay_secs = delay.as_secs(),
                        error = %err,
                        "generator request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    return Err(SynthesizerError::Upstream {
                        retriable: err.retriable,
                        detail: err.detail,
                    });
                }
            }
        }
    }
}
