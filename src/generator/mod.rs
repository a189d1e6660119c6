//! Generator provider layer
//!
//! One capability interface over external text-generation backends, so the
//! prompt construction, parsing, validation, and retry logic above it is
//! written exactly once. Providers differ only in transport.
//!
//! - [`OpenAiGenerator`]: OpenAI-compatible chat-completions endpoints
//! - [`MockGenerator`]: deterministic scripted provider for tests

mod mock;
mod openai;

pub use mock::MockGenerator;
pub use openai::OpenAiGenerator;

use async_trait::async_trait;
use thiserror::Error;

/// Tuning parameters for one generation request
#[derive(Debug, Clone)]
pub struct GenerationParams {
    /// Sampling temperature; moderate values allow phrasing variety
    /// without drifting off-content
    pub temperature: f32,

    /// Output token ceiling, generous enough for the largest FAQ set
    pub max_output_tokens: u32,

    /// Ask the provider for JSON-constrained output where supported
    pub json_output: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 2048,
            json_output: true,
        }
    }
}

/// A provider-side generation failure, tagged for retry eligibility
///
/// Transient failures (overload, timeouts, 5xx) are retriable; credential,
/// authorization, and malformed-request failures are not, since repeating
/// them cannot succeed.
#[derive(Debug, Clone, Error)]
#[error("{detail}")]
pub struct GeneratorError {
    pub retriable: bool,
    pub detail: String,
}

impl GeneratorError {
    /// A transient failure worth retrying
    pub fn retriable(detail: impl Into<String>) -> Self {
        Self {
            retriable: true,
            detail: detail.into(),
        }
    }

    /// A permanent failure; retrying cannot help
    pub fn permanent(detail: impl Into<String>) -> Self {
        Self {
            retriable: false,
            detail: detail.into(),
        }
    }
}

/// Capability interface for external text generators
///
/// Implementations submit a prompt and return the generated text verbatim.
/// They perform no retries and no output parsing; both belong to the
/// caller.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GeneratorError>;
}
