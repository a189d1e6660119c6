//! OpenAI-compatible chat-completions provider
//!
//! Works against any endpoint speaking the chat-completions shape
//! (OpenAI, OpenRouter, compatible gateways). The bearer credential and
//! endpoint come from validated configuration; nothing is read from the
//! environment at call time.

use crate::config::GeneratorConfig;
use crate::generator::{GenerationParams, GeneratorError, TextGenerator};
use crate::ConfigError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How much of an upstream error body to carry into error details
const ERROR_BODY_SNIPPET_CHARS: usize = 300;

/// Chat-completions client over one configured endpoint and model
pub struct OpenAiGenerator {
    config: GeneratorConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl OpenAiGenerator {
    /// Create a generator from validated configuration
    ///
    /// Fails when the bearer credential is missing; this is the startup
    /// validation point, so calls never discover a missing key mid-flight.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        if config.api_key.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "generator API key is empty; set the {} environment variable",
                config.api_key_env
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigError::Validation(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GeneratorError> {
        // response_format is only sent when both the request asks for JSON
        // and the deployment is marked as supporting it; compatible
        // gateways differ here.
        let response_format = (params.json_output && self.config.structured_output)
            .then_some(ResponseFormat {
                format_type: "json_object",
            });

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: params.temperature,
            max_tokens: params.max_output_tokens,
            response_format,
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_chars = prompt.len(),
            temperature = params.temperature,
            "submitting generation request"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let retriable = status.as_u16() == 408
                || status.as_u16() == 429
                || status.is_server_error();
            let body = response.text().await.unwrap_or_default();

            return Err(GeneratorError {
                retriable,
                detail: format!("HTTP {}: {}", status, snippet(&body)),
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::permanent(format!("malformed completion payload: {}", e)))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GeneratorError::permanent("completion contained no choices"))?;

        tracing::debug!(response_chars = content.len(), "generation response received");

        Ok(content)
    }
}

/// Transport failures are transient unless the request itself was
/// unbuildable
fn classify_send_error(err: reqwest::Error) -> GeneratorError {
    GeneratorError {
        retriable: !err.is_builder(),
        detail: format!("request failed: {}", err),
    }
}

/// Bounds an upstream error body so error payloads stay small
fn snippet(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= ERROR_BODY_SNIPPET_CHARS {
        trimmed.to_string()
    } else {
        let cut: String = trimmed.chars().take(ERROR_BODY_SNIPPET_CHARS).collect();
        format!("{}…", cut)
    }
}
