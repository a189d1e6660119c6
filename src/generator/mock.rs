//! Deterministic scripted generator for tests
//!
//! Returns pre-configured outcomes without any network calls. Outcomes
//! queue in order; once the script is exhausted the default response is
//! returned for every further call.

use crate::generator::{GenerationParams, GeneratorError, TextGenerator};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scripted in-memory generator
///
/// Clones share the same script and call log, so a test can hold one
/// handle while the code under test owns another.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    default_response: String,
    script: Arc<Mutex<VecDeque<Result<String, GeneratorError>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGenerator {
    /// Create a mock returning a fixed response for every prompt
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock that plays back the given outcomes in order
    pub fn with_script(outcomes: Vec<Result<String, GeneratorError>>) -> Self {
        let mock = Self::new("");
        *mock.script.lock().unwrap() = outcomes.into();
        mock
    }

    /// Append one outcome to the script
    pub fn push_outcome(&self, outcome: Result<String, GeneratorError>) {
        self.script.lock().unwrap().push_back(outcome);
    }

    /// Number of generate calls observed so far
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// The most recent prompt submitted, if any
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, GeneratorError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        match self.script.lock().unwrap().pop_front() {
            Some(outcome) => outcome,
            None => Ok(self.default_response.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_response() {
        let mock = MockGenerator::new("fixed");
        let params = GenerationParams::default();

        assert_eq!(mock.generate("a", &params).await.unwrap(), "fixed");
        assert_eq!(mock.generate("b", &params).await.unwrap(), "fixed");
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_scripted_outcomes_in_order() {
        let mock = MockGenerator::with_script(vec![
            Err(GeneratorError::retriable("busy")),
            Ok("second".to_string()),
        ]);
        let params = GenerationParams::default();

        assert!(mock.generate("p", &params).await.is_err());
        assert_eq!(mock.generate("p", &params).await.unwrap(), "second");
    }

    #[tokio::test]
    async fn test_falls_back_to_default_after_script() {
        let mock = MockGenerator::with_script(vec![Ok("scripted".to_string())]);
        let params = GenerationParams::default();

        assert_eq!(mock.generate("p", &params).await.unwrap(), "scripted");
        assert_eq!(mock.generate("p", &params).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_records_prompts() {
        let mock = MockGenerator::new("r");
        let params = GenerationParams::default();

        mock.generate("first prompt", &params).await.unwrap();
        mock.generate("second prompt", &params).await.unwrap();

        assert_eq!(mock.last_prompt().as_deref(), Some("second prompt"));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let mock = MockGenerator::new("r");
        let clone = mock.clone();
        let params = GenerationParams::default();

        mock.generate("p", &params).await.unwrap();

        assert_eq!(clone.call_count(), 1);
    }
}
