//! Integration tests for the synthesizer against a chat-completions server
//!
//! These tests run the full prompt-submit-parse-reconcile path with
//! wiremock standing in for the generator API, including the
//! retry-with-backoff sequence against transient server failures.

use faqsmith::config::GeneratorConfig;
use faqsmith::{FaqSynthesizer, OpenAiGenerator, SynthesizerError};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

fn test_generator(server: &MockServer) -> OpenAiGenerator {
    let config = GeneratorConfig {
        endpoint: format!("{}{}", server.uri(), COMPLETIONS_PATH),
        api_key: "test-key".to_string(),
        timeout_secs: 10,
        ..GeneratorConfig::default()
    };
    OpenAiGenerator::new(config).expect("failed to build generator")
}

/// Wraps generated content in the chat-completions response envelope
fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }
        ],
        "usage": {"prompt_tokens": 100, "completion_tokens": 200}
    })
}

fn faq_content(count: usize) -> String {
    let items: Vec<String> = (0..count)
        .map(|i| format!(r#"{{"question": "Q{}?", "answer": "A{}."}}"#, i, i))
        .collect();
    format!("[{}]", items.join(","))
}

#[tokio::test]
async fn test_successful_generation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(&faq_content(5))))
        .mount(&mock_server)
        .await;

    let synthesizer = FaqSynthesizer::new(test_generator(&mock_server));
    let pairs = synthesizer
        .generate("A page about widgets and their maintenance.", Some(5))
        .await
        .unwrap();

    assert_eq!(pairs.len(), 5);
    assert_eq!(pairs[0].question, "Q0?");
}

#[tokio::test]
async fn test_fenced_object_wrapped_response_parsed() {
    let mock_server = MockServer::start().await;

    let content = format!("```json\n{{\"faqs\":{}}}\n```", faq_content(5));
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(&content)))
        .mount(&mock_server)
        .await;

    let synthesizer = FaqSynthesizer::new(test_generator(&mock_server));
    let pairs = synthesizer
        .generate("Some page text.", Some(5))
        .await
        .unwrap();

    assert_eq!(pairs.len(), 5);
}

#[tokio::test]
async fn test_over_generation_trimmed_to_requested() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(&faq_content(9))))
        .mount(&mock_server)
        .await;

    let synthesizer = FaqSynthesizer::new(test_generator(&mock_server));
    let pairs = synthesizer
        .generate("Some page text.", Some(7))
        .await
        .unwrap();

    assert_eq!(pairs.len(), 7);
    assert_eq!(pairs[6].question, "Q6?");
}

#[tokio::test]
async fn test_under_generation_is_count_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(&faq_content(4))))
        .mount(&mock_server)
        .await;

    let synthesizer = FaqSynthesizer::new(test_generator(&mock_server));
    let result = synthesizer.generate("Some page text.", Some(7)).await;

    assert!(matches!(
        result,
        Err(SynthesizerError::Count { expected: 7, actual: 4 })
    ));
}

#[tokio::test]
async fn test_transient_failures_retried_then_succeed() {
    let mock_server = MockServer::start().await;

    // The 500 mock matches the first two requests and then stops, letting
    // the 200 mock take the third attempt.
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("overloaded"))
        .up_to_n_times(2)
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(&faq_content(5))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let synthesizer = FaqSynthesizer::new(test_generator(&mock_server));
    let pairs = synthesizer
        .generate("Some page text.", Some(5))
        .await
        .unwrap();

    assert_eq!(pairs.len(), 5);
}

#[tokio::test]
async fn test_auth_failure_not_retried() {
    let mock_server = MockServer::start().await;

    // A 401 must produce exactly one request; expect(1) verifies on drop
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error": "invalid key"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let synthesizer = FaqSynthesizer::new(test_generator(&mock_server));
    let result = synthesizer.generate("Some page text.", Some(5)).await;

    match result {
        Err(SynthesizerError::Upstream { retriable, detail }) => {
            assert!(!retriable);
            assert!(detail.contains("401"));
        }
        other => panic!("expected Upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_rate_limit_surfaced_as_retriable_after_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let synthesizer = FaqSynthesizer::new(test_generator(&mock_server));
    let result = synthesizer.generate("Some page text.", Some(5)).await;

    match result {
        Err(SynthesizerError::Upstream { retriable, .. }) => assert!(retriable),
        other => panic!("expected Upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_prose_only_response_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(
            "I'm sorry, I cannot produce FAQs for this page.",
        )))
        .mount(&mock_server)
        .await;

    let synthesizer = FaqSynthesizer::new(test_generator(&mock_server));
    let result = synthesizer.generate("Some page text.", Some(5)).await;

    assert!(matches!(result, Err(SynthesizerError::Parse(_))));
}
