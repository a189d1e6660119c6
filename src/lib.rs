//! Faqsmith: web page to FAQ pipeline
//!
//! This crate ingests a public web page, reduces its HTML to denoised
//! structured text, and drives an external text-generation API into an
//! exact-count, validated list of question/answer pairs.

pub mod config;
pub mod extractor;
pub mod faq;
pub mod generator;
pub mod synthesizer;
pub mod url;

use thiserror::Error;

/// Classification of a failed page fetch
///
/// Every network or HTTP failure maps to exactly one kind so callers can
/// choose a client-facing response without re-deriving network semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchKind {
    /// HTTP 403 - commonly a bot defense rather than real authorization
    Forbidden,

    /// HTTP 404
    NotFound,

    /// HTTP 429
    RateLimited,

    /// HTTP 5xx
    ServerError,

    /// Any other non-2xx/3xx status
    OtherHttp,

    /// No response received at all
    NetworkUnreachable,

    /// Hostname could not be resolved
    DnsFailure,

    /// TCP connection refused
    ConnectionRefused,

    /// Request exceeded the configured timeout
    Timeout,

    /// Certificate invalid, expired, or otherwise untrusted
    TlsFailure,

    /// Anything that escaped classification
    Unknown,
}

impl FetchKind {
    /// Stable snake_case name, used in logs and serialized error payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::OtherHttp => "other_http",
            Self::NetworkUnreachable => "network_unreachable",
            Self::DnsFailure => "dns_failure",
            Self::ConnectionRefused => "connection_refused",
            Self::Timeout => "timeout",
            Self::TlsFailure => "tls_failure",
            Self::Unknown => "unknown",
        }
    }

    /// Returns true if the failure came back as an HTTP status line
    pub fn is_http(&self) -> bool {
        matches!(
            self,
            Self::Forbidden
                | Self::NotFound
                | Self::RateLimited
                | Self::ServerError
                | Self::OtherHttp
        )
    }
}

impl std::fmt::Display for FetchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by the extractor
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid URL '{input}': {message}")]
    InvalidUrl { input: String, message: String },

    #[error("fetch failed for {url} ({kind}): {detail}")]
    Fetch {
        url: String,
        kind: FetchKind,
        detail: String,
    },
}

impl ExtractError {
    /// The fetch classification, if this is a fetch failure
    pub fn fetch_kind(&self) -> Option<FetchKind> {
        match self {
            Self::Fetch { kind, .. } => Some(*kind),
            Self::InvalidUrl { .. } => None,
        }
    }
}

/// Raised by callers when an extraction yields too little usable text
///
/// The extractor itself never enforces this; the threshold is policy that
/// belongs to whoever consumes the document.
#[derive(Debug, Error)]
#[error("extracted content too short: {length} chars (minimum {minimum})")]
pub struct ContentError {
    pub length: usize,
    pub minimum: usize,
}

/// Errors produced by the FAQ synthesizer
#[derive(Debug, Error)]
pub enum SynthesizerError {
    #[error("invalid input: {0}")]
    Input(String),

    #[error("generator request failed (retriable: {retriable}): {detail}")]
    Upstream { retriable: bool, detail: String },

    #[error("could not parse generator output: {0}")]
    Parse(String),

    #[error("generator returned {actual} items, {expected} required")]
    Count { expected: usize, actual: usize },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for extraction operations
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

/// Result type alias for synthesis operations
pub type SynthResult<T> = std::result::Result<T, SynthesizerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use extractor::{ExtractedDocument, Extractor, Headings};
pub use faq::{FaqItem, FaqPair, FaqStatus};
pub use generator::{GenerationParams, GeneratorError, MockGenerator, OpenAiGenerator, TextGenerator};
pub use synthesizer::FaqSynthesizer;
