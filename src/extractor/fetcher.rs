//! HTTP fetcher for page extraction
//!
//! This module handles the single outbound page request:
//! - Building an HTTP client with a realistic browser header set
//! - Bounded timeout and redirect handling
//! - Classifying every failure into one [`FetchKind`]
//!
//! There is no retry here. A blocked or failed fetch is surfaced
//! immediately; the failure taxonomy is the deliverable.

use crate::config::FetcherConfig;
use crate::{ExtractError, FetchKind};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER};
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Builds the HTTP client used for page fetches
///
/// The header set identifies a mainstream browser. Plenty of sites return
/// 403 to anything that looks like a script, so a bare default user agent
/// would inflate the `forbidden` failure rate for pages that are actually
/// reachable.
///
/// # Arguments
///
/// * `config` - Fetcher timeouts, redirect bound, and user-agent string
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(REFERER, HeaderValue::from_static("https://www.google.com/"));

    Client::builder()
        .user_agent(&config.user_agent)
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .redirect(Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its HTML body
///
/// Any 2xx or 3xx status counts as success; everything else is classified
/// and surfaced as [`ExtractError::Fetch`].
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - Normalized absolute URL to fetch
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, ExtractError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| fetch_error(url, classify_transport(&e), e.to_string()))?;

    let status = response.status();
    if !(status.is_success() || status.is_redirection()) {
        return Err(fetch_error(
            url,
            classify_status(status),
            format!("HTTP {}", status),
        ));
    }

    response
        .text()
        .await
        .map_err(|e| fetch_error(url, FetchKind::Unknown, format!("failed to read body: {}", e)))
}

fn fetch_error(url: &Url, kind: FetchKind, detail: String) -> ExtractError {
    ExtractError::Fetch {
        url: url.to_string(),
        kind,
        detail,
    }
}

/// Maps a non-success HTTP status to its failure classification
pub fn classify_status(status: StatusCode) -> FetchKind {
    match status {
        StatusCode::FORBIDDEN => FetchKind::Forbidden,
        StatusCode::NOT_FOUND => FetchKind::NotFound,
        StatusCode::TOO_MANY_REQUESTS => FetchKind::RateLimited,
        s if s.is_server_error() => FetchKind::ServerError,
        _ => FetchKind::OtherHttp,
    }
}

/// Maps a transport-level reqwest error to its failure classification
///
/// reqwest collapses DNS, TCP, and TLS problems into one connect error, so
/// the finer distinction comes from walking the error source chain.
pub fn classify_transport(err: &reqwest::Error) -> FetchKind {
    if err.is_timeout() {
        return FetchKind::Timeout;
    }

    let chain = error_chain_text(err);

    if chain.contains("certificate") || chain.contains("tls") || chain.contains("ssl") {
        FetchKind::TlsFailure
    } else if chain.contains("dns") || chain.contains("failed to lookup") {
        FetchKind::DnsFailure
    } else if chain.contains("connection refused") {
        FetchKind::ConnectionRefused
    } else if err.is_connect() {
        FetchKind::NetworkUnreachable
    } else {
        FetchKind::Unknown
    }
}

/// Concatenates the lowercased messages of an error and all its sources
fn error_chain_text(err: &reqwest::Error) -> String {
    let mut text = err.to_string().to_lowercase();
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        text.push(' ');
        text.push_str(&inner.to_string().to_lowercase());
        source = inner.source();
    }
    text
}
