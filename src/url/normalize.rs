use crate::ExtractError;
use url::Url;

/// Normalizes a caller-supplied URL into an absolute HTTPS-or-HTTP URL
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace; reject empty input
/// 2. Prepend `https://` when no scheme prefix is present
/// 3. Parse the URL; reject if malformed
/// 4. Reject schemes other than HTTP and HTTPS
/// 5. Require a host
/// 6. Remove the fragment (never sent to the server)
///
/// # Arguments
///
/// * `input` - The URL string as supplied by the caller
///
/// # Returns
///
/// * `Ok(Url)` - Normalized absolute URL
/// * `Err(ExtractError::InvalidUrl)` - Input could not be normalized
///
/// # Examples
///
/// ```
/// use faqsmith::url::normalize_url;
///
/// let url = normalize_url("  example.com/docs  ").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/docs");
/// ```
pub fn normalize_url(input: &str) -> Result<Url, ExtractError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(invalid(input, "URL is empty"));
    }

    // Default to secure HTTP when the caller omitted the scheme entirely.
    // "://" anywhere in the string means a scheme was given, even a bad one.
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let mut url = Url::parse(&candidate).map_err(|e| invalid(input, &e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(
            input,
            &format!("only HTTP and HTTPS are supported, got: {}", url.scheme()),
        ));
    }

    if url.host_str().is_none() {
        return Err(invalid(input, "URL has no host"));
    }

    url.set_fragment(None);

    Ok(url)
}

fn invalid(input: &str, message: &str) -> ExtractError {
    ExtractError::InvalidUrl {
        input: input.to_string(),
        message: message.to_string(),
    }
}
