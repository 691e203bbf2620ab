//! Validation of URLs submitted for shortening.

use url::Url;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("Invalid URL format: {0}")]
    Malformed(#[from] url::ParseError),

    #[error("URL contains control characters")]
    ControlCharacters,
}

/// Validates that `input` is an absolute URL and returns the text to store.
///
/// Surrounding whitespace is trimmed; otherwise the input is kept exactly as
/// submitted, so resolving a token hands back the URL the client sent rather
/// than a re-serialised form (`https://example.com` stays without a trailing
/// slash).
///
/// # Errors
///
/// Returns [`TargetUrlError::Malformed`] for relative or malformed URLs
/// (missing scheme, empty host, bad syntax).
/// Returns [`TargetUrlError::ControlCharacters`] if the URL could not be sent
/// back as a `Location` header.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_target_url(" https://example.com ").unwrap(), "https://example.com");
/// assert!(parse_target_url("://bad").is_err());
/// ```
pub fn parse_target_url(input: &str) -> Result<String, TargetUrlError> {
    let trimmed = input.trim();

    if trimmed.chars().any(char::is_control) {
        return Err(TargetUrlError::ControlCharacters);
    }

    Url::parse(trimmed)?;

    Ok(trimmed.to_string())
}
