use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::error::InvalidUrlError;

/// Known top-level suffixes removed before keyword and title synthesis.
static TLD_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.(com|org|net|io|co|gov|edu)$").expect("valid TLD regex"));

/// Parse an analysis target, accepting only absolute http(s) URLs.
pub fn parse_target(input: &str) -> Result<Url, InvalidUrlError> {
    let parsed = Url::parse(input).map_err(|err| InvalidUrlError::Parse {
        input: input.to_string(),
        reason: err.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(InvalidUrlError::UnsupportedScheme {
            input: input.to_string(),
            scheme: parsed.scheme().to_string(),
        });
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(InvalidUrlError::MissingHost {
            input: input.to_string(),
        });
    }

    Ok(parsed)
}

/// Validate `input` and return its hostname.
///
/// The URL parser lower-cases and IDNA-encodes the host, so `https://Example.COM`
/// and `https://example.com` share one hostname.
pub fn hostname(input: &str) -> Result<String, InvalidUrlError> {
    let parsed = parse_target(input)?;
    parsed
        .host_str()
        .map(str::to_string)
        .ok_or_else(|| InvalidUrlError::MissingHost {
            input: input.to_string(),
        })
}

/// Strip one trailing known TLD (`.com`, `.org`, ...) from a hostname.
pub fn strip_known_tld(host: &str) -> &str {
    match TLD_SUFFIX.find(host) {
        Some(m) => &host[..m.start()],
        None => host,
    }
}

/// Normalize a URL to its origin (scheme + host + optional port).
///
/// Falls back to trimming trailing slashes if the input cannot be parsed.
pub fn normalize_origin(input: &str) -> String {
    match Url::parse(input) {
        Ok(parsed) => parsed
            .origin()
            .ascii_serialization()
            .trim_end_matches('/')
            .to_string(),
        Err(_) => input.trim_end_matches('/').to_string(),
    }
}
