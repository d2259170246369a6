//! Error types shared across sitelens-core

use thiserror::Error;

/// Returned when an analysis target is not an absolute http(s) URL.
///
/// This is the only failure the generator itself can produce. No partial
/// profile is ever returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidUrlError {
    /// The input could not be parsed as an absolute URL.
    #[error("invalid URL '{input}': {reason}")]
    Parse { input: String, reason: String },

    /// The URL parsed, but its scheme is not http or https.
    #[error("unsupported URL scheme '{scheme}' in '{input}' (expected http or https)")]
    UnsupportedScheme { input: String, scheme: String },

    /// The URL has no hostname to analyze.
    #[error("URL '{input}' has no host")]
    MissingHost { input: String },
}

/// Errors raised while moving analyses through the session store.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to encode session payload: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode session payload: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Errors raised while loading analyzer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("history capacity must be at least 1")]
    ZeroCapacity,
}
