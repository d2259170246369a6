//! # sitelens-core
//!
//! Core library for generating synthetic site analyses.
//!
//! No page is ever fetched. Every metric is derived from a fingerprint of the
//! URL's hostname, so the same site always produces the same scores.
//!
//! This library provides:
//! - Profile generation: SEO, performance and security scores plus the
//!   attributes that follow from them
//! - Recommendation selection from a fixed pool, driven by score thresholds
//! - A bounded analysis history, a take-once session store and an async
//!   [`SiteAnalyzer`] that ties them together
//!
//! ## Example
//!
//! ```
//! use sitelens_core::{generate_profile, generate_recommendations};
//!
//! # fn example() -> Result<(), sitelens_core::InvalidUrlError> {
//! let url = "https://example-shop.com";
//! let profile = generate_profile(url)?;
//! assert_eq!(profile.security_score, 94);
//!
//! let recommendations = generate_recommendations(&profile, url)?;
//! assert!(recommendations.len() <= 8);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod analyzer;
pub mod attributes;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod history;
pub mod notify;
pub mod profile;
pub mod recommendations;
pub mod scoring;
pub mod session;
pub mod types;
pub mod url_utils;

// Re-export commonly used types
pub use analyzer::SiteAnalyzer;
pub use config::AnalyzerConfig;
pub use error::{ConfigError, InvalidUrlError, SessionError};
pub use history::{BoundedHistory, DEFAULT_HISTORY_CAPACITY, HistoryStore};
pub use notify::{LogNotifier, Notifier};
pub use profile::{generate_profile, generate_profile_at};
pub use recommendations::{MAX_RECOMMENDATIONS, MIN_RECOMMENDATIONS, generate_recommendations};
pub use scoring::{MAX_SCORE, MIN_SCORE};
pub use session::{MemorySessionStore, SessionStore, store_analysis, take_analysis};
pub use types::{AnalysisRecord, ScoreRating, SessionPayload, SiteProfile, format_fixed};
