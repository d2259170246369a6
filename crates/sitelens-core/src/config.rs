//! Analyzer configuration
//!
//! Loaded from an optional JSON file. Missing fields fall back to the
//! defaults below; `history_capacity` must be at least 1.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::history::DEFAULT_HISTORY_CAPACITY;

/// Configuration for [`SiteAnalyzer`](crate::analyzer::SiteAnalyzer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Simulated latency before a profile is produced
    #[serde(default = "default_crawl_delay_ms")]
    pub crawl_delay_ms: u64,

    /// Simulated latency before recommendations are produced
    #[serde(default = "default_recommendation_delay_ms")]
    pub recommendation_delay_ms: u64,

    /// Number of analyses kept for the admin view
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            crawl_delay_ms: default_crawl_delay_ms(),
            recommendation_delay_ms: default_recommendation_delay_ms(),
            history_capacity: default_history_capacity(),
        }
    }
}

impl AnalyzerConfig {
    /// Default configuration with both simulated delays disabled.
    pub fn without_delay() -> Self {
        Self {
            crawl_delay_ms: 0,
            recommendation_delay_ms: 0,
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file; missing fields take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config: Self = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }

    pub fn crawl_delay(&self) -> Duration {
        Duration::from_millis(self.crawl_delay_ms)
    }

    pub fn recommendation_delay(&self) -> Duration {
        Duration::from_millis(self.recommendation_delay_ms)
    }
}

fn default_crawl_delay_ms() -> u64 {
    2500
}

fn default_recommendation_delay_ms() -> u64 {
    2000
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: AnalyzerConfig = serde_json::from_str(r#"{"crawl_delay_ms": 10}"#).unwrap();
        assert_eq!(config.crawl_delay_ms, 10);
        assert_eq!(config.recommendation_delay_ms, 2000);
        assert_eq!(config.history_capacity, 50);
    }

    #[test]
    fn without_delay_keeps_capacity() {
        let config = AnalyzerConfig::without_delay();
        assert_eq!(config.crawl_delay(), Duration::ZERO);
        assert_eq!(config.recommendation_delay(), Duration::ZERO);
        assert_eq!(config.history_capacity, DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!("sitelens-config-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, r#"{"history_capacity": 5, "recommendation_delay_ms": 0}"#).unwrap();

        let config = AnalyzerConfig::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.recommendation_delay_ms, 0);
        assert_eq!(config.crawl_delay_ms, 2500);
    }

    #[test]
    fn rejects_zero_capacity() {
        let path = std::env::temp_dir().join(format!("sitelens-config-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, r#"{"history_capacity": 0}"#).unwrap();

        let result = AnalyzerConfig::from_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::ZeroCapacity)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = AnalyzerConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
