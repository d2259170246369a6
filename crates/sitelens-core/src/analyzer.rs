//! Async analysis service
//!
//! Wraps the pure generator with the simulated latency, history recording and
//! user notifications the front end expects. Calls are independent; once
//! started, the delay always runs to completion.

use std::sync::Arc;

use log::info;
use tokio::time::sleep;

use crate::config::AnalyzerConfig;
use crate::error::InvalidUrlError;
use crate::history::{BoundedHistory, HistoryStore};
use crate::notify::{LogNotifier, Notifier};
use crate::profile::generate_profile;
use crate::recommendations::generate_recommendations;
use crate::types::{AnalysisRecord, SiteProfile};

pub struct SiteAnalyzer {
    config: AnalyzerConfig,
    history: Arc<dyn HistoryStore>,
    notifier: Arc<dyn Notifier>,
}

impl SiteAnalyzer {
    pub fn new(
        config: AnalyzerConfig,
        history: Arc<dyn HistoryStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            history,
            notifier,
        }
    }

    /// Analyzer with an in-memory history sized from `config` and log-based
    /// notifications.
    pub fn with_defaults(config: AnalyzerConfig) -> Self {
        let history = Arc::new(BoundedHistory::new(config.history_capacity));
        Self::new(config, history, Arc::new(LogNotifier))
    }

    /// Simulate a crawl of `url` and record the result in history.
    ///
    /// On an invalid URL the error is reported to the notifier and returned;
    /// history is left untouched.
    pub async fn crawl(
        &self,
        url: &str,
        user_id: Option<String>,
    ) -> Result<SiteProfile, InvalidUrlError> {
        sleep(self.config.crawl_delay()).await;

        match generate_profile(url) {
            Ok(profile) => {
                self.history
                    .record(AnalysisRecord::new(url, profile.clone(), user_id));
                info!(
                    "analyzed {url}: seo={} performance={} security={}",
                    profile.seo_score, profile.performance_score, profile.security_score
                );
                self.notifier.success(&format!("Analysis of {url} complete"));
                Ok(profile)
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Failed to analyze website. Please try again. ({err})"));
                Err(err)
            }
        }
    }

    /// Simulate a call to a recommendation service.
    pub async fn recommend(
        &self,
        profile: &SiteProfile,
        url: &str,
    ) -> Result<Vec<String>, InvalidUrlError> {
        sleep(self.config.recommendation_delay()).await;
        generate_recommendations(profile, url)
    }

    /// Oldest-first copy of the analysis history.
    pub fn history(&self) -> Vec<AnalysisRecord> {
        self.history.snapshot()
    }
}
