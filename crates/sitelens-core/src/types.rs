//! Common types used across sitelens

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Synthesized metrics for one analyzed URL.
///
/// Produced fresh for every request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteProfile {
    pub title: String,
    pub description: String,
    pub h1_count: u32,
    pub h2_count: u32,
    pub img_without_alt: u32,
    pub external_links: u32,
    pub internal_links: u32,
    pub word_count: u32,
    /// Seconds
    pub load_time: f64,
    pub has_canonical: bool,
    pub has_sitemap: bool,
    pub has_robots: bool,
    pub has_https: bool,
    pub meta_tags_count: u32,
    pub mobile_friendly: bool,
    /// Keyword to density in `[0, 1]`
    pub keyword_density: BTreeMap<String, f64>,
    pub seo_score: u8,
    pub performance_score: u8,
    pub security_score: u8,
    pub cumulative_layout_shift: f64,
    /// RFC 3339 generation time
    pub timestamp: String,
}

impl SiteProfile {
    /// Load time with one decimal, ties rounded up (`2.25` reads `2.3`).
    pub fn load_time_display(&self) -> String {
        format_fixed(self.load_time, 1)
    }
}

/// Format `value` with `digits` decimals, rounding ties away from zero.
///
/// `{:.N}` rounds exact binary ties to even, which would print `2.2` for
/// `2.25`.
pub fn format_fixed(value: f64, digits: u8) -> String {
    let scale = 10f64.powi(i32::from(digits));
    format!("{:.*}", usize::from(digits), (value * scale).round() / scale)
}

/// Label shown next to a score on the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreRating {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreRating::Excellent,
            70..=79 => ScoreRating::Good,
            _ => ScoreRating::NeedsImprovement,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreRating::Excellent => "Excellent",
            ScoreRating::Good => "Good with room for improvement",
            ScoreRating::NeedsImprovement => "Needs improvement",
        }
    }
}

impl fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry in the analysis history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub url: String,
    pub profile: SiteProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl AnalysisRecord {
    pub fn new(url: impl Into<String>, profile: SiteProfile, user_id: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            url: url.into(),
            profile,
            user_id,
            recorded_at: Utc::now(),
        }
    }
}

/// What the analyze step hands to the results step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPayload {
    pub url: String,
    pub profile: SiteProfile,
    pub timestamp: DateTime<Utc>,
}
