//! Synthetic site profile generation

use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, warn};

use crate::attributes::Attributes;
use crate::error::InvalidUrlError;
use crate::fingerprint::Fingerprint;
use crate::scoring::{DomainTraits, Scores};
use crate::types::SiteProfile;
use crate::url_utils::hostname;

/// Generate a profile for `url`, stamped with the current time.
///
/// Fails with [`InvalidUrlError`] unless `url` is an absolute http(s) URL.
/// Everything except the timestamp is a pure function of the hostname.
pub fn generate_profile(url: &str) -> Result<SiteProfile, InvalidUrlError> {
    generate_profile_at(url, Utc::now())
}

/// Same as [`generate_profile`] with an explicit generation time.
pub fn generate_profile_at(
    url: &str,
    generated_at: DateTime<Utc>,
) -> Result<SiteProfile, InvalidUrlError> {
    let host = hostname(url).inspect_err(|err| warn!("rejected analysis target: {err}"))?;

    let fingerprint = Fingerprint::of(&host);
    let scores = Scores::synthesize(fingerprint, DomainTraits::detect(&host));
    let attrs = Attributes::derive(&host, fingerprint, scores);

    debug!(
        "derived profile for {host}: {} keywords, load time {:.2}s",
        attrs.keyword_density.len(),
        attrs.load_time
    );

    Ok(SiteProfile {
        title: attrs.title,
        description: attrs.description,
        h1_count: attrs.h1_count,
        h2_count: attrs.h2_count,
        img_without_alt: attrs.img_without_alt,
        external_links: attrs.external_links,
        internal_links: attrs.internal_links,
        word_count: attrs.word_count,
        load_time: attrs.load_time,
        has_canonical: attrs.has_canonical,
        has_sitemap: attrs.has_sitemap,
        has_robots: attrs.has_robots,
        has_https: attrs.has_https,
        meta_tags_count: attrs.meta_tags_count,
        mobile_friendly: attrs.mobile_friendly,
        keyword_density: attrs.keyword_density,
        seo_score: scores.seo,
        performance_score: scores.performance,
        security_score: scores.security,
        cumulative_layout_shift: attrs.cumulative_layout_shift,
        timestamp: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
