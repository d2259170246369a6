//! Secondary attribute derivation
//!
//! Booleans follow the pattern `fingerprint mod K != 0 || score > threshold`,
//! so a strong parent score always implies the "good" value while weaker sites
//! still vary by hash. Counts and timings lean the same way: a higher score
//! never produces a worse-looking attribute.

use std::collections::BTreeMap;

use crate::fingerprint::Fingerprint;
use crate::scoring::Scores;
use crate::url_utils::strip_known_tld;

/// Keywords every profile reports alongside the domain-derived ones.
pub const GENERIC_KEYWORDS: [&str; 3] = ["online", "best", "service"];

const TITLE_SUFFIXES: [&str; 4] = ["Homepage", "Home", "Welcome", "Official Site"];

const TAGLINES: [&str; 4] = [
    "your destination for quality content",
    "the leading provider of innovative solutions",
    "trusted by thousands of customers",
    "professional services and products",
];

/// Everything in a profile besides the scores and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes {
    pub title: String,
    pub description: String,
    pub h1_count: u32,
    pub h2_count: u32,
    pub img_without_alt: u32,
    pub external_links: u32,
    pub internal_links: u32,
    pub word_count: u32,
    pub load_time: f64,
    pub has_canonical: bool,
    pub has_sitemap: bool,
    pub has_robots: bool,
    pub has_https: bool,
    pub meta_tags_count: u32,
    pub mobile_friendly: bool,
    pub keyword_density: BTreeMap<String, f64>,
    pub cumulative_layout_shift: f64,
}

impl Attributes {
    pub fn derive(host: &str, fp: Fingerprint, scores: Scores) -> Self {
        let seo = u32::from(scores.seo);
        let performance = u32::from(scores.performance);
        let security = u32::from(scores.security);

        let h1_count = if seo > 80 { 1 } else { 1 + fp.rem(2) };

        Self {
            title: synthesize_title(host, fp),
            description: synthesize_description(host, fp),
            h1_count,
            h2_count: 2 + fp.rem(6) + (100 - seo) / 20,
            img_without_alt: (100 - seo) / 15,
            external_links: 3 + fp.rem(12),
            internal_links: 8 + fp.rem(20),
            word_count: 300 + fp.rem(1200) + if seo > 70 { 500 } else { 0 },
            load_time: load_time(fp, performance),
            has_canonical: fp.not_divisible_by(5) || seo > 75,
            has_sitemap: fp.not_divisible_by(6) || seo > 70,
            has_robots: fp.not_divisible_by(7) || seo > 65,
            has_https: fp.not_divisible_by(9) || security > 60,
            meta_tags_count: 2 + fp.rem(8) + if seo > 75 { 3 } else { 0 },
            mobile_friendly: fp.not_divisible_by(11) || performance > 65,
            keyword_density: keyword_density(host, fp),
            cumulative_layout_shift: f64::from(100 - performance) / 200.0
                + f64::from(fp.rem(5)) / 100.0,
        }
    }
}

/// Seconds; inversely related to the performance score.
fn load_time(fp: Fingerprint, performance: u32) -> f64 {
    f64::from(100 - performance) / 20.0 + f64::from(fp.rem(10)) / 10.0
}

/// Split the hostname (minus a known TLD) on `.`/`-` and weight each token
/// longer than two characters, then add the generic keywords.
fn keyword_density(host: &str, fp: Fingerprint) -> BTreeMap<String, f64> {
    let mut density = BTreeMap::new();
    let token_density = f64::from(5 + fp.rem(7)) / 100.0;

    for word in strip_known_tld(host).split(['.', '-']) {
        if word.chars().count() > 2 {
            density.insert(word.to_string(), token_density);
        }
    }

    let [online, best, service] = GENERIC_KEYWORDS;
    density.insert(online.to_string(), f64::from(3 + fp.rem(4)) / 100.0);
    density.insert(best.to_string(), f64::from(2 + fp.rem(3)) / 100.0);
    density.insert(service.to_string(), f64::from(2 + fp.rem(4)) / 100.0);

    density
}

fn synthesize_title(host: &str, fp: Fingerprint) -> String {
    let mut chars = host.chars();
    let head = chars
        .next()
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_default();
    let suffix = TITLE_SUFFIXES[fp.rem(TITLE_SUFFIXES.len() as u64) as usize];
    format!("{head}{} - {suffix}", strip_known_tld(chars.as_str()))
}

fn synthesize_description(host: &str, fp: Fingerprint) -> String {
    let tagline = TAGLINES[fp.rem(TAGLINES.len() as u64) as usize];
    format!("Welcome to {} - {tagline}.", strip_known_tld(host))
}
