//! Score synthesis
//!
//! Turns a hostname fingerprint into the three headline scores. Domain-name
//! keywords shift the base values; the fingerprint adds a bounded, deterministic
//! perturbation on top.

use log::debug;

use crate::fingerprint::Fingerprint;

/// Lowest score any metric can report.
pub const MIN_SCORE: u8 = 35;

/// Highest score any metric can report.
pub const MAX_SCORE: u8 = 98;

const SEO_BASE: i32 = 65;
const PERFORMANCE_BASE: i32 = 70;
const SECURITY_BASE: i32 = 68;

const SEO_VARIANCE: u64 = 20;
const PERFORMANCE_VARIANCE: u64 = 25;
const SECURITY_VARIANCE: u64 = 18;

/// Site categories inferred from substrings of the hostname.
///
/// Matching is case-sensitive on the parsed (already lower-cased) hostname.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainTraits {
    /// Hostname contains "blog" or "news".
    pub content: bool,
    /// Hostname contains "shop" or "store".
    pub commerce: bool,
    /// Hostname contains "gov" or "edu".
    pub institutional: bool,
}

impl DomainTraits {
    pub fn detect(host: &str) -> Self {
        Self {
            content: host.contains("blog") || host.contains("news"),
            commerce: host.contains("shop") || host.contains("store"),
            institutional: host.contains("gov") || host.contains("edu"),
        }
    }
}

/// The three headline scores of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scores {
    pub seo: u8,
    pub performance: u8,
    pub security: u8,
}

impl Scores {
    pub fn synthesize(fingerprint: Fingerprint, traits: DomainTraits) -> Self {
        let mut seo_base = SEO_BASE;
        let mut performance_base = PERFORMANCE_BASE;
        let mut security_base = SECURITY_BASE;

        if traits.content {
            seo_base += 8;
            performance_base -= 5;
        }

        if traits.commerce {
            performance_base -= 8;
            security_base += 10;
        }

        if traits.institutional {
            seo_base += 5;
            security_base += 12;
        }

        let scores = Self {
            seo: perturb(seo_base, fingerprint, SEO_VARIANCE),
            performance: perturb(performance_base, fingerprint, PERFORMANCE_VARIANCE),
            security: perturb(security_base, fingerprint, SECURITY_VARIANCE),
        };

        debug!(
            "synthesized scores seo={} performance={} security={} (fingerprint {}, {:?})",
            scores.seo,
            scores.performance,
            scores.security,
            fingerprint.value(),
            traits
        );

        scores
    }
}

/// `clamp(base + fingerprint mod variance, MIN_SCORE, MAX_SCORE)`
fn perturb(base: i32, fingerprint: Fingerprint, variance: u64) -> u8 {
    let raw = base + fingerprint.rem(variance) as i32;
    raw.clamp(i32::from(MIN_SCORE), i32::from(MAX_SCORE)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores_for(host: &str) -> Scores {
        Scores::synthesize(Fingerprint::of(host), DomainTraits::detect(host))
    }

    #[test]
    fn plain_domain_uses_base_values() {
        // 1113 % 20 = 13, % 25 = 13, % 18 = 15
        assert_eq!(
            scores_for("example.com"),
            Scores {
                seo: 78,
                performance: 83,
                security: 83,
            }
        );
    }

    #[test]
    fn shop_domain_trades_performance_for_security() {
        // 1600 % 20 = 0, % 25 = 0, % 18 = 16; performance 70-8, security 68+10
        assert_eq!(
            scores_for("example-shop.com"),
            Scores {
                seo: 65,
                performance: 62,
                security: 94,
            }
        );
    }

    #[test]
    fn institutional_domain_boosts_seo_and_security() {
        // 819 % 20 = 19, % 25 = 19, % 18 = 9
        assert_eq!(
            scores_for("city.gov"),
            Scores {
                seo: 89,
                performance: 89,
                security: 89,
            }
        );
    }

    #[test]
    fn content_domain_shifts_seo_up_and_performance_down() {
        // 1127 % 20 = 7, % 25 = 2, % 18 = 11
        assert_eq!(
            scores_for("technews.io"),
            Scores {
                seo: 80,
                performance: 67,
                security: 79,
            }
        );
    }

    #[test]
    fn traits_are_case_sensitive() {
        assert!(DomainTraits::detect("myshop.com").commerce);
        assert!(!DomainTraits::detect("mySHOP.com").commerce);
        assert!(DomainTraits::detect("edu-news.org").content);
        assert!(DomainTraits::detect("edu-news.org").institutional);
    }

    #[test]
    fn clamps_to_bounds() {
        assert_eq!(perturb(200, Fingerprint::of("x"), 10), MAX_SCORE);
        assert_eq!(perturb(-50, Fingerprint::of(""), 10), MIN_SCORE);
    }

    #[test]
    fn all_traits_stay_in_range() {
        let traits = DomainTraits {
            content: true,
            commerce: true,
            institutional: true,
        };
        for host in ["a", "shop.blog.gov", "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzz.edu"] {
            let scores = Scores::synthesize(Fingerprint::of(host), traits);
            for value in [scores.seo, scores.performance, scores.security] {
                assert!((MIN_SCORE..=MAX_SCORE).contains(&value));
            }
        }
    }
}
