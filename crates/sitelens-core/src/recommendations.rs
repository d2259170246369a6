//! Recommendation selection
//!
//! Walks a fixed decision tree over a [`SiteProfile`] and collects advice in
//! check order: SEO issues, performance, security, domain-category bonuses,
//! then generic fillers. The result is capped at [`MAX_RECOMMENDATIONS`].

use log::debug;

use crate::error::InvalidUrlError;
use crate::scoring::DomainTraits;
use crate::types::SiteProfile;
use crate::url_utils::hostname;

/// Upper bound on returned recommendations.
pub const MAX_RECOMMENDATIONS: usize = 8;

/// Fillers are appended until at least this many recommendations exist.
pub const MIN_RECOMMENDATIONS: usize = 5;

/// Scores below this trigger the per-category checks.
const ATTENTION_THRESHOLD: u8 = 70;

const TITLE_LENGTH: std::ops::RangeInclusive<usize> = 30..=65;
const DESCRIPTION_LENGTH: std::ops::RangeInclusive<usize> = 120..=160;
const MIN_INTERNAL_LINKS: u32 = 10;

const CANONICAL: &str = "Add canonical tags to prevent duplicate content issues and improve search engine ranking.";
const MOBILE: &str = "Your site isn't fully mobile-friendly. With Google's mobile-first indexing, this could significantly impact your rankings.";
const HTTPS: &str = "Implement HTTPS encryption immediately. Not only is this critical for security, but Google also prioritizes secure websites in search results.";
const CSP: &str = "Consider implementing Content Security Policy (CSP) headers to prevent XSS attacks and enhance your website's security posture.";
const CORS: &str = "Set up proper CORS policies to protect your users' data and prevent unauthorized access to your website resources.";

const COMMERCE: [&str; 2] = [
    "Implement structured data markup for your products to enhance visibility in search results with rich snippets.",
    "Consider adding customer reviews with schema markup to improve click-through rates and build trust.",
];

const CONTENT: [&str; 2] = [
    "Use proper schema markup for articles to appear in Google News and other news aggregators.",
    "Implement a consistent content publishing schedule to improve search engine crawling frequency.",
];

/// Generic advice used to pad short lists, in order.
pub const FILLER_POOL: [&str; 5] = [
    "Create a comprehensive content strategy focusing on long-tail keywords to attract more targeted traffic.",
    "Implement a responsive design to ensure your website displays correctly on all devices.",
    "Consider implementing schema markup to enhance your search results appearance with rich snippets.",
    "Improve page loading speed by optimizing images and implementing lazy loading.",
    "Set up Google Search Console and Bing Webmaster Tools to monitor your site's performance in search results.",
];

/// Select recommendations for `profile`, using `url` for the domain-category
/// bonuses.
///
/// Returns between [`MIN_RECOMMENDATIONS`] and [`MAX_RECOMMENDATIONS`]
/// entries. Fails only if `url` is not an absolute http(s) URL.
pub fn generate_recommendations(
    profile: &SiteProfile,
    url: &str,
) -> Result<Vec<String>, InvalidUrlError> {
    let host = hostname(url)?;
    let mut recommendations = Vec::new();

    if profile.seo_score < ATTENTION_THRESHOLD {
        seo_checks(profile, &mut recommendations);
    }

    if profile.performance_score < ATTENTION_THRESHOLD {
        recommendations.push(format!(
            "Your page load time ({}s) needs improvement. Consider optimizing images, minifying CSS/JS, and leveraging browser caching to enhance user experience.",
            profile.load_time_display()
        ));

        if !profile.mobile_friendly {
            recommendations.push(MOBILE.to_string());
        }
    }

    if profile.security_score < ATTENTION_THRESHOLD {
        if !profile.has_https {
            recommendations.push(HTTPS.to_string());
        }
        recommendations.push(CSP.to_string());
        recommendations.push(CORS.to_string());
    }

    let traits = DomainTraits::detect(&host);
    if traits.commerce {
        recommendations.extend(COMMERCE.iter().map(|s| s.to_string()));
    }
    if traits.content {
        recommendations.extend(CONTENT.iter().map(|s| s.to_string()));
    }

    let specific = recommendations.len();
    let mut fillers = FILLER_POOL.iter();
    while recommendations.len() < MIN_RECOMMENDATIONS {
        match fillers.next() {
            Some(filler) => recommendations.push(filler.to_string()),
            None => break,
        }
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);

    debug!(
        "selected {} recommendations for {host} ({specific} specific)",
        recommendations.len()
    );

    Ok(recommendations)
}

fn seo_checks(profile: &SiteProfile, out: &mut Vec<String>) {
    if !profile.has_canonical {
        out.push(CANONICAL.to_string());
    }

    let title_len = profile.title.chars().count();
    if !TITLE_LENGTH.contains(&title_len) {
        out.push(format!(
            "Optimize your title tag length (currently {title_len} characters). Keep it between 50-60 characters for optimal visibility in search results."
        ));
    }

    let description_len = profile.description.chars().count();
    if !DESCRIPTION_LENGTH.contains(&description_len) {
        out.push(format!(
            "Improve meta description length (currently {description_len} characters). Aim for 150-160 characters to increase click-through rates."
        ));
    }

    if profile.h1_count != 1 {
        out.push(format!(
            "Ensure your page has exactly one H1 tag (currently has {}). Multiple H1 tags can confuse search engines about your page's main topic.",
            profile.h1_count
        ));
    }

    if profile.img_without_alt > 0 {
        out.push(format!(
            "Add alt text to {} images to improve accessibility and SEO. This also helps search engines understand image content.",
            profile.img_without_alt
        ));
    }

    if profile.internal_links < MIN_INTERNAL_LINKS {
        out.push(format!(
            "Increase internal linking (currently {} links). A good internal linking structure helps search engines discover and understand the hierarchy of your content.",
            profile.internal_links
        ));
    }
}
