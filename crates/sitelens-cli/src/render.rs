//! Text rendering for analysis reports and the history table

use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};

use sitelens_core::url_utils::normalize_origin;
use sitelens_core::{AnalysisRecord, ScoreRating, SessionPayload, format_fixed};
use url::Url;

const DIVIDER: &str = "─────────────────────────────────────────────────────────────";
const LABEL_WIDTH: usize = 16;
const BAR_WIDTH: usize = 20;

pub fn push_section_header(buf: &mut String, icon: &str, title: &str) {
    let _ = writeln!(buf, "{DIVIDER}");
    let _ = writeln!(buf, "{icon} {title}");
    let _ = writeln!(buf, "{DIVIDER}");
}

pub fn push_key_value(buf: &mut String, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    let _ = writeln!(buf, "• {:<width$} : {}", label, value, width = LABEL_WIDTH);
}

/// `[#####-----] 72/100`
pub fn score_bar(score: u8) -> String {
    let filled = ((usize::from(score) * BAR_WIDTH + 50) / 100).min(BAR_WIDTH);
    format!(
        "[{}{}] {score}/100",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

fn check_mark(value: bool) -> &'static str {
    if value { "✅ yes" } else { "❌ no" }
}

/// Full results-page report for one analysis.
pub fn render_report(payload: &SessionPayload, recommendations: &[String]) -> String {
    let profile = &payload.profile;
    let mut buf = String::new();

    push_section_header(&mut buf, "🔎", &format!("Analysis Results: {}", payload.url));
    push_key_value(&mut buf, "Title", &profile.title);
    push_key_value(&mut buf, "Description", &profile.description);
    push_key_value(&mut buf, "Analyzed At", &profile.timestamp);
    let _ = writeln!(&mut buf);

    push_section_header(&mut buf, "📊", "Scores");
    for (label, score) in [
        ("SEO Score", profile.seo_score),
        ("Performance", profile.performance_score),
        ("Security", profile.security_score),
    ] {
        push_key_value(
            &mut buf,
            label,
            &format!("{}  {}", score_bar(score), ScoreRating::from_score(score)),
        );
    }
    let _ = writeln!(&mut buf);

    push_section_header(&mut buf, "🧭", "On-Page SEO");
    push_key_value(&mut buf, "H1 Tags", &profile.h1_count.to_string());
    push_key_value(&mut buf, "H2 Tags", &profile.h2_count.to_string());
    push_key_value(&mut buf, "Images w/o Alt", &profile.img_without_alt.to_string());
    push_key_value(&mut buf, "Internal Links", &profile.internal_links.to_string());
    push_key_value(&mut buf, "External Links", &profile.external_links.to_string());
    push_key_value(&mut buf, "Word Count", &profile.word_count.to_string());
    push_key_value(&mut buf, "Meta Tags", &profile.meta_tags_count.to_string());
    push_key_value(&mut buf, "Canonical Tag", check_mark(profile.has_canonical));
    push_key_value(&mut buf, "Sitemap", check_mark(profile.has_sitemap));
    push_key_value(&mut buf, "robots.txt", check_mark(profile.has_robots));
    let _ = writeln!(&mut buf);

    push_section_header(&mut buf, "⚡", "Performance & Security");
    push_key_value(&mut buf, "Load Time", &format!("{}s", profile.load_time_display()));
    push_key_value(
        &mut buf,
        "Layout Shift",
        &format_fixed(profile.cumulative_layout_shift, 2),
    );
    push_key_value(&mut buf, "Mobile Friendly", check_mark(profile.mobile_friendly));
    push_key_value(&mut buf, "HTTPS", check_mark(profile.has_https));
    let _ = writeln!(&mut buf);

    if !profile.keyword_density.is_empty() {
        push_section_header(&mut buf, "🔑", "Keyword Density");
        let mut keywords: Vec<_> = profile.keyword_density.iter().collect();
        keywords.sort_by(|a, b| b.1.total_cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (keyword, density) in keywords {
            push_key_value(&mut buf, keyword, &format!("{:.0}%", density * 100.0));
        }
        let _ = writeln!(&mut buf);
    }

    push_section_header(&mut buf, "💡", "Recommendations");
    if recommendations.is_empty() {
        let _ = writeln!(&mut buf, "No recommendations.");
    } else {
        for (idx, recommendation) in recommendations.iter().enumerate() {
            let _ = writeln!(&mut buf, "{}. {}", idx + 1, recommendation);
        }
    }

    buf
}

/// Admin scan-history table, oldest first.
pub fn render_history(records: &[AnalysisRecord], capacity: usize) -> String {
    let mut buf = String::new();
    push_section_header(
        &mut buf,
        "🗂️",
        &format!("Scan History ({} of {} slots)", records.len(), capacity),
    );

    if records.is_empty() {
        let _ = writeln!(&mut buf, "No analyses recorded.");
        return buf;
    }

    let headers = ["Recorded", "Site", "User", "SEO", "Perf", "Security"];
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            vec![
                record.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                normalize_origin(&record.url),
                record.user_id.clone().unwrap_or_else(|| "–".to_string()),
                record.profile.seo_score.to_string(),
                record.profile.performance_score.to_string(),
                record.profile.security_score.to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }

    let format_row = |cells: &[String]| -> String {
        let parts: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| format!(" {:<width$} ", cell, width = widths[idx]))
            .collect();
        format!("|{}|", parts.join("|"))
    };

    let header_cells = headers.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    let _ = writeln!(&mut buf, "{}", format_row(&header_cells));

    let separator: Vec<String> = widths
        .iter()
        .map(|width| format!(" {:-<width$} ", "", width = *width))
        .collect();
    let _ = writeln!(&mut buf, "|{}|", separator.join("|"));

    for row in rows {
        let _ = writeln!(&mut buf, "{}", format_row(&row));
    }

    buf
}

/// Whether `--save` names a single `.md` file rather than a directory.
pub fn is_markdown_file(base: &Path) -> bool {
    base.extension()
        .map(|ext| ext.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}

pub fn build_output_path(base: &Path, url: &Url) -> PathBuf {
    if is_markdown_file(base) {
        base.to_path_buf()
    } else {
        base.join(derive_output_filename(url))
    }
}

/// `<host>__<path>.md`, e.g. `example.com/blog/post` → `example_com__blog_post.md`
pub fn derive_output_filename(url: &Url) -> String {
    let host = url.host_str().unwrap_or("site");
    let mut path_component = url.path().trim_matches('/').replace('/', "_");
    if path_component.is_empty() {
        path_component = "index".to_string();
    }

    format!(
        "{}__{}.md",
        sanitize_for_filename(host),
        sanitize_for_filename(&path_component)
    )
}

fn sanitize_for_filename(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
