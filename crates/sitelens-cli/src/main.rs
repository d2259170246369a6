use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use serde::Serialize;
use sitelens_core::{
    AnalyzerConfig, BoundedHistory, HistoryStore, LogNotifier, MemorySessionStore, SessionPayload,
    SiteAnalyzer, store_analysis, take_analysis,
};
use url::Url;

use sitelens_cli::args::Args;
use sitelens_cli::render::{build_output_path, is_markdown_file, render_history, render_report};

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    payload: &'a SessionPayload,
    recommendations: &'a [String],
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if let Some(save) = args.save.as_ref().filter(|save| is_markdown_file(save)) {
        if args.urls.len() > 1 {
            bail!(
                "--save {} names a single file but {} URLs were given; pass a directory instead",
                save.display(),
                args.urls.len()
            );
        }
    }

    let mut config = match args.config.as_ref() {
        Some(path) => AnalyzerConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };
    if args.no_delay {
        config.crawl_delay_ms = 0;
        config.recommendation_delay_ms = 0;
    }

    let history = Arc::new(BoundedHistory::new(config.history_capacity));
    let analyzer = SiteAnalyzer::new(config, history.clone(), Arc::new(LogNotifier));
    let session = MemorySessionStore::new();

    let mut failures = 0usize;
    for url in &args.urls {
        if let Err(err) = analyze_one(&analyzer, &session, &args, url).await {
            eprintln!("Error: {err:#}");
            failures += 1;
        }
    }

    if args.history {
        print!(
            "{}",
            render_history(&analyzer.history(), history.capacity())
        );
    }

    if failures > 0 {
        return Err(anyhow!(
            "{failures} of {} analyses failed",
            args.urls.len()
        ));
    }

    Ok(())
}

/// Analyze step, session hand-off, then the results step for one URL.
async fn analyze_one(
    analyzer: &SiteAnalyzer,
    session: &MemorySessionStore,
    args: &Args,
    url: &str,
) -> Result<()> {
    log::info!("Analyzing {url}");

    let profile = analyzer
        .crawl(url, args.user.clone())
        .await
        .with_context(|| format!("could not analyze {url}"))?;
    store_analysis(session, url, &profile)?;

    let payload = take_analysis(session)?
        .ok_or_else(|| anyhow!("analysis for {url} missing from session"))?;
    let recommendations = analyzer.recommend(&payload.profile, &payload.url).await?;

    let output = if args.json {
        let report = JsonReport {
            payload: &payload,
            recommendations: &recommendations,
        };
        format!("{}\n", serde_json::to_string_pretty(&report)?)
    } else {
        render_report(&payload, &recommendations)
    };

    print!("{output}");

    if let Some(save_base) = args.save.as_ref() {
        let parsed_url = Url::parse(&payload.url).context("invalid URL")?;
        let output_path = build_output_path(save_base, &parsed_url);
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory {}", parent.display())
            })?;
        }

        fs::write(&output_path, output.as_bytes())
            .with_context(|| format!("failed to write output file {}", output_path.display()))?;

        println!("\nWrote output to {}", output_path.display());
    }

    Ok(())
}
