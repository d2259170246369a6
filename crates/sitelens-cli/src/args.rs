use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sitelens")]
#[command(author = "Pon Datalab")]
#[command(about = "sitelens — synthetic SEO, performance and security reports for any URL")]
#[command(version)]
pub struct Args {
    /// One or more absolute http(s) URLs to analyze
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// JSON configuration file (delays, history capacity)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip the simulated crawl and recommendation latency
    #[arg(long)]
    pub no_delay: bool,

    /// Print the session payload and recommendations as JSON instead of a report
    #[arg(long)]
    pub json: bool,

    /// Print the analysis history after all URLs are processed
    #[arg(long)]
    pub history: bool,

    /// User id attached to history records
    #[arg(short, long)]
    pub user: Option<String>,

    /// Also write each report to a file; a directory or a `.md` path
    #[arg(short, long, num_args = 0..=1, default_missing_value = ".")]
    pub save: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("sitelens").chain(args.iter().copied()))
    }

    #[test]
    fn requires_at_least_one_url() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn collects_multiple_urls() {
        let args = parse(&["https://a.com", "https://b.com", "--history"]).unwrap();
        assert_eq!(args.urls, vec!["https://a.com", "https://b.com"]);
        assert!(args.history);
        assert!(!args.json);
    }

    #[test]
    fn bare_save_defaults_to_current_dir() {
        let args = parse(&["--save", "--", "https://a.com"]).unwrap();
        assert_eq!(args.save, Some(PathBuf::from(".")));
    }

    #[test]
    fn save_accepts_explicit_path() {
        let args = parse(&["-s", "reports/out.md", "https://a.com"]).unwrap();
        assert_eq!(args.save, Some(PathBuf::from("reports/out.md")));
    }

    #[test]
    fn parses_config_and_user() {
        let args = parse(&["-c", "cfg.json", "-u", "user_3", "--no-delay", "https://a.com"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("cfg.json")));
        assert_eq!(args.user.as_deref(), Some("user_3"));
        assert!(args.no_delay);
    }
}
