//! Integration tests for the sitelens CLI
//!
//! These tests run the CLI as a subprocess to test end-to-end functionality

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sitelens"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to run CLI")
}

#[test]
fn test_cli_help() {
    let output = run(&["--help"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(stdout.contains("sitelens"));
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--no-delay"));
    assert!(stdout.contains("--history"));
}

#[test]
fn test_cli_version() {
    let output = run(&["--version"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(&format!("sitelens {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_cli_report() {
    let output = run(&["--no-delay", "https://example-shop.com"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(stdout.contains("Analysis Results: https://example-shop.com"));
    assert!(stdout.contains("94/100"));
    assert!(stdout.contains("Recommendations"));
    assert!(stdout.contains("8. "));
}

#[test]
fn test_cli_json_output() {
    let output = run(&["--no-delay", "--json", "https://example.com"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(parsed["url"], "https://example.com");
    assert_eq!(parsed["profile"]["seoScore"], 78);
    assert_eq!(parsed["recommendations"].as_array().unwrap().len(), 5);
}

#[test]
fn test_cli_history_table() {
    let output = run(&[
        "--no-delay",
        "--history",
        "-u",
        "user_4",
        "https://example.com",
        "https://city.gov",
    ]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(stdout.contains("Scan History (2 of 50 slots)"));
    assert!(stdout.contains("user_4"));
    assert!(stdout.contains("https://city.gov"));
}

#[test]
fn test_cli_invalid_url() {
    let output = run(&["--no-delay", "not-a-url"]);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!output.status.success());
    assert!(stderr.contains("invalid URL"));
}

#[test]
fn test_cli_unsupported_scheme_does_not_stop_other_urls() {
    let output = run(&["--no-delay", "ftp://example.com", "https://example.com"]);

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!output.status.success());
    assert!(stdout.contains("Analysis Results: https://example.com"));
    assert!(stderr.contains("unsupported URL scheme"));
    assert!(stderr.contains("1 of 2 analyses failed"));
}

#[test]
fn test_cli_save_to_directory() {
    let dir = std::env::temp_dir().join(format!("sitelens-cli-{}", std::process::id()));
    let dir_arg = dir.to_string_lossy().to_string();

    let output = run(&["--no-delay", "-s", &dir_arg, "https://example.com/blog"]);
    assert!(output.status.success());

    let saved = dir.join("example_com__blog.md");
    let contents = std::fs::read_to_string(&saved).unwrap();
    assert!(contents.contains("Analysis Results: https://example.com/blog"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_cli_save_to_single_file_rejects_multiple_urls() {
    let dir = std::env::temp_dir().join(format!("sitelens-cli-multi-{}", std::process::id()));
    let file = dir.join("report.md");
    let file_arg = file.to_string_lossy().to_string();

    let output = run(&[
        "--no-delay",
        "-s",
        &file_arg,
        "https://example.com",
        "https://example-shop.com",
    ]);
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(!output.status.success());
    assert!(stderr.contains("names a single file"));
    assert!(!file.exists());
}

#[test]
fn test_cli_save_to_single_file() {
    let dir = std::env::temp_dir().join(format!("sitelens-cli-file-{}", std::process::id()));
    let file = dir.join("report.md");
    let file_arg = file.to_string_lossy().to_string();

    let output = run(&["--no-delay", "-s", &file_arg, "https://example.com"]);
    assert!(output.status.success());

    let contents = std::fs::read_to_string(&file).unwrap();
    assert!(contents.contains("Analysis Results: https://example.com"));

    std::fs::remove_dir_all(&dir).unwrap();
}
