use anyhow::Result;
use std::path::Path;
use std::process::{Command, Output};
use std::time::Duration;
use tempfile::tempdir;

mod common;
use common::{http_response, serve_once};

/// Runs the binary with proxy settings cleared so local URLs are hit directly.
fn run_cli(args: &[&str]) -> Result<Output> {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sheet_links"));
    for var in [
        "HTTP_PROXY",
        "http_proxy",
        "HTTPS_PROXY",
        "https_proxy",
        "ALL_PROXY",
        "all_proxy",
    ] {
        cmd.env_remove(var);
    }
    Ok(cmd.args(args).output()?)
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_unreachable_sheet_exits_nonzero_without_output() -> Result<()> {
    let temp_dir = tempdir()?;
    let output = temp_dir.path().join("links.html");

    let out = run_cli(&[
        "--url",
        "http://127.0.0.1:1/x.csv",
        "--output",
        path_arg(&output),
    ])?;

    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("❌ Failed (fetch)"), "stdout: {stdout}");
    assert!(!stdout.contains("✅"));
    Ok(())
}

#[test]
fn test_table_run_writes_page_and_exits_zero() -> Result<()> {
    let temp_dir = tempdir()?;
    let output = temp_dir.path().join("links.html");
    let body = "Name,URL\nFoo,https://example.com\n";
    let url = serve_once(http_response("200 OK", "text/csv", body), Duration::ZERO);

    let out = run_cli(&["--url", &url, "--output", path_arg(&output)])?;

    assert!(out.status.success());
    let html = std::fs::read_to_string(&output)?;
    assert!(html.contains("https://example.com"));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("✅ Generated"), "stdout: {stdout}");
    assert!(stdout.contains("Rows: 1"));
    Ok(())
}

#[test]
fn test_grouped_run_with_empty_sheet_exits_nonzero() -> Result<()> {
    let temp_dir = tempdir()?;
    let output = temp_dir.path().join("links_grouped.html");
    let url = serve_once(http_response("200 OK", "text/csv", ""), Duration::ZERO);

    let out = run_cli(&["grouped", "--url", &url, "--output", path_arg(&output)])?;

    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("❌ Failed (parse)"), "stdout: {stdout}");
    Ok(())
}

#[test]
fn test_invalid_config_exits_nonzero() -> Result<()> {
    let temp_dir = tempdir()?;
    let config = temp_dir.path().join("settings.toml");
    std::fs::write(&config, "no_such_key = 1\n")?;

    let out = run_cli(&["--config", path_arg(&config)])?;

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("❌ Failed (config)"), "stdout: {stdout}");
    assert!(!stdout.contains("🔄"));
    Ok(())
}
