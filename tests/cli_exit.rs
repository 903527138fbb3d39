// tests/cli_exit.rs
//! Runs the built binary once per case and checks its exit status.

use std::fs;
use std::net::TcpListener;
use std::path::Path;
use std::process::{Command, Output};

/// A local address nothing listens on.
fn dead_addr() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr.to_string()
}

fn write_config(dir: &Path, extra: &str) -> String {
    let path = dir.join("quote_status.toml");
    fs::write(
        &path,
        format!(
            r#"
timeout_secs = 1
{extra}

[[providers]]
name = "down"
url = "http://{}/random"
schema = {{ shape = "flat", text_field = "content", author_field = "author" }}
"#,
            dead_addr()
        ),
    )
    .unwrap();
    path.display().to_string()
}

fn run(dir: &Path, config: &str, envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_quote-status"));
    cmd.current_dir(dir)
        .env_remove("QUOTE_STATUS_DRY_RUN")
        .env_remove("SLACK_TOKEN")
        .env_remove("SLACK_API_BASE")
        .env("QUOTE_STATUS_CONFIG", config)
        .env("RUST_LOG", "warn");
    for (k, v) in envs {
        cmd.env(k, v);
    }
    cmd.output().unwrap()
}

#[test]
fn failed_publish_exits_non_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let config = write_config(tmp.path(), "");
    let api_base = format!("http://{}/api", dead_addr());

    let out = run(
        tmp.path(),
        &config,
        &[("SLACK_TOKEN", "x"), ("SLACK_API_BASE", &api_base)],
    );

    assert!(!out.status.success(), "status: {:?}", out.status);
}

#[test]
fn dry_run_with_unreachable_provider_exits_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let config = write_config(tmp.path(), "");

    let out = run(tmp.path(), &config, &[("QUOTE_STATUS_DRY_RUN", "1")]);

    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
}

#[test]
fn display_limit_too_small_for_any_curated_quote_exits_non_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let config = write_config(tmp.path(), "max_display_len = 33");

    let out = run(tmp.path(), &config, &[("QUOTE_STATUS_DRY_RUN", "1")]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("fallback"), "stderr: {stderr}");
}
