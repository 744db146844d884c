use std::io::Write;
use std::process::Command;

use anyhow::{Context, Result};

fn run_toolbelt(args: &[&str]) -> Result<String> {
    let out = Command::new(env!("CARGO_BIN_EXE_toolbelt"))
        .args(args)
        .output()
        .with_context(|| format!("run toolbelt {:?}", args))?;

    if !out.status.success() {
        anyhow::bail!(
            "toolbelt {:?} failed (status {:?})\nstdout:\n{}\nstderr:\n{}",
            args,
            out.status,
            String::from_utf8_lossy(&out.stdout),
            String::from_utf8_lossy(&out.stderr)
        );
    }

    Ok(String::from_utf8_lossy(&out.stdout).to_string())
}

fn run_toolbelt_err(args: &[&str]) -> Result<String> {
    let out = Command::new(env!("CARGO_BIN_EXE_toolbelt"))
        .args(args)
        .output()
        .with_context(|| format!("run toolbelt {:?}", args))?;

    if out.status.success() {
        anyhow::bail!("toolbelt {:?} unexpectedly succeeded", args);
    }
    Ok(String::from_utf8_lossy(&out.stderr).to_string())
}

#[test]
fn cli_help_surface_is_stable() -> Result<()> {
    let help = run_toolbelt(&["--help"])?;
    assert!(help.contains("Usage: toolbelt"));
    for command in [
        "diff", "curl", "http", "case", "time", "json", "password", "jwt", "gzip", "status",
    ] {
        assert!(help.contains(command), "missing {} in help", command);
    }

    let curl_help = run_toolbelt(&["curl", "--help"])?;
    assert!(curl_help.contains("parse"));
    assert!(curl_help.contains("format"));
    Ok(())
}

#[test]
fn diff_files_and_badges() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let left = dir.path().join("left.txt");
    let right = dir.path().join("right.txt");
    std::fs::write(&left, "a\nb\nc")?;
    std::fs::write(&right, "a\nx\nc")?;

    let out = run_toolbelt(&[
        "diff",
        left.to_str().unwrap(),
        right.to_str().unwrap(),
    ])?;
    assert!(out.contains("2 ~ b | x"));
    assert!(out.contains("2 equal, 1 modified"));
    // Zero counts stay out of the badge line.
    assert!(!out.contains("0 added"));

    let json_out = run_toolbelt(&[
        "diff",
        left.to_str().unwrap(),
        right.to_str().unwrap(),
        "--json",
    ])?;
    let report: serde_json::Value = serde_json::from_str(&json_out)?;
    assert_eq!(report["summary"]["modified"], 1);
    assert_eq!(report["records"][1]["kind"], "modified");
    Ok(())
}

#[test]
fn curl_parse_and_format() -> Result<()> {
    let out = run_toolbelt(&[
        "curl",
        "parse",
        r#"curl -X POST https://x.test -H 'A: b' -d '{}'"#,
        "--json",
    ])?;
    let descriptor: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(descriptor["url"], "https://x.test");
    assert_eq!(descriptor["method"], "POST");
    assert_eq!(descriptor["body"], "{}");

    let rendered = run_toolbelt(&[
        "curl", "format", "--url", "https://x.test", "-X", "put", "-H", "A: b", "-d", "{}",
    ])?;
    assert_eq!(
        rendered.trim_end(),
        "curl -X PUT \"https://x.test\" \\\n  -H \"A: b\" \\\n  -d '{}'"
    );

    let err = run_toolbelt_err(&["curl", "parse", "not a curl command"])?;
    assert!(err.contains("no URL"));
    Ok(())
}

#[test]
fn json_format_from_file_and_stdin_validation() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("data.json");
    std::fs::write(&path, r#"{"a":1}"#)?;

    let out = run_toolbelt(&["json", "format", path.to_str().unwrap()])?;
    assert_eq!(out, "{\n  \"a\": 1\n}\n");

    let mut child = Command::new(env!("CARGO_BIN_EXE_toolbelt"))
        .args(["json", "validate"])
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .context("spawn toolbelt json validate")?;
    child
        .stdin
        .as_mut()
        .context("stdin")?
        .write_all(b"{broken")?;
    let out = child.wait_with_output()?;
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid JSON"));
    Ok(())
}

#[test]
fn gzip_round_trip_through_the_cli() -> Result<()> {
    let compressed = run_toolbelt(&["gzip", "compress", "hello toolbelt"])?;
    let encoded = compressed.lines().next().context("encoded line")?;

    let out = run_toolbelt(&["gzip", "decompress", encoded])?;
    assert_eq!(out.trim_end(), "hello toolbelt");
    Ok(())
}

#[test]
fn status_lookup_prints_reason() -> Result<()> {
    let out = run_toolbelt(&["status", "404"])?;
    assert!(out.contains("404 Not Found [client-error]"));

    let err = run_toolbelt_err(&["status", "999"])?;
    assert!(err.contains("no status codes match"));
    Ok(())
}

#[test]
fn time_and_case_and_password_surfaces() -> Result<()> {
    let out = run_toolbelt(&["time", "to-date", "0"])?;
    assert!(out.contains("1970-01-01T00:00:00Z"));

    let out = run_toolbelt(&["case", "hello world"])?;
    assert!(out.contains("helloWorld"));
    assert!(out.contains("HELLO_WORLD"));

    let out = run_toolbelt(&["password", "--length", "20", "--symbols"])?;
    let password = out.lines().next().context("password line")?;
    assert_eq!(password.chars().count(), 20);
    assert!(out.contains("strength:"));
    Ok(())
}

#[test]
fn jwt_decode_surface() -> Result<()> {
    let token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
        eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
        SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";
    let out = run_toolbelt(&["jwt", token, "--json"])?;
    let decoded: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(decoded["header"]["alg"], "HS256");
    assert_eq!(decoded["payload"]["name"], "John Doe");
    Ok(())
}
