use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_queue(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("posts.json");
    fs::write(&path, content).expect("write queue");
    path
}

#[test]
fn config_init_writes_example_file() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = dir.path().join("config.toml");

    let mut cmd = cargo_bin_cmd!("post-courier");
    cmd.args(["config", "init", "--path"])
        .arg(&config_path)
        .assert()
        .success();

    let content = fs::read_to_string(&config_path).expect("read config");
    assert!(content.contains("queue_path"));
    assert!(content.contains("LINKEDIN_ACCESS_TOKEN"));
}

#[test]
fn today_emits_content_and_image_lines() {
    let dir = TempDir::new().expect("temp dir");
    let queue = write_queue(
        &dir,
        r#"[{"date": "2024-01-01", "content": "Hello", "image": "images/a.png"}]"#,
    );

    let mut cmd = cargo_bin_cmd!("post-courier");
    cmd.args(["today", "--date", "2024-01-01", "--queue"])
        .arg(&queue)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("content=Hello").and(predicate::str::contains(
                "image=images/a.png",
            )),
        );
}

#[test]
fn today_is_silent_when_nothing_scheduled() {
    let dir = TempDir::new().expect("temp dir");
    let queue = write_queue(&dir, r#"[{"date": "2024-01-01", "content": "Hello"}]"#);

    let mut cmd = cargo_bin_cmd!("post-courier");
    cmd.args(["today", "--date", "2024-01-02", "--queue"])
        .arg(&queue)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn today_fails_when_queue_is_missing() {
    let dir = TempDir::new().expect("temp dir");

    let mut cmd = cargo_bin_cmd!("post-courier");
    cmd.args(["today", "--date", "2024-01-01", "--queue"])
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read queue"));
}

#[test]
fn today_json_output_includes_all_fields() {
    let dir = TempDir::new().expect("temp dir");
    let queue = write_queue(
        &dir,
        r#"[{"date": "2024-01-01", "content": "Hello", "image": "images/a.png"}]"#,
    );

    let mut cmd = cargo_bin_cmd!("post-courier");
    let output = cmd
        .args(["today", "--date", "2024-01-01", "--json", "--queue"])
        .arg(&queue)
        .output()
        .expect("run today");

    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["date"], "2024-01-01");
    assert_eq!(value["content"], "Hello");
    assert_eq!(value["image"], "images/a.png");
}

#[test]
fn run_without_token_fails_before_any_network_call() {
    let dir = TempDir::new().expect("temp dir");
    let queue = write_queue(&dir, r#"[{"date": "2024-01-01", "content": "Hello"}]"#);

    let mut cmd = cargo_bin_cmd!("post-courier");
    cmd.env_remove("LINKEDIN_ACCESS_TOKEN")
        .env_remove("LINKEDIN_PERSON_URN")
        .args(["run", "--date", "2024-01-01", "--queue"])
        .arg(&queue)
        .assert()
        .failure()
        .stderr(predicate::str::contains("LINKEDIN_ACCESS_TOKEN"));
}

#[test]
fn run_dry_run_succeeds_without_credentials() {
    let dir = TempDir::new().expect("temp dir");
    let queue = write_queue(&dir, r#"[{"date": "2024-01-01", "content": "Hello"}]"#);

    let mut cmd = cargo_bin_cmd!("post-courier");
    cmd.env_remove("LINKEDIN_ACCESS_TOKEN")
        .env_remove("LINKEDIN_PERSON_URN")
        .args(["run", "--dry-run", "--date", "2024-01-01", "--queue"])
        .arg(&queue)
        .assert()
        .success();
}

#[test]
fn run_with_no_match_is_a_silent_success() {
    let dir = TempDir::new().expect("temp dir");
    let queue = write_queue(&dir, r#"[{"date": "2024-01-01", "content": "Hello"}]"#);

    let mut cmd = cargo_bin_cmd!("post-courier");
    cmd.env("LINKEDIN_ACCESS_TOKEN", "test-token")
        .env("LINKEDIN_PERSON_URN", "urn:li:person:abc")
        .args(["run", "--date", "2024-01-02", "--queue"])
        .arg(&queue)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn run_rejects_malformed_dates() {
    let dir = TempDir::new().expect("temp dir");
    let queue = write_queue(&dir, "[]");

    let mut cmd = cargo_bin_cmd!("post-courier");
    cmd.args(["run", "--date", "01-01-2024", "--queue"])
        .arg(&queue)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn publish_requires_text_or_image() {
    let mut cmd = cargo_bin_cmd!("post-courier");
    cmd.arg("publish")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to publish"));
}
