//! Doctor command - validate configuration and show status

use anyhow::Result;
use post_courier_adapters::queue::FsPostQueue;
use post_courier_domain::PostQueue;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::args::DoctorArgs;
use crate::config::AppConfig;

#[derive(Debug, Serialize)]
struct DoctorReport {
    config: CheckResult,
    queue: CheckResult,
    access_token: CheckResult,
    person_urn: CheckResult,
    overall: String,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    status: String,
    message: String,
}

impl CheckResult {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }

    fn is_error(&self) -> bool {
        self.status == "error"
    }
}

pub async fn execute(args: DoctorArgs, config_path: Option<PathBuf>) -> Result<()> {
    let mut report = DoctorReport {
        config: CheckResult::error("Not checked"),
        queue: CheckResult::error("Not checked"),
        access_token: CheckResult::error("Not checked"),
        person_urn: CheckResult::error("Not checked"),
        overall: "error".to_string(),
    };

    // Check config
    let config = match AppConfig::load(config_path.as_deref()) {
        Ok(c) => {
            report.config = CheckResult::ok("Configuration loaded successfully");
            Some(c)
        }
        Err(e) => {
            report.config = CheckResult::error(format!("Failed to load config: {}", e));
            None
        }
    };

    if let Some(ref config) = config {
        report.queue = check_queue(&config.general.queue_path).await;
        report.access_token = check_env_var(&config.linkedin.access_token_env);
        report.person_urn = check_env_var(&config.linkedin.person_urn_env);
    }

    let checks = [
        &report.config,
        &report.queue,
        &report.access_token,
        &report.person_urn,
    ];
    let has_error = checks.iter().any(|c| c.is_error());
    report.overall = if has_error { "error" } else { "ok" }.to_string();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if has_error {
        anyhow::bail!("One or more checks failed");
    }

    Ok(())
}

async fn check_queue(path: &Path) -> CheckResult {
    match FsPostQueue::new(path).load().await {
        Ok(posts) => CheckResult::ok(format!("{} entries in {}", posts.len(), path.display())),
        Err(e) => CheckResult::error(e.to_string()),
    }
}

fn check_env_var(env_var: &str) -> CheckResult {
    if env_var.trim().is_empty() {
        return CheckResult::error("No env var configured");
    }

    match std::env::var(env_var) {
        Ok(value) if !value.trim().is_empty() => CheckResult::ok(format!("{} is set", env_var)),
        Ok(_) => CheckResult::error(format!("{} is empty", env_var)),
        Err(_) => CheckResult::error(format!("{} is not set", env_var)),
    }
}

fn print_report(report: &DoctorReport) {
    println!("post-courier doctor");
    println!("===================");
    print_check("config", &report.config);
    print_check("queue", &report.queue);
    print_check("access_token", &report.access_token);
    print_check("person_urn", &report.person_urn);
    println!();
    println!("Overall: {}", report.overall);
}

fn print_check(name: &str, check: &CheckResult) {
    println!("  [{}] {}: {}", check.status, name, check.message);
}
