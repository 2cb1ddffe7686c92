//! Basic usage example
//!
//! Demonstrates legacy messages, namespaced logging, progress lines and plugin
//! writers on the process-wide output.
//!
//! Run with: cargo run --example basic_usage

use serverless_log::prelude::*;
use serverless_log::{get_plugin_writers, legacy, legacy_log, log, notice, progress, write_text};

fn main() -> Result<()> {
    serverless_log::init(LogConfig {
        level: Some(LogLevel::Info),
        ..LogConfig::from_env()
    })?;

    println!("=== Serverless Log - Basic Usage Example ===\n");

    println!("1. Legacy messages:");
    legacy_log("Packaging service...", &LegacyOptions::new());
    legacy_log("Service deployed", &LegacyOptions::new().color_name("green")?.bold(true));
    legacy_log("No prefix here", &LegacyOptions::new().no_entity());
    legacy().console_log("plain console line");

    println!("\n2. Namespaced event logging (threshold: info):");
    let deploy = log().get("deploy");
    deploy.debug("Debug message (hidden)");
    deploy.info("Resolving variables");
    notice!(deploy, "Deploying {} functions", 3);
    deploy.warn("Deprecated property in configuration");

    println!("\n3. Progress lines:");
    let step = progress().get("deploy");
    step.notice("Uploading artifacts");
    step.notice("Updating stack");
    progress().clear();

    println!("\n4. Plugin writers:");
    let writers = get_plugin_writers("offline");
    writers.log().notice("Starting local server");
    writers.write_text("Listening on http://localhost:3000\n");

    write_text("\n=== Example completed successfully! ===\n");

    Ok(())
}
