//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `opengraph` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reading HTML from a URL, a file, or stdin
//! - Printing the record as JSON
//!
//! All extraction logic is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use tokio::io::AsyncReadExt;

use opengraph::config::Opt;
use opengraph::initialization::init_logger_with;
use opengraph::{extract, Config, OpenGraph, OpenGraphClient};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(&opt).await {
        Ok(record) => {
            let json = if opt.pretty {
                serde_json::to_string_pretty(&record)
            } else {
                serde_json::to_string(&record)
            }
            .context("Failed to serialize record")?;
            println!("{json}");
            Ok(())
        }
        Err(e) => {
            eprintln!("opengraph error: {:#}", e);
            process::exit(1);
        }
    }
}

async fn run(opt: &Opt) -> Result<OpenGraph> {
    if let Some(path) = &opt.file {
        let html = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return Ok(extract(&html)?);
    }

    match opt.target.as_deref() {
        None | Some("-") => {
            let mut html = String::new();
            tokio::io::stdin()
                .read_to_string(&mut html)
                .await
                .context("Failed to read HTML from stdin")?;
            Ok(extract(&html)?)
        }
        Some(target) => {
            let client = OpenGraphClient::new(&Config::from(opt))
                .context("Failed to initialize HTTP client")?;
            let record = client
                .parse_str(target)
                .await
                .with_context(|| format!("Failed to extract Open Graph metadata from {target}"))?;
            Ok(record)
        }
    }
}
