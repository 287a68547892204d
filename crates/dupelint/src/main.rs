//! dupelint CLI - validate YAML record files for duplicate entries.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dupelint::report::ConsoleReport;
use dupelint::{BatchOptions, resolve_paths, run};

#[derive(Parser, Debug)]
#[command(name = "dupelint")]
#[command(version)]
#[command(about = "Validate YAML record files for duplicate entries", long_about = None)]
struct Args {
    /// Files or directories to validate (directories are searched
    /// recursively for *.yaml and *.yml)
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,

    /// Also report files that passed
    #[arg(short = 's', long)]
    show_success: bool,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dupelint=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Interruption aborts the whole run immediately; no graceful drain.
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("Interrupted");
            process::exit(1);
        }
    });

    match execute().await {
        Ok(failed) => {
            if failed > 0 {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Resolve, validate, report. Returns the number of failed files.
async fn execute() -> Result<usize> {
    let args = Args::parse();
    let files = resolve_paths(&args.paths)?;
    let mut report = ConsoleReport::new(args.show_success);
    let summary = run(&files, BatchOptions::default(), &mut report).await;
    Ok(summary.failed)
}
