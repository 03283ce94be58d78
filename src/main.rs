//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `assetviz` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::io::IsTerminal;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use assetviz::initialization::init_logger_with;
use assetviz::{run_report, Config};

fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Without -f, only read stdin when it is piped or redirected
    if config.file.is_none() && std::io::stdin().is_terminal() {
        println!("Usage: assetviz -f <file> OR provide domain names via stdin");
        return Ok(());
    }

    match run_report(config) {
        Ok(summary) => {
            println!(
                "✅ Mapped {} domain{} ({} line{} skipped) in {:.1}s",
                summary.domain_count,
                if summary.domain_count == 1 { "" } else { "s" },
                summary.skipped_lines,
                if summary.skipped_lines == 1 { "" } else { "s" },
                summary.elapsed_seconds
            );
            println!("Report saved in {}", summary.report_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("assetviz error: {:#}", e);
            process::exit(1);
        }
    }
}
