//! assetviz library: domain tree building and report rendering.
//!
//! Consumes a list of domain names (one per line), normalizes and validates
//! each entry, folds the valid ones into a nested suffix tree, and renders
//! the tree as an interactive mind-map HTML report.
//!
//! # Example
//!
//! ```no_run
//! use assetviz::{run_report, Config};
//! use clap::Parser;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::parse_from(["assetviz", "-f", "subdomains.txt"]);
//! let summary = run_report(config)?;
//! println!(
//!     "Mapped {} domains into {}",
//!     summary.domain_count,
//!     summary.report_path.display()
//! );
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
mod domain;
mod error_handling;
pub mod initialization;
pub mod report;
mod tree;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, InputError, RenderError};
pub use run::{build_domain_tree, run_report, IngestStats, ReportSummary};
pub use tree::DomainTree;

// Internal run module (input loop and report orchestration)
mod run {
    use std::fs::File;
    use std::io::{self, BufRead, BufReader};
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{debug, info};

    use crate::config::Config;
    use crate::domain;
    use crate::error_handling::InputError;
    use crate::initialization::init_extractor;
    use crate::report;
    use crate::tree::DomainTree;

    /// Results of a completed report run.
    #[derive(Debug, Clone)]
    pub struct ReportSummary {
        /// Lines read from the input
        pub total_lines: usize,
        /// Lines skipped as empty or `.`
        pub skipped_lines: usize,
        /// Domains that passed validation and went into the tree
        /// (duplicates included)
        pub domain_count: usize,
        /// Path of the generated HTML report
        pub report_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Line counters for one ingest pass.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct IngestStats {
        /// Lines read from the input
        pub total_lines: usize,
        /// Lines skipped as empty or `.`
        pub skipped_lines: usize,
        /// Domains that passed validation and were inserted
        pub inserted: usize,
    }

    /// Consumes an input stream line by line and folds every valid domain
    /// into a fresh tree.
    ///
    /// Empty and `.` lines are skipped silently. The first non-skipped line
    /// that fails validation aborts the pass with
    /// [`InputError::InvalidEntry`]; the partially built tree is dropped
    /// with the error. A read error on the underlying stream aborts the
    /// pass likewise.
    pub fn build_domain_tree<R: BufRead>(
        reader: R,
    ) -> Result<(DomainTree, IngestStats), InputError> {
        let extractor = init_extractor();
        let mut tree = DomainTree::new();
        let mut stats = IngestStats::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            stats.total_lines += 1;

            let Some(candidate) = domain::normalize_line(&line) else {
                stats.skipped_lines += 1;
                continue;
            };

            match domain::registrable_domain(&extractor, &candidate) {
                Ok(registrable) => {
                    debug!("Inserting {candidate} (registrable domain: {registrable})");
                    tree.insert(&candidate);
                    stats.inserted += 1;
                }
                Err(reason) => {
                    debug!("Rejected {candidate:?}: {reason:#}");
                    return Err(InputError::InvalidEntry {
                        line_number: index + 1,
                    });
                }
            }
        }

        Ok((tree, stats))
    }

    /// Runs one report pass with the provided configuration.
    ///
    /// Reads domains from `config.file` (stdin when absent), builds the
    /// domain tree, and writes the timestamped HTML report into
    /// `config.report_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input file cannot be opened, the input
    /// contains an invalid entry, the stream fails mid-read, or the report
    /// cannot be encoded or written. No report file is produced in any of
    /// these cases.
    pub fn run_report(config: Config) -> Result<ReportSummary> {
        let start_time = Instant::now();

        let (tree, stats) = match &config.file {
            Some(path) => {
                info!("Reading domains from {}", path.display());
                let file = File::open(path)
                    .with_context(|| format!("Failed to open input file: {}", path.display()))?;
                build_domain_tree(BufReader::new(file))?
            }
            None => {
                info!("Reading domains from stdin");
                let stdin = io::stdin();
                build_domain_tree(stdin.lock())?
            }
        };

        info!(
            "Ingested {} lines ({} skipped, {} domains)",
            stats.total_lines, stats.skipped_lines, stats.inserted
        );

        let report_path =
            report::render_report(&tree, &config.report_dir).context("Failed to generate report")?;

        Ok(ReportSummary {
            total_lines: stats.total_lines,
            skipped_lines: stats.skipped_lines,
            domain_count: stats.inserted,
            report_path,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
