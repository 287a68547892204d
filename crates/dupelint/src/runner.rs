//! Batched concurrent validation.
//!
//! Files are validated in consecutive fixed-size batches: every file in a
//! batch is read and parsed concurrently, and the next batch starts only
//! once the whole batch has settled. The batch size caps how many files are
//! open and parsed at one instant; one file's failure never aborts its
//! siblings.

use std::path::{Path, PathBuf};
use std::time::Instant;

use futures::future::join_all;
use tracing::debug;

use crate::outcome::{Failure, RunSummary, ValidationOutcome};
use crate::report::Report;

/// Batch validation knobs.
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    /// Upper bound on files in flight at once.
    pub batch_size: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self { batch_size: 50 }
    }
}

/// Validate every file and deliver outcomes to `report` as batches settle.
///
/// Outcome order is batch-completion order; within a batch, outcomes are
/// delivered in submission order, so reruns over an unchanged file set
/// produce identical reports. The summary is folded strictly between
/// batches, never from inside a running task. After the last batch the
/// report receives the final summary, which is also returned.
pub async fn run(files: &[PathBuf], options: BatchOptions, report: &mut dyn Report) -> RunSummary {
    let started = Instant::now();
    let mut summary = RunSummary::default();
    let batch_size = options.batch_size.max(1);
    for batch in files.chunks(batch_size) {
        let outcomes = join_all(batch.iter().map(|path| validate_file(path))).await;
        for outcome in &outcomes {
            summary.record(outcome);
            report.outcome(outcome);
        }
        report.progress(summary.total * 100 / files.len(), summary.total, files.len());
    }
    summary.elapsed = started.elapsed();
    report.summary(&summary);
    summary
}

/// Validate a single file: read it, parse it, run the duplicate rules.
///
/// Never fails: read, parse, and detection errors all become the file's
/// outcome.
pub async fn validate_file(path: &Path) -> ValidationOutcome {
    debug!(file = %path.display(), "validating");
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) => {
            return ValidationOutcome::failed(path.to_path_buf(), Failure::Error(err.to_string()));
        }
    };
    let doc = match dupelint_yaml::parse(&content) {
        Ok(doc) => doc,
        Err(err) => {
            return ValidationOutcome::failed(path.to_path_buf(), Failure::Error(err.to_string()));
        }
    };
    match dupelint_rules::detect_duplicates(&doc) {
        Ok(findings) if findings.is_empty() => ValidationOutcome::passed(path.to_path_buf()),
        Ok(findings) => {
            ValidationOutcome::failed(path.to_path_buf(), Failure::Duplicates(findings))
        }
        Err(err) => ValidationOutcome::failed(path.to_path_buf(), Failure::Error(err.to_string())),
    }
}
