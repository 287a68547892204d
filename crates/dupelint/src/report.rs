//! Outcome presentation.

use crate::outcome::{RunSummary, Status, ValidationOutcome};

/// Sink for validation results.
///
/// The batch runner is the only producer: every outcome is delivered
/// exactly once, in batch-completion order, followed by one progress call
/// per batch and a single closing summary.
pub trait Report {
    fn outcome(&mut self, outcome: &ValidationOutcome);
    fn progress(&mut self, percent: usize, processed: usize, total: usize);
    fn summary(&mut self, summary: &RunSummary);
}

/// Console presenter.
///
/// Failed outcomes always print, with their reasons inlined underneath;
/// passed outcomes print only when `show_success` is set. Progress goes to
/// stderr so piped output stays clean.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReport {
    pub show_success: bool,
}

impl ConsoleReport {
    pub fn new(show_success: bool) -> Self {
        Self { show_success }
    }
}

impl Report for ConsoleReport {
    fn outcome(&mut self, outcome: &ValidationOutcome) {
        match &outcome.status {
            Status::Passed => {
                if self.show_success {
                    println!("✓ {}", outcome.path.display());
                }
            }
            Status::Failed(failure) => {
                println!("✗ {}", outcome.path.display());
                for reason in failure.reasons() {
                    println!("    {reason}");
                }
            }
        }
    }

    fn progress(&mut self, percent: usize, processed: usize, total: usize) {
        eprintln!("  {percent}% ({processed}/{total} files)");
    }

    fn summary(&mut self, summary: &RunSummary) {
        println!(
            "\nChecked {} files: {} passed, {} failed ({:.2}s)",
            summary.total,
            summary.total - summary.failed,
            summary.failed,
            summary.elapsed.as_secs_f64()
        );
    }
}
