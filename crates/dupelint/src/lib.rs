//! # dupelint
//!
//! Batch validation of YAML record files for duplicate entries.
//!
//! This is the library half of the `dupelint` binary: resolve input paths
//! into a flat file list, validate every file with bounded concurrency, and
//! deliver exactly one outcome per file to a [`Report`] sink. Parsing and
//! the duplicate rules themselves live in `dupelint-yaml` and
//! `dupelint-rules`.

pub mod outcome;
pub mod report;
pub mod resolver;
pub mod runner;

pub use outcome::{Failure, RunSummary, Status, ValidationOutcome};
pub use report::Report;
pub use resolver::{ResolveError, resolve_paths};
pub use runner::{BatchOptions, run, validate_file};
