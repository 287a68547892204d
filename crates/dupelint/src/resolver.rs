//! Input path resolution.
//!
//! Expands directories into the `.yaml`/`.yml` files beneath them; explicit
//! files are taken as-is regardless of extension. A missing path fails the
//! whole run before any validation starts.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Fatal resolution errors. Unlike per-file validation failures, these
/// abort the run.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),
}

/// Resolve user-supplied paths into the flat list of files to validate.
///
/// Output order is input order, then discovery order within each directory;
/// the list is de-duplicated across the whole run so every file is
/// validated exactly once.
pub fn resolve_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, ResolveError> {
    let mut files = Vec::new();
    let mut seen = HashSet::new();
    for input in inputs {
        if !input.exists() {
            return Err(ResolveError::PathNotFound(input.clone()));
        }
        if input.is_dir() {
            for file in yaml_files_under(input) {
                if seen.insert(file.clone()) {
                    files.push(file);
                }
            }
        } else if seen.insert(input.clone()) {
            files.push(input.clone());
        }
    }
    Ok(files)
}

/// Recursively collect `.yaml`/`.yml` files under a directory.
///
/// Plain files only; symlinks are not followed and the extension match is
/// case-sensitive. Results are sorted so repeated runs see the same order.
fn yaml_files_under(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && has_yaml_extension(entry.path()))
        .map(|entry| entry.path().to_path_buf())
        .collect();
    files.sort();
    for file in &files {
        debug!(file = %file.display(), "discovered YAML file");
    }
    files
}

fn has_yaml_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    )
}
