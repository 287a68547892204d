//! Detection failures.

use thiserror::Error;

/// Raised when a document does not have the structure its inferred shape
/// requires.
///
/// These are local to the file being validated: the batch runner records
/// the error as that file's outcome and keeps going.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DetectionError {
    /// The document root is a scalar or a sequence.
    #[error("document root is not a mapping")]
    NotAMapping,

    /// A reserved field did not hold an array.
    #[error("expected an array value for '{field}'")]
    ExpectedArray { field: String },

    /// An array that must hold mapping records held something else.
    #[error("array '{field}' contains a record that is not a mapping")]
    RecordNotAMapping { field: String },

    /// A mapping record was missing a required key.
    #[error("array '{field}' contains a record without a '{key}' value")]
    RecordMissingKey { field: String, key: String },
}
