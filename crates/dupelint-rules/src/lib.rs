//! # dupelint-rules
//!
//! Shape classification and duplicate detection over parsed YAML documents.
//!
//! A document is classified into exactly one of a closed set of shapes by
//! inspecting its top-level field names; each shape has its own duplicate
//! rule, implemented as a pure function over the immutable tree. Only the
//! winning shape's rule runs; arrays outside its jurisdiction are not
//! cross-checked. This is a fixed family of heuristics for known record
//! shapes, not a schema validator.
//!
//! ## Example
//!
//! ```rust
//! use dupelint_rules::detect_duplicates;
//!
//! let doc = dupelint_yaml::parse(
//!     "assignments:\n  - name: a\n  - name: a\n",
//! )
//! .unwrap();
//! let findings = detect_duplicates(&doc).unwrap();
//! assert_eq!(findings.len(), 1);
//! ```

mod classify;
mod detect;
mod error;

pub use classify::{DocumentShape, classify};
pub use detect::detect_duplicates;
pub use error::DetectionError;
