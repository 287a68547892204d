//! # dupelint-yaml
//!
//! YAML parsing front-end for dupelint.
//!
//! Decodes one document per file into a plain `yaml_rust2::Yaml` tree.
//! Mappings preserve declaration order, which the duplicate rules rely on
//! for finding order and identity-field inference.
//!
//! ## Example
//!
//! ```rust
//! use dupelint_yaml::parse;
//! use yaml_rust2::Yaml;
//!
//! let doc = parse("title: My Document").unwrap();
//! assert!(doc.as_hash().is_some());
//!
//! let empty = parse("").unwrap();
//! assert_eq!(empty, Yaml::Null);
//! ```

mod error;
mod parser;

pub use error::{Error, Result};
pub use parser::parse;
pub use yaml_rust2::Yaml;
