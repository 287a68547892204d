//! Document decoding on top of `yaml-rust2`.

use crate::{Error, Result};
use yaml_rust2::{Yaml, YamlLoader};

/// Parse YAML from a string, producing a single document tree.
///
/// If the input contains multiple documents, only the first one is kept.
/// An empty (or comment-only) input yields `Yaml::Null`: an empty file is
/// an empty document, not an error.
///
/// # Example
///
/// ```rust
/// use dupelint_yaml::parse;
///
/// let doc = parse("layouts:\n  - name: a").unwrap();
/// assert!(doc.as_hash().is_some());
/// ```
///
/// # Errors
///
/// Returns an error if the input is not well-formed YAML.
pub fn parse(content: &str) -> Result<Yaml> {
    let mut docs = YamlLoader::load_from_str(content).map_err(Error::from)?;
    if docs.is_empty() {
        return Ok(Yaml::Null);
    }
    Ok(docs.swap_remove(0))
}
