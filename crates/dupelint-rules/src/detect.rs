//! The shape-specific duplicate rules.

use std::collections::HashSet;

use yaml_rust2::Yaml;
use yaml_rust2::yaml::Hash;

use crate::DetectionError;
use crate::classify::{
    DocumentShape, LAYOUT, LAYOUT_ASSIGNMENTS, RECORD_TYPE, RECORD_TYPE_VISIBILITIES, classify,
};

/// Run the document's shape rule and collect its findings.
///
/// Exactly one rule runs per document; findings come back in the order the
/// offending entries appear, following the document's key declaration
/// order. The document itself is never mutated.
///
/// An empty (null) document has nothing to check. Any other non-mapping
/// root, or a reserved field whose structure does not match its shape, is a
/// [`DetectionError`].
pub fn detect_duplicates(doc: &Yaml) -> Result<Vec<String>, DetectionError> {
    let hash = match doc.as_hash() {
        Some(hash) => hash,
        None if doc.is_null() => return Ok(Vec::new()),
        None => return Err(DetectionError::NotAMapping),
    };
    match classify(doc) {
        DocumentShape::LayoutAssignment => detect_layout_assignments(hash),
        DocumentShape::IpRangeList => Ok(detect_whole_arrays(hash)),
        DocumentShape::GenericKeyed => Ok(detect_keyed_arrays(hash)),
        DocumentShape::Unclassified => Ok(Vec::new()),
    }
}

/// Layout-assignment rule.
///
/// Two records collide when both their layout and a concrete record type
/// repeat. A record without a record type is a wildcard: it never collides
/// with another wildcard for the same layout, and it never produces a
/// finding itself. Only the `layoutAssignments` array is checked.
fn detect_layout_assignments(doc: &Hash) -> Result<Vec<String>, DetectionError> {
    let records = array_field(doc, LAYOUT_ASSIGNMENTS)?;
    let mut seen: HashSet<(String, Option<String>)> = HashSet::new();
    let mut findings = Vec::new();
    for record in records {
        let record = record
            .as_hash()
            .ok_or_else(|| DetectionError::RecordNotAMapping {
                field: LAYOUT_ASSIGNMENTS.to_string(),
            })?;
        let layout = field_value(record, LAYOUT)
            .map(render_value)
            .ok_or_else(|| DetectionError::RecordMissingKey {
                field: LAYOUT_ASSIGNMENTS.to_string(),
                key: LAYOUT.to_string(),
            })?;
        let record_type = field_value(record, RECORD_TYPE).map(render_value);
        let repeated = !seen.insert((layout.clone(), record_type.clone()));
        if repeated && let Some(record_type) = record_type {
            findings.push(format!(
                "{LAYOUT_ASSIGNMENTS}: duplicate assignment of layout '{layout}' \
                 for record type '{record_type}'"
            ));
        }
    }
    Ok(findings)
}

/// Whole-array rule for IP-range documents.
///
/// Every array-valued top-level field is checked, and an element's identity
/// is its entire value. Non-array fields are ignored.
fn detect_whole_arrays(doc: &Hash) -> Vec<String> {
    let mut findings = Vec::new();
    for (key, value) in doc.iter() {
        let (Some(field), Some(items)) = (key.as_str(), value.as_vec()) else {
            continue;
        };
        let mut seen: HashSet<&Yaml> = HashSet::new();
        for item in items {
            if !seen.insert(item) {
                findings.push(format!("{field}: duplicate entry {}", render_value(item)));
            }
        }
    }
    findings
}

/// Keyed-array rule, the fallback for every other mapping.
///
/// Each top-level array gets an identity field; repeats of that field's
/// value within the array are duplicates. Elements that are not mappings,
/// or that lack the identity field, are skipped.
fn detect_keyed_arrays(doc: &Hash) -> Vec<String> {
    // recordTypeVisibilities pins the identity field for the whole document
    let pinned = field_value(doc, RECORD_TYPE_VISIBILITIES).is_some();
    let mut findings = Vec::new();
    for (key, value) in doc.iter() {
        let (Some(field), Some(items)) = (key.as_str(), value.as_vec()) else {
            continue;
        };
        let identity = if pinned {
            Some(RECORD_TYPE.to_string())
        } else {
            infer_identity_field(items)
        };
        let Some(identity) = identity else {
            continue;
        };
        let mut seen: HashSet<&Yaml> = HashSet::new();
        for item in items {
            let Some(record) = item.as_hash() else {
                continue;
            };
            let Some(value) = field_value(record, &identity) else {
                continue;
            };
            if !seen.insert(value) {
                findings.push(format!(
                    "{field}: duplicate value '{}' for key '{identity}'",
                    render_value(value)
                ));
            }
        }
    }
    findings
}

/// Identity inference for keyed arrays: the first key of the first element,
/// by the element's own key order.
///
/// The result is undefined when the first element is not a mapping (or its
/// first key is not a string); the array then has no identity field and no
/// duplicate detection happens for it. Changing this would change results
/// for existing inputs, so it stays as-is.
fn infer_identity_field(items: &[Yaml]) -> Option<String> {
    let first = items.first()?.as_hash()?;
    let (key, _) = first.iter().next()?;
    key.as_str().map(str::to_string)
}

fn array_field<'a>(doc: &'a Hash, field: &str) -> Result<&'a [Yaml], DetectionError> {
    match field_value(doc, field) {
        Some(Yaml::Array(items)) => Ok(items),
        _ => Err(DetectionError::ExpectedArray {
            field: field.to_string(),
        }),
    }
}

fn field_value<'a>(hash: &'a Hash, field: &str) -> Option<&'a Yaml> {
    hash.get(&Yaml::String(field.to_string()))
}

/// Render a YAML value in compact flow style for finding messages.
fn render_value(value: &Yaml) -> String {
    match value {
        Yaml::String(s) => s.clone(),
        Yaml::Integer(n) => n.to_string(),
        Yaml::Real(r) => r.clone(),
        Yaml::Boolean(b) => b.to_string(),
        Yaml::Null => "null".to_string(),
        Yaml::Array(items) => {
            let items: Vec<String> = items.iter().map(render_value).collect();
            format!("[{}]", items.join(", "))
        }
        Yaml::Hash(entries) => {
            let entries: Vec<String> = entries
                .iter()
                .map(|(k, v)| format!("{}: {}", render_value(k), render_value(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        other => format!("{other:?}"),
    }
}
