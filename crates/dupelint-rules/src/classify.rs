//! Top-level shape classification.

use yaml_rust2::Yaml;

/// Top-level key of the layout-assignment shape.
pub(crate) const LAYOUT_ASSIGNMENTS: &str = "layoutAssignments";

/// Top-level key of the IP-range list shape.
pub(crate) const LOGIN_IP_RANGES: &str = "loginIpRanges";

/// Top-level key that pins the identity field of keyed arrays to
/// [`RECORD_TYPE`].
pub(crate) const RECORD_TYPE_VISIBILITIES: &str = "recordTypeVisibilities";

/// Per-record field naming the record type.
pub(crate) const RECORD_TYPE: &str = "recordType";

/// Per-record field naming the layout.
pub(crate) const LAYOUT: &str = "layout";

/// The document shapes dupelint knows how to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentShape {
    /// `layoutAssignments` records, keyed by layout plus record type.
    LayoutAssignment,

    /// `loginIpRanges` documents: a whole array element is its identity.
    IpRangeList,

    /// Any other mapping: per-array identity-field inference.
    GenericKeyed,

    /// Not a mapping. Empty documents land here.
    Unclassified,
}

/// Classify a parsed document by its top-level field set.
///
/// First match wins: `layoutAssignments` takes precedence over
/// `loginIpRanges`, and any other mapping falls back to the keyed-array
/// shape.
pub fn classify(doc: &Yaml) -> DocumentShape {
    let Some(hash) = doc.as_hash() else {
        return DocumentShape::Unclassified;
    };
    if hash.contains_key(&Yaml::String(LAYOUT_ASSIGNMENTS.into())) {
        DocumentShape::LayoutAssignment
    } else if hash.contains_key(&Yaml::String(LOGIN_IP_RANGES.into())) {
        DocumentShape::IpRangeList
    } else {
        DocumentShape::GenericKeyed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Yaml {
        dupelint_yaml::parse(content).unwrap()
    }

    #[test]
    fn test_classify_layout_assignments() {
        let doc = parse("layoutAssignments:\n  - layout: a\n");
        assert_eq!(classify(&doc), DocumentShape::LayoutAssignment);
    }

    #[test]
    fn test_classify_ip_ranges() {
        let doc = parse("loginIpRanges:\n  - 10.0.0.1\n");
        assert_eq!(classify(&doc), DocumentShape::IpRangeList);
    }

    #[test]
    fn test_layout_assignments_wins_over_ip_ranges() {
        let doc = parse("loginIpRanges: []\nlayoutAssignments: []\n");
        assert_eq!(classify(&doc), DocumentShape::LayoutAssignment);
    }

    #[test]
    fn test_other_mappings_are_generic() {
        let doc = parse("widgets:\n  - name: a\n");
        assert_eq!(classify(&doc), DocumentShape::GenericKeyed);
    }

    #[test]
    fn test_non_mappings_are_unclassified() {
        assert_eq!(classify(&parse("")), DocumentShape::Unclassified);
        assert_eq!(classify(&parse("- a\n- b\n")), DocumentShape::Unclassified);
        assert_eq!(classify(&parse("just a scalar")), DocumentShape::Unclassified);
    }
}
