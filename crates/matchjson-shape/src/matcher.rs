//! # Shape Matcher
//!
//! One-level structural diff between a reference document and a candidate.

use matchjson_core::{Document, TypeTag};
use serde::{Deserialize, Serialize};

use crate::report::{MismatchReport, TypeMismatch};

/// Which checks [`compare`] runs.
///
/// Absent-key detection is always on. Both optional checks default to
/// enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOptions {
    /// Compare coarse value types of keys present in both documents.
    pub match_types: bool,
    /// Report candidate keys that the reference does not have.
    pub excess_keys: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            match_types: true,
            excess_keys: true,
        }
    }
}

impl MatchOptions {
    /// Options with only absent-key detection enabled.
    pub fn keys_only() -> Self {
        Self {
            match_types: false,
            excess_keys: false,
        }
    }

    /// Set whether coarse types are compared.
    pub fn with_match_types(mut self, enabled: bool) -> Self {
        self.match_types = enabled;
        self
    }

    /// Set whether excess candidate keys are reported.
    pub fn with_excess_keys(mut self, enabled: bool) -> Self {
        self.excess_keys = enabled;
        self
    }
}

/// Compare the shape of `candidate` against `reference`.
///
/// Reference keys are visited in reference order; a key missing from the
/// candidate is recorded as absent and its type is not checked. When
/// `options.match_types` is set, keys present in both are compared by
/// [`TypeTag`]. When `options.excess_keys` is set, candidate keys are then
/// visited in candidate order and any the reference lacks are recorded.
pub fn compare(reference: &Document, candidate: &Document, options: &MatchOptions) -> MismatchReport {
    let mut report = MismatchReport::default();

    for (key, expected_value) in reference.entries() {
        let Some(actual_value) = candidate.get(key) else {
            report.absent_keys.push(key.to_string());
            continue;
        };

        if options.match_types {
            let expected = TypeTag::of(expected_value);
            let actual = TypeTag::of(actual_value);
            if expected != actual {
                report.type_mismatches.push(TypeMismatch {
                    key: key.to_string(),
                    expected,
                    actual,
                });
            }
        }
    }

    if options.excess_keys {
        report.excess_keys = candidate
            .keys()
            .filter(|key| !reference.contains_key(key))
            .map(str::to_string)
            .collect();
    }

    tracing::debug!(
        reference_keys = reference.len(),
        candidate_keys = candidate.len(),
        absent = report.absent_keys.len(),
        type_mismatches = report.type_mismatches.len(),
        excess = report.excess_keys.len(),
        "shape comparison complete"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        Document::from_value(value).unwrap()
    }

    #[test]
    fn missing_key_is_reported_absent() {
        let report = compare(
            &doc(json!({"a": 1, "b": "x"})),
            &doc(json!({"a": 2})),
            &MatchOptions::default(),
        );
        assert_eq!(report.absent_keys, vec!["b"]);
        assert!(report.type_mismatches.is_empty());
        assert!(!report.is_match());
    }

    #[test]
    fn differing_type_is_reported() {
        let report = compare(
            &doc(json!({"a": 1})),
            &doc(json!({"a": "1"})),
            &MatchOptions::default(),
        );
        assert_eq!(
            report.type_mismatches,
            vec![TypeMismatch {
                key: "a".into(),
                expected: TypeTag::Number,
                actual: TypeTag::String,
            }]
        );
        assert!(!report.is_match());
    }

    #[test]
    fn excess_key_toggle() {
        let reference = doc(json!({"a": 1}));
        let candidate = doc(json!({"a": 2, "b": 3}));

        let report = compare(&reference, &candidate, &MatchOptions::default());
        assert_eq!(report.excess_keys, vec!["b"]);
        assert!(!report.is_match());

        let report = compare(
            &reference,
            &candidate,
            &MatchOptions::default().with_excess_keys(false),
        );
        assert!(report.is_match());
    }

    #[test]
    fn types_ignored_when_disabled() {
        let report = compare(
            &doc(json!({"a": 1, "b": true})),
            &doc(json!({"a": "one", "b": null})),
            &MatchOptions::default().with_match_types(false),
        );
        assert!(report.type_mismatches.is_empty());
        assert!(report.is_match());
    }

    #[test]
    fn absent_key_is_not_type_checked() {
        let report = compare(
            &doc(json!({"a": 1})),
            &doc(json!({})),
            &MatchOptions::default(),
        );
        assert_eq!(report.absent_keys, vec!["a"]);
        assert!(report.type_mismatches.is_empty());
    }

    #[test]
    fn null_array_and_object_are_interchangeable() {
        let report = compare(
            &doc(json!({"a": null, "b": [1], "c": {"x": 1}})),
            &doc(json!({"a": {}, "b": null, "c": ["x"]})),
            &MatchOptions::default(),
        );
        assert!(report.is_match(), "unexpected report: {report:?}");
    }

    #[test]
    fn nested_values_are_not_inspected() {
        let report = compare(
            &doc(json!({"nested": {"a": 1, "b": 2}})),
            &doc(json!({"nested": {"c": "three"}})),
            &MatchOptions::default(),
        );
        assert!(report.is_match());
    }

    #[test]
    fn reports_every_mismatch_in_reference_order() {
        let report = compare(
            &doc(json!({"z": 1, "y": "s", "x": true, "w": 0})),
            &doc(json!({"w": 0, "x": 1, "z": "1"})),
            &MatchOptions::default(),
        );
        assert_eq!(report.absent_keys, vec!["y"]);
        let keys: Vec<&str> = report.type_mismatches.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, vec!["z", "x"]);
    }

    #[test]
    fn excess_keys_follow_candidate_order() {
        let report = compare(
            &doc(json!({"a": 1})),
            &doc(json!({"q": 1, "a": 1, "c": 2, "b": 3})),
            &MatchOptions::default(),
        );
        assert_eq!(report.excess_keys, vec!["q", "c", "b"]);
    }

    #[test]
    fn empty_reference_matches_without_excess_check() {
        let report = compare(
            &Document::new(),
            &doc(json!({"a": 1})),
            &MatchOptions::default().with_excess_keys(false),
        );
        assert!(report.is_match());
    }

    #[test]
    fn empty_candidate_reports_all_reference_keys() {
        let report = compare(
            &doc(json!({"a": 1, "b": 2, "c": 3})),
            &Document::new(),
            &MatchOptions::default(),
        );
        assert_eq!(report.absent_keys, vec!["a", "b", "c"]);
        assert!(report.excess_keys.is_empty());
    }

    #[test]
    fn options_default_enables_both_checks() {
        let opts = MatchOptions::default();
        assert!(opts.match_types);
        assert!(opts.excess_keys);
        assert_eq!(
            MatchOptions::keys_only(),
            MatchOptions {
                match_types: false,
                excess_keys: false
            }
        );
    }

    #[test]
    fn options_serde_uses_camel_case() {
        let opts: MatchOptions =
            serde_json::from_value(json!({"matchTypes": false, "excessKeys": true})).unwrap();
        assert!(!opts.match_types);
        assert!(opts.excess_keys);
    }
}
