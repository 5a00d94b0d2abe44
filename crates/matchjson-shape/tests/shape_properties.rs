//! Property tests for the shape matcher.
//!
//! Documents are generated from arbitrary JSON values (floats excluded so
//! equality stays exact) and checked against the matcher's invariants:
//! reflexivity, superset acceptance, monotonicity of the excess-key check,
//! and the `match_types` toggle.

use matchjson_core::Document;
use matchjson_shape::{compare, MatchOptions};
use proptest::prelude::*;
use serde_json::{Map, Value};

/// Strategy for JSON values without floats.
fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| serde_json::json!(n)),
        "[a-zA-Z0-9_ ]{0,20}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Strategy for top-level documents.
fn document() -> impl Strategy<Value = Document> {
    prop::collection::btree_map("[a-z]{1,8}", json_value(), 0..10).prop_map(|m| {
        let map: Map<String, Value> = m.into_iter().collect();
        Document::from(map)
    })
}

proptest! {
    /// Every document matches itself.
    #[test]
    fn comparison_is_reflexive(doc in document()) {
        let report = compare(&doc, &doc, &MatchOptions::default());
        prop_assert!(report.is_match(), "self comparison reported {:?}", report);
    }

    /// Extra keys in the candidate are tolerated without the excess check.
    #[test]
    fn superset_matches_without_excess_check(
        reference in document(),
        extra in prop::collection::btree_map("[A-Z]{1,8}", json_value(), 0..5),
    ) {
        let mut map = reference.as_map().clone();
        for (k, v) in extra {
            map.insert(k, v);
        }
        let candidate = Document::from(map);
        let opts = MatchOptions::default().with_excess_keys(false);
        prop_assert!(compare(&reference, &candidate, &opts).is_match());
    }

    /// The excess check only ever adds excess-key entries.
    #[test]
    fn excess_check_is_monotonic(reference in document(), candidate in document()) {
        let off = compare(&reference, &candidate, &MatchOptions::default().with_excess_keys(false));
        let on = compare(&reference, &candidate, &MatchOptions::default());
        prop_assert!(off.excess_keys.is_empty());
        prop_assert_eq!(&off.absent_keys, &on.absent_keys);
        prop_assert_eq!(&off.type_mismatches, &on.type_mismatches);
        for key in &on.excess_keys {
            prop_assert!(!reference.contains_key(key));
            prop_assert!(candidate.contains_key(key));
        }
    }

    /// Disabling type matching never yields type mismatches.
    #[test]
    fn type_check_toggle(reference in document(), candidate in document()) {
        let opts = MatchOptions::default().with_match_types(false);
        prop_assert!(compare(&reference, &candidate, &opts).type_mismatches.is_empty());
    }

    /// Absent keys are exactly the reference keys the candidate lacks.
    #[test]
    fn absent_keys_are_exact(reference in document(), candidate in document()) {
        let report = compare(&reference, &candidate, &MatchOptions::keys_only());
        let expected: Vec<String> = reference
            .keys()
            .filter(|k| !candidate.contains_key(k))
            .map(str::to_string)
            .collect();
        prop_assert_eq!(report.absent_keys, expected);
    }

    /// The verdict agrees with the rendered message.
    #[test]
    fn verdict_agrees_with_message(reference in document(), candidate in document()) {
        let report = compare(&reference, &candidate, &MatchOptions::default());
        prop_assert_eq!(report.is_match(), report.format_message().is_empty());
    }
}
