//! Property-based invariant tests for the field tree builder.
//!
//! 1. Non-container roots yield exactly one root leaf.
//! 2. Empty containers yield no fields.
//! 3. `path.len() == lines.len()` for every non-root field.
//! 4. The trailing line is `Last` for the final sibling, `Visible` otherwise.
//! 5. Inherited lines follow the parent's lines through `inherited()`.
//! 6. Child counts match the container's entry count.
//! 7. Determinism: equal input gives equal output.
//! 8. Drillable paths have unique keys.

use std::collections::HashSet;

use fieldtree_core::{
    BigNumber, Field, FieldValue, JsonValue, LineState, build_fields, drillable_paths,
};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn leaf() -> impl Strategy<Value = JsonValue> {
    prop_oneof![
        Just(JsonValue::Undefined),
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::Bool),
        (-1.0e9f64..1.0e9).prop_map(JsonValue::Number),
        "[1-9][0-9]{16,30}".prop_map(|s| JsonValue::BigNumber(BigNumber::new(s))),
        "[a-z/.~]{0,6}".prop_map(JsonValue::String),
    ]
}

fn json_value() -> impl Strategy<Value = JsonValue> {
    leaf().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..5).prop_map(JsonValue::Array),
            proptest::collection::vec(("[a-z/.]{1,4}", inner), 0..5).prop_map(|entries| {
                // Object keys are unique in well-formed input.
                let mut seen = HashSet::new();
                JsonValue::Object(
                    entries
                        .into_iter()
                        .filter(|(key, _)| seen.insert(key.clone()))
                        .collect(),
                )
            }),
        ]
    })
}

fn check_level(fields: &[Field], value: &JsonValue, parent_lines: &[LineState]) {
    let entries: Vec<_> = value.entries().expect("container").collect();
    assert_eq!(fields.len(), entries.len());

    for (index, (field, (key, child))) in fields.iter().zip(entries).enumerate() {
        assert_eq!(field.key(), Some(&*key));
        assert_eq!(field.path.len(), field.lines.len());

        let expected_own = if index + 1 == fields.len() {
            LineState::Last
        } else {
            LineState::Visible
        };
        assert_eq!(field.own_line(), Some(expected_own));

        let inherited: Vec<LineState> = parent_lines.iter().map(|s| s.inherited()).collect();
        assert_eq!(&field.lines[..field.lines.len() - 1], inherited.as_slice());

        assert_eq!(field.is_object(), child.is_drillable());
        match &field.value {
            FieldValue::Container(_) => check_level(&field.children, child, &field.lines),
            FieldValue::Leaf(leaf) => {
                assert_eq!(leaf, child);
                assert!(field.children.is_empty());
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Non-container roots
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn leaf_root_is_single_field(value in leaf()) {
        let fields = build_fields(&value);
        prop_assert_eq!(fields.len(), 1);
        prop_assert!(fields[0].path.is_root());
        prop_assert!(fields[0].lines.is_empty());
        prop_assert!(fields[0].children.is_empty());
        prop_assert!(!fields[0].is_object());
        prop_assert_eq!(fields[0].leaf_value(), Some(&value));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2–6. Structural invariants
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn structure_matches_value(value in json_value()) {
        let fields = build_fields(&value);
        match value.child_count() {
            None => {
                prop_assert_eq!(fields.len(), 1);
            }
            Some(0) => {
                prop_assert!(fields.is_empty());
            }
            Some(_) => check_level(&fields, &value, &[]),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn build_is_deterministic(value in json_value()) {
        let copy = value.clone();
        prop_assert_eq!(build_fields(&value), build_fields(&copy));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Path keys are unambiguous
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn drillable_keys_are_unique(value in json_value()) {
        let fields = build_fields(&value);
        let paths = drillable_paths(&fields);
        let keys: HashSet<String> = paths.iter().map(|p| p.key()).collect();
        prop_assert_eq!(keys.len(), paths.len());
    }
}
