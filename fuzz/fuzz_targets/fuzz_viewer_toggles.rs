#![no_main]

use arbitrary::Arbitrary;
use fieldtree_core::{build_fields, parse_json, walk_fields};
use fieldtree_runtime::{ExpandPolicy, ExpandStore};
use fieldtree_widgets::JsonViewer;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    json: String,
    expand_all: bool,
    toggles: Vec<u8>,
}

fuzz_target!(|input: Input| {
    if input.json.len() > 8 * 1024 || input.toggles.len() > 64 {
        return;
    }
    let Ok(value) = parse_json(&input.json) else {
        return;
    };
    let fields = build_fields(&value);
    let store = ExpandStore::new();
    let policy = if input.expand_all {
        ExpandPolicy::ExpandAll
    } else {
        ExpandPolicy::Auto
    };
    store.initialize(&fields, policy);

    let viewer = JsonViewer::new(&fields);
    let mut total = 0usize;
    walk_fields(&fields, |_| total += 1);

    for pick in input.toggles {
        let count = viewer.visible_count(&store);
        assert!(count >= 1, "at least one row is always shown");
        viewer.toggle_row(&store, usize::from(pick) % count);

        let rows = viewer.rows(&store);
        assert_eq!(rows.len(), viewer.visible_count(&store));
        assert!(rows.len() <= total.max(1), "never more rows than fields");
    }
});
