#![no_main]

use fieldtree_core::{Field, FieldValue, LineState, build_fields, parse_json};
use libfuzzer_sys::fuzz_target;

fn check(fields: &[Field], depth: usize) {
    for (i, field) in fields.iter().enumerate() {
        assert_eq!(field.lines.len(), depth + 1, "lines length tracks depth");
        assert_eq!(field.path.len(), depth + 1, "path length tracks depth");
        let own = LineState::own(i + 1 == fields.len());
        assert_eq!(field.lines.last(), Some(&own), "own line state");
        let inherited: Vec<LineState> = field.lines.iter().map(|l| l.inherited()).collect();
        for child in &field.children {
            assert_eq!(&child.lines[..=depth], &inherited[..], "children inherit lines");
        }
        if let FieldValue::Leaf(_) = field.value {
            assert!(field.children.is_empty(), "leaves have no children");
        }
        check(&field.children, depth + 1);
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() > 16 * 1024 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(value) = parse_json(text) else {
        return;
    };

    let fields = build_fields(&value);
    if value.is_drillable() {
        check(&fields, 0);
    } else {
        assert_eq!(fields.len(), 1, "scalar root yields one field");
        assert!(fields[0].lines.is_empty(), "root leaf has no guides");
    }
});
