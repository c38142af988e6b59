//! Tree view over a field list.
//!
//! [`JsonViewer`] walks the field tree in display order, descending into a
//! container only while its path is marked expanded in the
//! [`ExpandStore`]. A missing entry is collapsed.
//!
//! # Row layout
//!
//! ```text
//! <guides><marker><label>: <value>
//! ```
//!
//! - `guides` has one segment per entry of the field's `lines`.
//! - `marker` appears on containers and shows the expanded state.
//! - `label` is the key, or a configured prefix for `$error`/`$warning`.
//! - `value` is the formatted leaf, or a `{n}`/`[n]` summary.
//!
//! A root leaf has no key and renders as the bare value. An empty field
//! list renders a single placeholder row.

use fieldtree_core::{Field, FieldPath, FieldValue};
use fieldtree_runtime::{ExpandMap, ExpandStore};
#[cfg(feature = "tracing")]
use web_time::Instant;

use crate::format::{format_leaf, format_summary};
use crate::guides::TreeGuides;
use crate::labels::{ReservedKey, ReservedLabels};
use crate::style::RowStyle;
use crate::text::truncate_to_width;

/// One rendered line of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Path of the field; root for a root leaf or placeholder.
    pub path: FieldPath,
    pub depth: usize,
    pub guides: String,
    /// Toggle marker, empty for leaves.
    pub marker: &'static str,
    /// Key or reserved-key label. `None` for root leaves and placeholders.
    pub label: Option<String>,
    pub value: String,
    pub style: RowStyle,
}

impl Row {
    /// The row as a single line of text.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.guides.len() + self.value.len() + 16);
        out.push_str(&self.guides);
        out.push_str(self.marker);
        if let Some(label) = &self.label {
            out.push_str(label);
            out.push_str(": ");
        }
        out.push_str(&self.value);
        out
    }

    #[must_use]
    pub fn is_container(&self) -> bool {
        self.style.contains(RowStyle::CONTAINER)
    }
}

/// Flattens fields into visible rows.
#[derive(Debug, Clone)]
pub struct JsonViewer<'a> {
    fields: &'a [Field],
    guides: TreeGuides,
    labels: ReservedLabels,
}

fn expanded_in(map: Option<&ExpandMap>, field: &Field) -> bool {
    map.and_then(|m| m.get(&field.path.key()).copied())
        .unwrap_or(false)
}

fn collect_visible<'a>(
    fields: &'a [Field],
    map: Option<&ExpandMap>,
    out: &mut Vec<(&'a Field, bool)>,
) {
    for field in fields {
        let expanded = field.is_object() && expanded_in(map, field);
        out.push((field, expanded));
        if expanded {
            collect_visible(&field.children, map, out);
        }
    }
}

impl<'a> JsonViewer<'a> {
    #[must_use]
    pub fn new(fields: &'a [Field]) -> Self {
        Self {
            fields,
            guides: TreeGuides::default(),
            labels: ReservedLabels::default(),
        }
    }

    /// Set the guide character style.
    #[must_use]
    pub fn with_guides(mut self, guides: TreeGuides) -> Self {
        self.guides = guides;
        self
    }

    /// Set the labels used for reserved keys and the empty placeholder.
    #[must_use]
    pub fn with_labels(mut self, labels: ReservedLabels) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn fields(&self) -> &'a [Field] {
        self.fields
    }

    /// Visible fields in display order, paired with their expanded flag.
    #[must_use]
    pub fn visible_fields(&self, expand: &ExpandStore) -> Vec<(&'a Field, bool)> {
        expand.with_snapshot(|map| {
            let mut out = Vec::with_capacity(self.fields.len());
            collect_visible(self.fields, map, &mut out);
            out
        })
    }

    /// Number of rows [`JsonViewer::rows`] would produce.
    #[must_use]
    pub fn visible_count(&self, expand: &ExpandStore) -> usize {
        if self.fields.is_empty() {
            1
        } else {
            self.visible_fields(expand).len()
        }
    }

    /// Build the visible rows.
    #[must_use]
    pub fn rows(&self, expand: &ExpandStore) -> Vec<Row> {
        #[cfg(feature = "tracing")]
        let render_start = Instant::now();

        if self.fields.is_empty() {
            return vec![self.placeholder_row()];
        }

        let rows: Vec<Row> = self
            .visible_fields(expand)
            .into_iter()
            .map(|(field, expanded)| self.row_for(field, expanded))
            .collect();

        #[cfg(feature = "tracing")]
        {
            let total_nodes = self
                .fields
                .iter()
                .fold(0usize, |acc, f| acc.saturating_add(f.node_count()));
            tracing::debug!(
                message = "fieldtree.render",
                total_nodes,
                visible_rows = rows.len(),
                render_duration_us = render_start.elapsed().as_micros() as u64
            );
        }

        rows
    }

    /// Render rows as text lines, clipped to `width` columns when given.
    #[must_use]
    pub fn render_lines(&self, expand: &ExpandStore, width: Option<usize>) -> Vec<String> {
        self.rows(expand)
            .iter()
            .map(|row| {
                let text = row.text();
                match width {
                    Some(width) => truncate_to_width(&text, width).into_owned(),
                    None => text,
                }
            })
            .collect()
    }

    /// The field shown at visible row `index`.
    #[must_use]
    pub fn field_at_visible_index(&self, expand: &ExpandStore, index: usize) -> Option<&'a Field> {
        self.visible_fields(expand).get(index).map(|(field, _)| *field)
    }

    /// Toggle the container at visible row `index`.
    ///
    /// Returns `true` when an expand/collapse was applied; leaves and
    /// out-of-range indices are ignored.
    pub fn toggle_row(&self, expand: &ExpandStore, index: usize) -> bool {
        let Some(field) = self.field_at_visible_index(expand, index) else {
            return false;
        };
        if !field.is_object() {
            return false;
        }
        let key = field.path.key();
        let next = !expand.is_expanded(&key);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "fieldtree.viewer.toggle",
            action = if next { "expand" } else { "collapse" },
            visible_index = index,
            key = %key
        );

        expand.toggle(key, next);
        true
    }

    fn placeholder_row(&self) -> Row {
        Row {
            path: FieldPath::root(),
            depth: 0,
            guides: String::new(),
            marker: "",
            label: None,
            value: self.labels.empty.clone(),
            style: RowStyle::PLACEHOLDER,
        }
    }

    fn row_for(&self, field: &Field, expanded: bool) -> Row {
        let reserved = field.key().and_then(ReservedKey::from_segment);
        let label = match (reserved, field.key()) {
            (Some(reserved), _) => Some(self.labels.label(reserved).to_owned()),
            (None, Some(key)) => Some(key.to_owned()),
            (None, None) => None,
        };

        let (value, mut style, marker) = match &field.value {
            FieldValue::Leaf(leaf) => {
                let (text, style) = format_leaf(leaf);
                (text, style, "")
            }
            FieldValue::Container(kind) => {
                let mut style = RowStyle::CONTAINER;
                if expanded {
                    style |= RowStyle::EXPANDED;
                }
                (
                    format_summary(*kind, field.children.len()),
                    style,
                    self.guides.marker(expanded),
                )
            }
        };
        if let Some(reserved) = reserved {
            style |= reserved.style();
        }

        Row {
            path: field.path.clone(),
            depth: field.lines.len().saturating_sub(1),
            guides: self.guides.prefix(&field.lines),
            marker,
            label,
            value,
            style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldtree_core::{build_fields, parse_json};
    use fieldtree_runtime::ExpandPolicy;

    fn fields_of(text: &str) -> Vec<Field> {
        build_fields(&parse_json(text).unwrap())
    }

    fn ascii(fields: &[Field]) -> JsonViewer<'_> {
        JsonViewer::new(fields).with_guides(TreeGuides::Ascii)
    }

    #[test]
    fn collapsed_by_default() {
        let fields = fields_of(r#"{"a": {"b": 1}, "c": 2}"#);
        let store = ExpandStore::new();
        assert_eq!(
            ascii(&fields).render_lines(&store, None),
            vec!["+-- + a: {1}", "`-- c: 2"]
        );
    }

    #[test]
    fn expanded_children_use_inherited_guides() {
        let fields = fields_of(r#"{"a": {"b": 1, "x": [true]}, "c": {"d": null}}"#);
        let store = ExpandStore::new();
        store.initialize(&fields, ExpandPolicy::ExpandAll);

        assert_eq!(
            ascii(&fields).render_lines(&store, None),
            vec![
                "+-- - a: {2}",
                "|   +-- b: 1",
                "|   `-- - x: [1]",
                "|       `-- 0: true",
                "`-- - c: {1}",
                "    `-- d: null",
            ]
        );
    }

    #[test]
    fn unicode_guides_render_box_drawing() {
        let fields = fields_of(r#"{"a": 1, "b": 2}"#);
        let store = ExpandStore::new();
        let lines = JsonViewer::new(&fields).render_lines(&store, None);
        assert_eq!(
            lines,
            vec![
                "\u{251C}\u{2500}\u{2500} a: 1",
                "\u{2514}\u{2500}\u{2500} b: 2"
            ]
        );
    }

    #[test]
    fn root_leaf_renders_bare_value() {
        let fields = fields_of(r#""hello""#);
        let rows = JsonViewer::new(&fields).rows(&ExpandStore::new());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text(), r#""hello""#);
        assert_eq!(rows[0].label, None);
        assert_eq!(rows[0].style, RowStyle::STRING);
    }

    #[test]
    fn empty_input_renders_placeholder() {
        let fields = fields_of("[]");
        let viewer = JsonViewer::new(&fields).with_labels(ReservedLabels {
            empty: "nothing here".to_owned(),
            ..ReservedLabels::default()
        });
        let store = ExpandStore::new();
        let rows = viewer.rows(&store);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value, "nothing here");
        assert_eq!(rows[0].style, RowStyle::PLACEHOLDER);
        assert_eq!(viewer.visible_count(&store), 1);
        assert!(!viewer.toggle_row(&store, 0));
    }

    #[test]
    fn reserved_keys_use_labels_and_alert_styles() {
        let fields = fields_of(r#"{"$error": "boom", "$warning": {"code": 7}}"#);
        let store = ExpandStore::new();
        let rows = ascii(&fields).rows(&store);

        assert_eq!(rows[0].text(), r#"+-- Error: "boom""#);
        assert!(rows[0].style.contains(RowStyle::ERROR | RowStyle::STRING));
        assert_eq!(rows[1].text(), "`-- + Warning: {1}");
        assert!(rows[1].style.contains(RowStyle::WARNING | RowStyle::CONTAINER));
        assert!(rows.iter().all(|row| row.style.is_alert()));
    }

    #[test]
    fn numbers_and_big_numbers_share_number_style() {
        let fields = fields_of(r#"{"n": 1, "big": 123456789012345678901, "s": "1"}"#);
        let rows = JsonViewer::new(&fields).rows(&ExpandStore::new());
        assert!(rows[0].style.contains(RowStyle::NUMBER));
        assert!(rows[1].style.contains(RowStyle::NUMBER | RowStyle::BIG_NUMBER));
        assert!(!rows[2].style.contains(RowStyle::NUMBER));
        assert_eq!(rows[1].value, "123456789012345678901");
    }

    #[test]
    fn toggle_row_expands_and_collapses() {
        let fields = fields_of(r#"{"a": {"b": {"c": 1}}, "d": 2}"#);
        let store = ExpandStore::new();
        let viewer = ascii(&fields);
        assert_eq!(viewer.visible_count(&store), 2);

        assert!(viewer.toggle_row(&store, 0));
        assert!(store.is_expanded("/a"));
        assert_eq!(viewer.visible_count(&store), 3);

        assert!(viewer.toggle_row(&store, 1));
        assert_eq!(viewer.visible_count(&store), 4);
        assert_eq!(viewer.field_at_visible_index(&store, 2).unwrap().path.key(), "/a/b/c");

        assert!(viewer.toggle_row(&store, 0));
        assert!(!store.is_expanded("/a"));
        assert_eq!(viewer.visible_count(&store), 2);
        // Nested choice survives the parent collapsing.
        assert!(store.is_expanded("/a/b"));
    }

    #[test]
    fn toggle_row_ignores_leaves_and_out_of_range() {
        let fields = fields_of(r#"{"a": 1}"#);
        let store = ExpandStore::new();
        let viewer = ascii(&fields);
        assert!(!viewer.toggle_row(&store, 0));
        assert!(!viewer.toggle_row(&store, 5));
        assert!(!store.is_initialized());
    }

    #[test]
    fn depth_follows_path_length() {
        let fields = fields_of(r#"{"a": {"b": {"c": 1}}}"#);
        let store = ExpandStore::new();
        store.initialize(&fields, ExpandPolicy::ExpandAll);
        let depths: Vec<usize> = ascii(&fields).rows(&store).iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![0, 1, 2]);
    }

    #[test]
    fn render_lines_clip_to_width() {
        let fields = fields_of(r#"{"message": "a rather long string value"}"#);
        let lines = ascii(&fields).render_lines(&ExpandStore::new(), Some(16));
        assert_eq!(lines, vec!["`-- message: \"a\u{2026}"]);
    }

    #[test]
    fn auto_policy_opens_wrapping_root() {
        let fields = fields_of(r#"{"data": {"id": 1, "name": "x"}}"#);
        let store = ExpandStore::new();
        store.initialize(&fields, ExpandPolicy::Auto);
        assert_eq!(
            ascii(&fields).render_lines(&store, None),
            vec!["`-- - data: {2}", "    +-- id: 1", "    `-- name: \"x\""]
        );
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn render_event_reports_rows_and_timing() {
        use std::sync::{Arc, Mutex};
        use tracing_subscriber::Layer;
        use tracing_subscriber::layer::{Context, SubscriberExt};

        #[derive(Default)]
        struct RenderStats {
            visible_rows: Option<u64>,
            timed: bool,
        }

        struct RenderCapture {
            stats: Arc<Mutex<Vec<RenderStats>>>,
        }

        impl<S: tracing::Subscriber> Layer<S> for RenderCapture {
            fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                #[derive(Default)]
                struct Visitor {
                    is_render: bool,
                    stats: RenderStats,
                }
                impl tracing::field::Visit for Visitor {
                    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
                        match field.name() {
                            "visible_rows" => self.stats.visible_rows = Some(value),
                            "render_duration_us" => self.stats.timed = true,
                            _ => {}
                        }
                    }

                    fn record_debug(
                        &mut self,
                        field: &tracing::field::Field,
                        value: &dyn std::fmt::Debug,
                    ) {
                        if field.name() == "message" {
                            self.is_render = format!("{value:?}").contains("fieldtree.render");
                        }
                    }
                }

                let mut visitor = Visitor::default();
                event.record(&mut visitor);
                if visitor.is_render {
                    self.stats.lock().expect("capture lock").push(visitor.stats);
                }
            }
        }

        let stats = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(RenderCapture {
            stats: Arc::clone(&stats),
        });
        let fields = fields_of(r#"{"a": {"b": 1}, "c": 2}"#);
        let store = ExpandStore::new();
        store.initialize(&fields, ExpandPolicy::ExpandAll);
        tracing::subscriber::with_default(subscriber, || {
            let _ = JsonViewer::new(&fields).rows(&store);
        });

        let stats = stats.lock().expect("capture lock");
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].visible_rows, Some(3));
        assert!(stats[0].timed);
    }
}
