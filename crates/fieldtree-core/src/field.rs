//! Field tree builder.
//!
//! [`build_fields`] turns a [`JsonValue`] into an ordered list of top-level
//! [`Field`]s. It never fails: anything that is not a drillable container is
//! a leaf.
//!
//! # Shape
//!
//! - A non-container root (including a [`BigNumber`](crate::BigNumber))
//!   yields exactly one field with an empty path and no lines.
//! - An empty container yields no fields. Callers render their own
//!   placeholder for that case.
//! - Otherwise each entry becomes a field whose `lines` has one entry per
//!   path segment: the parent's lines mapped through
//!   [`LineState::inherited`], followed by the field's own state.
//!
//! Line arrays are passed down the recursion, so construction is
//! O(n·d) for n nodes at depth d.

use crate::line::LineState;
use crate::path::FieldPath;
use crate::value::{Entries, JsonValue};

/// Kind of a drillable container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Object,
    Array,
}

/// Payload of a [`Field`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A scalar, `undefined`, or big number. Never an array or object.
    Leaf(JsonValue),
    /// A drillable container; its entries are the field's children.
    Container(ContainerKind),
}

/// A node in the rendered value tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub path: FieldPath,
    pub value: FieldValue,
    /// Child fields in container order. Empty for leaves.
    pub children: Vec<Field>,
    /// Guide-line states, one per path segment.
    pub lines: Vec<LineState>,
}

impl Field {
    fn leaf(path: FieldPath, lines: Vec<LineState>, value: JsonValue) -> Self {
        Self {
            path,
            value: FieldValue::Leaf(value),
            children: Vec::new(),
            lines,
        }
    }

    /// Whether this field is a drillable container.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self.value, FieldValue::Container(_))
    }

    /// The leaf value, `None` for containers.
    #[must_use]
    pub fn leaf_value(&self) -> Option<&JsonValue> {
        match &self.value {
            FieldValue::Leaf(value) => Some(value),
            FieldValue::Container(_) => None,
        }
    }

    #[must_use]
    pub fn container_kind(&self) -> Option<ContainerKind> {
        match self.value {
            FieldValue::Container(kind) => Some(kind),
            FieldValue::Leaf(_) => None,
        }
    }

    /// The last path segment, `None` for a root leaf.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.path.last()
    }

    /// This field's own trailing line state.
    #[must_use]
    pub fn own_line(&self) -> Option<LineState> {
        self.lines.last().copied()
    }

    /// Visit this field and its descendants, depth-first pre-order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Field)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Number of fields in this subtree, including this one.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.children
            .iter()
            .fold(1usize, |acc, child| acc.saturating_add(child.node_count()))
    }

    /// Depth of this subtree, counting this field as 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Field::depth).max().unwrap_or(0)
    }
}

/// Visit every field in `fields`, depth-first pre-order.
pub fn walk_fields<'a>(fields: &'a [Field], mut visit: impl FnMut(&'a Field)) {
    for field in fields {
        field.walk(&mut visit);
    }
}

/// Paths of every drillable field at every depth.
#[must_use]
pub fn drillable_paths(fields: &[Field]) -> Vec<FieldPath> {
    let mut paths = Vec::new();
    walk_fields(fields, |field| {
        if field.is_object() {
            paths.push(field.path.clone());
        }
    });
    paths
}

/// Build the field tree for `value`.
#[must_use]
pub fn build_fields(value: &JsonValue) -> Vec<Field> {
    let fields = match value.entries() {
        Some(entries) => build_level(entries, &FieldPath::root(), &[]),
        None => vec![Field::leaf(FieldPath::root(), Vec::new(), value.clone())],
    };

    #[cfg(feature = "tracing")]
    {
        let node_count = fields
            .iter()
            .fold(0usize, |acc, field| acc.saturating_add(field.node_count()));
        let max_depth = fields.iter().map(Field::depth).max().unwrap_or(0);
        tracing::debug!(
            message = "fieldtree.build",
            root_type = value.type_name(),
            top_level = fields.len(),
            node_count,
            max_depth
        );
    }

    fields
}

fn build_level(
    entries: Entries<'_>,
    parent: &FieldPath,
    parent_lines: &[LineState],
) -> Vec<Field> {
    let count = entries.len();
    let inherited: Vec<LineState> = parent_lines.iter().map(|s| s.inherited()).collect();

    entries
        .enumerate()
        .map(|(index, (key, child))| {
            let path = parent.child(key);
            let mut lines = Vec::with_capacity(inherited.len() + 1);
            lines.extend_from_slice(&inherited);
            lines.push(LineState::own(index + 1 == count));

            match child.entries() {
                Some(grandchildren) => {
                    let kind = match &grandchildren {
                        Entries::Array(_) => ContainerKind::Array,
                        Entries::Object(_) => ContainerKind::Object,
                    };
                    let children = build_level(grandchildren, &path, &lines);
                    Field {
                        path,
                        value: FieldValue::Container(kind),
                        children,
                        lines,
                    }
                }
                None => Field::leaf(path, lines, child.clone()),
            }
        })
        .collect()
}
