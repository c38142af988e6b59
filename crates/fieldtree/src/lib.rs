#![forbid(unsafe_code)]

//! fieldtree public facade crate.
//!
//! Re-exports the value model, the expand-state store and the viewer, and
//! offers [`FieldTree`], which wires them together the way a host view
//! usually does: build fields from a value, initialize expand state once,
//! and keep user choices across data updates.

// --- Core re-exports -------------------------------------------------------

pub use fieldtree_core::{
    BigNumber, ContainerKind, Field, FieldPath, FieldValue, JsonValue, LineState, ValueError,
    build_fields, drillable_paths, is_big_number, parse_json, parse_json_reader, walk_fields,
};

// --- Runtime re-exports ----------------------------------------------------

pub use fieldtree_runtime::{
    ExpandMap, ExpandPersistState, ExpandPolicy, ExpandStore, Observable, Subscription,
    initial_expand,
};

// --- Widget re-exports -----------------------------------------------------

pub use fieldtree_widgets::{
    JsonViewer, ReservedKey, ReservedLabels, Row, RowStyle, TreeGuides, display_width,
    format_leaf, format_summary, truncate_to_width,
};

/// A value's field tree together with its expand state.
#[derive(Debug, Clone)]
pub struct FieldTree {
    fields: Vec<Field>,
    expand: ExpandStore,
    policy: ExpandPolicy,
}

impl FieldTree {
    /// Build fields for `value` and apply `policy` to a fresh store.
    #[must_use]
    pub fn new(value: &JsonValue, policy: ExpandPolicy) -> Self {
        let fields = build_fields(value);
        let expand = ExpandStore::new();
        expand.initialize(&fields, policy);
        Self {
            fields,
            expand,
            policy,
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[must_use]
    pub fn expand(&self) -> &ExpandStore {
        &self.expand
    }

    /// A viewer over the current fields.
    #[must_use]
    pub fn viewer(&self) -> JsonViewer<'_> {
        JsonViewer::new(&self.fields)
    }

    /// Rebuild fields for data that grew or changed in place.
    ///
    /// Existing expand choices are kept; the policy only applies if the
    /// store is still uninitialized.
    pub fn update(&mut self, value: &JsonValue) {
        self.fields = build_fields(value);
        self.expand.initialize(&self.fields, self.policy);
    }

    /// Swap in an unrelated data set, discarding expand state.
    pub fn replace(&mut self, value: &JsonValue) {
        *self = Self::new(value, self.policy);
    }
}

/// Common imports for fieldtree users.
pub mod prelude {
    pub use crate::FieldTree;
    pub use fieldtree_core::{Field, FieldPath, JsonValue, LineState, build_fields, parse_json};
    pub use fieldtree_runtime::{ExpandPolicy, ExpandStore};
    pub use fieldtree_widgets::{JsonViewer, Row, RowStyle, TreeGuides};
}
