#![forbid(unsafe_code)]

//! Core data model for fieldtree.
//!
//! # Role in fieldtree
//! `fieldtree-core` turns an arbitrary JSON-like value into an ordered tree
//! of [`Field`]s. Every field carries its structural [`FieldPath`] and the
//! [`LineState`]s a renderer needs to draw vertical tree guide lines.
//!
//! # Primary responsibilities
//! - **JsonValue**: the input model, including opaque [`BigNumber`] leaves.
//! - **FieldPath**: segment-based paths with an unambiguous string key.
//! - **LineState**: per-ancestor guide-line states and their inheritance rule.
//! - **build_fields**: the pure, fail-soft tree builder.
//!
//! # How it fits in the system
//! `fieldtree-runtime` keeps expand/collapse state keyed by
//! [`FieldPath::key`], and `fieldtree-widgets` flattens the field tree into
//! rows. Neither depends on how the tree was built, only on its shape.
//!
//! # Example
//!
//! ```
//! use fieldtree_core::{LineState, build_fields, parse_json};
//!
//! let value = parse_json(r#"{"a": {"b": 1}, "c": 2}"#).unwrap();
//! let fields = build_fields(&value);
//!
//! assert_eq!(fields.len(), 2);
//! assert!(fields[0].is_object());
//! assert_eq!(fields[0].children[0].lines, vec![LineState::Half, LineState::Last]);
//! assert_eq!(fields[1].lines, vec![LineState::Last]);
//! ```

pub mod field;
pub mod line;
pub mod path;
pub mod value;

pub use field::{ContainerKind, Field, FieldValue, build_fields, drillable_paths, walk_fields};
pub use line::LineState;
pub use path::FieldPath;
pub use value::{
    BigNumber, Entries, JsonValue, ValueError, is_big_number, parse_json, parse_json_reader,
};
