#![forbid(unsafe_code)]

//! Presentation adapter for fieldtree.
//!
//! Flattens a [`Field`](fieldtree_core::Field) tree into visible [`Row`]s
//! according to an [`ExpandStore`](fieldtree_runtime::ExpandStore), drawing
//! guide lines from each field's line states.
//!
//! # Example
//!
//! ```
//! use fieldtree_core::{build_fields, parse_json};
//! use fieldtree_runtime::{ExpandPolicy, ExpandStore};
//! use fieldtree_widgets::{JsonViewer, TreeGuides};
//!
//! let fields = build_fields(&parse_json(r#"{"a": {"b": 1}, "c": 2}"#).unwrap());
//! let store = ExpandStore::new();
//! store.initialize(&fields, ExpandPolicy::ExpandAll);
//!
//! let viewer = JsonViewer::new(&fields).with_guides(TreeGuides::Ascii);
//! assert_eq!(
//!     viewer.render_lines(&store, None),
//!     vec!["+-- - a: {1}", "|   `-- b: 1", "`-- c: 2"],
//! );
//! ```

pub mod format;
pub mod guides;
pub mod labels;
pub mod style;
pub mod text;
pub mod viewer;

pub use format::{format_leaf, format_summary};
pub use guides::TreeGuides;
pub use labels::{ReservedKey, ReservedLabels};
pub use style::RowStyle;
pub use text::{display_width, truncate_to_width};
pub use viewer::{JsonViewer, Row};
