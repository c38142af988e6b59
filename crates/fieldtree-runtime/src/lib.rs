#![forbid(unsafe_code)]

//! Runtime state for fieldtree views.
//!
//! # Role in fieldtree
//! `fieldtree-runtime` owns the mutable side of a tree view: which
//! containers are expanded. The field tree itself is immutable; a view
//! combines it with an [`ExpandStore`] snapshot on every render.
//!
//! # How it fits in the system
//! [`Observable`] provides versioned change notification without tying the
//! store to any particular UI framework. Presentation layers subscribe and
//! re-render, or compare [`ExpandStore::version`] between frames.

pub mod expand;
pub mod observable;

pub use expand::{ExpandMap, ExpandPersistState, ExpandPolicy, ExpandStore, initial_expand};
pub use observable::{Observable, Subscription};
