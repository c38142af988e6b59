//! Expand/collapse state for a field tree.
//!
//! [`ExpandStore`] maps [`FieldPath::key`](fieldtree_core::FieldPath::key)
//! strings to booleans. It starts uninitialized; a missing entry means
//! collapsed. The initial policy is applied once, on the first non-empty
//! field list, and never overwrites an initialized map. After that the only
//! mutation is [`ExpandStore::toggle`].
//!
//! Replacing the underlying data set is the caller's business: construct a
//! fresh store for unrelated data. Appending data keeps user choices.
//!
//! # Example
//!
//! ```
//! use fieldtree_core::{build_fields, parse_json};
//! use fieldtree_runtime::{ExpandPolicy, ExpandStore};
//!
//! let fields = build_fields(&parse_json(r#"{"data": {"id": 1}}"#).unwrap());
//! let store = ExpandStore::new();
//! store.initialize(&fields, ExpandPolicy::Auto);
//!
//! assert!(store.is_expanded("/data"));
//! store.toggle("/data", false);
//! assert!(!store.is_expanded("/data"));
//! ```

use std::collections::BTreeMap;

use ahash::AHashMap;
use fieldtree_core::{Field, drillable_paths};
use tracing::debug;

use crate::observable::{Observable, Subscription};

/// Path key to expanded flag.
pub type ExpandMap = AHashMap<String, bool>;

/// Initial expansion policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpandPolicy {
    /// Expand a lone drillable top-level field; otherwise stay uninitialized.
    #[default]
    Auto,
    /// Expand every drillable field at every depth.
    ExpandAll,
}

/// Compute the initial mapping for `fields` under `policy`.
///
/// Returns `None` when the policy leaves the state uninitialized.
#[must_use]
pub fn initial_expand(fields: &[Field], policy: ExpandPolicy) -> Option<ExpandMap> {
    if fields.is_empty() {
        return None;
    }
    match policy {
        ExpandPolicy::ExpandAll => Some(
            drillable_paths(fields)
                .into_iter()
                .map(|path| (path.key(), true))
                .collect(),
        ),
        ExpandPolicy::Auto => match fields {
            [only] if only.is_object() => {
                let mut map = ExpandMap::default();
                map.insert(only.path.key(), true);
                Some(map)
            }
            _ => None,
        },
    }
}

/// Observable expand-state mapping.
///
/// Clones share state. Not `Send`: the store lives on the thread that
/// handles UI events.
#[derive(Clone, Debug)]
pub struct ExpandStore {
    state: Observable<Option<ExpandMap>>,
}

impl Default for ExpandStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpandStore {
    /// An uninitialized store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Observable::new(None),
        }
    }

    /// A store initialized with `map`.
    #[must_use]
    pub fn with_map(map: ExpandMap) -> Self {
        Self {
            state: Observable::new(Some(map)),
        }
    }

    /// Clone of the current mapping; `None` while uninitialized.
    #[must_use]
    pub fn snapshot(&self) -> Option<ExpandMap> {
        self.state.get()
    }

    /// Borrow the current mapping without cloning.
    pub fn with_snapshot<R>(&self, f: impl FnOnce(Option<&ExpandMap>) -> R) -> R {
        self.state.with(|state| f(state.as_ref()))
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state.with(Option::is_some)
    }

    /// Whether `key` is expanded. Missing entries are collapsed.
    #[must_use]
    pub fn is_expanded(&self, key: &str) -> bool {
        self.state.with(|state| {
            state
                .as_ref()
                .and_then(|map| map.get(key).copied())
                .unwrap_or(false)
        })
    }

    /// Increments on every change to the mapping.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.state.version()
    }

    /// Register a change callback. Drop the guard to unsubscribe.
    pub fn subscribe(&self, callback: impl Fn(Option<&ExpandMap>) + 'static) -> Subscription {
        self.state.subscribe(move |state| callback(state.as_ref()))
    }

    /// Apply `policy` if the store is still uninitialized.
    ///
    /// Returns `true` when a mapping was installed. An empty field list or a
    /// policy that yields nothing leaves the store untouched, so a later
    /// call with more data may still initialize it.
    pub fn initialize(&self, fields: &[Field], policy: ExpandPolicy) -> bool {
        if self.is_initialized() {
            return false;
        }
        let Some(map) = initial_expand(fields, policy) else {
            return false;
        };
        debug!(
            message = "fieldtree.expand.init",
            ?policy,
            top_level = fields.len(),
            expanded = map.len()
        );
        self.state.set(Some(map));
        true
    }

    /// Set `expand[key] = value`, keeping every other entry.
    ///
    /// Toggling an uninitialized store creates the mapping.
    pub fn toggle(&self, key: impl Into<String>, value: bool) {
        let key = key.into();
        debug!(message = "fieldtree.toggle", key = %key, value);
        self.state.update(move |state| {
            state.get_or_insert_with(ExpandMap::default).insert(key, value);
        });
    }

    /// Flip the entry for `key` and return the new value.
    pub fn toggle_flip(&self, key: &str) -> bool {
        let next = !self.is_expanded(key);
        self.toggle(key, next);
        next
    }

    /// Capture the mapping for persistence.
    #[must_use]
    pub fn save_state(&self) -> ExpandPersistState {
        ExpandPersistState {
            expand: self.state.with(|state| {
                state
                    .as_ref()
                    .map(|map| map.iter().map(|(k, v)| (k.clone(), *v)).collect())
            }),
        }
    }

    /// Replace the mapping with a persisted one.
    pub fn restore_state(&self, state: ExpandPersistState) {
        self.state
            .set(state.expand.map(|map| map.into_iter().collect()));
    }
}

/// Persistable expand state.
///
/// Entries are ordered so serialized output is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ExpandPersistState {
    /// `None` when the store was uninitialized.
    pub expand: Option<BTreeMap<String, bool>>,
}
