//! Nested namespace -> key -> string catalog.
//!
//! The catalog is stored as a JSON object tree so that merging follows
//! recursive-replace semantics: objects are merged key by key, anything
//! else overwrites whatever sat at that position, including a subtree.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Namespace and key of the entry holding the process locale.
pub const LOCALE_NAMESPACE: &str = "General";
pub const LOCALE_KEY: &str = "Locale";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    root: Map<String, Value>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from an already-parsed value.
    ///
    /// Returns `None` if the top level is not an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(root) => Some(Self { root }),
            _ => None,
        }
    }

    /// Resets the catalog to empty.
    pub fn clear(&mut self) {
        self.root.clear();
    }

    /// Deep-merges `incoming` into this catalog.
    ///
    /// Sibling keys absent from `incoming` are kept. Where one side holds an
    /// object and the other does not, the incoming value wins.
    pub fn merge_into(&mut self, incoming: Catalog) {
        merge_maps(&mut self.root, incoming.root);
    }

    /// Returns the string at `(namespace, key)`, if that leaf is a string.
    pub fn get(&self, namespace: &str, key: &str) -> Option<&str> {
        self.root
            .get(namespace)
            .and_then(Value::as_object)
            .and_then(|entries| entries.get(key))
            .and_then(Value::as_str)
    }

    /// Inserts a single string, creating the namespace if needed.
    ///
    /// A namespace currently holding a non-object value is replaced.
    pub fn insert(&mut self, namespace: &str, key: &str, value: impl Into<String>) {
        let slot = self
            .root
            .entry(namespace.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        if let Value::Object(entries) = slot {
            entries.insert(key.to_string(), Value::String(value.into()));
        }
    }

    pub fn contains_namespace(&self, namespace: &str) -> bool {
        self.root.contains_key(namespace)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    /// Number of string leaves across all namespaces.
    pub fn len(&self) -> usize {
        self.root
            .values()
            .map(|ns| match ns {
                Value::Object(entries) => entries.values().filter(|v| v.is_string()).count(),
                _ => 0,
            })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// The raw `General.Locale` entry.
    pub fn locale(&self) -> Option<&str> {
        self.get(LOCALE_NAMESPACE, LOCALE_KEY)
    }

    pub fn as_value(&self) -> Value {
        Value::Object(self.root.clone())
    }
}

fn merge_maps(target: &mut Map<String, Value>, incoming: Map<String, Value>) {
    for (key, value) in incoming {
        match (target.get_mut(&key), value) {
            (Some(Value::Object(existing)), Value::Object(nested)) => {
                merge_maps(existing, nested);
            }
            (_, value) => {
                target.insert(key, value);
            }
        }
    }
}
