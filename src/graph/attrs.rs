//! Residual attribute storage for nodes.
//!
//! Everything the extraction tool emitted that is not lifted into a typed
//! field lands here, keyed and valued as plain strings. The crate interprets
//! a handful of keys (`file`, `access`, `const`, `type`); everything else
//! passes through untouched and stays reachable by key.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Access qualifier of a member, as recorded by the extraction tool.
///
/// An absent `access` attribute means public.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Publicly accessible (the default)
    Public,
    /// Protected member
    Protected,
    /// Private member
    Private,
}

/// String key/value attribute map with typed accessors for the keys the
/// crate understands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributeMap {
    data: BTreeMap<String, String>,
}

impl AttributeMap {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: add an attribute and return self.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Look up an attribute by key. Unknown keys are `None`, never an error.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Check whether an attribute is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the map holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over all attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Interpret an attribute as a boolean flag.
    ///
    /// The extraction tool spells truth as `"1"`; `"true"` and `"yes"` are
    /// accepted for hand-written feeds. Absent keys are `false`.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.get(key), Some("1" | "true" | "yes"))
    }

    /// The access qualifier, defaulting to [`Access::Public`] when absent or
    /// unrecognized.
    pub fn access(&self) -> Access {
        match self.get("access") {
            Some("private") => Access::Private,
            Some("protected") => Access::Protected,
            _ => Access::Public,
        }
    }
}

impl FromIterator<(String, String)> for AttributeMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            data: BTreeMap::from_iter(iter),
        }
    }
}

impl From<BTreeMap<String, String>> for AttributeMap {
    fn from(data: BTreeMap<String, String>) -> Self {
        Self { data }
    }
}
