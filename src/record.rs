//! The flat input record consumed by ingestion.
//!
//! A [`Record`] is one element entry from the extraction tool's output,
//! already parsed out of its raw markup: a kind tag, a unique id, optional
//! name / demangled signature / enclosing-scope id, and whatever residual
//! attributes the tool attached. The crate never reads the tool's on-disk
//! format itself; feeds arrive as sequences of these records (or as a JSON
//! array of them, see [`NodeCache::from_json`](crate::NodeCache::from_json)).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::graph::NodeKind;

/// One flat element record from the extraction tool.
///
/// `context` is the id of the immediately enclosing scope; `None` means the
/// element lives at the global (root) scope. Feed parsers are expected to map
/// whatever sentinel their tool emits for "global" to `None` before handing
/// records over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Element kind tag (open set, unknown tags become [`NodeKind::Other`])
    pub kind: NodeKind,
    /// Unique element id within one corpus
    pub id: String,
    /// Base (unqualified) name; absent for anonymous constructs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Full demangled signature, when the tool provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demangled: Option<String>,
    /// Id of the enclosing scope, `None` at the global scope
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Residual attributes (`file`, `access`, `const`, `type`, ...)
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl Record {
    /// Create a record with the given kind and id; everything else empty.
    pub fn new(kind: NodeKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            name: None,
            demangled: None,
            context: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Builder: set the base name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: set the demangled signature.
    pub fn with_demangled(mut self, demangled: impl Into<String>) -> Self {
        self.demangled = Some(demangled.into());
        self
    }

    /// Builder: set the enclosing-scope id.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Builder: add a residual attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}
