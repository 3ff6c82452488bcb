//! The node cache: arena, id index, and kind index for one ingested corpus.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::{debug, trace};

use crate::error::{GraphError, Result};
use crate::graph::kind::NodeKind;
use crate::graph::node::{Node, NodeRef};
use crate::matcher::NameMatcher;
use crate::query::QueryResult;
use crate::record::Record;

/// Single source of truth for one ingested corpus.
///
/// Owns every [`Node`] and the two indexes over them: id to node, and kind to
/// nodes in ingestion order. All id resolution in the crate goes through
/// here; nodes hold only id-shaped references until first traversal.
///
/// A cache is built once by [`NodeCache::from_records`] and is read-only
/// afterwards. There is no mutating re-ingestion: a fresh corpus is a fresh
/// cache, constructed and bound in place of the old one. Ids are not stable
/// across corpora, so merging two feeds into one cache is not expressible.
#[derive(Debug)]
pub struct NodeCache {
    nodes: Vec<Node>,
    by_id: HashMap<String, usize>,
    by_kind: HashMap<NodeKind, Vec<usize>>,
}

impl NodeCache {
    /// Build a cache from a record feed in one pass.
    ///
    /// Construction order carries no meaning: parent/child links resolve
    /// lazily by id, so a child may precede its enclosing scope in the feed.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateId`] if two records share an id.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Result<Self> {
        let mut cache = Self {
            nodes: Vec::new(),
            by_id: HashMap::new(),
            by_kind: HashMap::new(),
        };

        for record in records {
            let index = cache.nodes.len();
            match cache.by_id.entry(record.id.clone()) {
                Entry::Occupied(_) => {
                    return Err(GraphError::DuplicateId { id: record.id });
                }
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }
            cache
                .by_kind
                .entry(record.kind.clone())
                .or_default()
                .push(index);
            trace!("ingesting {} element {}", record.kind, record.id);
            cache.nodes.push(Node::from_record(record));
        }

        debug!(
            "ingested {} records across {} kinds",
            cache.nodes.len(),
            cache.by_kind.len()
        );
        Ok(cache)
    }

    /// Build a cache from a JSON array of records.
    ///
    /// Convenience over [`NodeCache::from_records`] for feeds that were
    /// serialized with serde; the wire format of the extraction tool itself
    /// stays out of scope.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Deserialize`] on malformed JSON, or any
    /// ingestion error from `from_records`.
    pub fn from_json(feed: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(feed)
            .map_err(|e| GraphError::deserialize("expected a JSON array of records", Some(e)))?;
        Self::from_records(records)
    }

    /// O(1) lookup by element id.
    ///
    /// An unknown id is `None`, not an error: callers resolving `file` or
    /// `context` references treat absence as "no such node".
    pub fn find_by_id(&self, id: &str) -> Option<NodeRef<'_>> {
        self.index_of(id).map(|index| NodeRef::new(self, index))
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub(crate) fn node_at(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    /// Number of nodes in the corpus.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over every node in ingestion order.
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_>> {
        (0..self.nodes.len()).map(move |index| NodeRef::new(self, index))
    }

    /// Every node of the given kind whose resolved parent is `scope`, in
    /// ingestion order, optionally restricted by name.
    ///
    /// `scope == None` is the root scope and includes only nodes whose
    /// recorded context is the global sentinel. A kind unknown to the corpus
    /// yields an empty result — the kind space is open.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotQueryable`] when the scope's kind does not
    /// permit searching for `kind` children; this is a caller-contract
    /// violation, not a data condition.
    pub fn find_children_of_type(
        &self,
        scope: Option<NodeRef<'_>>,
        kind: &NodeKind,
        matcher: &NameMatcher,
    ) -> Result<QueryResult<'_>> {
        if let Some(scope) = &scope {
            if !scope.kind().permits_child_search(kind) {
                return Err(GraphError::not_queryable(scope.kind(), kind));
            }
        }

        let scope_desc = match &scope {
            Some(s) => s.name().unwrap_or(s.id()).to_string(),
            None => "the root scope".to_string(),
        };
        let criteria = format!(
            "{kind} children of {scope_desc} matching {}",
            matcher.describe()
        );
        debug!("searching {criteria}");

        let mut hits = Vec::new();
        if let Some(candidates) = self.by_kind.get(kind) {
            for &index in candidates {
                let node = NodeRef::new(self, index);
                let in_scope = match &scope {
                    Some(scope) => node.parent().is_some_and(|p| p == *scope),
                    None => node.context_id().is_none(),
                };
                if in_scope && matcher.matches(node.name()) {
                    hits.push(index);
                }
            }
        }

        Ok(QueryResult::new(self, hits, criteria))
    }

    /// Namespaces at the global scope.
    pub fn namespaces(&self, matcher: impl Into<NameMatcher>) -> Result<QueryResult<'_>> {
        self.find_children_of_type(None, &NodeKind::Namespace, &matcher.into())
    }

    /// Classes at the global scope.
    pub fn classes(&self, matcher: impl Into<NameMatcher>) -> Result<QueryResult<'_>> {
        self.find_children_of_type(None, &NodeKind::Class, &matcher.into())
    }

    /// Structs at the global scope.
    pub fn structs(&self, matcher: impl Into<NameMatcher>) -> Result<QueryResult<'_>> {
        self.find_children_of_type(None, &NodeKind::Struct, &matcher.into())
    }

    /// Functions at the global scope.
    pub fn functions(&self, matcher: impl Into<NameMatcher>) -> Result<QueryResult<'_>> {
        self.find_children_of_type(None, &NodeKind::Function, &matcher.into())
    }

    /// Enumerations at the global scope.
    pub fn enumerations(&self, matcher: impl Into<NameMatcher>) -> Result<QueryResult<'_>> {
        self.find_children_of_type(None, &NodeKind::Enumeration, &matcher.into())
    }

    /// Variables at the global scope.
    pub fn variables(&self, matcher: impl Into<NameMatcher>) -> Result<QueryResult<'_>> {
        self.find_children_of_type(None, &NodeKind::Variable, &matcher.into())
    }

    /// Typedefs at the global scope.
    pub fn typedefs(&self, matcher: impl Into<NameMatcher>) -> Result<QueryResult<'_>> {
        self.find_children_of_type(None, &NodeKind::Typedef, &matcher.into())
    }
}
