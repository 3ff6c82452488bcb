//! Query results and fluent narrowing criteria.
//!
//! Every search in the crate returns a [`QueryResult`]: an ordered, set-like
//! collection of nodes that supports further narrowing with [`Criteria`],
//! chained kind-scoped searches, and a single-match collapse convention.
//!
//! # Examples
//!
//! ```
//! use cxxgraph::{NodeCache, NodeKind, Record};
//!
//! # fn example() -> cxxgraph::Result<()> {
//! let cache = NodeCache::from_records(vec![
//!     Record::new(NodeKind::Namespace, "_1").with_name("N"),
//!     Record::new(NodeKind::Class, "_2").with_name("C").with_context("_1"),
//!     Record::new(NodeKind::Function, "_3")
//!         .with_name("f")
//!         .with_demangled("N::C::f(int)")
//!         .with_context("_2"),
//! ])?;
//!
//! let f = cache.namespaces("N")?.classes("C")?.functions("f")?.single()?;
//! assert_eq!(f.qualified_name(), "N::C::f");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use log::debug;
use regex::Regex;

use crate::error::{GraphError, Result};
use crate::graph::{NodeCache, NodeKind, NodeRef};
use crate::matcher::{wildcard_match, NameMatcher};

/// A filter predicate over nodes.
type FilterFn<'a> = Box<dyn Fn(NodeRef<'_>) -> bool + 'a>;

/// Fluent narrowing criteria for [`QueryResult::find`].
///
/// Restrictions combine conjunctively: kind, literal name, pattern, and any
/// number of custom predicates.
#[derive(Default)]
pub struct Criteria<'a> {
    kind: Option<NodeKind>,
    matcher: Option<NameMatcher>,
    filters: Vec<FilterFn<'a>>,
}

impl<'a> Criteria<'a> {
    /// Start with no restrictions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to nodes of the given kind.
    pub fn kind(mut self, kind: NodeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Restrict to nodes whose base name equals `name`.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.matcher = Some(NameMatcher::Literal(name.into()));
        self
    }

    /// Restrict to nodes whose base name matches the compiled pattern.
    ///
    /// To build a pattern from a string and surface compile failures, use
    /// [`NameMatcher::pattern`] with [`Criteria::matcher`].
    pub fn matching(mut self, pattern: Regex) -> Self {
        self.matcher = Some(NameMatcher::Pattern(pattern));
        self
    }

    /// Restrict by an explicit matcher.
    pub fn matcher(mut self, matcher: NameMatcher) -> Self {
        self.matcher = Some(matcher);
        self
    }

    /// Restrict by a custom predicate.
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(NodeRef<'_>) -> bool + 'a,
    {
        self.filters.push(Box::new(predicate));
        self
    }

    fn accepts(&self, node: NodeRef<'_>) -> bool {
        if let Some(kind) = &self.kind {
            if node.kind() != kind {
                return false;
            }
        }
        if let Some(matcher) = &self.matcher {
            if !matcher.matches(node.name()) {
                return false;
            }
        }
        self.filters.iter().all(|filter| filter(node))
    }

    fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(kind) = &self.kind {
            parts.push(format!("kind={kind}"));
        }
        if let Some(matcher) = &self.matcher {
            parts.push(format!("name={}", matcher.describe()));
        }
        if !self.filters.is_empty() {
            parts.push(format!("{} predicate(s)", self.filters.len()));
        }
        if parts.is_empty() {
            "anything".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Ordered, chainable collection of nodes returned by every search.
///
/// Preserves ingestion order. Collection operations (`len`, iteration,
/// `find`) are always available; everything that needs exactly one node goes
/// through [`QueryResult::single`], which reports the cardinality and the
/// criteria that produced it on failure. The seven kind-scoped search
/// methods collapse to the single node first and then delegate, which is what
/// makes `root.namespaces("N")?.classes("C")?.functions("f")?` chain.
#[derive(Clone)]
pub struct QueryResult<'a> {
    cache: &'a NodeCache,
    indexes: Vec<usize>,
    criteria: String,
}

impl<'a> QueryResult<'a> {
    pub(crate) fn new(cache: &'a NodeCache, indexes: Vec<usize>, criteria: String) -> Self {
        Self {
            cache,
            indexes,
            criteria,
        }
    }

    /// Number of matched nodes.
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    /// The node at position `i`, in ingestion order.
    pub fn get(&self, i: usize) -> Option<NodeRef<'a>> {
        self.indexes
            .get(i)
            .map(|&index| NodeRef::new(self.cache, index))
    }

    /// The first matched node.
    pub fn first(&self) -> Option<NodeRef<'a>> {
        self.get(0)
    }

    /// Iterate over matched nodes in ingestion order.
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'a>> + '_ {
        self.indexes
            .iter()
            .map(move |&index| NodeRef::new(self.cache, index))
    }

    /// Whether the result contains the given node.
    pub fn contains(&self, node: &NodeRef<'_>) -> bool {
        self.iter().any(|n| n == *node)
    }

    /// The criteria description that produced this result.
    pub fn criteria(&self) -> &str {
        &self.criteria
    }

    /// Collapse to exactly one node.
    ///
    /// # Errors
    ///
    /// [`GraphError::NoMatch`] when empty, [`GraphError::AmbiguousMatch`]
    /// when more than one node matched; both name the criteria that produced
    /// the result.
    pub fn single(&self) -> Result<NodeRef<'a>> {
        match self.indexes.len() {
            1 => Ok(NodeRef::new(self.cache, self.indexes[0])),
            0 => Err(GraphError::NoMatch {
                criteria: self.criteria.clone(),
            }),
            count => Err(GraphError::AmbiguousMatch {
                count,
                criteria: self.criteria.clone(),
            }),
        }
    }

    /// Narrow this result by the given criteria, preserving order.
    pub fn find(&self, criteria: Criteria<'_>) -> QueryResult<'a> {
        let description = criteria.describe();
        debug!("narrowing {} by {description}", self.criteria);
        let indexes = self
            .iter()
            .filter(|node| criteria.accepts(*node))
            .map(|node| node.index())
            .collect();
        QueryResult::new(
            self.cache,
            indexes,
            format!("{}, then {description}", self.criteria),
        )
    }

    /// Namespaces inside the single matched node's scope.
    pub fn namespaces(&self, matcher: impl Into<NameMatcher>) -> Result<QueryResult<'a>> {
        self.single()?.namespaces(matcher)
    }

    /// Classes inside the single matched node's scope.
    pub fn classes(&self, matcher: impl Into<NameMatcher>) -> Result<QueryResult<'a>> {
        self.single()?.classes(matcher)
    }

    /// Structs inside the single matched node's scope.
    pub fn structs(&self, matcher: impl Into<NameMatcher>) -> Result<QueryResult<'a>> {
        self.single()?.structs(matcher)
    }

    /// Functions inside the single matched node's scope.
    pub fn functions(&self, matcher: impl Into<NameMatcher>) -> Result<QueryResult<'a>> {
        self.single()?.functions(matcher)
    }

    /// Enumerations inside the single matched node's scope.
    pub fn enumerations(&self, matcher: impl Into<NameMatcher>) -> Result<QueryResult<'a>> {
        self.single()?.enumerations(matcher)
    }

    /// Variables inside the single matched node's scope.
    pub fn variables(&self, matcher: impl Into<NameMatcher>) -> Result<QueryResult<'a>> {
        self.single()?.variables(matcher)
    }

    /// Typedefs inside the single matched node's scope.
    pub fn typedefs(&self, matcher: impl Into<NameMatcher>) -> Result<QueryResult<'a>> {
        self.single()?.typedefs(matcher)
    }
}

impl<'a, 'b> IntoIterator for &'b QueryResult<'a> {
    type Item = NodeRef<'a>;
    type IntoIter = std::vec::IntoIter<NodeRef<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter().collect::<Vec<_>>().into_iter()
    }
}

/// A single-match result equals a string when the node's base name equals it,
/// or its qualified name matches it with `*` as a wildcard. Zero or multiple
/// matches never equal any string; the error-on-collapse contract is carried
/// by [`QueryResult::single`].
impl PartialEq<str> for QueryResult<'_> {
    fn eq(&self, other: &str) -> bool {
        let Ok(node) = self.single() else {
            return false;
        };
        node.name() == Some(other) || wildcard_match(other, node.qualified_name())
    }
}

impl PartialEq<&str> for QueryResult<'_> {
    fn eq(&self, other: &&str) -> bool {
        PartialEq::<str>::eq(self, other)
    }
}

impl std::fmt::Debug for QueryResult<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryResult")
            .field("criteria", &self.criteria)
            .field("nodes", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
