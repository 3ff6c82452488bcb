//! Node storage and the navigation handle over it.
//!
//! [`Node`] is the cache-owned wrapper around one ingested record. It is
//! never handed out by value; all navigation goes through [`NodeRef`], a
//! cheap copyable handle pairing the node with its owning [`NodeCache`].
//! Derived fields (`parent`, `qualified_name`, `file`) resolve lazily on
//! first access and memoize; the graph is immutable after ingestion, so
//! recomputation would be idempotent.

use std::cell::OnceCell;

use log::trace;

use crate::error::Result;
use crate::graph::attrs::{Access, AttributeMap};
use crate::graph::cache::NodeCache;
use crate::graph::kind::NodeKind;
use crate::matcher::NameMatcher;
use crate::query::QueryResult;
use crate::record::Record;

/// One ingested element, owned exclusively by the [`NodeCache`].
#[derive(Debug)]
pub struct Node {
    id: String,
    kind: NodeKind,
    name: Option<String>,
    demangled: Option<String>,
    context: Option<String>,
    attrs: AttributeMap,
    // One-time memoized derived fields. Safe under the single-threaded
    // evaluation model; recomputing any of them yields the same value.
    parent_memo: OnceCell<Option<usize>>,
    qualified_memo: OnceCell<String>,
    file_memo: OnceCell<Option<String>>,
}

impl Node {
    pub(crate) fn from_record(record: Record) -> Self {
        // The context id is lifted into a typed field but stays reachable
        // through the attribute map like every other tool-emitted key.
        let mut attrs = AttributeMap::from(record.attributes);
        if let Some(context) = &record.context {
            attrs = attrs.with("context", context.clone());
        }
        Self {
            id: record.id,
            kind: record.kind,
            name: record.name,
            demangled: record.demangled,
            context: record.context,
            attrs,
            parent_memo: OnceCell::new(),
            qualified_memo: OnceCell::new(),
            file_memo: OnceCell::new(),
        }
    }

    /// The element's id, stable for the corpus's lifetime.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The element's kind tag.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Base (unqualified) name; `None` for anonymous constructs.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Full demangled signature, when the extraction tool provided one.
    pub fn demangled(&self) -> Option<&str> {
        self.demangled.as_deref()
    }

    /// Id of the enclosing scope; `None` at the global scope.
    pub fn context_id(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// The residual attribute map.
    pub fn attributes(&self) -> &AttributeMap {
        &self.attrs
    }
}

/// Copyable handle to a node inside its cache: the public navigation surface.
///
/// Everything graph-shaped (parents, files, child searches, qualified names)
/// lives here, because it needs the cache to resolve id references.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    cache: &'a NodeCache,
    index: usize,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(cache: &'a NodeCache, index: usize) -> Self {
        Self { cache, index }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    fn node(&self) -> &'a Node {
        self.cache.node_at(self.index)
    }

    /// The element's id.
    pub fn id(&self) -> &'a str {
        self.node().id()
    }

    /// The element's kind tag.
    pub fn kind(&self) -> &'a NodeKind {
        self.node().kind()
    }

    /// Base (unqualified) name; `None` for anonymous constructs.
    pub fn name(&self) -> Option<&'a str> {
        self.node().name()
    }

    /// Full demangled signature, when present.
    pub fn demangled(&self) -> Option<&'a str> {
        self.node().demangled()
    }

    /// Id of the enclosing scope as recorded by the tool; `None` at the
    /// global scope.
    pub fn context_id(&self) -> Option<&'a str> {
        self.node().context_id()
    }

    /// Look up a residual attribute. Unknown keys are `None`, never an error.
    pub fn attribute(&self, key: &str) -> Option<&'a str> {
        self.node().attributes().get(key)
    }

    /// The full residual attribute map.
    pub fn attributes(&self) -> &'a AttributeMap {
        self.node().attributes()
    }

    /// The enclosing node, resolved through the cache and memoized.
    ///
    /// `None` at the global scope, and also when the recorded context id does
    /// not resolve (irregular tool output degrades rather than failing).
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        let node = self.node();
        let resolved = node.parent_memo.get_or_init(|| {
            let context = node.context_id()?;
            let index = self.cache.index_of(context);
            if index.is_none() {
                trace!("dangling context id {context} on element {}", node.id());
            }
            index
        });
        resolved.map(|index| NodeRef::new(self.cache, index))
    }

    /// The fully scoped name of this element, memoized on first access.
    ///
    /// When a demangled signature is present it is authoritative: the
    /// substring before the first `(` is the qualified name. Otherwise the
    /// name is built by walking the parent chain with `::`. A context cycle
    /// in irregular tool output ends the walk as if the node that closes the
    /// cycle were at the root.
    pub fn qualified_name(&self) -> &'a str {
        self.qualified_name_inner(&mut Vec::new())
    }

    fn qualified_name_inner(&self, seen: &mut Vec<usize>) -> &'a str {
        let node = self.node();
        node.qualified_memo.get_or_init(|| {
            if let Some(demangled) = node.demangled() {
                return match demangled.find('(') {
                    Some(paren) => demangled[..paren].to_string(),
                    None => demangled.to_string(),
                };
            }
            let name = node.name().unwrap_or_default();
            seen.push(self.index);
            match self.parent() {
                Some(parent) if !seen.contains(&parent.index) => {
                    format!("{}::{name}", parent.qualified_name_inner(seen))
                }
                Some(parent) => {
                    trace!(
                        "context cycle at element {} via {}",
                        node.id(),
                        parent.id()
                    );
                    name.to_string()
                }
                None => name.to_string(),
            }
        })
    }

    /// The name of the File node referenced by this element's `file`
    /// attribute, memoized on first access.
    ///
    /// `None` when the attribute is absent, its id does not resolve, or the
    /// resolved node is not File-kind (the extraction tool may omit or
    /// mislabel File records).
    pub fn file(&self) -> Option<&'a str> {
        let node = self.node();
        node.file_memo
            .get_or_init(|| {
                let file_id = node.attributes().get("file")?;
                let resolved = self.cache.find_by_id(file_id);
                if resolved.is_none() {
                    trace!("dangling file id {file_id} on element {}", node.id());
                }
                resolved.and_then(|file| {
                    if *file.kind() != NodeKind::File {
                        trace!(
                            "file id {file_id} on element {} resolves to a {} node",
                            node.id(),
                            file.kind()
                        );
                        return None;
                    }
                    file.name().map(str::to_string)
                })
            })
            .as_deref()
    }

    /// The access qualifier, defaulting to public when unrecorded.
    pub fn access(&self) -> Access {
        self.node().attributes().access()
    }

    /// Whether the `const` attribute is set. Attribute-only, never consults
    /// the graph.
    pub fn is_const(&self) -> bool {
        self.node().attributes().flag("const")
    }

    /// Whether this element is publicly accessible (the default).
    pub fn is_public(&self) -> bool {
        self.access() == Access::Public
    }

    /// Whether this element is protected.
    pub fn is_protected(&self) -> bool {
        self.access() == Access::Protected
    }

    /// Whether this element is private.
    pub fn is_private(&self) -> bool {
        self.access() == Access::Private
    }

    /// See through typedef chains to the underlying element.
    ///
    /// Identity for every kind except Typedef, which follows its `type`
    /// attribute through the cache. Chains collapse; a dangling or cyclic
    /// reference stops at the last resolvable node.
    pub fn base_type(&self) -> NodeRef<'a> {
        let mut current = *self;
        let mut seen = vec![current.index];
        while *current.kind() == NodeKind::Typedef {
            let Some(next) = current
                .attribute("type")
                .and_then(|id| self.cache.find_by_id(id))
            else {
                break;
            };
            if seen.contains(&next.index) {
                break;
            }
            seen.push(next.index);
            current = next;
        }
        current
    }

    /// Render this element as source text: the qualified name, or just the
    /// base name when `qualified` is false.
    pub fn render(&self, qualified: bool) -> String {
        if qualified {
            self.qualified_name().to_string()
        } else {
            self.name().unwrap_or_default().to_string()
        }
    }

    /// Search this scope for children of an arbitrary kind.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotQueryable`](crate::GraphError::NotQueryable) when this
    /// node's kind does not permit the requested child kind.
    pub fn children(
        &self,
        kind: &NodeKind,
        matcher: impl Into<NameMatcher>,
    ) -> Result<QueryResult<'a>> {
        self.cache
            .find_children_of_type(Some(*self), kind, &matcher.into())
    }

    /// Namespaces directly inside this scope.
    pub fn namespaces(&self, matcher: impl Into<NameMatcher>) -> Result<QueryResult<'a>> {
        self.children(&NodeKind::Namespace, matcher)
    }

    /// Classes directly inside this scope.
    pub fn classes(&self, matcher: impl Into<NameMatcher>) -> Result<QueryResult<'a>> {
        self.children(&NodeKind::Class, matcher)
    }

    /// Structs directly inside this scope.
    pub fn structs(&self, matcher: impl Into<NameMatcher>) -> Result<QueryResult<'a>> {
        self.children(&NodeKind::Struct, matcher)
    }

    /// Functions directly inside this scope.
    pub fn functions(&self, matcher: impl Into<NameMatcher>) -> Result<QueryResult<'a>> {
        self.children(&NodeKind::Function, matcher)
    }

    /// Enumerations directly inside this scope.
    pub fn enumerations(&self, matcher: impl Into<NameMatcher>) -> Result<QueryResult<'a>> {
        self.children(&NodeKind::Enumeration, matcher)
    }

    /// Variables directly inside this scope.
    pub fn variables(&self, matcher: impl Into<NameMatcher>) -> Result<QueryResult<'a>> {
        self.children(&NodeKind::Variable, matcher)
    }

    /// Typedefs directly inside this scope.
    pub fn typedefs(&self, matcher: impl Into<NameMatcher>) -> Result<QueryResult<'a>> {
        self.children(&NodeKind::Typedef, matcher)
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.cache, other.cache) && self.index == other.index
    }
}

impl Eq for NodeRef<'_> {}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id())
            .field("kind", &self.kind())
            .field("name", &self.name())
            .finish()
    }
}
