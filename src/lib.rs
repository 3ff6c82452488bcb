//! # cxxgraph
//!
//! A queryable, cached node graph over the flat, id-referenced element
//! records emitted by C++ program-structure extraction tools.
//!
//! Extraction tools flatten a program into records — each one an element
//! kind, a unique id, a name, an optional demangled signature, and a
//! `context` id pointing at the enclosing scope. This crate turns that
//! stream into a navigable object graph: namespaces containing classes
//! containing functions, qualified names resolved through scope chains, and
//! a uniform chainable search interface, without callers ever touching raw
//! id cross-references.
//!
//! ## Architecture
//!
//! ```text
//! Record feed (external parser)
//!     ↓
//! NodeCache (arena: id index + kind index, one ingestion pass)
//!     ↓
//! NodeRef (navigation handle: parents, files, qualified names)
//!     ↓
//! QueryResult (ordered, chainable, single-match collapse)
//! ```
//!
//! Producing records (running the tool, parsing its markup) and consuming
//! query results (code generation, reporting) live outside this crate.
//!
//! ## Example
//!
//! ```
//! use cxxgraph::{NodeCache, NodeKind, Record};
//!
//! # fn main() -> cxxgraph::Result<()> {
//! let cache = NodeCache::from_records(vec![
//!     Record::new(NodeKind::Namespace, "_1").with_name("math"),
//!     Record::new(NodeKind::Class, "_2")
//!         .with_name("Matrix")
//!         .with_context("_1"),
//!     Record::new(NodeKind::Function, "_3")
//!         .with_name("transpose")
//!         .with_demangled("math::Matrix::transpose()")
//!         .with_context("_2"),
//! ])?;
//!
//! let transpose = cache
//!     .namespaces("math")?
//!     .classes("Matrix")?
//!     .functions("transpose")?
//!     .single()?;
//! assert_eq!(transpose.qualified_name(), "math::Matrix::transpose");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod graph;
pub mod matcher;
pub mod query;
pub mod record;

// Re-export main types
pub use error::{GraphError, Result};
pub use graph::{Access, AttributeMap, Node, NodeCache, NodeKind, NodeRef};
pub use matcher::NameMatcher;
pub use query::{Criteria, QueryResult};
pub use record::Record;
