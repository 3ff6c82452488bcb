//! The node graph: kinds, attributes, nodes, and the owning cache.

pub mod attrs;
pub mod cache;
pub mod kind;
pub mod node;

pub use attrs::{Access, AttributeMap};
pub use cache::NodeCache;
pub use kind::NodeKind;
pub use node::{Node, NodeRef};
