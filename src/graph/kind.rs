//! Element kind tags and the per-kind child-search capability table.

use serde::{Deserialize, Serialize};

/// The element category of a node.
///
/// This is an open set: the extraction tool may introduce tags the crate has
/// never seen, and they round-trip through [`NodeKind::Other`] without any
/// core change. Searching for an unknown kind yields an empty result, never
/// an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    /// C++ namespace
    Namespace,
    /// Class definition
    Class,
    /// Struct definition
    Struct,
    /// Free function or method
    Function,
    /// Enumeration definition
    Enumeration,
    /// Variable, constant, or field
    Variable,
    /// Type alias
    Typedef,
    /// Source file entry
    File,
    /// Any tag the crate does not interpret
    Other(String),
}

impl NodeKind {
    /// Parse a kind tag. Unknown tags become [`NodeKind::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Namespace" => Self::Namespace,
            "Class" => Self::Class,
            "Struct" => Self::Struct,
            "Function" => Self::Function,
            "Enumeration" => Self::Enumeration,
            "Variable" => Self::Variable,
            "Typedef" => Self::Typedef,
            "File" => Self::File,
            other => Self::Other(other.to_string()),
        }
    }

    /// The tag as the extraction tool spells it.
    pub fn tag(&self) -> &str {
        match self {
            Self::Namespace => "Namespace",
            Self::Class => "Class",
            Self::Struct => "Struct",
            Self::Function => "Function",
            Self::Enumeration => "Enumeration",
            Self::Variable => "Variable",
            Self::Typedef => "Typedef",
            Self::File => "File",
            Self::Other(tag) => tag,
        }
    }

    /// Whether a scope of this kind may be searched for children of `child`.
    ///
    /// Namespaces accept every child kind; classes and structs accept
    /// everything except namespaces; no other kind is a searchable scope.
    /// `Other(..)` child kinds are accepted wherever the scope accepts open
    /// kinds at all, since the kind space is open — the search simply comes
    /// back empty when no such nodes exist.
    pub fn permits_child_search(&self, child: &NodeKind) -> bool {
        match self {
            Self::Namespace => true,
            Self::Class | Self::Struct => !matches!(child, Self::Namespace),
            _ => false,
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<String> for NodeKind {
    fn from(value: String) -> Self {
        Self::from_tag(&value)
    }
}

impl From<NodeKind> for String {
    fn from(value: NodeKind) -> Self {
        value.tag().to_string()
    }
}
