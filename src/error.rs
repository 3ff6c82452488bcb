//! Error types for cxxgraph operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.

use thiserror::Error;

/// Result type alias for cxxgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Comprehensive error type for all graph operations.
///
/// Every variant is a programmer-visible contract violation or a
/// data-integrity condition; nothing here is transient or retried.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A child search was requested for a kind the scope cannot contain
    /// (e.g. searching for namespaces inside a class).
    #[error("Cannot search for {kind} children of a {scope} scope")]
    NotQueryable {
        /// Kind of the scope the search was issued against
        scope: String,
        /// Child kind that was requested
        kind: String,
    },

    /// A name matcher could not be constructed from the given input.
    #[error("Unsupported matcher '{pattern}': {reason}")]
    UnsupportedMatcher {
        /// The offending pattern text
        pattern: String,
        /// Why it was rejected
        reason: String,
    },

    /// The same element id appeared twice in one ingested corpus.
    #[error("Duplicate element id during ingestion: {id}")]
    DuplicateId {
        /// The id that was seen more than once
        id: String,
    },

    /// A query result was collapsed to a single node but matched nothing.
    #[error("No node matched {criteria}")]
    NoMatch {
        /// Description of the search that produced the empty result
        criteria: String,
    },

    /// A query result was collapsed to a single node but matched several.
    #[error("Expected exactly one node for {criteria}, found {count}")]
    AmbiguousMatch {
        /// How many nodes actually matched
        count: usize,
        /// Description of the search that produced them
        criteria: String,
    },

    /// A record feed could not be deserialized.
    #[error("Failed to deserialize record feed: {message}")]
    Deserialize {
        /// Error details
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create a not-queryable error from the two kind tags involved.
    pub(crate) fn not_queryable(scope: impl ToString, kind: impl ToString) -> Self {
        Self::NotQueryable {
            scope: scope.to_string(),
            kind: kind.to_string(),
        }
    }

    /// Create a deserialization error from a message and optional source.
    pub fn deserialize<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Deserialize {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}
