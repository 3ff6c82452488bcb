//! Name matchers used by every search operation.
//!
//! A search either takes no name restriction, a literal name that must match
//! exactly, or a compiled regex pattern. Strings convert into literal
//! matchers; [`Regex`] values convert into pattern matchers; `()` converts
//! into the unrestricted matcher, so `scope.classes(())` reads as "all
//! classes".

use regex::Regex;

use crate::error::{GraphError, Result};

/// Restriction applied to node names during a search.
#[derive(Debug, Clone)]
pub enum NameMatcher {
    /// No restriction: every node of the requested kind matches.
    Any,
    /// Exact match against the node's base name.
    Literal(String),
    /// Regex match against the node's base name.
    Pattern(Regex),
}

impl NameMatcher {
    /// Compile a regex pattern into a matcher.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnsupportedMatcher`] if the pattern does not
    /// compile.
    pub fn pattern(pattern: &str) -> Result<Self> {
        let re = Regex::new(pattern).map_err(|e| GraphError::UnsupportedMatcher {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::Pattern(re))
    }

    /// Whether a node with the given base name satisfies this matcher.
    ///
    /// Anonymous nodes (no name) satisfy only the unrestricted matcher.
    pub fn matches(&self, name: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::Literal(want) => name == Some(want.as_str()),
            Self::Pattern(re) => name.is_some_and(|n| re.is_match(n)),
        }
    }

    /// Short human-readable form for error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Any => "*".to_string(),
            Self::Literal(s) => format!("\"{s}\""),
            Self::Pattern(re) => format!("/{}/", re.as_str()),
        }
    }
}

impl From<&str> for NameMatcher {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for NameMatcher {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<Regex> for NameMatcher {
    fn from(value: Regex) -> Self {
        Self::Pattern(value)
    }
}

impl From<()> for NameMatcher {
    fn from(_: ()) -> Self {
        Self::Any
    }
}

/// Match `text` against `pattern` where `*` stands for any run of characters.
///
/// Used by the string-equality convention on query results, where
/// `result == "N::C::*"` compares the single node's qualified name against a
/// wildcard string. Anchored at both ends.
pub(crate) fn wildcard_match(pattern: &str, text: &str) -> bool {
    let anchored = format!("^{}$", regex::escape(pattern).replace(r"\*", ".*"));
    match Regex::new(&anchored) {
        Ok(re) => re.is_match(text),
        Err(_) => false,
    }
}
