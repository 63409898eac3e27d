//! Node identifiers.
//!
//! A [`NodeId`] is an opaque string supplied by the caller's identity
//! extractor. The engine never parses it; it only needs equality, ordering
//! (for deterministic result maps), and hashing (for state lookup).
//!
//! Uniqueness is the caller's contract: the identity extractor must be
//! injective over the node collection. The engine enforces this at state-build
//! time and fails with a duplicate-identifier error rather than silently
//! overwriting state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique string identifier for a graph node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Wrap a string as a node identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
