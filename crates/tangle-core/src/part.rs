//! Content description parts.
//!
//! A node describes its hashable content as an ordered sequence of
//! [`HashPart`]s. Each part is either a literal string (content the caller
//! already knows, e.g. a field value) or a reference to another node, standing
//! in for "the eventual hash of that node".
//!
//! The tagged-enum protocol replaces an older scheme where dependency
//! references were encoded as magic placeholder strings handed out by a
//! resolver callback. Tagging removes the placeholder prefix and its collision
//! risk entirely while keeping the same ordering and multiplicity semantics:
//! a node's dependency list is exactly its `Dep` parts, in order, with
//! repetition. Referencing the same node twice produces a different hash than
//! referencing it once.

use serde::{Deserialize, Serialize};

use crate::id::NodeId;

/// Separator between parts in a node's digest pre-image.
///
/// Literal parts must not contain it; the state builder rejects those. With
/// that restriction the joined pre-image is injective over part sequences, so
/// two different descriptions can never digest the same bytes.
pub const PART_SEPARATOR: char = '\t';

/// One element of a node's ordered content description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashPart {
    /// Opaque content, digested verbatim. Must not contain the part
    /// separator (`\t`).
    Literal(String),
    /// Reference to another node; resolved to that node's current hash
    /// during each relaxation round (empty string before round 1).
    Dep(NodeId),
}

impl HashPart {
    /// Build a literal part.
    pub fn lit(content: impl Into<String>) -> Self {
        Self::Literal(content.into())
    }

    /// Build a dependency-reference part.
    pub fn dep(id: impl Into<NodeId>) -> Self {
        Self::Dep(id.into())
    }

    /// Returns the referenced node ID if this is a dependency part.
    #[must_use]
    pub const fn as_dep(&self) -> Option<&NodeId> {
        match self {
            Self::Literal(_) => None,
            Self::Dep(id) => Some(id),
        }
    }
}
