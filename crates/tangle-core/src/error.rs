//! Error taxonomy for the hashing engine.
//!
//! Every error is unrecoverable at the engine level: `calculate` either
//! returns a hash for every node or fails entirely. A hash for a subset of
//! nodes would be meaningless without the rest of the graph's state, so there
//! is no partial-success shape here.

use crate::id::NodeId;

// ---------------------------------------------------------------------------
// Machine-readable error codes
// ---------------------------------------------------------------------------

/// Machine-readable codes for [`HashError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashErrorCode {
    /// The identity extractor produced the same ID for two nodes.
    DuplicateId,
    /// A dependency part references an ID not present in the node set.
    MissingNode,
    /// A literal part contains the part separator.
    SeparatorInLiteral,
    /// The caller's content-description callback failed.
    Describe,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from [`calculate`](crate::calculate).
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    /// The identity extractor yielded `id` for more than one node. IDs must
    /// be injective over the node collection; a silent overwrite would drop
    /// a node's state and produce wrong hashes everywhere downstream.
    #[error("duplicate node identifier: {id}")]
    DuplicateId {
        /// The identifier produced twice.
        id: NodeId,
    },

    /// A node's description references an ID with no node behind it.
    #[error("node {node} references missing node {dependency}")]
    MissingNode {
        /// The node whose description holds the dangling reference.
        node: NodeId,
        /// The referenced ID absent from the node set.
        dependency: NodeId,
    },

    /// A literal part contains the separator used to join parts into the
    /// digest pre-image, which would make the pre-image ambiguous.
    #[error("literal part of node {id} contains the part separator (tab)")]
    SeparatorInLiteral {
        /// The node whose literal is invalid.
        id: NodeId,
    },

    /// The caller's content-description callback returned an error. The
    /// source is propagated unchanged; the engine performs no retry.
    #[error("content description failed for node {id}")]
    Describe {
        /// The node whose description failed.
        id: NodeId,
        /// The caller's error.
        #[source]
        source: anyhow::Error,
    },
}

impl HashError {
    /// Return the machine-readable error code for this error.
    #[must_use]
    pub const fn code(&self) -> HashErrorCode {
        match self {
            Self::DuplicateId { .. } => HashErrorCode::DuplicateId,
            Self::MissingNode { .. } => HashErrorCode::MissingNode,
            Self::SeparatorInLiteral { .. } => HashErrorCode::SeparatorInLiteral,
            Self::Describe { .. } => HashErrorCode::Describe,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
