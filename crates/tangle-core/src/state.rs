//! Per-node state and the state builder.
//!
//! # Overview
//!
//! The first phase of a `calculate` call turns the caller's node collection
//! into a [`GraphState`]: an immutable-shape snapshot of every node's ordered
//! content description and dependency list, plus a mutable current hash that
//! the relaxer rewrites once per round.
//!
//! Insertion order is preserved separately from the lookup map because the
//! round-bound estimator walks nodes in input order — the bound (and so the
//! final hashes) depend on it.
//!
//! # Invariants enforced here
//!
//! - Node IDs are unique; a duplicate fails the whole call.
//! - Literal parts never contain [`PART_SEPARATOR`], keeping the digest
//!   pre-image unambiguous.
//!
//! Dangling dependency references are *not* checked here; they surface as
//! missing-node errors when the relaxer first resolves them.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use crate::error::HashError;
use crate::id::NodeId;
use crate::part::{HashPart, PART_SEPARATOR};

// ---------------------------------------------------------------------------
// NodeState
// ---------------------------------------------------------------------------

/// Engine-internal record for one node.
#[derive(Debug)]
pub(crate) struct NodeState {
    /// IDs of the `Dep` parts in `base`, in order, with repetition.
    pub dependencies: Vec<NodeId>,
    /// The node's ordered content description.
    pub base: Vec<HashPart>,
    /// Hash as of the latest committed relaxation round. Empty before
    /// round 1.
    pub cur: String,
}

// ---------------------------------------------------------------------------
// GraphState
// ---------------------------------------------------------------------------

/// All engine state for one `calculate` call.
#[derive(Debug)]
pub(crate) struct GraphState {
    /// Node IDs in input order. Drives the estimator walk and the relaxer's
    /// default iteration order.
    order: Vec<NodeId>,
    states: HashMap<NodeId, NodeState>,
}

impl GraphState {
    /// Build the state map from the caller's node collection and callbacks.
    ///
    /// `describe` errors are wrapped with the offending node's ID and abort
    /// the build.
    pub fn build<N, I, C>(nodes: &[N], get_id: &I, describe: &C) -> Result<Self, HashError>
    where
        I: Fn(&N) -> NodeId,
        C: Fn(&N) -> anyhow::Result<Vec<HashPart>>,
    {
        let mut order = Vec::with_capacity(nodes.len());
        let mut states = HashMap::with_capacity(nodes.len());

        for node in nodes {
            let id = get_id(node);
            let base = describe(node).map_err(|source| HashError::Describe {
                id: id.clone(),
                source,
            })?;

            let mut dependencies = Vec::new();
            for part in &base {
                match part {
                    HashPart::Literal(content) => {
                        if content.contains(PART_SEPARATOR) {
                            return Err(HashError::SeparatorInLiteral { id });
                        }
                    }
                    HashPart::Dep(dep) => dependencies.push(dep.clone()),
                }
            }

            match states.entry(id.clone()) {
                Entry::Occupied(_) => return Err(HashError::DuplicateId { id }),
                Entry::Vacant(slot) => {
                    slot.insert(NodeState {
                        dependencies,
                        base,
                        cur: String::new(),
                    });
                    order.push(id);
                }
            }
        }

        Ok(Self { order, states })
    }

    /// Node IDs in input order.
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Look up a node's state. `None` means the ID names no node.
    pub fn state(&self, id: &NodeId) -> Option<&NodeState> {
        self.states.get(id)
    }

    /// Commit one relaxation round: overwrite every listed node's current
    /// hash. IDs not in the map are ignored (the relaxer only produces IDs
    /// it read from this map).
    pub fn commit(&mut self, new_hashes: Vec<(NodeId, String)>) {
        for (id, hash) in new_hashes {
            if let Some(state) = self.states.get_mut(&id) {
                state.cur = hash;
            }
        }
    }

    /// Consume the state, yielding the final ID → hash map.
    pub fn into_hashes(self) -> BTreeMap<NodeId, String> {
        self.states
            .into_iter()
            .map(|(id, state)| (id, state.cur))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
