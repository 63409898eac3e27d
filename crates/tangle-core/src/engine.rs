//! The `calculate` pipeline.
//!
//! Build state → estimate the round bound → relax → freeze the result map.
//! Each call owns its state exclusively and discards it on return; nothing
//! persists across calls.

use std::collections::BTreeMap;

use tracing::debug;

use crate::bound::round_bound;
use crate::digest::Digest;
use crate::error::HashError;
use crate::id::NodeId;
use crate::part::HashPart;
use crate::relax;
use crate::state::GraphState;

/// Compute a content-derived hash for every node in `nodes`.
///
/// Works on arbitrary directed graphs, cycles included: hashes flow around
/// cycles through a bounded number of synchronous relaxation rounds, so two
/// graphs with identical structure and content get identical per-node hashes
/// and any difference reachable from a node changes that node's hash (within
/// the relaxation horizon).
///
/// - `get_id` extracts a [`NodeId`] per node and must be injective over
///   `nodes`.
/// - `describe` returns the node's ordered content description; its `Dep`
///   parts define the node's dependencies, in order, with multiplicity.
/// - `digest` is any deterministic one-way function with negligible
///   collision probability; see [`crate::digest::Blake3Digest`].
///
/// The input is an ordered slice on purpose: the round-bound estimation
/// walks nodes in input order, and reordering the input can change the
/// bound and therefore the hashes. Callers wanting reproducibility across
/// runs should feed nodes in a canonical order.
///
/// Returns one entry per input node, keyed by the extracted IDs.
///
/// # Errors
///
/// - [`HashError::DuplicateId`] if `get_id` repeats an ID.
/// - [`HashError::SeparatorInLiteral`] if a literal part contains a tab.
/// - [`HashError::Describe`] wrapping any error from `describe`.
/// - [`HashError::MissingNode`] if a `Dep` part names an absent node.
///
/// There is no partial success: any error means no hashes at all.
pub fn calculate<N, D, I, C>(
    nodes: &[N],
    digest: &D,
    get_id: I,
    describe: C,
) -> Result<BTreeMap<NodeId, String>, HashError>
where
    D: Digest,
    I: Fn(&N) -> NodeId,
    C: Fn(&N) -> anyhow::Result<Vec<HashPart>>,
{
    let mut graph = GraphState::build(nodes, &get_id, &describe)?;
    let rounds = round_bound(&graph);
    debug!(nodes = graph.len(), rounds, "relaxing graph hashes");
    relax::run(&mut graph, rounds, digest)?;
    Ok(graph.into_hashes())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
