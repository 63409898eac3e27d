//! Iterative hash relaxation.
//!
//! # Overview
//!
//! The relaxer runs a fixed number of synchronous rounds over the whole node
//! set. Each round computes a new hash for every node from the *pre-round*
//! snapshot of all current hashes, then commits every new value at once
//! before the next round starts.
//!
//! That read-old/write-new/swap discipline is what makes cycles safe: a
//! node's round-`k` hash only ever observes dependency hashes as of round
//! `k−1`, no node sees a partially updated round, and the result is
//! independent of iteration order within a round.
//!
//! # Pre-image
//!
//! A node's pre-image is its parts joined with [`PART_SEPARATOR`]: literals
//! verbatim, dependency references replaced by the named node's current hash
//! (the empty string before round 1). The builder guarantees literals are
//! separator-free, so the pre-image is injective over part sequences.
//!
//! After the final round the relaxer stops without checking convergence: for
//! cyclic graphs the bounded value *is* the answer, not an approximation of
//! some further fixed point.

use tracing::trace;

use crate::digest::Digest;
use crate::error::HashError;
use crate::id::NodeId;
use crate::part::{HashPart, PART_SEPARATOR};
use crate::state::GraphState;

/// Run `rounds` relaxation rounds over `graph`.
///
/// Fails with [`HashError::MissingNode`] when a dependency part names an ID
/// absent from the node set. The failure surfaces on the first round, so a
/// dangling reference can never slip through a multi-round run.
pub(crate) fn run(
    graph: &mut GraphState,
    rounds: usize,
    digest: &impl Digest,
) -> Result<(), HashError> {
    for round in 1..=rounds {
        let new_hashes = compute_round(graph, graph.order(), digest)?;
        trace!(round, rounds, "committing relaxation round");
        graph.commit(new_hashes);
    }
    Ok(())
}

/// Compute one round's worth of new hashes without committing them.
///
/// `ids` picks the iteration order; any permutation of the node set yields
/// the same hashes because only pre-round state is read.
pub(crate) fn compute_round(
    graph: &GraphState,
    ids: &[NodeId],
    digest: &impl Digest,
) -> Result<Vec<(NodeId, String)>, HashError> {
    ids.iter()
        .map(|id| {
            let pre_image = pre_image(graph, id)?;
            Ok((id.clone(), digest.digest(pre_image.as_bytes())))
        })
        .collect()
}

/// Join a node's parts into its digest pre-image using the pre-round
/// snapshot of dependency hashes.
fn pre_image(graph: &GraphState, id: &NodeId) -> Result<String, HashError> {
    let state = graph.state(id).ok_or_else(|| HashError::MissingNode {
        node: id.clone(),
        dependency: id.clone(),
    })?;

    let mut joined = String::new();
    for (i, part) in state.base.iter().enumerate() {
        if i > 0 {
            joined.push(PART_SEPARATOR);
        }
        match part {
            HashPart::Literal(content) => joined.push_str(content),
            HashPart::Dep(dep) => {
                let dep_state = graph.state(dep).ok_or_else(|| HashError::MissingNode {
                    node: id.clone(),
                    dependency: dep.clone(),
                })?;
                joined.push_str(&dep_state.cur);
            }
        }
    }
    Ok(joined)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::Blake3Digest;
    use crate::error::HashErrorCode;
    use crate::part::HashPart;

    type Node = (&'static str, Vec<HashPart>);

    fn build(nodes: &[Node]) -> GraphState {
        GraphState::build(
            nodes,
            &|(id, _): &Node| NodeId::from(*id),
            &|(_, parts): &Node| Ok(parts.clone()),
        )
        .unwrap_or_else(|err| panic!("build failed: {err}"))
    }

    /// Transparent "digest" that exposes the joined pre-image.
    fn identity(input: &[u8]) -> String {
        String::from_utf8_lossy(input).into_owned()
    }

    #[test]
    fn round_one_sees_empty_dependency_hashes() {
        let mut graph = build(&[
            ("a", vec![HashPart::lit("1"), HashPart::dep("b")]),
            ("b", vec![HashPart::lit("2")]),
        ]);
        run(&mut graph, 1, &identity).expect("relax");
        let hashes = graph.into_hashes();
        assert_eq!(hashes[&NodeId::from("a")], "1\t");
        assert_eq!(hashes[&NodeId::from("b")], "2");
    }

    #[test]
    fn round_two_sees_round_one_hashes() {
        let mut graph = build(&[
            ("a", vec![HashPart::lit("1"), HashPart::dep("b")]),
            ("b", vec![HashPart::lit("2")]),
        ]);
        run(&mut graph, 2, &identity).expect("relax");
        let hashes = graph.into_hashes();
        assert_eq!(hashes[&NodeId::from("a")], "1\t2");
    }

    #[test]
    fn jacobi_discipline_not_gauss_seidel() {
        // b is listed after a in iteration order, but a's round-2 pre-image
        // must use b's round-1 hash, not b's round-2 hash.
        let mut graph = build(&[
            ("b", vec![HashPart::lit("x"), HashPart::dep("b")]),
            ("a", vec![HashPart::dep("b")]),
        ]);
        run(&mut graph, 2, &identity).expect("relax");
        let hashes = graph.into_hashes();
        // Round 1: b = "x\t", a = "". Round 2: b = "x\tx\t", a = "x\t".
        assert_eq!(hashes[&NodeId::from("b")], "x\tx\t");
        assert_eq!(hashes[&NodeId::from("a")], "x\t");
    }

    #[test]
    fn iteration_order_within_a_round_is_irrelevant() {
        let graph = build(&[
            ("a", vec![HashPart::lit("1"), HashPart::dep("b")]),
            ("b", vec![HashPart::lit("2"), HashPart::dep("a")]),
            ("c", vec![HashPart::lit("3"), HashPart::dep("c")]),
        ]);
        let digest = Blake3Digest;

        let forward: Vec<NodeId> = graph.order().to_vec();
        let mut reversed = forward.clone();
        reversed.reverse();

        let mut from_forward =
            compute_round(&graph, &forward, &digest).expect("forward round");
        let mut from_reversed =
            compute_round(&graph, &reversed, &digest).expect("reversed round");
        from_forward.sort();
        from_reversed.sort();
        assert_eq!(from_forward, from_reversed);
    }

    #[test]
    fn missing_dependency_is_fatal() {
        let mut graph = build(&[("a", vec![HashPart::dep("ghost")])]);
        let err = run(&mut graph, 3, &Blake3Digest).expect_err("must fail");
        assert_eq!(err.code(), HashErrorCode::MissingNode);
        assert!(
            err.to_string().contains("ghost"),
            "error names the dangling ID: {err}"
        );
    }

    #[test]
    fn zero_rounds_leaves_hashes_empty() {
        let mut graph = build(&[("a", vec![HashPart::lit("1")])]);
        run(&mut graph, 0, &Blake3Digest).expect("relax");
        assert_eq!(graph.into_hashes()[&NodeId::from("a")], "");
    }

    #[test]
    fn empty_part_list_digests_empty_pre_image() {
        let mut graph = build(&[("a", vec![])]);
        run(&mut graph, 1, &identity).expect("relax");
        assert_eq!(graph.into_hashes()[&NodeId::from("a")], "");
    }

    #[test]
    fn self_loop_produces_nonempty_stable_hash() {
        let mut graph = build(&[("c", vec![HashPart::lit("1"), HashPart::dep("c")])]);
        run(&mut graph, 1, &Blake3Digest).expect("relax");
        let hash = graph.into_hashes()[&NodeId::from("c")].clone();
        assert!(!hash.is_empty());
        assert!(hash.starts_with("blake3:"));
    }
}
