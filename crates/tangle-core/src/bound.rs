//! Round-bound estimation.
//!
//! # Overview
//!
//! Before relaxing, the engine decides how many synchronous rounds to run.
//! Each round propagates hash information exactly one dependency hop, so the
//! bound must cover the deepest chain of *new* nodes any traversal can reach.
//!
//! # Design
//!
//! One `visited` marking is shared across the entire estimation — it is never
//! reset between starting nodes. Nodes are processed in input order; each
//! unvisited node's height is one more than the tallest height among its
//! dependencies, where a dependency that is already visited (itself included,
//! for self-loops) contributes 0 instead of recursing. The bound is the
//! maximum height over all starts.
//!
//! The shared marking is deliberate, not an oversight: it guarantees
//! termination on arbitrary cyclic graphs and keeps estimation linear in
//! edges, at the cost of under-counting some diamond-shaped sharing (a node
//! reachable via two paths of different lengths may be cut short on the
//! longer one). Changing this to a per-path marking — or to true longest-path
//! height — would change the bound, and with it every output hash. The
//! approximation is part of the format.
//!
//! Node IDs are interned into a dense arena up front so the recursion runs on
//! indices and a `Vec<bool>` instead of string sets. A dependency that names
//! no node in the set contributes 0 here; the relaxer reports it as a
//! missing-node error on the first round, which always runs when any node
//! exists.

use std::collections::HashMap;

use crate::id::NodeId;
use crate::state::GraphState;

/// Compute the number of relaxation rounds for `graph`.
///
/// Returns 0 only for an empty node set.
pub(crate) fn round_bound(graph: &GraphState) -> usize {
    let arena = Arena::new(graph);
    let mut visited = vec![false; arena.len()];
    let mut bound = 0;

    for node in 0..arena.len() {
        if !visited[node] {
            bound = bound.max(arena.height(node, &mut visited));
        }
    }

    bound
}

// ---------------------------------------------------------------------------
// Arena
// ---------------------------------------------------------------------------

/// Dependency lists re-indexed over dense node indices, in input order.
struct Arena {
    /// `deps[i]` holds node `i`'s dependencies; `None` marks a reference to
    /// an ID outside the node set.
    deps: Vec<Vec<Option<usize>>>,
}

impl Arena {
    fn new(graph: &GraphState) -> Self {
        let index: HashMap<&NodeId, usize> = graph
            .order()
            .iter()
            .enumerate()
            .map(|(i, id)| (id, i))
            .collect();

        let deps = graph
            .order()
            .iter()
            .map(|id| {
                graph
                    .state(id)
                    .map(|state| {
                        state
                            .dependencies
                            .iter()
                            .map(|dep| index.get(dep).copied())
                            .collect()
                    })
                    .unwrap_or_default()
            })
            .collect();

        Self { deps }
    }

    fn len(&self) -> usize {
        self.deps.len()
    }

    /// Height of `node`, marking it (and everything it newly reaches)
    /// visited. Callers must pass an unvisited node.
    fn height(&self, node: usize, visited: &mut [bool]) -> usize {
        visited[node] = true;

        let mut tallest = 0;
        for dep in &self.deps[node] {
            // Already-visited and out-of-set dependencies contribute 0.
            if let Some(dep) = *dep {
                if !visited[dep] {
                    tallest = tallest.max(self.height(dep, visited));
                }
            }
        }

        tallest + 1
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
