//! Lazy-deletion A* over an arbitrary graph.
//!
//! Nodes are never updated in place on the frontier. An improved route to a node pushes a fresh
//! entry, and older entries are discarded when popped because their cost no longer matches the
//! best known cost, or because the node has already been finalized.
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::warn;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index of the start node.
const NO_PARENT: usize = usize::MAX;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first; among equal estimates the deeper node (larger cost)
        // is popped first.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

/// Result of a search: the path with its cost if the goal was reached, and every node in the
/// order it was finalized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome<N, C> {
    pub path: Option<(Vec<N>, C)>,
    pub expanded: Vec<N>,
}

/// Follows parent indices from `goal_index` back to the root and returns the nodes in
/// root-to-goal order. Yields an empty path if the chain does not end at `start`.
fn reverse_path<N, C>(parents: &FxIndexMap<N, (usize, C)>, start: &N, goal_index: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut i = goal_index;
    let mut path: Vec<N> = std::iter::from_fn(|| {
        parents.get_index(i).map(|(node, &(parent, _))| {
            i = parent;
            node.clone()
        })
    })
    .take(parents.len())
    .collect();
    path.reverse();
    if path.first() != Some(start) || i != NO_PARENT {
        warn!("Predecessor chain is broken, discarding reconstructed path");
        return Vec::new();
    }
    path
}

/// Runs A* from `start` until a node satisfying `success` is finalized or the frontier is
/// exhausted.
///
/// `successors` yields neighbours with their (non-negative) edge cost and `heuristic` must be
/// consistent for the returned path to be optimal.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> SearchOutcome<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        index: 0,
    });
    // Best known cost and parent index per node, indexed by insertion order.
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (NO_PARENT, Zero::zero()));
    let mut closed: FxHashSet<usize> = FxHashSet::default();
    let mut expanded: Vec<N> = Vec::new();

    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, &(_, best))) = parents.get_index(index) else {
                continue;
            };
            // Stale entry: a cheaper route was pushed later, or the node is already settled.
            if cost != best || closed.contains(&index) {
                continue;
            }
            closed.insert(index);
            expanded.push(node.clone());
            if success(node) {
                let path = reverse_path(&parents, start, index);
                return SearchOutcome {
                    path: Some((path, cost)),
                    expanded,
                };
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if closed.contains(&e.index()) || e.get().1 <= new_cost {
                        continue;
                    }
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    SearchOutcome {
        path: None,
        expanded,
    }
}
