//! Depth-first and breadth-first search over any [`Puzzle`].
//!
//! Both strategies:
//! - Record explored configurations in an arena [`SearchTree`]
//! - Deduplicate by canonical key with an `FxHashSet` owned by the call
//! - Skip successors whose `fail_fast()` hint is set
//! - Collapse the tree into a [`SolutionPath`] as soon as a goal is reached
//!
//! Neither strategy recurses, so solution depth is bounded by heap memory
//! rather than the call stack.

use std::collections::VecDeque;
use std::fmt;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::path::SolutionPath;
use crate::puzzle::Puzzle;
use crate::tree::{NodeId, SearchTree};

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose successors were examined.
    pub expanded: usize,
    /// Distinct canonical keys marked visited.
    pub visited: usize,
    /// Largest stack depth (depth-first) or queue length (breadth-first).
    pub max_frontier: usize,
}

/// A frame of the explicit depth-first stack.
struct Frame<P> {
    node: NodeId,
    /// Successors of `node` not tried yet, in `extensions()` order.
    pending: std::vec::IntoIter<P>,
}

/// Finds a path to a solved configuration, exploring one branch fully
/// before backtracking.
///
/// The path is the first one reached in `extensions()` order and is not
/// necessarily the shortest. Returns `None` once every reachable,
/// unvisited configuration has been explored.
pub fn depth_first_solve<P: Puzzle>(initial: P) -> Option<SolutionPath<P>> {
    depth_first_solve_with_stats(initial).0
}

/// Like [`depth_first_solve`], also returning the search counters.
pub fn depth_first_solve_with_stats<P: Puzzle>(
    initial: P,
) -> (Option<SolutionPath<P>>, SearchStats) {
    let mut stats = SearchStats::default();
    let mut visited: FxHashSet<P::Key> = FxHashSet::default();
    let (mut tree, root) = SearchTree::new(initial);

    // configurations are marked visited as they are entered
    visited.insert(tree.puzzle(root).canonical_key());
    if tree.puzzle(root).is_solved() {
        stats.visited = visited.len();
        return (Some(finish(tree, root, "depth-first", stats)), stats);
    }

    let mut stack = vec![Frame {
        node: root,
        pending: tree.take_extensions(root).into_iter(),
    }];
    stats.expanded = 1;
    stats.max_frontier = 1;

    while let Some(frame) = stack.last_mut() {
        let Some(candidate) = frame.pending.next() else {
            // every successor tried: backtrack
            stack.pop();
            continue;
        };
        let parent = frame.node;

        if candidate.fail_fast() || !visited.insert(candidate.canonical_key()) {
            continue;
        }

        let child = tree.attach(parent, candidate);
        if tree.puzzle(child).is_solved() {
            stats.visited = visited.len();
            return (Some(finish(tree, child, "depth-first", stats)), stats);
        }

        let pending = tree.take_extensions(child).into_iter();
        stack.push(Frame {
            node: child,
            pending,
        });
        stats.expanded += 1;
        stats.max_frontier = stats.max_frontier.max(stack.len());
    }

    stats.visited = visited.len();
    debug!(
        expanded = stats.expanded,
        visited = stats.visited,
        max_frontier = stats.max_frontier,
        "depth-first search exhausted without a solution"
    );
    (None, stats)
}

/// Finds a path to a solved configuration in level order.
///
/// Configurations are finalized in non-decreasing order of move count, so
/// the returned path has the fewest moves of any path reachable without
/// crossing a `fail_fast()` configuration.
pub fn breadth_first_solve<P: Puzzle>(initial: P) -> Option<SolutionPath<P>> {
    breadth_first_solve_with_stats(initial).0
}

/// Like [`breadth_first_solve`], also returning the search counters.
pub fn breadth_first_solve_with_stats<P: Puzzle>(
    initial: P,
) -> (Option<SolutionPath<P>>, SearchStats) {
    let mut stats = SearchStats::default();
    let mut visited: FxHashSet<P::Key> = FxHashSet::default();
    let (mut tree, root) = SearchTree::new(initial);

    let mut queue = VecDeque::from([root]);
    stats.max_frontier = 1;

    while let Some(node) = queue.pop_front() {
        let puzzle = tree.puzzle(node);
        let key = puzzle.canonical_key();

        // the same state may have been queued more than once before its
        // first occurrence was finalized
        if visited.contains(&key) || puzzle.fail_fast() {
            continue;
        }
        let solved = puzzle.is_solved();
        visited.insert(key);

        if solved {
            stats.visited = visited.len();
            return (Some(finish(tree, node, "breadth-first", stats)), stats);
        }

        stats.expanded += 1;
        for successor in tree.take_extensions(node) {
            if visited.contains(&successor.canonical_key()) {
                continue;
            }
            let child = tree.attach(node, successor);
            queue.push_back(child);
        }
        stats.max_frontier = stats.max_frontier.max(queue.len());
    }

    stats.visited = visited.len();
    debug!(
        expanded = stats.expanded,
        visited = stats.visited,
        max_frontier = stats.max_frontier,
        "breadth-first search exhausted without a solution"
    );
    (None, stats)
}

/// Collapses the tree onto the solved node and logs the outcome.
fn finish<P>(
    tree: SearchTree<P>,
    solved: NodeId,
    strategy: &str,
    stats: SearchStats,
) -> SolutionPath<P> {
    trace!(nodes = tree.node_count(), strategy, "solution found, collapsing search tree");
    let path = tree.into_path(solved);
    debug!(
        strategy,
        moves = path.moves(),
        expanded = stats.expanded,
        visited = stats.visited,
        max_frontier = stats.max_frontier,
        "search finished"
    );
    path
}

/// Selects one of the traversal orders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::DepthFirst, Strategy::BreadthFirst];

    pub fn solve<P: Puzzle>(self, initial: P) -> Option<SolutionPath<P>> {
        self.solve_with_stats(initial).0
    }

    pub fn solve_with_stats<P: Puzzle>(self, initial: P) -> (Option<SolutionPath<P>>, SearchStats) {
        match self {
            Strategy::DepthFirst => depth_first_solve_with_stats(initial),
            Strategy::BreadthFirst => breadth_first_solve_with_stats(initial),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::DepthFirst => "depth-first",
            Strategy::BreadthFirst => "breadth-first",
        })
    }
}
