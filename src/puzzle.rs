//! The capability contract every searchable configuration implements.
//!
//! The search engine only ever talks to this trait. Concrete puzzles keep
//! their state private and expose it through successor generation, a goal
//! test, an optional pruning hint, and a canonical key for deduplication.

use std::hash::Hash;

/// A configuration in an implicit state graph.
pub trait Puzzle: Sized {
    /// Stable representation of the full state. Two configurations with
    /// equal keys are treated as the same explored state.
    type Key: Eq + Hash;

    /// Returns every configuration reachable by one legal move.
    ///
    /// The order is significant: depth-first search explores branches in
    /// exactly this order. May be empty, and may contain states the engine
    /// has already seen.
    fn extensions(&self) -> Vec<Self>;

    /// Returns `true` iff this configuration is a goal state.
    fn is_solved(&self) -> bool;

    /// Returns `true` if this configuration provably cannot lead to a
    /// solution and must not be expanded.
    fn fail_fast(&self) -> bool {
        false
    }

    /// Returns the canonical key used for equality and the visited set.
    fn canonical_key(&self) -> Self::Key;
}
