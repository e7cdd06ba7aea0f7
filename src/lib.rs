//! Generic state-space search for puzzles.
//!
//! Any type implementing [`Puzzle`] can be solved with depth-first or
//! breadth-first search. Three puzzle families ship with the crate: grid peg
//! solitaire, sliding tiles and word ladders.

pub mod grid;
pub mod path;
pub mod peg;
pub mod persistence;
pub mod puzzle;
pub mod sliding;
pub mod solver;
pub mod tree;
pub mod word_ladder;

pub use path::SolutionPath;
pub use peg::GridPegSolitaire;
pub use puzzle::Puzzle;
pub use sliding::SlidingPuzzle;
pub use solver::{
    breadth_first_solve, breadth_first_solve_with_stats, depth_first_solve,
    depth_first_solve_with_stats, SearchStats, Strategy,
};
pub use word_ladder::WordLadder;
