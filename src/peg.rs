//! Peg solitaire on a rectangular grid.

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};

use crate::grid::Grid;
use crate::puzzle::Puzzle;

pub const PEG: u8 = b'*';
pub const EMPTY: u8 = b'.';
pub const UNUSED: u8 = b'#';

/// The 5x5 board with every hole filled except one near the bottom.
pub const CLASSIC_5X5: &str = "*****/*****/*****/**.**/*****";

/// A snapshot of a peg solitaire board: `*` peg, `.` empty hole, `#` unused.
///
/// A peg may jump horizontally or vertically over an adjacent peg into an
/// empty hole directly beyond it, removing the jumped peg. The board is
/// solved when exactly one peg remains.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridPegSolitaire {
    board: Grid,
}

impl GridPegSolitaire {
    pub fn new(board: Grid) -> Result<Self> {
        if let Some(&bad) = board
            .cells()
            .iter()
            .find(|&&cell| !matches!(cell, PEG | EMPTY | UNUSED))
        {
            bail!(
                "unexpected symbol {:?} on peg board (expected '*', '.' or '#')",
                bad as char
            );
        }
        Ok(Self { board })
    }

    pub fn pegs(&self) -> usize {
        self.board.count(PEG)
    }

    pub fn board(&self) -> &Grid {
        &self.board
    }

    /// The board after moving the peg at `from` over `over` into `to`,
    /// if that jump is legal.
    fn jump(&self, from: (usize, usize), over: (usize, usize), to: (usize, usize)) -> Option<Self> {
        let board = &self.board;
        if board.get(over.0, over.1) != PEG || board.get(to.0, to.1) != EMPTY {
            return None;
        }
        Some(Self {
            board: board.with_cells(&[
                (board.idx(from.0, from.1), EMPTY),
                (board.idx(over.0, over.1), EMPTY),
                (board.idx(to.0, to.1), PEG),
            ]),
        })
    }
}

impl FromStr for GridPegSolitaire {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(Grid::parse(s)?)
    }
}

impl Puzzle for GridPegSolitaire {
    type Key = Box<[u8]>;

    /// Pegs are visited in row-major order; each tries jumping left, right,
    /// up and down, in that order.
    fn extensions(&self) -> Vec<Self> {
        let board = &self.board;
        let (rows, cols) = (board.rows(), board.cols());
        let mut next = Vec::new();

        for row in 0..rows {
            for col in 0..cols {
                if board.get(row, col) != PEG {
                    continue;
                }
                let from = (row, col);
                if col >= 2 {
                    next.extend(self.jump(from, (row, col - 1), (row, col - 2)));
                }
                if col + 2 < cols {
                    next.extend(self.jump(from, (row, col + 1), (row, col + 2)));
                }
                if row >= 2 {
                    next.extend(self.jump(from, (row - 1, col), (row - 2, col)));
                }
                if row + 2 < rows {
                    next.extend(self.jump(from, (row + 1, col), (row + 2, col)));
                }
            }
        }

        next
    }

    fn is_solved(&self) -> bool {
        self.pegs() == 1
    }

    /// With no pegs left no jump is ever possible again.
    fn fail_fast(&self) -> bool {
        self.pegs() == 0
    }

    fn canonical_key(&self) -> Box<[u8]> {
        self.board.cells().into()
    }
}

impl fmt::Display for GridPegSolitaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}
