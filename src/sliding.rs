//! N×M sliding-tile puzzles such as the 8- and 15-puzzle.

use std::fmt;
use std::rc::Rc;

use anyhow::{bail, Result};

use crate::grid::Grid;
use crate::puzzle::Puzzle;

/// Symbol marking the empty slot.
pub const BLANK: u8 = b'*';

/// The goal configuration, shared by every state of one search.
#[derive(Debug, PartialEq, Eq)]
struct Target {
    grid: Grid,
    /// Cell index of each symbol in the target, when all symbols are distinct.
    positions: Option<Vec<usize>>,
}

impl Target {
    fn new(grid: Grid) -> Self {
        let mut positions = vec![usize::MAX; 256];
        let mut distinct = true;
        for (index, &symbol) in grid.cells().iter().enumerate() {
            if positions[symbol as usize] != usize::MAX {
                distinct = false;
                break;
            }
            positions[symbol as usize] = index;
        }
        Self {
            grid,
            positions: distinct.then_some(positions),
        }
    }
}

/// A sliding-tile puzzle in some configuration, working towards a target.
///
/// A move slides one tile orthogonally adjacent to the blank into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlidingPuzzle {
    current: Grid,
    /// Cell index of the blank in `current`.
    blank: usize,
    target: Rc<Target>,
}

impl SlidingPuzzle {
    /// Creates a puzzle from its current and target grids.
    ///
    /// Both grids must have the same shape, exactly one blank, and the same
    /// symbols.
    pub fn new(current: Grid, target: Grid) -> Result<Self> {
        if !current.same_shape(&target) {
            bail!(
                "current grid is {}x{} but target is {}x{}",
                current.rows(),
                current.cols(),
                target.rows(),
                target.cols()
            );
        }
        for (name, grid) in [("current", &current), ("target", &target)] {
            let blanks = grid.count(BLANK);
            if blanks != 1 {
                bail!("{name} grid must contain exactly one '*', found {blanks}");
            }
        }

        let mut current_symbols = current.cells().to_vec();
        let mut target_symbols = target.cells().to_vec();
        current_symbols.sort_unstable();
        target_symbols.sort_unstable();
        if current_symbols != target_symbols {
            bail!("current and target grids hold different tiles");
        }

        let blank = find_blank(&current)?;
        Ok(Self {
            current,
            blank,
            target: Rc::new(Target::new(target)),
        })
    }

    /// Parses both grids from text (see [`Grid::parse`]).
    pub fn parse(current: &str, target: &str) -> Result<Self> {
        Self::new(Grid::parse(current)?, Grid::parse(target)?)
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn target(&self) -> &Grid {
        &self.target.grid
    }

    /// Returns the state with the blank moved to `cell`.
    fn slide_from(&self, cell: usize) -> Self {
        Self {
            current: self.current.swapped(self.blank, cell),
            blank: cell,
            target: Rc::clone(&self.target),
        }
    }

    /// Whether the tile permutation and blank position have matching parity
    /// with respect to the target. Every move flips both, so a mismatch can
    /// never be repaired.
    fn parity_allows_solution(&self, positions: &[usize]) -> bool {
        let cells = self.current.cells();
        let mut seen = vec![false; cells.len()];
        let mut cycles = 0;
        for start in 0..cells.len() {
            if seen[start] {
                continue;
            }
            cycles += 1;
            let mut index = start;
            while !seen[index] {
                seen[index] = true;
                index = positions[cells[index] as usize];
            }
        }
        let permutation_odd = (cells.len() - cycles) % 2 == 1;

        let (row, col) = self.current.coord(self.blank);
        let (goal_row, goal_col) = self.current.coord(positions[BLANK as usize]);
        let distance_odd = (row.abs_diff(goal_row) + col.abs_diff(goal_col)) % 2 == 1;

        permutation_odd == distance_odd
    }
}

fn find_blank(grid: &Grid) -> Result<usize> {
    match grid.cells().iter().position(|&cell| cell == BLANK) {
        Some(index) => Ok(index),
        None => bail!("grid has no blank"),
    }
}

impl Puzzle for SlidingPuzzle {
    type Key = Box<[u8]>;

    /// The blank moves up, left, down, right, in that order.
    fn extensions(&self) -> Vec<Self> {
        let (row, col) = self.current.coord(self.blank);
        let (rows, cols) = (self.current.rows(), self.current.cols());
        let mut next = Vec::with_capacity(4);

        if row > 0 {
            next.push(self.slide_from(self.current.idx(row - 1, col)));
        }
        if col > 0 {
            next.push(self.slide_from(self.current.idx(row, col - 1)));
        }
        if row + 1 < rows {
            next.push(self.slide_from(self.current.idx(row + 1, col)));
        }
        if col + 1 < cols {
            next.push(self.slide_from(self.current.idx(row, col + 1)));
        }

        next
    }

    fn is_solved(&self) -> bool {
        self.current == self.target.grid
    }

    /// Only decidable when every symbol is distinct; otherwise never prunes.
    fn fail_fast(&self) -> bool {
        match &self.target.positions {
            Some(positions) => !self.parity_allows_solution(positions),
            None => false,
        }
    }

    /// The target is fixed for a whole search, so the current tiles alone
    /// identify a state.
    fn canonical_key(&self) -> Box<[u8]> {
        self.current.cells().into()
    }
}

impl fmt::Display for SlidingPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.current, f)
    }
}
