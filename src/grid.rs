//! Rectangular character grids shared by the grid-based puzzles.
//!
//! Cells are stored as a flat, row-major byte array. Text input accepts rows
//! separated either by newlines or by `/`, so a board fits on a command line.

use std::fmt;

use anyhow::{bail, Result};

/// A fixed-size rectangular grid of ASCII symbols.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Box<[u8]>,
}

impl Grid {
    /// Parses a grid from text, one row per line or per `/`-separated segment.
    ///
    /// Blank lines and surrounding whitespace are ignored. Every row must
    /// have the same width and contain only ASCII symbols.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .split(['\n', '/'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();

        let Some(first) = rows.first() else {
            bail!("grid has no rows");
        };
        let cols = first.len();

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row_index, row) in rows.iter().enumerate() {
            if !row.is_ascii() {
                bail!("row {} contains non-ASCII symbols: {:?}", row_index + 1, row);
            }
            if row.len() != cols {
                bail!(
                    "row {} has width {}, expected {}",
                    row_index + 1,
                    row.len(),
                    cols
                );
            }
            cells.extend_from_slice(row.as_bytes());
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells: cells.into_boxed_slice(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Converts (row, col) to a flat cell index.
    #[inline(always)]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Converts a flat cell index to (row, col).
    #[inline(always)]
    pub fn coord(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[self.idx(row, col)]
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Returns a copy with the given cells overwritten.
    pub fn with_cells(&self, changes: &[(usize, u8)]) -> Self {
        let mut next = self.clone();
        for &(index, symbol) in changes {
            next.cells[index] = symbol;
        }
        next
    }

    /// Returns a copy with two cells exchanged.
    pub fn swapped(&self, a: usize, b: usize) -> Self {
        let mut next = self.clone();
        next.cells.swap(a, b);
        next
    }

    /// Number of cells holding `symbol`.
    pub fn count(&self, symbol: u8) -> usize {
        self.cells.iter().filter(|&&cell| cell == symbol).count()
    }

    /// Same shape as `other`.
    pub fn same_shape(&self, other: &Grid) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }
}

/// One line per row, no trailing newline.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(self.cols).enumerate() {
            if row_index > 0 {
                f.write_str("\n")?;
            }
            for &symbol in row {
                write!(f, "{}", symbol as char)?;
            }
        }
        Ok(())
    }
}
