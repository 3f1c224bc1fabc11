// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board occupancy grid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Color, Vertex};

/// Errors raised by checked board constructors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A row's length disagrees with the first row
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Dimensions exceed what a vertex can address
    #[error("board dimensions {width}x{height} exceed the addressable range")]
    Oversize { width: usize, height: usize },
}

/// Rectangular grid of stone occupancy values.
///
/// Every vertex holds `Option<Color>`: `None` for empty, `Some` for an
/// occupied intersection. Width and height are derived from the grid and
/// may be zero; a zero-area board renders as nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    width: u16,
    height: u16,
    cells: Vec<Option<Color>>,
}

impl BoardState {
    /// Create an empty board of the given dimensions
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Build a board from row-major rows, rejecting ragged input
    pub fn from_rows(rows: Vec<Vec<Option<Color>>>) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if width > u16::MAX as usize || height > u16::MAX as usize {
            return Err(BoardError::Oversize { width, height });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != width {
                return Err(BoardError::RaggedRows {
                    row,
                    expected: width,
                    found: cols.len(),
                });
            }
            cells.extend(cols);
        }

        Ok(Self {
            width: width as u16,
            height: height as u16,
            cells,
        })
    }

    /// Board width in columns
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Board height in rows
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Stone at a vertex; out-of-bounds lookups read as empty
    pub fn stone_at(&self, vertex: Vertex) -> Option<Color> {
        if !vertex.is_inside(self.width, self.height) {
            return None;
        }
        let idx = vertex.y as usize * self.width as usize + vertex.x as usize;
        self.cells.get(idx).copied().flatten()
    }

    /// Place or clear a stone; out-of-bounds writes are ignored
    pub fn set(&mut self, vertex: Vertex, stone: Option<Color>) {
        if !vertex.is_inside(self.width, self.height) {
            return;
        }
        let idx = vertex.y as usize * self.width as usize + vertex.x as usize;
        self.cells[idx] = stone;
    }

    /// Builder-style stone placement, convenient for literals in tests
    pub fn with_stone(mut self, vertex: Vertex, color: Color) -> Self {
        self.set(vertex, Some(color));
        self
    }

    /// Iterate all vertices in row-major order
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Vertex::new(x, y)))
    }

    /// Count stones of the given color
    pub fn count_stones(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| **c == Some(color)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows = vec![vec![None, None], vec![None]];
        let err = BoardState::from_rows(rows).unwrap_err();
        assert_eq!(
            err,
            BoardError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn out_of_bounds_reads_as_empty() {
        let board = BoardState::new(9, 9).with_stone(Vertex::new(4, 4), Color::Black);
        assert_eq!(board.stone_at(Vertex::new(4, 4)), Some(Color::Black));
        assert_eq!(board.stone_at(Vertex::new(40, 4)), None);
    }

    #[test]
    fn zero_area_board_is_valid() {
        let board = BoardState::from_rows(vec![]).unwrap();
        assert_eq!(board.width(), 0);
        assert_eq!(board.height(), 0);
        assert_eq!(board.vertices().count(), 0);
    }
}
