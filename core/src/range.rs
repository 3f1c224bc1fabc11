// SPDX-License-Identifier: MIT OR Apache-2.0

//! Visible sub-range of the board.

use serde::{Deserialize, Serialize};

use crate::Vertex;

/// Inclusive column/row intervals selecting the rendered part of a board.
///
/// A range is declarative caller input; [`Range::clip`] intersects it with
/// the actual board bounds before any rendering math runs. Clipping never
/// fails: inverted or fully out-of-bounds ranges clip to `None` and the
/// renderer emits zero cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    /// Inclusive (first, last) column
    pub x: (u16, u16),
    /// Inclusive (first, last) row
    pub y: (u16, u16),
}

impl Range {
    /// Range covering a whole board; degenerate for zero-area boards
    pub fn full(width: u16, height: u16) -> Self {
        Self {
            x: (0, width.saturating_sub(1)),
            y: (0, height.saturating_sub(1)),
        }
    }

    /// Intersect with board bounds, yielding `None` when nothing is visible
    pub fn clip(self, width: u16, height: u16) -> Option<Range> {
        if width == 0 || height == 0 {
            return None;
        }
        let x = (self.x.0, self.x.1.min(width - 1));
        let y = (self.y.0, self.y.1.min(height - 1));
        if x.0 > x.1 || y.0 > y.1 {
            return None;
        }
        Some(Range { x, y })
    }

    /// Number of visible columns
    pub fn cols(&self) -> u16 {
        self.x.1 - self.x.0 + 1
    }

    /// Number of visible rows
    pub fn rows(&self) -> u16 {
        self.y.1 - self.y.0 + 1
    }

    /// Whether the vertex falls inside the range
    pub fn contains(&self, vertex: Vertex) -> bool {
        (self.x.0..=self.x.1).contains(&vertex.x) && (self.y.0..=self.y.1).contains(&vertex.y)
    }

    /// Iterate the range's vertices in row-major order
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        let (x0, x1) = self.x;
        (self.y.0..=self.y.1).flat_map(move |y| (x0..=x1).map(move |x| Vertex::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_intersects_with_board_bounds() {
        let range = Range {
            x: (5, 30),
            y: (0, 30),
        };
        let clipped = range.clip(19, 19).unwrap();
        assert_eq!(clipped.x, (5, 18));
        assert_eq!(clipped.y, (0, 18));
        assert_eq!(clipped.cols(), 14);
    }

    #[test]
    fn clip_of_nonempty_board_is_never_empty_for_full_range() {
        let range = Range::full(9, 9);
        assert!(range.clip(9, 9).is_some());
    }

    #[test]
    fn degenerate_ranges_clip_to_none() {
        assert!(Range::full(9, 9).clip(0, 9).is_none());
        let inverted = Range {
            x: (5, 2),
            y: (0, 8),
        };
        assert!(inverted.clip(9, 9).is_none());
        let outside = Range {
            x: (20, 25),
            y: (0, 8),
        };
        assert!(outside.clip(9, 9).is_none());
    }
}
