// SPDX-License-Identifier: MIT OR Apache-2.0

//! Goban Core - Board Model and Layout Math
//!
//! This crate provides the data side of the goban component:
//! - Board occupancy grids and visible-range clipping
//! - Sparse overlay maps (markers, ghost stones, paint, heat)
//! - Cell composition for rendering and selection-region merging
//! - Deterministic fuzzy stone placement
//! - The bounded sizer that fits a grid into pixel bounds
//!
//! Everything here is plain data and pure functions; the egui widget in
//! `goban-ui-egui` consumes this crate's output.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod coords;
pub mod fuzzy;
pub mod grid;
pub mod overlay;
pub mod range;
pub mod selection;
pub mod sizer;

use serde::{Deserialize, Serialize};

/// Stone color on the board (Black or White)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// First player (traditionally moves first)
    Black,
    /// Second player
    White,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Board position identified by (column, row), zero-based, origin top-left
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Vertex {
    /// X coordinate (column)
    pub x: u16,
    /// Y coordinate (row)
    pub y: u16,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Check if the vertex lies inside a board of the given dimensions
    pub fn is_inside(&self, width: u16, height: u16) -> bool {
        self.x < width && self.y < height
    }

    /// Get adjacent (neighboring) vertices in the four cardinal directions.
    ///
    /// Neighbors below zero are skipped; callers clip against board bounds
    /// on the far edges with [`Vertex::is_inside`].
    pub fn neighbors(&self) -> Vec<Vertex> {
        let mut neighbors = Vec::with_capacity(4);

        // North
        if self.y > 0 {
            neighbors.push(Vertex::new(self.x, self.y - 1));
        }

        // East
        if self.x < u16::MAX {
            neighbors.push(Vertex::new(self.x + 1, self.y));
        }

        // South
        if self.y < u16::MAX {
            neighbors.push(Vertex::new(self.x, self.y + 1));
        }

        // West
        if self.x > 0 {
            neighbors.push(Vertex::new(self.x - 1, self.y));
        }

        neighbors
    }
}

pub use board::{BoardError, BoardState};
pub use fuzzy::{fuzzy_offset, Jitter};
pub use grid::{newly_placed, render_cells, Cell, Overlays};
pub use overlay::{
    GhostKind, GhostMap, GhostStone, Heat, HeatOverlay, Marker, MarkerKind, MarkerMap,
    OverlayMap, PaintMap,
};
pub use range::Range;
pub use selection::{merge_selection, OpenEdges, SelectionRegion};
pub use sizer::{fit_cell_size, BoundedSizer, SizeFit, SizerInput};
