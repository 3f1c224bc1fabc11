// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cell composition: merges board state and overlays into render cells.

use std::collections::HashSet;

use crate::overlay::{GhostMap, GhostStone, Heat, HeatOverlay, Marker, MarkerMap, PaintMap};
use crate::{BoardState, Color, Range, Vertex};

/// Borrowed bundle of the optional overlay grids for one render pass
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlays<'a> {
    pub markers: Option<&'a MarkerMap>,
    pub ghosts: Option<&'a GhostMap>,
    pub paint: Option<&'a PaintMap>,
    pub heat: Option<&'a HeatOverlay>,
}

/// One visible intersection with everything applicable to it.
///
/// The vertex doubles as the cell's stable identity for event dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub vertex: Vertex,
    pub stone: Option<Color>,
    pub marker: Option<Marker>,
    pub ghost: Option<GhostStone>,
    /// Territory paint in `[-1, 1]`; `0.0` means unpainted
    pub paint: f32,
    pub heat: Option<Heat>,
    pub selected: bool,
    pub dimmed: bool,
    /// Set for stones that appeared since the previous board identity
    pub just_placed: bool,
}

/// Compose one cell per vertex of the visible range, row-major.
///
/// The range is clipped to the board first; vertices outside the clipped
/// range are omitted entirely. Degenerate geometry (zero-area board,
/// inverted range) yields an empty vector rather than an error, since a
/// board mid-configuration is a normal transient state for the caller.
pub fn render_cells(
    board: &BoardState,
    overlays: &Overlays<'_>,
    range: Range,
    selected: &HashSet<Vertex>,
    dimmed: &HashSet<Vertex>,
    just_placed: &HashSet<Vertex>,
) -> Vec<Cell> {
    let Some(range) = range.clip(board.width(), board.height()) else {
        return Vec::new();
    };

    range
        .vertices()
        .map(|vertex| Cell {
            vertex,
            stone: board.stone_at(vertex),
            marker: overlays.markers.and_then(|m| m.get(vertex)).cloned(),
            ghost: overlays.ghosts.and_then(|g| g.get(vertex)).copied(),
            paint: overlays
                .paint
                .and_then(|p| p.get(vertex))
                .copied()
                .unwrap_or(0.0),
            heat: overlays.heat.and_then(|h| h.get(vertex)).cloned(),
            selected: selected.contains(&vertex),
            dimmed: dimmed.contains(&vertex),
            just_placed: just_placed.contains(&vertex),
        })
        .collect()
}

/// Vertices that hold a stone in `next` but were empty in `prev`.
///
/// This drives placement animation: the widget only calls it when the
/// caller supplied a new board identity, per the animation contract.
pub fn newly_placed(prev: &BoardState, next: &BoardState) -> HashSet<Vertex> {
    next.vertices()
        .filter(|v| next.stone_at(*v).is_some() && prev.stone_at(*v).is_none())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newly_placed_ignores_existing_stones() {
        let prev = BoardState::new(9, 9).with_stone(Vertex::new(2, 2), Color::Black);
        let next = prev
            .clone()
            .with_stone(Vertex::new(6, 6), Color::White);
        let placed = newly_placed(&prev, &next);
        assert_eq!(placed.len(), 1);
        assert!(placed.contains(&Vertex::new(6, 6)));
    }

    #[test]
    fn newly_placed_handles_dimension_changes() {
        let prev = BoardState::new(9, 9);
        let next = BoardState::new(13, 13).with_stone(Vertex::new(12, 12), Color::Black);
        let placed = newly_placed(&prev, &next);
        assert!(placed.contains(&Vertex::new(12, 12)));
    }
}
