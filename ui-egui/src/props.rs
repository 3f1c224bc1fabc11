// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-frame widget input and output.

use std::collections::HashSet;
use std::sync::Arc;

use crossbeam_channel::Sender;
use goban_core::{BoardState, GhostMap, HeatOverlay, MarkerMap, PaintMap, Range, Vertex};

use crate::event::BoardEvent;
use crate::theme::BoardTheme;

/// Declarative input for one render pass.
///
/// All fields are borrowed and immutable; the widget mutates none of
/// them. Supply fresh props every frame.
///
/// # Animation contract
///
/// Placement animation is keyed on the *identity* of `board`: a frame
/// whose `Arc` points at the same allocation as the previous frame never
/// animates, even if the contents were mutated in place. To request
/// animation for newly placed stones, construct a new `Arc<BoardState>`.
/// The widget cannot detect deep mutation and does not try to.
pub struct BoardProps<'a> {
    /// Stone occupancy grid (required)
    pub board: &'a Arc<BoardState>,
    /// Marker overlay, congruent in shape with the board
    pub markers: Option<&'a MarkerMap>,
    /// Ghost-stone overlay
    pub ghosts: Option<&'a GhostMap>,
    /// Territory paint overlay
    pub paint: Option<&'a PaintMap>,
    /// Move-suggestion heat overlay
    pub heat: Option<&'a HeatOverlay>,
    /// Visible sub-range; `None` renders the whole board
    pub range: Option<Range>,
    /// Selected vertices, merged into connected highlight regions
    pub selected: Option<&'a HashSet<Vertex>>,
    /// Dimmed vertices
    pub dimmed: Option<&'a HashSet<Vertex>>,
    /// Draw coordinate labels in a gutter around the grid
    pub show_coordinates: bool,
    /// Apply deterministic per-vertex placement jitter
    pub fuzzy_placement: bool,
    /// Animate stones that appear under a new board identity
    pub animate_placement: bool,
    /// Suppress all interaction and show a loading indicator
    pub busy: bool,
    /// Maximum rendered size in pixels; `None` uses the available space
    pub max_size: Option<(u32, u32)>,
    /// Cap on the computed cell size
    pub max_cell_size: Option<u32>,
    /// Column label formatter; defaults to Go letters (skipping `I`)
    pub column_label: Option<&'a dyn Fn(usize) -> String>,
    /// Row label formatter; defaults to numbering from the bottom edge
    pub row_label: Option<&'a dyn Fn(usize) -> String>,
    /// Optional channel mirroring the events in [`BoardResponse`]
    pub events: Option<&'a Sender<BoardEvent>>,
    /// Styling override; defaults to [`crate::theme::default_theme`]
    pub theme: Option<&'a BoardTheme>,
}

impl<'a> BoardProps<'a> {
    pub fn new(board: &'a Arc<BoardState>) -> Self {
        Self {
            board,
            markers: None,
            ghosts: None,
            paint: None,
            heat: None,
            range: None,
            selected: None,
            dimmed: None,
            show_coordinates: false,
            fuzzy_placement: false,
            animate_placement: false,
            busy: false,
            max_size: None,
            max_cell_size: None,
            column_label: None,
            row_label: None,
            events: None,
            theme: None,
        }
    }

    pub fn with_range(mut self, range: Range) -> Self {
        self.range = Some(range);
        self
    }

    pub fn with_markers(mut self, markers: &'a MarkerMap) -> Self {
        self.markers = Some(markers);
        self
    }

    pub fn with_events(mut self, events: &'a Sender<BoardEvent>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }
}

/// What happened during one `show` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardResponse {
    /// Vertex the pointer clicked this frame, if any
    pub clicked: Option<Vertex>,
    /// Vertex currently under the pointer
    pub hovered: Option<Vertex>,
    /// New cell size, present only on frames where it changed
    pub resized: Option<u32>,
}
