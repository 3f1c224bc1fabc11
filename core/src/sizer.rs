// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded sizer: fit the visible grid into pixel bounds.
//!
//! Given maximum pixel dimensions and an optional per-cell cap, compute
//! the largest integer cell size such that the visible grid, including
//! coordinate-label gutters, fits within the bounds at a 1:1 cell aspect
//! ratio. Closed-form arithmetic; the only state is the memo that lets
//! the widget skip redundant resize notifications.

use serde::{Deserialize, Serialize};

/// Inputs to one sizing computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizerInput {
    /// Maximum rendered width in pixels
    pub max_width: u32,
    /// Maximum rendered height in pixels
    pub max_height: u32,
    /// Optional cap on the cell size
    pub max_cell_size: Option<u32>,
    /// Visible column count (after range clipping)
    pub visible_cols: u16,
    /// Visible row count (after range clipping)
    pub visible_rows: u16,
    /// Whether coordinate labels add a gutter on each edge
    pub show_coordinates: bool,
}

/// Result of a memoized fit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeFit {
    /// Computed cell size, always at least 1
    pub cell_size: u32,
    /// Whether the size differs from the previous fit
    pub changed: bool,
}

/// Largest integer cell size that fits the bounds.
///
/// Gutters count as one extra cell per labeled edge, which keeps the
/// arithmetic integral. Degenerate inputs (zero visible columns or rows)
/// fail safe to 1 rather than dividing by zero.
pub fn fit_cell_size(input: &SizerInput) -> u32 {
    if input.visible_cols == 0 || input.visible_rows == 0 {
        return 1;
    }

    let gutters = if input.show_coordinates { 2 } else { 0 };
    let cols = input.visible_cols as u32 + gutters;
    let rows = input.visible_rows as u32 + gutters;

    let by_width = input.max_width / cols;
    let by_height = input.max_height / rows;
    let size = by_width.min(by_height).max(1);

    match input.max_cell_size {
        Some(cap) => size.min(cap.max(1)),
        None => size,
    }
}

/// Memoizing wrapper around [`fit_cell_size`].
///
/// The widget fires its "resized" notification only when `changed` is
/// true, so identical inputs on consecutive frames cannot thrash the
/// caller's layout.
#[derive(Debug, Default)]
pub struct BoundedSizer {
    last: Option<(SizerInput, u32)>,
}

impl BoundedSizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute (or recall) the cell size for the given inputs
    pub fn fit(&mut self, input: SizerInput) -> SizeFit {
        if let Some((prev_input, prev_size)) = self.last {
            if prev_input == input {
                return SizeFit {
                    cell_size: prev_size,
                    changed: false,
                };
            }
        }

        let cell_size = fit_cell_size(&input);
        let changed = match self.last {
            Some((_, prev)) => prev != cell_size,
            None => true,
        };
        tracing::trace!(cell_size, changed, "sizer recomputed");
        self.last = Some((input, cell_size));

        SizeFit { cell_size, changed }
    }

    /// Last computed size, if any fit has run
    pub fn current(&self) -> Option<u32> {
        self.last.map(|(_, size)| size)
    }
}
