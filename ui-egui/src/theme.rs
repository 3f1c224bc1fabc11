// SPDX-License-Identifier: MIT OR Apache-2.0

//! Styling surface for the board widget.
//!
//! All painting goes through a [`BoardTheme`], so callers override colors
//! in one place instead of chasing constants through the paint code.

use egui::Color32;
use goban_core::{Color, GhostKind, GhostStone};

/// Named colors and alphas for every visual element of the board
pub struct BoardTheme {
    /// Board background
    pub board_bg: Color32,
    /// Grid line and star point color
    pub grid_line: Color32,
    /// Black stone fill
    pub black_stone: Color32,
    /// White stone fill
    pub white_stone: Color32,
    /// Stone outline
    pub stone_border: Color32,
    /// Marker color on empty intersections and white stones
    pub marker: Color32,
    /// Marker color on black stones
    pub marker_on_black: Color32,
    /// Selection region fill
    pub selection_fill: Color32,
    /// Selection region border
    pub selection_border: Color32,
    /// Overlay drawn on dimmed cells
    pub dimmed_veil: Color32,
    /// Territory tint for the first player
    pub paint_black: Color32,
    /// Territory tint for the second player
    pub paint_white: Color32,
    /// Base heat color; alpha scales with strength
    pub heat: Color32,
    /// Coordinate label text
    pub coord_text: Color32,
    /// Veil drawn over the whole board while busy
    pub busy_veil: Color32,
}

impl Default for BoardTheme {
    fn default() -> Self {
        Self {
            board_bg: Color32::from_gray(240),
            grid_line: Color32::BLACK,
            black_stone: Color32::BLACK,
            white_stone: Color32::WHITE,
            stone_border: Color32::BLACK,
            marker: Color32::BLACK,
            marker_on_black: Color32::WHITE,
            selection_fill: Color32::from_rgba_unmultiplied(220, 38, 38, 40),
            selection_border: Color32::from_rgb(220, 38, 38),
            dimmed_veil: Color32::from_rgba_unmultiplied(240, 240, 240, 160),
            paint_black: Color32::from_rgba_unmultiplied(0, 0, 0, 70),
            paint_white: Color32::from_rgba_unmultiplied(255, 255, 255, 110),
            heat: Color32::from_rgb(220, 38, 38),
            coord_text: Color32::from_gray(100),
            busy_veil: Color32::from_rgba_unmultiplied(255, 255, 255, 140),
        }
    }
}

impl BoardTheme {
    /// Fill color for a stone
    pub fn stone_color(&self, color: Color) -> Color32 {
        match color {
            Color::Black => self.black_stone,
            Color::White => self.white_stone,
        }
    }

    /// Marker color against the given occupancy
    pub fn marker_color(&self, stone: Option<Color>) -> Color32 {
        match stone {
            Some(Color::Black) => self.marker_on_black,
            _ => self.marker,
        }
    }

    /// Translucent fill for a ghost stone
    pub fn ghost_color(&self, ghost: &GhostStone) -> Color32 {
        let alpha: u8 = if ghost.faint { 40 } else { 80 };
        let base = match ghost.kind {
            Some(GhostKind::Good) => Color32::from_rgb(34, 197, 94),
            Some(GhostKind::Interesting) => Color32::from_rgb(59, 130, 246),
            Some(GhostKind::Doubtful) => Color32::from_rgb(234, 179, 8),
            Some(GhostKind::Bad) => Color32::from_rgb(220, 38, 38),
            None => match ghost.color {
                Color::Black => Color32::from_rgb(10, 10, 10),
                Color::White => Color32::from_rgb(245, 245, 245),
            },
        };
        Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), alpha)
    }

    /// Heat indicator color; strength scales the alpha
    pub fn heat_color(&self, strength: f32) -> Color32 {
        let strength = strength.clamp(0.0, 1.0);
        let alpha = (strength * 180.0) as u8;
        Color32::from_rgba_unmultiplied(self.heat.r(), self.heat.g(), self.heat.b(), alpha)
    }

    /// Territory paint color; sign selects the player, magnitude the alpha
    pub fn paint_color(&self, paint: f32) -> Option<Color32> {
        if paint == 0.0 {
            return None;
        }
        let base = if paint > 0.0 {
            self.paint_black
        } else {
            self.paint_white
        };
        let intensity = paint.abs().clamp(0.0, 1.0);
        Some(Color32::from_rgba_unmultiplied(
            base.r(),
            base.g(),
            base.b(),
            (base.a() as f32 * intensity) as u8,
        ))
    }
}

/// Global default theme instance
pub fn default_theme() -> &'static BoardTheme {
    static THEME: std::sync::OnceLock<BoardTheme> = std::sync::OnceLock::new();
    THEME.get_or_init(BoardTheme::default)
}
