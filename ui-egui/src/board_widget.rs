// SPDX-License-Identifier: MIT OR Apache-2.0

//! Go board widget: paints caller-supplied board state and overlays,
//! and translates pointer input into `(event, vertex)` pairs.

use std::collections::HashSet;
use std::sync::Arc;

use egui::{Color32, FontId, Pos2, Rect, Shape, Stroke, Vec2};
use goban_core::{
    coords, fuzzy_offset, merge_selection, newly_placed, render_cells, BoardState, BoundedSizer,
    Cell, MarkerKind, Overlays, Range, SizerInput, Vertex,
};

use crate::event::BoardEvent;
use crate::props::{BoardProps, BoardResponse};
use crate::stone_animation::{AnimationManager, StoneAnimation};
use crate::theme::{default_theme, BoardTheme};

/// Geometry computed for one frame
#[derive(Debug, Clone, Copy)]
pub struct BoardLayout {
    /// Integer cell size from the bounded sizer
    pub cell_size: u32,
    /// Clipped visible range; `None` when nothing is visible
    pub range: Option<Range>,
    /// Whether the cell size changed since the previous frame
    pub resized: bool,
    /// Whether a coordinate gutter surrounds the grid
    pub show_coordinates: bool,
}

impl BoardLayout {
    fn cell(&self) -> f32 {
        self.cell_size as f32
    }

    fn gutter_cells(&self) -> f32 {
        if self.show_coordinates {
            2.0
        } else {
            0.0
        }
    }

    /// Total size the widget wants to occupy
    pub fn desired_size(&self) -> Vec2 {
        let (cols, rows) = match self.range {
            Some(r) => (r.cols() as f32, r.rows() as f32),
            None => (0.0, 0.0),
        };
        let g = self.gutter_cells();
        Vec2::new((cols + g) * self.cell(), (rows + g) * self.cell())
    }

    /// The sub-rect holding the grid itself, inside any gutters
    pub fn grid_rect(&self, rect: Rect) -> Rect {
        let inset = self.gutter_cells() / 2.0 * self.cell();
        Rect::from_min_size(
            rect.min + Vec2::splat(inset),
            rect.size() - Vec2::splat(2.0 * inset),
        )
    }

    /// Center of a vertex's cell in screen space
    pub fn vertex_to_pos(&self, vertex: Vertex, grid_rect: Rect) -> Option<Pos2> {
        let range = self.range?;
        if !range.contains(vertex) {
            return None;
        }
        let cell = self.cell();
        Some(Pos2::new(
            grid_rect.min.x + ((vertex.x - range.x.0) as f32 + 0.5) * cell,
            grid_rect.min.y + ((vertex.y - range.y.0) as f32 + 0.5) * cell,
        ))
    }

    /// Vertex whose cell contains the screen position, if any
    pub fn pos_to_vertex(&self, pos: Pos2, grid_rect: Rect) -> Option<Vertex> {
        let range = self.range?;
        if !grid_rect.contains(pos) {
            return None;
        }
        let cell = self.cell();
        let col = ((pos.x - grid_rect.min.x) / cell).floor() as u16 + range.x.0;
        let row = ((pos.y - grid_rect.min.y) / cell).floor() as u16 + range.y.0;
        let vertex = Vertex::new(col.min(range.x.1), row.min(range.y.1));
        Some(vertex)
    }
}

/// Raw pointer state for one frame; split out so headless tests can feed
/// synthetic input without an egui context
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Pointer position while hovering the widget
    pub hover: Option<Pos2>,
    /// Pointer position of a click this frame
    pub click: Option<Pos2>,
}

/// Widget for rendering and interacting with a Go board.
///
/// Holds no caller data: per-frame input arrives through [`BoardProps`]
/// and the widget retains only its sizer memo, the previous board
/// identity and in-flight animations.
pub struct BoardWidget {
    /// Bounded sizer with resize-skip memo
    sizer: BoundedSizer,
    /// Animation manager
    animations: AnimationManager,
    /// Board identity from the previous frame (animation contract)
    prev_board: Option<Arc<BoardState>>,
    /// Current hover position
    hover: Option<Vertex>,
}

impl Default for BoardWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardWidget {
    pub fn new() -> Self {
        Self {
            sizer: BoundedSizer::new(),
            animations: AnimationManager::new(),
            prev_board: None,
            hover: None,
        }
    }

    /// Render the board and report this frame's interactions
    pub fn show(&mut self, ui: &mut egui::Ui, props: &BoardProps<'_>) -> BoardResponse {
        let available = ui.available_size();
        let (max_width, max_height) = props.max_size.unwrap_or_else(|| {
            (
                available.x.max(0.0) as u32,
                available.y.max(0.0) as u32,
            )
        });
        let layout = self.layout(props, max_width, max_height);

        for vertex in self.track_placements(props.board, props.animate_placement) {
            if let Some(color) = props.board.stone_at(vertex) {
                self.animations.add(StoneAnimation::new_placement(vertex, color));
            }
        }
        if self.animations.update() {
            ui.ctx().request_repaint();
        }

        let (rect, response) =
            ui.allocate_exact_size(layout.desired_size(), egui::Sense::click());
        let grid_rect = layout.grid_rect(rect);

        if ui.is_rect_visible(rect) {
            self.paint(ui, props, &layout, rect, grid_rect);
        }

        if props.busy {
            self.paint_busy(ui, props, rect);
        }

        let input = FrameInput {
            hover: response.hover_pos(),
            click: if response.clicked() {
                response.interact_pointer_pos()
            } else {
                None
            },
        };
        self.handle_input(props, &layout, grid_rect, input)
    }

    /// Run the bounded sizer and clip the visible range for this frame
    pub fn layout(
        &mut self,
        props: &BoardProps<'_>,
        max_width: u32,
        max_height: u32,
    ) -> BoardLayout {
        let (width, height) = (props.board.width(), props.board.height());
        let range = props
            .range
            .unwrap_or_else(|| Range::full(width, height))
            .clip(width, height);
        let (visible_cols, visible_rows) = match range {
            Some(r) => (r.cols(), r.rows()),
            None => (0, 0),
        };

        let fit = self.sizer.fit(SizerInput {
            max_width,
            max_height,
            max_cell_size: props.max_cell_size,
            visible_cols,
            visible_rows,
            show_coordinates: props.show_coordinates,
        });

        BoardLayout {
            cell_size: fit.cell_size,
            range,
            resized: fit.changed,
            show_coordinates: props.show_coordinates,
        }
    }

    /// Diff the incoming board against the previous frame's identity.
    ///
    /// Returns the vertices to animate: empty when the `Arc` is the same
    /// allocation as last frame (the caller mutated in place, which per
    /// the contract must not animate), or when animation is disabled.
    pub fn track_placements(
        &mut self,
        board: &Arc<BoardState>,
        animate: bool,
    ) -> HashSet<Vertex> {
        let placed = match &self.prev_board {
            Some(prev) if Arc::ptr_eq(prev, board) => HashSet::new(),
            Some(prev) if animate => newly_placed(prev, board),
            _ => HashSet::new(),
        };
        self.prev_board = Some(Arc::clone(board));
        placed
    }

    /// Resolve pointer input to board events.
    ///
    /// Exposed separately from `show` so headless tests can drive it with
    /// synthetic positions. When the board is busy, interaction is
    /// swallowed here; only the resize notification passes through.
    pub fn handle_input(
        &mut self,
        props: &BoardProps<'_>,
        layout: &BoardLayout,
        grid_rect: Rect,
        input: FrameInput,
    ) -> BoardResponse {
        let mut out = BoardResponse::default();

        if layout.resized {
            out.resized = Some(layout.cell_size);
            self.emit(props, BoardEvent::Resized(layout.cell_size));
        }

        let hover_vertex = input.hover.and_then(|p| layout.pos_to_vertex(p, grid_rect));

        if props.busy {
            if input.click.is_some() {
                tracing::debug!("board busy, click suppressed");
            }
            self.hover = hover_vertex;
            return out;
        }

        if hover_vertex != self.hover {
            if let Some(vertex) = hover_vertex {
                self.emit(props, BoardEvent::PointerEntered(vertex));
            }
        }
        self.hover = hover_vertex;
        out.hovered = hover_vertex;

        if let Some(pos) = input.click {
            if let Some(vertex) = layout.pos_to_vertex(pos, grid_rect) {
                tracing::debug!(x = vertex.x, y = vertex.y, "board click detected");
                out.clicked = Some(vertex);
                self.emit(props, BoardEvent::Clicked(vertex));
            }
        }

        out
    }

    fn emit(&self, props: &BoardProps<'_>, event: BoardEvent) {
        if let Some(tx) = props.events {
            let _ = tx.send(event);
        }
    }

    fn theme<'a>(&self, props: &BoardProps<'a>) -> &'a BoardTheme {
        props.theme.unwrap_or(default_theme())
    }

    fn paint(
        &self,
        ui: &mut egui::Ui,
        props: &BoardProps<'_>,
        layout: &BoardLayout,
        rect: Rect,
        grid_rect: Rect,
    ) {
        let painter = ui.painter_at(rect);
        let theme = self.theme(props);

        painter.rect_filled(rect, 0.0, theme.board_bg);

        let Some(range) = layout.range else {
            return;
        };

        let empty = HashSet::new();
        let selected = props.selected.unwrap_or(&empty);
        let dimmed = props.dimmed.unwrap_or(&empty);
        let just_placed = self.animations.vertices();
        let overlays = Overlays {
            markers: props.markers,
            ghosts: props.ghosts,
            paint: props.paint,
            heat: props.heat,
        };
        let cells = render_cells(
            props.board,
            &overlays,
            range,
            selected,
            dimmed,
            &just_placed,
        );

        self.paint_grid(&painter, props, layout, range, grid_rect, theme);
        self.paint_star_points(&painter, props, layout, range, grid_rect, theme);
        if props.show_coordinates {
            self.paint_coordinates(&painter, props, layout, range, rect, grid_rect, theme);
        }
        for cell in &cells {
            self.paint_cell(&painter, props, layout, cell, grid_rect, theme);
        }
        self.paint_selection(&painter, layout, selected, grid_rect, theme);
        for cell in cells.iter().filter(|c| c.dimmed) {
            if let Some(pos) = layout.vertex_to_pos(cell.vertex, grid_rect) {
                let cell_rect = Rect::from_center_size(pos, Vec2::splat(layout.cell()));
                painter.rect_filled(cell_rect, 0.0, theme.dimmed_veil);
            }
        }
        self.paint_animations(&painter, props, layout, grid_rect, theme);
    }

    /// Grid lines across the visible range. Lines extend to the widget
    /// edge on sides where the board continues past the range, hinting
    /// that a sub-range is shown.
    fn paint_grid(
        &self,
        painter: &egui::Painter,
        props: &BoardProps<'_>,
        layout: &BoardLayout,
        range: Range,
        grid_rect: Rect,
        theme: &BoardTheme,
    ) {
        let cell = layout.cell();
        let stroke = Stroke::new(1.0, theme.grid_line);

        let first_cx = grid_rect.min.x + 0.5 * cell;
        let last_cx = grid_rect.min.x + (range.cols() as f32 - 0.5) * cell;
        let first_cy = grid_rect.min.y + 0.5 * cell;
        let last_cy = grid_rect.min.y + (range.rows() as f32 - 0.5) * cell;

        let top = if range.y.0 > 0 { grid_rect.min.y } else { first_cy };
        let bottom = if range.y.1 + 1 < props.board.height() {
            grid_rect.max.y
        } else {
            last_cy
        };
        let left = if range.x.0 > 0 { grid_rect.min.x } else { first_cx };
        let right = if range.x.1 + 1 < props.board.width() {
            grid_rect.max.x
        } else {
            last_cx
        };

        for i in 0..range.cols() {
            let x = grid_rect.min.x + (i as f32 + 0.5) * cell;
            painter.line_segment([Pos2::new(x, top), Pos2::new(x, bottom)], stroke);
        }
        for i in 0..range.rows() {
            let y = grid_rect.min.y + (i as f32 + 0.5) * cell;
            painter.line_segment([Pos2::new(left, y), Pos2::new(right, y)], stroke);
        }
    }

    /// Star points (hoshi) for standard square board sizes
    fn paint_star_points(
        &self,
        painter: &egui::Painter,
        props: &BoardProps<'_>,
        layout: &BoardLayout,
        range: Range,
        grid_rect: Rect,
        theme: &BoardTheme,
    ) {
        let (width, height) = (props.board.width(), props.board.height());
        if width != height {
            return;
        }
        let star_points: Vec<(u16, u16)> = match width {
            19 => vec![
                (3, 3),
                (3, 9),
                (3, 15),
                (9, 3),
                (9, 9),
                (9, 15),
                (15, 3),
                (15, 9),
                (15, 15),
            ],
            13 => vec![(3, 3), (3, 9), (6, 6), (9, 3), (9, 9)],
            9 => vec![(2, 2), (2, 6), (4, 4), (6, 2), (6, 6)],
            _ => vec![],
        };

        for (x, y) in star_points {
            let vertex = Vertex::new(x, y);
            if !range.contains(vertex) {
                continue;
            }
            if let Some(pos) = layout.vertex_to_pos(vertex, grid_rect) {
                painter.circle_filled(pos, (layout.cell() * 0.08).max(2.0), theme.grid_line);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn paint_coordinates(
        &self,
        painter: &egui::Painter,
        props: &BoardProps<'_>,
        layout: &BoardLayout,
        range: Range,
        rect: Rect,
        grid_rect: Rect,
        theme: &BoardTheme,
    ) {
        let cell = layout.cell();
        let font = FontId::proportional((cell * 0.4).clamp(8.0, 16.0));
        let height = props.board.height();

        for i in 0..range.cols() {
            let index = (range.x.0 + i) as usize;
            let label = match props.column_label {
                Some(f) => f(index),
                None => coords::default_column_label(index),
            };
            let x = grid_rect.min.x + (i as f32 + 0.5) * cell;
            for y in [rect.min.y + 0.5 * cell, rect.max.y - 0.5 * cell] {
                painter.text(
                    Pos2::new(x, y),
                    egui::Align2::CENTER_CENTER,
                    &label,
                    font.clone(),
                    theme.coord_text,
                );
            }
        }

        for i in 0..range.rows() {
            let index = (range.y.0 + i) as usize;
            let label = match props.row_label {
                Some(f) => f(index),
                None => coords::default_row_label(index, height),
            };
            let y = grid_rect.min.y + (i as f32 + 0.5) * cell;
            for x in [rect.min.x + 0.5 * cell, rect.max.x - 0.5 * cell] {
                painter.text(
                    Pos2::new(x, y),
                    egui::Align2::CENTER_CENTER,
                    &label,
                    font.clone(),
                    theme.coord_text,
                );
            }
        }
    }

    fn paint_cell(
        &self,
        painter: &egui::Painter,
        props: &BoardProps<'_>,
        layout: &BoardLayout,
        cell: &Cell,
        grid_rect: Rect,
        theme: &BoardTheme,
    ) {
        let Some(center) = layout.vertex_to_pos(cell.vertex, grid_rect) else {
            return;
        };
        let cell_px = layout.cell();
        let stone_radius = cell_px * 0.4;

        // Territory paint sits under everything else in the cell
        if let Some(color) = theme.paint_color(cell.paint) {
            let cell_rect = Rect::from_center_size(center, Vec2::splat(cell_px));
            painter.rect_filled(cell_rect, 0.0, color);
        }

        if let Some(heat) = &cell.heat {
            let radius = stone_radius * heat.strength.sqrt();
            painter.circle_filled(center, radius, theme.heat_color(heat.strength));
            if let Some(label) = &heat.label {
                painter.text(
                    center,
                    egui::Align2::CENTER_CENTER,
                    label,
                    FontId::proportional(cell_px * 0.35),
                    Color32::WHITE,
                );
            }
        }

        if let Some(color) = cell.stone {
            // Stones mid-animation are drawn by the animation pass
            if self.animations.get(cell.vertex).is_none() {
                let pos = self.stone_pos(props, center, cell.vertex, cell_px);
                painter.circle_filled(pos, stone_radius, theme.stone_color(color));
                painter.circle_stroke(pos, stone_radius, Stroke::new(1.0, theme.stone_border));
            }
        } else if let Some(ghost) = &cell.ghost {
            painter.circle_filled(center, stone_radius * 0.8, theme.ghost_color(ghost));
        }

        if let Some(marker) = &cell.marker {
            self.paint_marker(painter, marker.kind, marker.label.as_deref(), center, cell, theme, cell_px);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn paint_marker(
        &self,
        painter: &egui::Painter,
        kind: MarkerKind,
        label: Option<&str>,
        center: Pos2,
        cell: &Cell,
        theme: &BoardTheme,
        cell_px: f32,
    ) {
        let color = theme.marker_color(cell.stone);
        let stroke = Stroke::new(1.5, color);
        let r = cell_px * 0.2;

        match kind {
            MarkerKind::Circle => {
                painter.circle_stroke(center, r, stroke);
            }
            MarkerKind::Cross => {
                let d = Vec2::splat(r * 0.85);
                painter.line_segment([center - d, center + d], stroke);
                painter.line_segment(
                    [center + Vec2::new(-d.x, d.y), center + Vec2::new(d.x, -d.y)],
                    stroke,
                );
            }
            MarkerKind::Triangle => {
                let points = vec![
                    center + Vec2::new(0.0, -r),
                    center + Vec2::new(r * 0.87, r * 0.5),
                    center + Vec2::new(-r * 0.87, r * 0.5),
                ];
                painter.add(Shape::closed_line(points, stroke));
            }
            MarkerKind::Square => {
                let square = Rect::from_center_size(center, Vec2::splat(r * 1.6));
                painter.rect_stroke(square, 0.0, stroke);
            }
            MarkerKind::Point => {
                painter.circle_filled(center, r * 0.5, color);
            }
            MarkerKind::Label => {
                if let Some(text) = label {
                    painter.text(
                        center,
                        egui::Align2::CENTER_CENTER,
                        text,
                        FontId::proportional(cell_px * 0.45),
                        color,
                    );
                }
            }
            MarkerKind::Loader => {
                for dx in [-1.0f32, 0.0, 1.0] {
                    painter.circle_filled(center + Vec2::new(dx * r * 0.7, 0.0), r * 0.2, color);
                }
            }
        }
    }

    /// Merged selection highlight: one filled region with a border along
    /// its outer edges only
    fn paint_selection(
        &self,
        painter: &egui::Painter,
        layout: &BoardLayout,
        selected: &HashSet<Vertex>,
        grid_rect: Rect,
        theme: &BoardTheme,
    ) {
        if selected.is_empty() {
            return;
        }
        let cell = layout.cell();
        let stroke = Stroke::new(2.0, theme.selection_border);

        for region in merge_selection(selected) {
            for (vertex, edges) in &region.members {
                let Some(center) = layout.vertex_to_pos(*vertex, grid_rect) else {
                    continue;
                };
                let cell_rect = Rect::from_center_size(center, Vec2::splat(cell));
                painter.rect_filled(cell_rect, 0.0, theme.selection_fill);

                if edges.north {
                    painter.line_segment(
                        [cell_rect.min, Pos2::new(cell_rect.max.x, cell_rect.min.y)],
                        stroke,
                    );
                }
                if edges.south {
                    painter.line_segment(
                        [Pos2::new(cell_rect.min.x, cell_rect.max.y), cell_rect.max],
                        stroke,
                    );
                }
                if edges.west {
                    painter.line_segment(
                        [cell_rect.min, Pos2::new(cell_rect.min.x, cell_rect.max.y)],
                        stroke,
                    );
                }
                if edges.east {
                    painter.line_segment(
                        [Pos2::new(cell_rect.max.x, cell_rect.min.y), cell_rect.max],
                        stroke,
                    );
                }
            }
        }
    }

    fn paint_animations(
        &self,
        painter: &egui::Painter,
        props: &BoardProps<'_>,
        layout: &BoardLayout,
        grid_rect: Rect,
        theme: &BoardTheme,
    ) {
        let cell_px = layout.cell();
        let stone_radius = cell_px * 0.4;

        for animation in self.animations.animations() {
            let Some(center) = layout.vertex_to_pos(animation.vertex, grid_rect) else {
                continue;
            };
            let base_pos = self.stone_pos(props, center, animation.vertex, cell_px);
            let transform = animation.transform(base_pos);

            if let Some(ripple) = animation.ripple() {
                let ripple_color = match animation.color {
                    goban_core::Color::Black => {
                        Color32::from_rgba_unmultiplied(0, 0, 0, (ripple.opacity * 255.0) as u8)
                    }
                    goban_core::Color::White => Color32::from_rgba_unmultiplied(
                        255,
                        255,
                        255,
                        (ripple.opacity * 255.0) as u8,
                    ),
                };
                painter.circle_stroke(
                    base_pos,
                    stone_radius * ripple.radius_factor,
                    Stroke::new(2.0, ripple_color),
                );
            }

            let base = theme.stone_color(animation.color);
            let stone_color = Color32::from_rgba_unmultiplied(
                base.r(),
                base.g(),
                base.b(),
                (base.a() as f32 * transform.opacity) as u8,
            );
            let radius = stone_radius * transform.scale;
            painter.circle_filled(transform.position, radius, stone_color);
            if transform.opacity > 0.1 {
                painter.circle_stroke(
                    transform.position,
                    radius,
                    Stroke::new(1.0, theme.stone_border.linear_multiply(transform.opacity)),
                );
            }
        }
    }

    fn stone_pos(
        &self,
        props: &BoardProps<'_>,
        center: Pos2,
        vertex: Vertex,
        cell_px: f32,
    ) -> Pos2 {
        if !props.fuzzy_placement {
            return center;
        }
        let jitter = fuzzy_offset(vertex, props.board.width(), props.board.height());
        center + Vec2::new(jitter.dx * cell_px, jitter.dy * cell_px)
    }

    fn paint_busy(&self, ui: &mut egui::Ui, props: &BoardProps<'_>, rect: Rect) {
        let theme = self.theme(props);
        ui.painter_at(rect).rect_filled(rect, 0.0, theme.busy_veil);
        let spinner_size = 28.0;
        ui.put(
            Rect::from_center_size(rect.center(), Vec2::splat(spinner_size)),
            egui::Spinner::new().size(spinner_size),
        );
        ui.ctx().request_repaint();
    }
}
