// SPDX-License-Identifier: MIT OR Apache-2.0

//! Headless widget tests: pointer mapping, busy gating, resize events.

use std::sync::Arc;

use egui::{Pos2, Rect};
use goban_core::{BoardState, Vertex};
use goban_ui_egui::{BoardEvent, BoardProps, BoardWidget, FrameInput};

/// Minimal harness that drives the widget's input path without a window
struct Harness {
    widget: BoardWidget,
    board: Arc<BoardState>,
    events_tx: crossbeam_channel::Sender<BoardEvent>,
    events_rx: crossbeam_channel::Receiver<BoardEvent>,
}

impl Harness {
    fn new_9x9() -> Self {
        let (events_tx, events_rx) = crossbeam_channel::unbounded();
        Self {
            widget: BoardWidget::new(),
            board: Arc::new(BoardState::new(9, 9)),
            events_tx,
            events_rx,
        }
    }

    /// Feed one frame of synthetic pointer input
    fn frame(
        &mut self,
        busy: bool,
        input: FrameInput,
    ) -> goban_ui_egui::BoardResponse {
        let props = BoardProps {
            busy,
            events: Some(&self.events_tx),
            max_size: Some((400, 400)),
            ..BoardProps::new(&self.board)
        };
        let layout = self.widget.layout(&props, 400, 400);
        let rect = Rect::from_min_size(Pos2::ZERO, layout.desired_size());
        let grid_rect = layout.grid_rect(rect);
        self.widget.handle_input(&props, &layout, grid_rect, input)
    }

    fn drained(&self) -> Vec<BoardEvent> {
        self.events_rx.try_iter().collect()
    }

    /// Screen center of a vertex cell for the 9x9 / 400px layout (cell 44)
    fn center_of(vertex: Vertex) -> Pos2 {
        Pos2::new(
            (vertex.x as f32 + 0.5) * 44.0,
            (vertex.y as f32 + 0.5) * 44.0,
        )
    }
}

#[test]
fn click_resolves_to_the_right_vertex() {
    let mut h = Harness::new_9x9();

    let pos = Harness::center_of(Vertex::new(4, 4));
    let response = h.frame(
        false,
        FrameInput {
            hover: Some(pos),
            click: Some(pos),
        },
    );

    assert_eq!(response.clicked, Some(Vertex::new(4, 4)));
    assert_eq!(response.hovered, Some(Vertex::new(4, 4)));
    let events = h.drained();
    assert!(events.contains(&BoardEvent::Clicked(Vertex::new(4, 4))));
    assert!(events.contains(&BoardEvent::PointerEntered(Vertex::new(4, 4))));
}

#[test]
fn clicks_outside_the_grid_are_ignored() {
    let mut h = Harness::new_9x9();

    let response = h.frame(
        false,
        FrameInput {
            hover: None,
            click: Some(Pos2::new(2000.0, 2000.0)),
        },
    );

    assert_eq!(response.clicked, None);
}

#[test]
fn busy_suppresses_every_interaction_callback() {
    let mut h = Harness::new_9x9();
    // Warm the sizer so the busy frame carries no resize event either
    h.frame(false, FrameInput::default());
    h.drained();

    for vertex in [Vertex::new(0, 0), Vertex::new(4, 4), Vertex::new(8, 8)] {
        let pos = Harness::center_of(vertex);
        let response = h.frame(
            true,
            FrameInput {
                hover: Some(pos),
                click: Some(pos),
            },
        );
        assert_eq!(response.clicked, None);
        assert_eq!(response.hovered, None);
    }
    assert!(h.drained().is_empty(), "no events while busy");
}

#[test]
fn interaction_resumes_after_busy_clears() {
    let mut h = Harness::new_9x9();
    let pos = Harness::center_of(Vertex::new(2, 7));

    h.frame(
        true,
        FrameInput {
            hover: Some(pos),
            click: Some(pos),
        },
    );
    let after_busy = h.frame(
        false,
        FrameInput {
            hover: Some(pos),
            click: Some(pos),
        },
    );
    assert_eq!(after_busy.clicked, Some(Vertex::new(2, 7)));
}

#[test]
fn pointer_entered_fires_once_per_vertex() {
    let mut h = Harness::new_9x9();
    let pos = Harness::center_of(Vertex::new(3, 3));

    h.frame(
        false,
        FrameInput {
            hover: Some(pos),
            click: None,
        },
    );
    h.drained();

    // Same vertex again: hovering in place must not re-fire
    h.frame(
        false,
        FrameInput {
            hover: Some(pos + egui::Vec2::new(3.0, 3.0)),
            click: None,
        },
    );
    assert!(h
        .drained()
        .iter()
        .all(|e| !matches!(e, BoardEvent::PointerEntered(_))));
}

#[test]
fn resized_fires_only_when_the_cell_size_changes() {
    let mut h = Harness::new_9x9();

    let first = h.frame(false, FrameInput::default());
    assert_eq!(first.resized, Some(44));

    let second = h.frame(false, FrameInput::default());
    assert_eq!(second.resized, None, "unchanged inputs must not re-notify");

    let events = h.drained();
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, BoardEvent::Resized(_)))
            .count(),
        1
    );
}
