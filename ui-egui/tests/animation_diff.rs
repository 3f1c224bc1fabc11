// SPDX-License-Identifier: MIT OR Apache-2.0

//! Placement-animation identity contract.
//!
//! Animation is requested by handing the widget a *new* `Arc<BoardState>`;
//! the same allocation, however its contents got there, never animates.

use std::sync::Arc;

use goban_core::{BoardState, Color, Vertex};
use goban_ui_egui::BoardWidget;

#[test]
fn first_frame_never_animates() {
    let mut widget = BoardWidget::new();
    let board = Arc::new(BoardState::new(9, 9).with_stone(Vertex::new(4, 4), Color::Black));

    let placed = widget.track_placements(&board, true);
    assert!(placed.is_empty(), "no previous identity to diff against");
}

#[test]
fn same_identity_suppresses_animation() {
    let mut widget = BoardWidget::new();
    let board = Arc::new(BoardState::new(9, 9));
    widget.track_placements(&board, true);

    // Same allocation on the next frame: the widget must short-circuit on
    // pointer identity without inspecting contents
    let placed = widget.track_placements(&board, true);
    assert!(placed.is_empty());
}

#[test]
fn new_identity_animates_exactly_the_new_stones() {
    let mut widget = BoardWidget::new();
    let before = Arc::new(BoardState::new(9, 9).with_stone(Vertex::new(2, 2), Color::Black));
    widget.track_placements(&before, true);

    let after = Arc::new((*before).clone().with_stone(Vertex::new(6, 3), Color::White));
    let placed = widget.track_placements(&after, true);

    assert_eq!(placed.len(), 1);
    assert!(placed.contains(&Vertex::new(6, 3)));
}

#[test]
fn animation_flag_off_disables_the_diff() {
    let mut widget = BoardWidget::new();
    let before = Arc::new(BoardState::new(9, 9));
    widget.track_placements(&before, false);

    let after = Arc::new((*before).clone().with_stone(Vertex::new(0, 0), Color::Black));
    let placed = widget.track_placements(&after, false);
    assert!(placed.is_empty());
}

#[test]
fn identity_tracking_survives_animation_toggling() {
    let mut widget = BoardWidget::new();
    let a = Arc::new(BoardState::new(9, 9));
    widget.track_placements(&a, false);

    // The previous identity updates even on non-animated frames, so
    // turning animation on afterwards diffs against the latest board
    let b = Arc::new((*a).clone().with_stone(Vertex::new(1, 1), Color::Black));
    widget.track_placements(&b, false);

    let c = Arc::new((*b).clone().with_stone(Vertex::new(2, 2), Color::White));
    let placed = widget.track_placements(&c, true);
    assert_eq!(placed.len(), 1);
    assert!(placed.contains(&Vertex::new(2, 2)));
}
