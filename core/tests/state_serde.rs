// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serialization round trips for board snapshots.

use goban_core::{BoardState, Color, GhostKind, GhostStone, Range, Vertex};

#[test]
fn board_state_round_trips_through_json() {
    let board = BoardState::new(9, 9)
        .with_stone(Vertex::new(2, 2), Color::Black)
        .with_stone(Vertex::new(6, 6), Color::White);

    let json = serde_json::to_string(&board).unwrap();
    let back: BoardState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
    assert_eq!(back.stone_at(Vertex::new(2, 2)), Some(Color::Black));
}

#[test]
fn range_round_trips_through_json() {
    let range = Range {
        x: (2, 7),
        y: (0, 8),
    };
    let json = serde_json::to_string(&range).unwrap();
    let back: Range = serde_json::from_str(&json).unwrap();
    assert_eq!(back, range);
}

#[test]
fn ghost_stone_round_trips_through_json() {
    let ghost = GhostStone {
        color: Color::White,
        kind: Some(GhostKind::Doubtful),
        faint: true,
    };
    let json = serde_json::to_string(&ghost).unwrap();
    let back: GhostStone = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ghost);
}
