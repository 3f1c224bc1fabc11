// SPDX-License-Identifier: MIT OR Apache-2.0

//! Goban UI - declarative Go board widget for egui
//!
//! The widget is a thin view layer: each frame the caller hands it a
//! [`BoardProps`] describing the board state, overlays and flags, and the
//! widget paints it and reports interactions back as `(event, vertex)`
//! pairs. It keeps no authority over caller data; the only retained state
//! is the memoized cell size, the previous board identity (for the
//! placement-animation contract) and in-flight animations.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board_widget;
pub mod event;
pub mod props;
pub mod stone_animation;
pub mod theme;

pub use board_widget::{BoardLayout, BoardWidget, FrameInput};
pub use event::BoardEvent;
pub use props::{BoardProps, BoardResponse};
pub use theme::{default_theme, BoardTheme};
