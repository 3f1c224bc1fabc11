// SPDX-License-Identifier: MIT OR Apache-2.0

//! Events forwarded from the board widget to the caller.

use goban_core::Vertex;

/// Interaction and lifecycle events emitted by the widget.
///
/// Every event is also mirrored in the [`BoardResponse`] returned from
/// `show`; the channel form suits callers that route UI events through a
/// message loop.
///
/// [`BoardResponse`]: crate::props::BoardResponse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// The pointer clicked an intersection
    Clicked(Vertex),
    /// The pointer moved onto a new intersection
    PointerEntered(Vertex),
    /// The bounded sizer changed the computed cell size
    Resized(u32),
}
