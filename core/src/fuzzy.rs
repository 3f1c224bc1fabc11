// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic fuzzy stone placement.
//!
//! Real stones never sit perfectly on the intersection; a small offset
//! and rotation per vertex sells the effect. The jitter must be stable
//! across re-renders, so it is derived by hashing the vertex and board
//! dimensions instead of sampling an RNG.

use crate::Vertex;

/// Maximum positional offset, as a fraction of the cell size
const MAX_OFFSET: f32 = 0.06;
/// Maximum rotation in radians (about 3 degrees)
const MAX_ROTATION: f32 = 0.05;

/// Per-vertex placement jitter.
///
/// Offsets are fractions of the cell size; multiply by the computed cell
/// size before painting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jitter {
    pub dx: f32,
    pub dy: f32,
    pub rotation: f32,
}

/// Derive the jitter for a vertex on a board of the given dimensions.
///
/// Pure function of its inputs: the same vertex on the same board always
/// gets the same jitter.
pub fn fuzzy_offset(vertex: Vertex, width: u16, height: u16) -> Jitter {
    let hash = fnv1a(&[vertex.x, vertex.y, width, height]);

    // Three independent 16-bit lanes out of the 64-bit hash
    let dx = lane_to_unit(hash as u16);
    let dy = lane_to_unit((hash >> 16) as u16);
    let rotation = lane_to_unit((hash >> 32) as u16);

    Jitter {
        dx: dx * MAX_OFFSET,
        dy: dy * MAX_OFFSET,
        rotation: rotation * MAX_ROTATION,
    }
}

/// Map a 16-bit lane onto `[-1, 1]`
fn lane_to_unit(lane: u16) -> f32 {
    (lane as f32 / u16::MAX as f32) * 2.0 - 1.0
}

/// FNV-1a over the little-endian bytes of the inputs
fn fnv1a(values: &[u16]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for value in values {
        for byte in value.to_le_bytes() {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(PRIME);
        }
    }
    hash
}
