// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sparse overlay maps: markers, ghost stones, paint and heat.
//!
//! Overlays are grids congruent in shape with the board, but callers
//! routinely supply partial data (a handful of markers, heat for a few
//! candidate moves). Lookups are therefore lenient: a vertex with no
//! entry, or one outside the board, simply has no overlay.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Color, Vertex};

/// Marker shapes drawn on top of an intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerKind {
    Circle,
    Cross,
    Triangle,
    Square,
    Point,
    Label,
    Loader,
}

/// A marker annotation for one vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub kind: MarkerKind,
    /// Text for [`MarkerKind::Label`]; ignored by the other kinds
    pub label: Option<String>,
}

impl Marker {
    pub fn new(kind: MarkerKind) -> Self {
        Self { kind, label: None }
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self {
            kind: MarkerKind::Label,
            label: Some(text.into()),
        }
    }
}

/// Annotation quality attached to a ghost stone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GhostKind {
    Good,
    Interesting,
    Doubtful,
    Bad,
}

/// A translucent suggestion stone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GhostStone {
    pub color: Color,
    pub kind: Option<GhostKind>,
    /// Render extra-faint (e.g. low-confidence suggestions)
    pub faint: bool,
}

impl GhostStone {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            kind: None,
            faint: false,
        }
    }
}

/// Move-suggestion heat for one vertex
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heat {
    /// Normalized strength in `[0, 1]`
    pub strength: f32,
    /// Optional short label (win rate, rank number)
    pub label: Option<String>,
}

impl Heat {
    pub fn new(strength: f32) -> Self {
        Self {
            strength: strength.clamp(0.0, 1.0),
            label: None,
        }
    }
}

/// Sparse per-vertex overlay data of type `T`.
///
/// Shape mismatches with the board are tolerated by design: entries
/// outside the board are never looked up, and vertices without entries
/// read as "no overlay".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayMap<T> {
    entries: HashMap<Vertex, T>,
}

impl<T> Default for OverlayMap<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> OverlayMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from row-major rows with `None` meaning "no overlay".
    ///
    /// Rows may be ragged or differ from the board's shape; extra cells
    /// are kept but ignored at render time.
    pub fn from_rows(rows: Vec<Vec<Option<T>>>) -> Self {
        let mut map = Self::new();
        for (y, cols) in rows.into_iter().enumerate() {
            for (x, cell) in cols.into_iter().enumerate() {
                if x > u16::MAX as usize || y > u16::MAX as usize {
                    continue;
                }
                if let Some(value) = cell {
                    map.insert(Vertex::new(x as u16, y as u16), value);
                }
            }
        }
        map
    }

    pub fn insert(&mut self, vertex: Vertex, value: T) {
        self.entries.insert(vertex, value);
    }

    pub fn get(&self, vertex: Vertex) -> Option<&T> {
        self.entries.get(&vertex)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vertex, &T)> {
        self.entries.iter().map(|(v, t)| (*v, t))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> FromIterator<(Vertex, T)> for OverlayMap<T> {
    fn from_iter<I: IntoIterator<Item = (Vertex, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Marker overlay grid
pub type MarkerMap = OverlayMap<Marker>;
/// Ghost-stone overlay grid
pub type GhostMap = OverlayMap<GhostStone>;
/// Territory paint grid; values in `[-1, 1]`, sign selects the player tint
pub type PaintMap = OverlayMap<f32>;
/// Heat overlay grid
pub type HeatOverlay = OverlayMap<Heat>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_keeps_only_present_cells() {
        let map: MarkerMap = OverlayMap::from_rows(vec![
            vec![None, Some(Marker::new(MarkerKind::Circle))],
            vec![Some(Marker::label("A")), None],
        ]);
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get(Vertex::new(1, 0)),
            Some(&Marker::new(MarkerKind::Circle))
        );
        assert!(map.get(Vertex::new(0, 0)).is_none());
    }

    #[test]
    fn heat_strength_is_clamped() {
        assert_eq!(Heat::new(1.5).strength, 1.0);
        assert_eq!(Heat::new(-0.5).strength, 0.0);
    }
}
