// SPDX-License-Identifier: MIT OR Apache-2.0

//! Selection-region merging.
//!
//! Adjacent selected vertices are grouped into connected regions so the
//! widget draws one merged highlight per region instead of per-cell
//! boxes. Connectivity is 4-adjacent flood fill over the selected set,
//! iterative to stay safe on large boards.

use std::collections::{HashSet, VecDeque};

use crate::Vertex;

/// Which edges of a member vertex face a non-member.
///
/// Open edges are where the region's border gets drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpenEdges {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

/// One connected group of selected vertices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRegion {
    /// Members with their open edges, sorted row-major
    pub members: Vec<(Vertex, OpenEdges)>,
}

impl SelectionRegion {
    pub fn contains(&self, vertex: Vertex) -> bool {
        self.members.iter().any(|(v, _)| *v == vertex)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Merge a selected-vertex set into connected regions.
///
/// Output order is deterministic: regions appear in row-major order of
/// their first member, members row-major within each region.
pub fn merge_selection(selected: &HashSet<Vertex>) -> Vec<SelectionRegion> {
    let mut seeds: Vec<Vertex> = selected.iter().copied().collect();
    seeds.sort_by_key(|v| (v.y, v.x));

    let mut seen = HashSet::new();
    let mut regions = Vec::new();

    for seed in seeds {
        if seen.contains(&seed) {
            continue;
        }

        // Iterative frontier expansion restricted to the selected set
        let mut queue = VecDeque::from([seed]);
        let mut members = vec![seed];
        seen.insert(seed);

        while let Some(vertex) = queue.pop_front() {
            for neighbor in vertex.neighbors() {
                if selected.contains(&neighbor) && seen.insert(neighbor) {
                    members.push(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }

        members.sort_by_key(|v| (v.y, v.x));
        let members = members
            .into_iter()
            .map(|v| (v, open_edges(v, selected)))
            .collect();
        regions.push(SelectionRegion { members });
    }

    regions
}

fn open_edges(vertex: Vertex, selected: &HashSet<Vertex>) -> OpenEdges {
    let sel = |x: i32, y: i32| {
        (0..=u16::MAX as i32).contains(&x)
            && (0..=u16::MAX as i32).contains(&y)
            && selected.contains(&Vertex::new(x as u16, y as u16))
    };
    let (x, y) = (vertex.x as i32, vertex.y as i32);
    OpenEdges {
        north: !sel(x, y - 1),
        east: !sel(x + 1, y),
        south: !sel(x, y + 1),
        west: !sel(x - 1, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_vertex_has_all_edges_open() {
        let selected = HashSet::from([Vertex::new(3, 3)]);
        let regions = merge_selection(&selected);
        assert_eq!(regions.len(), 1);
        let (_, edges) = regions[0].members[0];
        assert_eq!(
            edges,
            OpenEdges {
                north: true,
                east: true,
                south: true,
                west: true
            }
        );
    }

    #[test]
    fn interior_edges_are_closed() {
        // Horizontal pair: the shared edge is closed on both sides
        let selected = HashSet::from([Vertex::new(3, 3), Vertex::new(4, 3)]);
        let regions = merge_selection(&selected);
        assert_eq!(regions.len(), 1);
        let (left, left_edges) = regions[0].members[0];
        assert_eq!(left, Vertex::new(3, 3));
        assert!(!left_edges.east);
        assert!(left_edges.west);
        let (_, right_edges) = regions[0].members[1];
        assert!(!right_edges.west);
        assert!(right_edges.east);
    }
}
