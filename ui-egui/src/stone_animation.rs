// SPDX-License-Identifier: MIT OR Apache-2.0

//! Placement animation for newly appearing stones.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use egui::{Pos2, Vec2};
use goban_core::{Color as StoneColor, Vertex};

/// Animation state for a single placed stone
#[derive(Clone, Debug)]
pub struct StoneAnimation {
    /// Board vertex of the stone
    pub vertex: Vertex,
    /// Stone color
    pub color: StoneColor,
    /// Animation start time
    pub start_time: Instant,
    /// Animation duration
    pub duration: Duration,
    /// Current animation progress (0.0 to 1.0)
    pub progress: f32,
}

impl StoneAnimation {
    /// Create a new placement animation
    pub fn new_placement(vertex: Vertex, color: StoneColor) -> Self {
        Self {
            vertex,
            color,
            start_time: Instant::now(),
            duration: Duration::from_millis(200),
            progress: 0.0,
        }
    }

    /// Update animation progress, returning true when complete
    pub fn update(&mut self) -> bool {
        let elapsed = self.start_time.elapsed();
        self.progress = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        self.progress >= 1.0
    }

    /// Current drop-and-fade transform
    pub fn transform(&self, base_pos: Pos2) -> AnimationTransform {
        let drop_height = 30.0;
        let y_offset = -drop_height * (1.0 - ease_out_quad(self.progress));

        AnimationTransform {
            position: base_pos + Vec2::new(0.0, y_offset),
            scale: 1.0,
            opacity: ease_in_quad(self.progress.min(0.3) / 0.3),
        }
    }

    /// Expanding ripple during the first part of the drop
    pub fn ripple(&self) -> Option<RippleEffect> {
        if self.progress < 0.6 {
            let ripple_progress = self.progress / 0.6;
            Some(RippleEffect {
                radius_factor: 1.0 + ripple_progress * 0.5,
                opacity: (1.0 - ripple_progress) * 0.3,
            })
        } else {
            None
        }
    }
}

/// Transform values for rendering
#[derive(Clone, Debug)]
pub struct AnimationTransform {
    pub position: Pos2,
    pub scale: f32,
    pub opacity: f32,
}

/// Ripple effect parameters
#[derive(Clone, Debug)]
pub struct RippleEffect {
    pub radius_factor: f32,
    pub opacity: f32,
}

fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

fn ease_in_quad(t: f32) -> f32 {
    t * t
}

/// Animation manager for the board
pub struct AnimationManager {
    /// Active animations
    animations: Vec<StoneAnimation>,
    /// Maximum concurrent animations
    max_animations: usize,
}

impl Default for AnimationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationManager {
    pub fn new() -> Self {
        Self {
            animations: Vec::new(),
            max_animations: 16,
        }
    }

    /// Add a new animation, replacing any older one at the same vertex
    pub fn add(&mut self, animation: StoneAnimation) {
        self.animations.retain(|a| a.vertex != animation.vertex);
        if self.animations.len() >= self.max_animations {
            self.animations.remove(0);
        }
        self.animations.push(animation);
    }

    /// Update all animations, removing completed ones; returns whether
    /// any remain active
    pub fn update(&mut self) -> bool {
        self.animations.retain_mut(|anim| !anim.update());
        self.has_animations()
    }

    /// Animation at a specific vertex, if any
    pub fn get(&self, vertex: Vertex) -> Option<&StoneAnimation> {
        self.animations.iter().find(|a| a.vertex == vertex)
    }

    /// All active animations
    pub fn animations(&self) -> &[StoneAnimation] {
        &self.animations
    }

    /// Vertices with an animation in flight
    pub fn vertices(&self) -> HashSet<Vertex> {
        self.animations.iter().map(|a| a.vertex).collect()
    }

    pub fn clear(&mut self) {
        self.animations.clear();
    }

    pub fn has_animations(&self) -> bool {
        !self.animations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_replaces_same_vertex() {
        let mut mgr = AnimationManager::new();
        mgr.add(StoneAnimation::new_placement(
            Vertex::new(1, 1),
            StoneColor::Black,
        ));
        mgr.add(StoneAnimation::new_placement(
            Vertex::new(1, 1),
            StoneColor::White,
        ));
        assert_eq!(mgr.animations().len(), 1);
        assert_eq!(mgr.get(Vertex::new(1, 1)).unwrap().color, StoneColor::White);
    }

    #[test]
    fn manager_caps_concurrent_animations() {
        let mut mgr = AnimationManager::new();
        for x in 0..32 {
            mgr.add(StoneAnimation::new_placement(
                Vertex::new(x, 0),
                StoneColor::Black,
            ));
        }
        assert!(mgr.animations().len() <= 16);
    }
}
