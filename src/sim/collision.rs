//! Axis-aligned collision detection
//!
//! The player's pose-appropriate box is tested against every live hazard
//! box. Overlap is strict: boxes that merely share an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::state::Hazard;

/// An axis-aligned bounding box in field coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build from a top-left corner and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Strict overlap test: touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Test the player against every live hazard, short-circuiting on the
/// first overlap. Pure function of the current geometry; calling it twice
/// on the same snapshot gives the same answer.
pub fn check(player: &Player, hazards: &[Hazard]) -> bool {
    let hitbox = player.hitbox();
    hazards.iter().any(|h| hitbox.overlaps(&h.hitbox()))
}
