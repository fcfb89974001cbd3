//! Data-driven game balance
//!
//! Defaults are the shipped balance; a shell may override any subset
//! from JSON.

use serde::{Deserialize, Serialize};

/// Balance values frozen into a session at creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Scroll speed at the start of a run (field units per step)
    pub base_scroll_speed: f32,
    /// Added to the scroll speed at every score multiple of `milestone_step`
    pub speed_increment: f32,
    /// Score interval between speed bumps and milestone cues
    pub milestone_step: u64,
    /// Upward velocity granted at takeoff
    pub jump_strength: f32,
    /// Velocity lost per airborne step
    pub gravity_decay: f32,
    /// Steps between hazard spawns, drawn uniformly (inclusive bounds)
    pub hazard_interval: (u32, u32),
    /// Steps between decoration spawns, drawn uniformly (inclusive bounds)
    pub decoration_interval: (u32, u32),
    /// Decoration drift per step, drawn uniformly (inclusive bounds)
    pub decoration_drift: (u32, u32),
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_scroll_speed: 10.0,
            speed_increment: 0.1,
            milestone_step: 100,
            jump_strength: 8.5,
            gravity_decay: 0.8,
            hazard_interval: (50, 150),
            decoration_interval: (75, 150),
            decoration_drift: (1, 3),
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
