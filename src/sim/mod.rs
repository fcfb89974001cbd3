//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per `tick` call, no internal timing
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, check};
pub use player::{Player, Pose};
pub use state::{
    Decoration, GameEvent, GamePhase, GameState, GroundSize, Hazard, HazardKind,
};
pub use tick::{TickInput, tick};
