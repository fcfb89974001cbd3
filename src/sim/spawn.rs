//! Hazard and decoration spawning, movement and retirement
//!
//! Both collections run the same countdown pattern: a timer counts steps,
//! and when it reaches the current interval one element spawns at the right
//! field edge and a fresh interval is drawn from the tuned range. Removal
//! is a retain pass after all positions have updated, dropping exactly the
//! elements whose right edge has fully left the field.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Decoration, GameState, GroundSize, Hazard};
use crate::consts::*;

/// Decoration size and placement bounds
const DECO_WIDTH: (u32, u32) = (60, 120);
const DECO_HEIGHT: (u32, u32) = (30, 50);
const DECO_TOP: (u32, u32) = (50, 200);

pub(super) fn draw_interval(rng: &mut Pcg32, range: (u32, u32)) -> u32 {
    rng.random_range(range.0..=range.1)
}

/// Advance the hazard countdown, spawn when it elapses, then move every
/// live hazard left by the scroll speed and retire the off-screen ones.
pub(super) fn tick_hazards(state: &mut GameState) {
    state.hazard_timer += 1;
    if state.hazard_timer >= state.hazard_interval {
        let hazard = spawn_hazard(&mut state.rng);
        log::debug!("spawned {:?} (interval {})", hazard.kind, state.hazard_interval);
        state.hazards.push(hazard);
        state.hazard_timer = 0;
        state.hazard_interval = draw_interval(&mut state.rng, state.tuning.hazard_interval);
    }

    for hazard in &mut state.hazards {
        hazard.pos.x -= state.scroll_speed;
        hazard.advance_anim();
    }
    state.hazards.retain(|h| h.pos.x + h.size().x >= 0.0);
}

/// Same countdown pattern for the cosmetic layer; decorations drift at
/// their own speed, independent of the scroll speed.
pub(super) fn tick_decorations(state: &mut GameState) {
    state.decoration_timer += 1;
    if state.decoration_timer >= state.decoration_interval {
        let deco = spawn_decoration(&mut state.rng, state.tuning.decoration_drift);
        state.decorations.push(deco);
        state.decoration_timer = 0;
        state.decoration_interval = draw_interval(&mut state.rng, state.tuning.decoration_interval);
    }

    for deco in &mut state.decorations {
        deco.pos.x -= deco.drift;
    }
    state.decorations.retain(|d| d.pos.x + d.size.x >= 0.0);
}

/// One-third flyers, two-thirds ground obstacles; sub-variant and
/// elevation drawn uniformly.
fn spawn_hazard(rng: &mut Pcg32) -> Hazard {
    if rng.random_range(0..3) == 0 {
        let elevation = FLYER_ELEVATIONS[rng.random_range(0..FLYER_ELEVATIONS.len())];
        Hazard::flyer(elevation)
    } else {
        let size = match rng.random_range(0..3) {
            0 => GroundSize::Small,
            1 => GroundSize::Medium,
            _ => GroundSize::Large,
        };
        Hazard::ground(size)
    }
}

fn spawn_decoration(rng: &mut Pcg32, drift_range: (u32, u32)) -> Decoration {
    let width = rng.random_range(DECO_WIDTH.0..=DECO_WIDTH.1) as f32;
    let height = rng.random_range(DECO_HEIGHT.0..=DECO_HEIGHT.1) as f32;
    let top = rng.random_range(DECO_TOP.0..=DECO_TOP.1) as f32;
    let drift = rng.random_range(drift_range.0..=drift_range.1) as f32;
    Decoration {
        pos: Vec2::new(FIELD_WIDTH, top),
        size: Vec2::new(width, height),
        drift,
    }
}
