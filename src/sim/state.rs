//! Game state and core simulation types
//!
//! Everything a run needs to be replayed deterministically lives here; the
//! event queue is the only field excluded from serialization.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::player::Player;
use super::spawn;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Run in progress
    Active,
    /// Run ended on a collision, waiting for a restart command
    GameOver,
}

/// One-shot cues emitted by the simulation, drained by the shell each step.
/// Playback is best-effort: an absent audio collaborator simply never drains
/// them and the simulation is unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player left the ground
    Jump,
    /// Player hit a hazard; the run is over
    Collision,
    /// Score reached the next milestone threshold
    Milestone,
}

/// Ground obstacle sub-variants (base sits on the ground line)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroundSize {
    Small,
    Medium,
    Large,
}

impl GroundSize {
    #[inline]
    pub fn width(&self) -> f32 {
        match self {
            GroundSize::Small => 20.0,
            GroundSize::Medium => 30.0,
            GroundSize::Large => 40.0,
        }
    }

    #[inline]
    pub fn height(&self) -> f32 {
        match self {
            GroundSize::Small => 40.0,
            GroundSize::Medium => 60.0,
            GroundSize::Large => 80.0,
        }
    }
}

/// Hazard variants. Movement and collision only ever look at the bounding
/// box; rendering switches on the tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HazardKind {
    /// Static obstacle standing on the ground line
    Ground { size: GroundSize },
    /// Airborne patroller at a fixed elevation
    Flyer,
}

/// A live hazard scrolling toward the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    /// Top-left corner in field coordinates
    pub pos: Vec2,
    pub kind: HazardKind,
    /// Animation phase, wraps at 10 (two display frames of five steps);
    /// only flyers animate
    pub phase: u8,
}

impl Hazard {
    /// New ground obstacle at the right field edge, base on the ground line
    pub fn ground(size: GroundSize) -> Self {
        Self {
            pos: Vec2::new(FIELD_WIDTH, GROUND_Y - size.height()),
            kind: HazardKind::Ground { size },
            phase: 0,
        }
    }

    /// New flyer at the right field edge with its top edge `elevation`
    /// above the ground line
    pub fn flyer(elevation: f32) -> Self {
        Self {
            pos: Vec2::new(FIELD_WIDTH, GROUND_Y - elevation),
            kind: HazardKind::Flyer,
            phase: 0,
        }
    }

    /// Bounding box dimensions for this variant
    pub fn size(&self) -> Vec2 {
        match self.kind {
            HazardKind::Ground { size } => Vec2::new(size.width(), size.height()),
            HazardKind::Flyer => Vec2::new(FLYER_WIDTH, FLYER_HEIGHT),
        }
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size())
    }

    /// Display frame (0 or 1) derived from the animation phase
    pub fn anim_frame(&self) -> u8 {
        self.phase / 5
    }

    pub(super) fn advance_anim(&mut self) {
        if matches!(self.kind, HazardKind::Flyer) {
            self.phase = (self.phase + 1) % 10;
        }
    }
}

/// Purely cosmetic drifting element (cloud). Disjoint from hazards and
/// never collision-checked; drifts at its own speed, not the scroll speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decoration {
    /// Top-left corner in field coordinates
    pub pos: Vec2,
    pub size: Vec2,
    /// Leftward drift per step
    pub drift: f32,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// RNG driving spawn timing and variant choice; the stream continues
    /// across restarts
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Steps survived this run; advances by exactly 1 per active step
    pub score: u64,
    /// Best score seen across all runs since session start
    pub high_score: u64,
    /// Leftward hazard movement per step; only ever increases within a run
    pub scroll_speed: f32,
    /// Next score threshold for the milestone cue
    pub milestone: u64,
    /// The player character
    pub player: Player,
    /// Live hazards, oldest (leftmost) first
    pub hazards: Vec<Hazard>,
    /// Live decorations, oldest first
    pub decorations: Vec<Decoration>,
    /// Steps since the last hazard spawn
    pub hazard_timer: u32,
    /// Steps the current hazard countdown runs for
    pub hazard_interval: u32,
    /// Steps since the last decoration spawn
    pub decoration_timer: u32,
    /// Steps the current decoration countdown runs for
    pub decoration_interval: u32,
    /// Balance values frozen at session start
    pub tuning: Tuning,
    /// Cues emitted this step (cleared at the start of every tick)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a session with the given balance values
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let hazard_interval = spawn::draw_interval(&mut rng, tuning.hazard_interval);
        let decoration_interval = spawn::draw_interval(&mut rng, tuning.decoration_interval);
        let player = Player::new(&tuning);
        Self {
            seed,
            rng,
            phase: GamePhase::Active,
            score: 0,
            high_score: 0,
            scroll_speed: tuning.base_scroll_speed,
            milestone: tuning.milestone_step,
            player,
            hazards: Vec::new(),
            decorations: Vec::new(),
            hazard_timer: 0,
            hazard_interval,
            decoration_timer: 0,
            decoration_interval,
            tuning,
            events: Vec::new(),
        }
    }

    /// Reinitialize everything for a fresh run. The high score and the RNG
    /// stream survive.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Active;
        self.score = 0;
        self.scroll_speed = self.tuning.base_scroll_speed;
        self.milestone = self.tuning.milestone_step;
        self.player = Player::new(&self.tuning);
        self.hazards.clear();
        self.decorations.clear();
        self.hazard_timer = 0;
        self.hazard_interval = spawn::draw_interval(&mut self.rng, self.tuning.hazard_interval);
        self.decoration_timer = 0;
        self.decoration_interval =
            spawn::draw_interval(&mut self.rng, self.tuning.decoration_interval);
    }
}
