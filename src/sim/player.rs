//! Player pose state machine and vertical kinematics
//!
//! The player runs in place: the horizontal position is fixed and only the
//! vertical position and pose change. Exactly one pose is active at a time,
//! and a jump outranks a duck outranks running.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::tuning::Tuning;

/// Player pose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pose {
    Running,
    Jumping,
    Ducking,
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Horizontal position, fixed for the whole run
    pub x: f32,
    /// Top of the standing box (y grows downward)
    pub y: f32,
    /// Vertical velocity; held at the jump strength while grounded so a
    /// takeoff can start rising immediately
    pub vel: f32,
    pub pose: Pose,
    /// Run/duck animation phase, wraps at 10 (two frames of five steps)
    pub phase: u8,
}

impl Player {
    /// New player at the ground pose
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: PLAYER_X,
            y: GROUND_Y - PLAYER_HEIGHT,
            vel: tuning.jump_strength,
            pose: Pose::Running,
            phase: 0,
        }
    }

    /// Advance one step: kinematics for the current pose first, then the
    /// input snapshot picks the pose for the next step. Returns true when
    /// this step left the ground.
    pub fn advance(&mut self, jump: bool, duck: bool, tuning: &Tuning) -> bool {
        match self.pose {
            Pose::Jumping => self.step_airborne(tuning),
            Pose::Running | Pose::Ducking => self.step_grounded(),
        }

        if jump && self.pose != Pose::Jumping {
            self.pose = Pose::Jumping;
            self.vel = tuning.jump_strength;
            return true;
        }
        if duck && self.pose != Pose::Jumping {
            self.pose = Pose::Ducking;
        } else if !duck && self.pose == Pose::Ducking {
            self.pose = Pose::Running;
        }
        false
    }

    /// Rise/fall along the jump arc. The velocity decays by a fixed amount
    /// per step; once it has fallen below the negative of the jump strength
    /// the arc is spent and the player lands.
    fn step_airborne(&mut self, tuning: &Tuning) {
        self.y -= self.vel * RISE_SCALE;
        self.vel -= tuning.gravity_decay;
        if self.vel < -tuning.jump_strength {
            self.pose = Pose::Running;
            self.vel = tuning.jump_strength;
            self.y = GROUND_Y - PLAYER_HEIGHT;
        }
    }

    fn step_grounded(&mut self) {
        self.phase = (self.phase + 1) % 10;
    }

    /// Display frame (0 or 1) for the run/duck animation
    pub fn anim_frame(&self) -> u8 {
        self.phase / 5
    }

    pub fn grounded(&self) -> bool {
        self.pose != Pose::Jumping
    }

    /// Pose-appropriate hitbox: the ducking box is wider, shorter and
    /// shifted down so the base stays on the ground line.
    pub fn hitbox(&self) -> Aabb {
        match self.pose {
            Pose::Ducking => Aabb::from_pos_size(
                Vec2::new(self.x, self.y + DUCK_DROP),
                Vec2::new(DUCK_WIDTH, DUCK_HEIGHT),
            ),
            _ => Aabb::from_pos_size(
                Vec2::new(self.x, self.y),
                Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            ),
        }
    }
}
