//! Fixed-step simulation tick
//!
//! One call advances the session by exactly one step, in a fixed order:
//! difficulty bookkeeping, hazard/decoration movement, player kinematics,
//! collision. The external frame driver owns all timing.

use super::collision;
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input snapshot for a single step (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump requested
    pub jump: bool,
    /// Duck requested (held)
    pub duck: bool,
    /// Restart after a game over
    pub restart: bool,
    /// Demo mode - the sim drives its own inputs
    pub idle_mode: bool,
}

/// Advance the session by one step
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }
    let input = &input;

    // Terminal state: everything is frozen, only the restart command runs
    if state.phase == GamePhase::GameOver {
        if input.restart {
            log::info!("restarting; high score {}", state.high_score);
            state.reset();
        }
        return;
    }

    // The speed bump reads the score before it advances; the milestone cue
    // reads it after. The two triggers are deliberately distinct.
    if state.score > 0 && state.score % state.tuning.milestone_step == 0 {
        state.scroll_speed += state.tuning.speed_increment;
    }
    state.score += 1;
    if state.score >= state.milestone {
        state.events.push(GameEvent::Milestone);
        state.milestone += state.tuning.milestone_step;
        log::debug!("milestone {} (speed {:.1})", state.score, state.scroll_speed);
    }
    if state.score > state.high_score {
        state.high_score = state.score;
    }

    // Hazards and decorations move before the player reacts
    spawn::tick_hazards(state);
    spawn::tick_decorations(state);

    // Player pose and kinematics
    if state.player.advance(input.jump, input.duck, &state.tuning) {
        state.events.push(GameEvent::Jump);
    }

    // Collision is a separate pass after every position has updated; a hit
    // ends the run and nothing else mutates this step
    if collision::check(&state.player, &state.hazards) {
        state.events.push(GameEvent::Collision);
        state.phase = GamePhase::GameOver;
        log::info!("run over at score {}", state.score);
    }
}

/// Demo pilot: writes the same input booleans a player would and nothing
/// else. Jumps over anything that reaches into the standing box, ducks
/// under high flyers, restarts after a game over.
fn autopilot(state: &GameState, input: &mut TickInput) {
    if state.phase == GamePhase::GameOver {
        input.restart = true;
        return;
    }

    let front = PLAYER_X + PLAYER_WIDTH;
    let standing_top = GROUND_Y - PLAYER_HEIGHT;
    let window = state.scroll_speed * 5.0;

    // Oldest hazards are leftmost, so the first one still ahead is the
    // nearest threat
    for hazard in &state.hazards {
        let hitbox = hazard.hitbox();
        if hitbox.max.x < front {
            continue;
        }
        if hitbox.min.x - front > window {
            break;
        }
        if hitbox.max.y > standing_top {
            input.jump = true;
        } else {
            input.duck = true;
        }
        break;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GroundSize, Hazard};
    use crate::sim::Pose;
    use crate::tuning::Tuning;
    use glam::Vec2;

    /// Tuning that never spawns hazards, for ticking in isolation
    fn quiet_tuning() -> Tuning {
        Tuning {
            hazard_interval: (1_000_000, 1_000_000),
            decoration_interval: (1_000_000, 1_000_000),
            ..Tuning::default()
        }
    }

    fn quiet_state() -> GameState {
        GameState::with_tuning(1, quiet_tuning())
    }

    #[test]
    fn test_score_advances_by_one_per_active_step() {
        let mut state = quiet_state();
        let input = TickInput::default();
        for expected in 1..=57u64 {
            tick(&mut state, &input);
            assert_eq!(state.score, expected);
            assert_eq!(state.high_score, expected);
        }
    }

    #[test]
    fn test_speed_bump_fires_once_per_multiple() {
        let mut state = quiet_state();
        let input = TickInput::default();
        let base = state.tuning.base_scroll_speed;
        let inc = state.tuning.speed_increment;

        for _ in 0..100 {
            tick(&mut state, &input);
        }
        // Score just reached 100; the bump lands on the next step
        assert_eq!(state.score, 100);
        assert!((state.scroll_speed - base).abs() < 1e-5);

        tick(&mut state, &input);
        assert!((state.scroll_speed - (base + inc)).abs() < 1e-5);

        // No second bump until 200
        for _ in 0..99 {
            tick(&mut state, &input);
        }
        assert_eq!(state.score, 200);
        assert!((state.scroll_speed - (base + inc)).abs() < 1e-5);
        tick(&mut state, &input);
        assert!((state.scroll_speed - (base + 2.0 * inc)).abs() < 1e-5);
    }

    #[test]
    fn test_milestone_cue_fires_at_each_hundred() {
        let mut state = quiet_state();
        let input = TickInput::default();

        let mut milestone_steps = Vec::new();
        for step in 1..=250u64 {
            tick(&mut state, &input);
            if state.events.contains(&GameEvent::Milestone) {
                milestone_steps.push(step);
                assert_eq!(
                    state.events.iter().filter(|&&e| e == GameEvent::Milestone).count(),
                    1
                );
            }
        }
        assert_eq!(milestone_steps, vec![100, 200]);
    }

    #[test]
    fn test_jump_event_fires_once_per_takeoff() {
        let mut state = quiet_state();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };

        tick(&mut state, &jump);
        assert!(state.events.contains(&GameEvent::Jump));
        assert_eq!(state.player.pose, Pose::Jumping);

        // Holding the key mid-air emits nothing further
        tick(&mut state, &jump);
        assert!(!state.events.contains(&GameEvent::Jump));
    }

    #[test]
    fn test_collision_ends_the_run() {
        let mut state = quiet_state();
        let mut hazard = Hazard::ground(GroundSize::Medium);
        hazard.pos.x = PLAYER_X + PLAYER_WIDTH + state.scroll_speed - 1.0;
        state.hazards.push(hazard);

        let input = TickInput::default();
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::Collision));
        let score_at_death = state.score;
        let hazard_x = state.hazards[0].pos.x;

        // Everything is frozen until a restart
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.is_empty());
        assert_eq!(state.score, score_at_death);
        assert_eq!(state.hazards[0].pos.x, hazard_x);
    }

    #[test]
    fn test_restart_only_works_after_game_over() {
        let mut state = quiet_state();
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };

        // Mid-run the restart command is ignored
        tick(&mut state, &restart);
        tick(&mut state, &restart);
        assert_eq!(state.score, 2);
        assert_eq!(state.phase, GamePhase::Active);
    }

    #[test]
    fn test_restart_restores_initial_values() {
        let mut state = quiet_state();
        let input = TickInput::default();
        for _ in 0..150 {
            tick(&mut state, &input);
        }
        let high = state.high_score;
        assert_eq!(high, 150);

        let mut hazard = Hazard::ground(GroundSize::Large);
        hazard.pos = Vec2::new(PLAYER_X, GROUND_Y - 80.0);
        state.hazards.push(hazard);
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::GameOver);

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart);

        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.score, 0);
        assert_eq!(state.scroll_speed, state.tuning.base_scroll_speed);
        assert_eq!(state.milestone, state.tuning.milestone_step);
        assert!(state.hazards.is_empty());
        assert!(state.decorations.is_empty());
        assert_eq!(state.player.pose, Pose::Running);
        assert_eq!(state.player.y, GROUND_Y - PLAYER_HEIGHT);
        // High score survives: max of the pre-reset high and the final score
        assert_eq!(state.high_score, high.max(151));
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(424242);
        let mut b = GameState::new(424242);

        let script = |step: u64| TickInput {
            jump: step % 37 == 0,
            duck: (step / 10) % 4 == 1,
            ..Default::default()
        };

        for step in 0..600u64 {
            let input = script(step);
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        assert_eq!(a.score, b.score);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.hazards.len(), b.hazards.len());
        assert_eq!(a.player.y, b.player.y);
        assert_eq!(a.player.pose, b.player.pose);
        assert_eq!(a.scroll_speed, b.scroll_speed);
    }

    #[test]
    fn test_autopilot_clears_the_first_hazard() {
        let mut state = GameState::with_tuning(
            7,
            Tuning {
                hazard_interval: (40, 40),
                ..quiet_tuning()
            },
        );
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };

        // Enough steps for the first hazard to reach and pass the player
        for _ in 0..120 {
            tick(&mut state, &input);
        }
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.score, 120);
    }
}
