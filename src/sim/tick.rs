//! Fixed timestep simulation tick
//!
//! One call advances the session one step: input, shot lifecycle, motion
//! integration, collision resolution. Collaborators snapshot key state into
//! a `TickInput` and clear the one-shot flags after each call.

use crate::consts::*;

use super::collision;
use super::motion;
use super::state::{GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move left (held)
    pub left: bool,
    /// Move right (held)
    pub right: bool,
    /// Fire the shot (edge-triggered)
    pub fire: bool,
    /// Restart after game over (edge-triggered)
    pub restart: bool,
    /// Force the round to end (edge-triggered)
    pub end_round: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    match state.phase {
        GamePhase::Playing => {
            move_player(state, input);

            if input.end_round {
                log::info!("round ended by input at tick {}", state.time_ticks);
                state.player.collided = true;
                state.phase = GamePhase::GameOver;
                return;
            }

            // Firing is gated on the single-shot rule and on the player
            // still being in play
            if input.fire && state.shot.allowed && !state.player.collided {
                let muzzle = state.player.pos + SHOT_MUZZLE_OFFSET;
                state.shot.fire(muzzle);
            }
            advance_shot(state);

            motion::integrate(state);
            collision::resolve(state);
        }

        GamePhase::GameOver => {
            // The collided player can still shuffle around at throttled
            // speed; firing stays suppressed
            move_player(state, input);

            // Cosmetic end-sprite rise, consumed by the render layer
            state.end_rise = (state.end_rise + END_RISE_STEP).min(SCREEN_HEIGHT);

            if input.restart {
                state.restart();
            }
        }
    }
}

/// Horizontal player movement, clamped to the playfield interior.
fn move_player(state: &mut GameState, input: &TickInput) {
    let speed = state.player.speed(&state.tuning);
    let mut dx = 0.0;
    if input.left {
        dx -= speed;
    }
    if input.right {
        dx += speed;
    }
    state.player.vel.x = dx;
    state.player.pos.x = (state.player.pos.x + dx).clamp(
        state.walls.left.right(),
        state.walls.right.x - PLAYER_WIDTH,
    );
}

/// Shot lifecycle: the trail grows by a fixed increment per tick and the
/// shot re-arms once it outgrows the travel limit.
fn advance_shot(state: &mut GameState) {
    if !state.shot.active {
        return;
    }
    state.shot.height += state.tuning.shot_rise;
    if state.shot.height > SHOT_TRAVEL_LIMIT {
        state.shot.reset();
    }
}
