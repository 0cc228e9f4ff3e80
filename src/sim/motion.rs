//! Fixed-step motion integration
//!
//! Single-step Euler per tick: gravity into velocity, velocity into position,
//! both scaled by the ball's size class. This is only stable because wall
//! resolution clamps penetration every tick; there is no sub-stepping.
//!
//! Inactive balls are frozen in place (an old revision let them drift toward
//! the origin instead; that behavior is not kept).

use super::state::GameState;

/// Advance every active ball by one tick of gravity and velocity.
pub fn integrate(state: &mut GameState) {
    let gravity = state.tuning.gravity;
    for ball in state.balls.iter_mut().filter(|b| b.active) {
        let scale = ball.class.gravity_scale(&state.tuning);
        ball.vel.y += gravity * scale;
        ball.pos += ball.vel * scale;
    }
}
