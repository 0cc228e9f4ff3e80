//! Collision detection and response
//!
//! Runs after motion integration, in a fixed order: walls, then ball pairs,
//! then the shot, then player contact. Wall resolution is clamp-and-reflect;
//! ball pairs use an equal-mass impulse along the center normal.

use glam::Vec2;

use super::state::{GamePhase, GameState, SizeClass};

/// One resolution pass over the whole playfield.
pub fn resolve(state: &mut GameState) {
    resolve_walls(state);
    resolve_ball_pairs(state);
    resolve_shot_hits(state);
    resolve_player_contact(state);
}

/// Clamp-and-reflect every active ball against the playfield bounds.
///
/// Floor and side walls reflect with restitution and clamp the ball flush
/// to the wall face so it cannot sink in. Ceiling contact intentionally
/// gets no response; gravity brings the ball back down.
pub fn resolve_walls(state: &mut GameState) {
    let restitution = state.tuning.restitution;
    let walls = state.walls.clone();

    for ball in state.balls.iter_mut().filter(|b| b.active) {
        let side = ball.class.side();
        let rect = ball.rect();

        if rect.intersects(&walls.floor) {
            ball.vel.y = -ball.vel.y * restitution;
            ball.pos.y = walls.floor.y - side;
        }
        if rect.intersects(&walls.left) {
            ball.vel.x = -ball.vel.x * restitution;
            ball.pos.x = walls.left.right();
        }
        if rect.intersects(&walls.right) {
            ball.vel.x = -ball.vel.x * restitution;
            ball.pos.x = walls.right.x - side;
        }
        if rect.intersects(&walls.ceiling) {
            // no response
        }
    }
}

/// Impulse-based elastic resolution for every overlapping active pair.
///
/// Equal masses: each ball takes half the `(1 + restitution)` impulse along
/// the center normal, and half the penetration depth of positional
/// separation. Pairs already separating are skipped.
pub fn resolve_ball_pairs(state: &mut GameState) {
    let restitution = state.tuning.restitution;
    let count = state.balls.len();

    for i in 0..count {
        for j in (i + 1)..count {
            let (head, tail) = state.balls.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];
            if !a.active || !b.active {
                continue;
            }
            if !a.rect().intersects(&b.rect()) {
                continue;
            }

            let delta = b.center() - a.center();
            let dist = delta.length();
            let normal = if dist > f32::EPSILON {
                delta / dist
            } else {
                // coincident centers; pick an arbitrary axis
                Vec2::X
            };

            // Skip if the pair is already separating
            let relative = b.vel - a.vel;
            let closing = relative.dot(normal);
            if closing >= 0.0 {
                continue;
            }

            let impulse = -(1.0 + restitution) * closing / 2.0;
            a.vel -= normal * impulse;
            b.vel += normal * impulse;

            // Push the pair apart so the overlap is gone this tick
            let threshold = a.class.half_extent() + b.class.half_extent();
            let penetration = (threshold - dist).max(0.0);
            a.pos -= normal * (penetration / 2.0);
            b.pos += normal * (penetration / 2.0);
        }
    }
}

/// Shot-vs-ball hit detection and the ball-splitting lifecycle.
///
/// The trail rect is tested against every active ball in one pass, so a
/// shot overlapping two balls in the same tick hits both. A large ball is
/// replaced by two small balls at its last rect position; a small ball is
/// simply deactivated. Any hit consumes the shot and re-arms it.
pub fn resolve_shot_hits(state: &mut GameState) {
    if !state.shot.active {
        return;
    }
    let trail = state.shot.rect();

    let mut split_points: Vec<Vec2> = Vec::new();
    let mut hit_any = false;

    for ball in state.balls.iter_mut().filter(|b| b.active) {
        if !trail.intersects(&ball.rect()) {
            continue;
        }
        hit_any = true;
        match ball.class {
            SizeClass::Large => {
                let at = ball.pos;
                ball.deactivate();
                split_points.push(at);
            }
            SizeClass::Small => {
                // terminal, no further split
                ball.deactivate();
            }
        }
    }

    for at in split_points {
        log::debug!("large ball popped at {at}, splitting");
        state.spawn_small_pair(at);
    }

    if hit_any {
        state.shot.reset();
    }
}

/// Ball contact ends the round: the player is flagged and the session
/// drops into game over.
pub fn resolve_player_contact(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    let player_rect = state.player.rect();
    let hit = state
        .balls
        .iter()
        .filter(|b| b.active)
        .any(|b| b.rect().intersects(&player_rect));
    if hit {
        log::info!("player hit at tick {}", state.time_ticks);
        state.player.collided = true;
        state.phase = GamePhase::GameOver;
    }
}
