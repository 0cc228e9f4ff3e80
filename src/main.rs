//! Chungus Blast entry point
//!
//! Headless demo loop: no window, no textures. A small built-in pilot plays
//! the round so the sim can be exercised from the terminal; a real frontend
//! would swap the pilot for key polling and feed the draw list to a renderer.
//!
//! Usage: `chungus-blast [seed] [max_ticks]`

use std::path::Path;
use std::time::Duration;

use chungus_blast::Tuning;
use chungus_blast::consts::*;
use chungus_blast::sim::{GamePhase, GameState, SpriteAnimation, TickInput, draw_list, tick};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(wall_clock_seed);
    let max_ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2000);

    let tuning = Tuning::load(Path::new("tuning.json"));
    let mut state = GameState::with_tuning(seed, tuning);
    let mut anim = SpriteAnimation::default();
    log::info!("demo run: seed {seed}, up to {max_ticks} ticks");

    let mut rounds_lost: u32 = 0;
    for _ in 0..max_ticks {
        let was_playing = state.phase == GamePhase::Playing;
        let input = pilot(&state);
        tick(&mut state, &input);
        anim.advance();

        let cmds = draw_list(&state, &anim);
        if state.time_ticks % 20 == 0 {
            log::info!(
                "tick {}: {} balls in play, shot {}, {} draw commands",
                state.time_ticks,
                state.active_ball_count(),
                if state.shot.active { "rising" } else { "idle" },
                cmds.len(),
            );
        }

        if was_playing && state.phase == GamePhase::GameOver {
            rounds_lost += 1;
            log::info!("game over at tick {} (round {rounds_lost})", state.time_ticks);
            if rounds_lost >= 3 {
                break;
            }
        }
        if state.phase == GamePhase::Playing && state.active_ball_count() == 0 {
            log::info!("playfield cleared at tick {}", state.time_ticks);
            break;
        }

        std::thread::sleep(Duration::from_secs_f32(SIM_DT));
    }

    log::info!(
        "demo finished: {} ticks, {} balls left",
        state.time_ticks,
        state.active_ball_count()
    );
}

/// Seed from the wall clock when none is given on the command line
fn wall_clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Minimal autoplay: dodge the nearest low ball, otherwise line up under a
/// ball and fire.
fn pilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    if state.phase == GamePhase::GameOver {
        input.restart = true;
        return input;
    }

    let player_x = state.player.pos.x + PLAYER_WIDTH / 2.0;
    let nearest = state
        .balls
        .iter()
        .filter(|b| b.active)
        .min_by(|a, b| {
            let da = (a.center().x - player_x).abs();
            let db = (b.center().x - player_x).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(ball) = nearest else {
        return input;
    };
    let dx = ball.center().x - player_x;
    let ball_low = ball.rect().bottom() > SCREEN_HEIGHT * 0.6;

    if ball_low && dx.abs() < 180.0 {
        // too close, back off
        if dx > 0.0 {
            input.left = true;
        } else {
            input.right = true;
        }
    } else if dx.abs() > 20.0 {
        // line the muzzle up under the ball
        if dx > 0.0 {
            input.right = true;
        } else {
            input.left = true;
        }
    } else if state.shot.allowed {
        input.fire = true;
    }

    input
}
