//! Game state and core simulation types
//!
//! One `GameState` owns every entity in the session. Restart rebuilds the
//! whole thing rather than patching entities in place.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::Tuning;

use super::rect::Rect;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Round ended; waiting for restart input
    GameOver,
}

/// RGBA color, straight alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const WALL_GRAY: Color = Color::rgb(90, 90, 90);
    pub const SHOT_YELLOW: Color = Color::rgb(250, 220, 60);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Random opaque ball color, floored so balls stay visible on black
    pub fn random(rng: &mut Pcg32) -> Self {
        Self {
            r: rng.random_range(30..=255),
            g: rng.random_range(30..=255),
            b: rng.random_range(30..=255),
            a: 255,
        }
    }
}

/// Ball size class - drives side length, gravity scale and the pairwise
/// collision threshold. Large balls split once when hit; small balls are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Large,
    Small,
}

impl SizeClass {
    #[inline]
    pub fn side(&self) -> f32 {
        match self {
            SizeClass::Large => LARGE_BALL_SIDE,
            SizeClass::Small => SMALL_BALL_SIDE,
        }
    }

    /// Half the side length; used as the contact threshold between centers
    #[inline]
    pub fn half_extent(&self) -> f32 {
        self.side() / 2.0
    }

    /// Small balls fall and move at 70% of the computed step
    #[inline]
    pub fn gravity_scale(&self, tuning: &Tuning) -> f32 {
        match self {
            SizeClass::Large => 1.0,
            SizeClass::Small => tuning.small_gravity_scale,
        }
    }
}

/// A ball entity. `pos` is the top-left corner of its bounding rect.
#[derive(Debug, Clone)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub class: SizeClass,
    pub color: Color,
    pub active: bool,
}

impl Ball {
    pub fn rect(&self) -> Rect {
        let side = self.class.side();
        Rect::new(self.pos.x, self.pos.y, side, side)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.class.half_extent())
    }

    /// Park the ball off-playfield. Inactive balls take no part in motion
    /// or collision and occupy no playfield bounding region.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.pos = OFFSCREEN;
        self.vel = Vec2::ZERO;
    }
}

/// The player's shot: a thin trail rectangle growing upward from its origin.
///
/// At most one shot is in flight: `allowed` drops on firing and only comes
/// back once the trail outgrows the travel limit or the shot consumes a hit.
#[derive(Debug, Clone)]
pub struct Shot {
    /// Muzzle point captured at fire time
    pub origin: Vec2,
    /// Current trail height above the origin
    pub height: f32,
    pub active: bool,
    pub allowed: bool,
}

impl Default for Shot {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            height: 0.0,
            active: false,
            allowed: true,
        }
    }
}

impl Shot {
    /// Arm the shot from the given muzzle point
    pub fn fire(&mut self, origin: Vec2) {
        self.origin = origin;
        self.height = 0.0;
        self.active = true;
        self.allowed = false;
    }

    /// Back to idle, ready to re-fire
    pub fn reset(&mut self) {
        self.active = false;
        self.height = 0.0;
        self.allowed = true;
    }

    /// Trail rect from the origin up to the current height
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.origin.x - SHOT_WIDTH / 2.0,
            self.origin.y - self.height,
            SHOT_WIDTH,
            self.height,
        )
    }
}

/// The player character. `pos` is the top-left corner of its bounding rect;
/// animation frame bookkeeping lives in the render layer, not here.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Set on ball contact; throttles movement and suppresses firing
    pub collided: bool,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Horizontal speed per tick, throttled after a collision
    pub fn speed(&self, tuning: &Tuning) -> f32 {
        if self.collided {
            tuning.player_speed * tuning.collided_speed_scale
        } else {
            tuning.player_speed
        }
    }
}

/// The four static playfield bounds.
#[derive(Debug, Clone)]
pub struct Walls {
    pub floor: Rect,
    pub ceiling: Rect,
    pub left: Rect,
    pub right: Rect,
}

impl Default for Walls {
    fn default() -> Self {
        Self {
            floor: Rect::new(0.0, SCREEN_HEIGHT - WALL_THICKNESS, SCREEN_WIDTH, WALL_THICKNESS),
            ceiling: Rect::new(0.0, 0.0, SCREEN_WIDTH, WALL_THICKNESS),
            left: Rect::new(
                0.0,
                -WALL_HEADROOM,
                WALL_THICKNESS,
                SCREEN_HEIGHT + WALL_HEADROOM,
            ),
            right: Rect::new(
                SCREEN_WIDTH - WALL_THICKNESS,
                -WALL_HEADROOM,
                WALL_THICKNESS,
                SCREEN_HEIGHT + WALL_HEADROOM,
            ),
        }
    }
}

/// Complete game session state (deterministic given seed + inputs)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// All randomness flows through this
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub shot: Shot,
    /// Ball pool; iterate by population, never past `MAX_BALLS`
    pub balls: Vec<Ball>,
    pub walls: Walls,
    /// Cosmetic end-sprite rise during game over
    pub end_rise: f32,
    pub tuning: Tuning,
    next_id: u32,
}

impl GameState {
    /// Create a new session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new session with the given balance numbers
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let player_x = SCREEN_WIDTH / 2.0 - PLAYER_WIDTH / 2.0;
        let player_y = SCREEN_HEIGHT - WALL_THICKNESS - PLAYER_HEIGHT;

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: GamePhase::Playing,
            player: Player {
                pos: Vec2::new(player_x, player_y),
                vel: Vec2::ZERO,
                collided: false,
            },
            shot: Shot::default(),
            balls: Vec::with_capacity(MAX_BALLS),
            walls: Walls::default(),
            end_rise: 0.0,
            tuning,
            next_id: 1,
        };

        state.spawn_starting_balls();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Number of balls currently in play
    pub fn active_ball_count(&self) -> usize {
        self.balls.iter().filter(|b| b.active).count()
    }

    /// Seed the playfield with the starting large-ball population.
    ///
    /// Each ball gets its own horizontal slot with random jitter so the
    /// starting layout is randomized but never self-overlapping.
    fn spawn_starting_balls(&mut self) {
        let count = self.tuning.start_balls.min(MAX_BALLS as u32).max(1);
        let inner_left = WALL_THICKNESS;
        let inner_width = SCREEN_WIDTH - 2.0 * WALL_THICKNESS;
        let slot_width = inner_width / count as f32;
        let jitter_span = (slot_width - LARGE_BALL_SIDE).max(0.0);

        for i in 0..count {
            let id = self.next_entity_id();
            let jitter = self.rng.random_range(0.0..=jitter_span);
            let x = inner_left + i as f32 * slot_width + jitter;
            let y = self.rng.random_range(60.0..=250.0);
            let vel = self.random_spawn_velocity();
            let color = Color::random(&mut self.rng);
            self.balls.push(Ball {
                id,
                pos: Vec2::new(x, y),
                vel,
                class: SizeClass::Large,
                color,
                active: true,
            });
        }
    }

    /// Independently randomized spawn velocity: horizontal either way,
    /// vertical flat-to-upward.
    pub fn random_spawn_velocity(&mut self) -> Vec2 {
        let vx = self
            .rng
            .random_range(-self.tuning.spawn_speed_x..=self.tuning.spawn_speed_x);
        let vy = self.rng.random_range(-self.tuning.spawn_speed_up..=0.0);
        Vec2::new(vx, vy)
    }

    /// Add a ball to the pool, reusing an inactive slot when one exists.
    /// Refused (returns false) once the active population is at capacity.
    pub fn spawn_ball(&mut self, pos: Vec2, vel: Vec2, class: SizeClass, color: Color) -> bool {
        if self.active_ball_count() >= MAX_BALLS {
            log::warn!("ball pool full, dropping spawn at {pos}");
            return false;
        }
        let id = self.next_entity_id();
        let ball = Ball {
            id,
            pos,
            vel,
            class,
            color,
            active: true,
        };
        if let Some(slot) = self.balls.iter_mut().find(|b| !b.active) {
            *slot = ball;
        } else if self.balls.len() < MAX_BALLS {
            self.balls.push(ball);
        } else {
            return false;
        }
        true
    }

    /// Split payload: two small balls at the parent's last rect position,
    /// each with its own randomized velocity and color.
    pub fn spawn_small_pair(&mut self, at: Vec2) {
        for _ in 0..2 {
            let vel = self.random_spawn_velocity();
            let color = Color::random(&mut self.rng);
            self.spawn_ball(at, vel, SizeClass::Small, color);
        }
    }

    /// Tear the session down and rebuild it from a freshly drawn seed.
    pub fn restart(&mut self) {
        let seed = self.rng.random();
        let tuning = self.tuning.clone();
        log::info!("restarting session, new seed {seed}");
        *self = Self::with_tuning(seed, tuning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_balls_on_screen_and_disjoint() {
        let state = GameState::new(7);
        assert_eq!(state.balls.len(), state.tuning.start_balls as usize);
        for ball in &state.balls {
            assert!(ball.active);
            assert_eq!(ball.class, SizeClass::Large);
            let r = ball.rect();
            assert!(r.x >= WALL_THICKNESS);
            assert!(r.right() <= SCREEN_WIDTH - WALL_THICKNESS);
            assert!(r.y >= WALL_THICKNESS);
            assert!(r.bottom() <= SCREEN_HEIGHT - WALL_THICKNESS);
        }
        for i in 0..state.balls.len() {
            for j in (i + 1)..state.balls.len() {
                assert!(
                    !state.balls[i].rect().intersects(&state.balls[j].rect()),
                    "balls {i} and {j} overlap at start"
                );
            }
        }
    }

    #[test]
    fn test_deactivate_parks_offscreen() {
        let mut state = GameState::new(1);
        state.balls[0].deactivate();
        let ball = &state.balls[0];
        assert!(!ball.active);
        assert_eq!(ball.pos, OFFSCREEN);
        assert!(!ball.rect().intersects(&state.walls.floor));
    }

    #[test]
    fn test_spawn_reuses_inactive_slot() {
        let mut state = GameState::new(2);
        let len_before = state.balls.len();
        state.balls[0].deactivate();
        assert!(state.spawn_ball(
            Vec2::new(300.0, 300.0),
            Vec2::ZERO,
            SizeClass::Small,
            Color::WHITE
        ));
        assert_eq!(state.balls.len(), len_before);
        assert!(state.balls[0].active);
        assert_eq!(state.balls[0].class, SizeClass::Small);
    }

    #[test]
    fn test_spawn_refused_at_capacity() {
        let mut state = GameState::new(3);
        while state.active_ball_count() < MAX_BALLS {
            assert!(state.spawn_ball(
                Vec2::new(400.0, 400.0),
                Vec2::ZERO,
                SizeClass::Small,
                Color::WHITE
            ));
        }
        assert!(!state.spawn_ball(
            Vec2::new(400.0, 400.0),
            Vec2::ZERO,
            SizeClass::Small,
            Color::WHITE
        ));
        assert_eq!(state.active_ball_count(), MAX_BALLS);
    }

    #[test]
    fn test_shot_fire_and_reset() {
        let mut shot = Shot::default();
        assert!(shot.allowed);
        assert!(!shot.active);

        shot.fire(Vec2::new(600.0, 650.0));
        assert!(shot.active);
        assert!(!shot.allowed);
        assert_eq!(shot.rect().h, 0.0);

        shot.height = 120.0;
        let r = shot.rect();
        assert_eq!(r.y, 650.0 - 120.0);
        assert_eq!(r.h, 120.0);

        shot.reset();
        assert!(!shot.active);
        assert!(shot.allowed);
    }

    #[test]
    fn test_restart_rebuilds_session() {
        let mut state = GameState::new(42);
        state.phase = GamePhase::GameOver;
        state.player.collided = true;
        state.balls.iter_mut().for_each(|b| b.deactivate());
        state.end_rise = 200.0;

        state.restart();

        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.player.collided);
        assert_eq!(state.end_rise, 0.0);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.active_ball_count(), state.tuning.start_balls as usize);
        assert_ne!(state.seed, 42);
    }
}
