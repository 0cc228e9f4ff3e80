//! Chungus Blast - a ball-popping arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, windowing and input polling are external collaborators: the
//! crate consumes a [`sim::TickInput`] snapshot per tick and produces a
//! [`sim::DrawCommand`] list per frame, nothing else.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (20 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 20.0;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;
    /// Thickness of the four bounding wall rects
    pub const WALL_THICKNESS: f32 = 15.0;
    /// Side walls extend this far above the screen: the ceiling gives no
    /// bounce, so a fast ball can crest y = 0 and must stay contained
    /// horizontally until gravity brings it back
    pub const WALL_HEADROOM: f32 = 10_000.0;

    /// Ball side lengths per size class
    pub const LARGE_BALL_SIDE: f32 = 64.0;
    pub const SMALL_BALL_SIDE: f32 = 32.0;
    /// Hard cap on the ball pool; spawning past this is refused
    pub const MAX_BALLS: usize = 16;
    /// Parking spot for deactivated balls, well outside the playfield
    pub const OFFSCREEN: Vec2 = Vec2::new(-1000.0, -1000.0);

    /// Player sprite extents (one animation frame)
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 150.0;

    /// Shot trail rect width
    pub const SHOT_WIDTH: f32 = 6.0;
    /// A shot re-arms once its height exceeds this
    pub const SHOT_TRAVEL_LIMIT: f32 = SCREEN_HEIGHT;
    /// Muzzle offset from the player's top-left corner
    pub const SHOT_MUZZLE_OFFSET: Vec2 = Vec2::new(PLAYER_WIDTH / 2.0, 0.0);

    /// Sprite sheet layout (frames per line x lines)
    pub const NUM_FRAMES_PER_LINE: usize = 3;
    pub const NUM_LINES: usize = 4;
    /// Ticks a frame is held before advancing (frame changes every 3rd tick)
    pub const FRAME_HOLD_TICKS: u32 = 2;

    /// End-sprite rise per tick during game over (cosmetic)
    pub const END_RISE_STEP: f32 = 4.0;
}
