//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by pool index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod rect;
pub mod render;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use render::{DrawCommand, SpriteAnimation, TextureId, draw_list};
pub use state::{Ball, Color, GamePhase, GameState, Player, Shot, SizeClass, Walls};
pub use tick::{TickInput, tick};
