//! Data-driven game balance
//!
//! Everything a designer might want to nudge without touching the sim code.
//! Loaded from JSON next to the binary; falls back to defaults when the file
//! is missing or malformed.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Balance numbers for one session. Geometry (screen, wall, ball sizes)
/// stays in `consts`; only behavior knobs live here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per tick, pixels/tick^2
    pub gravity: f32,
    /// Velocity retained on bounce and ball-ball impact
    pub restitution: f32,
    /// Displacement and gravity multiplier for small balls
    pub small_gravity_scale: f32,
    /// Player horizontal speed, pixels per tick
    pub player_speed: f32,
    /// Speed multiplier once the player has been hit
    pub collided_speed_scale: f32,
    /// Shot trail growth per tick, pixels
    pub shot_rise: f32,
    /// Large balls seeded at session start
    pub start_balls: u32,
    /// Spawn velocity bound: vx drawn from [-spawn_speed_x, spawn_speed_x]
    pub spawn_speed_x: f32,
    /// Spawn velocity bound: vy drawn from [-spawn_speed_up, 0]
    pub spawn_speed_up: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.4,
            restitution: 0.8,
            small_gravity_scale: 0.7,
            player_speed: 6.0,
            collided_speed_scale: 0.5,
            shot_rise: 12.0,
            start_balls: 4,
            spawn_speed_x: 5.0,
            spawn_speed_up: 8.0,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("bad tuning file {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write tuning to a JSON file (pretty-printed for hand editing)
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let t = Tuning::default();
        assert!(t.gravity > 0.0);
        assert!(t.restitution > 0.0 && t.restitution <= 1.0);
        assert!((t.small_gravity_scale - 0.7).abs() < f32::EPSILON);
        assert!(t.start_balls >= 1);
    }

    #[test]
    fn test_json_round_trip() {
        let t = Tuning {
            gravity: 0.55,
            start_balls: 6,
            ..Tuning::default()
        };
        let json = serde_json::to_string(&t).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let back: Tuning = serde_json::from_str(r#"{"gravity": 1.25}"#).unwrap();
        assert_eq!(back.gravity, 1.25);
        assert_eq!(back.restitution, Tuning::default().restitution);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let t = Tuning::load(Path::new("/nonexistent/tuning.json"));
        assert_eq!(t, Tuning::default());
    }
}
