//! Searchlight Arena - a circular arena where a sweeping light wakes animals
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lights, animal state machine, puzzles, clocks)
//! - `tuning`: Data-driven level balance
//! - `settings`: Player preferences (cosmetic skin, decorative lights)
//! - `error`: Configuration errors

pub mod error;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{Result, TuningError};
pub use settings::{Settings, Skin};
pub use tuning::{LevelTuning, SolveBehavior};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Documented target frame rate of the host (used by the demo runner)
    pub const TARGET_FPS: f32 = 60.0;
    /// Nominal frame timestep at the target frame rate
    pub const FRAME_DT: f32 = 1.0 / TARGET_FPS;
    /// Longest frame the driver will integrate in one call (hitches are clamped)
    pub const MAX_FRAME_DT: f32 = 0.25;
    /// Length of one simulated clock tick
    pub const SECOND: f32 = 1.0;

    /// Arena radius as a fraction of min(width, height)
    pub const ARENA_RADIUS_FACTOR: f32 = 0.35;
    /// Searchlight illumination radius as a fraction of min(width, height)
    pub const ILLUMINATION_RADIUS_FACTOR: f32 = 0.15;
    /// Tappable body radius of an animal
    pub const ANIMAL_HIT_RADIUS_FACTOR: f32 = 0.07;
    /// Ring on which an active animal shows its puzzle slots
    pub const PUZZLE_RING_RADIUS_FACTOR: f32 = 0.08;
    /// Tappable radius of a single puzzle slot
    pub const PUZZLE_SLOT_HIT_RADIUS_FACTOR: f32 = 0.03;
    /// Roaming lights are pulled back once they stray past this multiple of the arena radius
    pub const ROAMING_ESCAPE_FACTOR: f32 = 1.05;

    /// Number of slots in every puzzle
    pub const PUZZLE_SLOTS: usize = 5;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
