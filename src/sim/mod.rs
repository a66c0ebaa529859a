//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Rates scaled by frame delta, clock stepped in whole seconds
//! - Seeded RNG only
//! - Stable iteration order (by animal ID)
//! - No rendering or platform dependencies

pub mod animal;
pub mod autoplay;
pub mod clock;
pub mod geometry;
pub mod light;
pub mod puzzle;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use animal::{Animal, AnimalState, SlotOutcome};
pub use clock::{LevelClock, Outcome, evaluate};
pub use geometry::{Arena, Rect};
pub use light::{IlluminationDetector, PollingDetector, RoamingLight, Searchlight, apply_illumination};
pub use puzzle::{Puzzle, PuzzleColor, TapResult};
pub use snapshot::{AnimalView, Snapshot};
pub use state::{GameState, Tap};
pub use tick::{TickInput, tick, tick_with};
