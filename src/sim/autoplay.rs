//! Attract-mode player
//!
//! Reads the puzzles straight out of the state, so it never taps a wrong
//! slot. Taps are spaced out so a watcher can follow along.

use super::animal::AnimalState;
use super::state::{GameState, Tap};

/// Seconds between autoplay taps
pub const AUTOPLAY_TAP_INTERVAL: f32 = 0.15;

/// Taps autoplay wants to make this frame (at most one)
pub fn plan(state: &mut GameState, dt: f32) -> Vec<Tap> {
    state.autoplay_cooldown = (state.autoplay_cooldown - dt).max(0.0);
    if state.autoplay_cooldown > 0.0 {
        return Vec::new();
    }

    // Finish the puzzle in progress before waking anyone else
    let active = state
        .animals
        .iter()
        .filter(|a| a.state == AnimalState::Active)
        .min_by_key(|a| a.countdown);

    let tap = match active {
        Some(animal) => animal
            .puzzle
            .expected_slot(animal.tap_progress)
            .map(|slot| Tap::Slot {
                animal: animal.id,
                slot,
            }),
        None => state.illuminated().map(Tap::Animal),
    };

    match tap {
        Some(tap) => {
            state.autoplay_cooldown = AUTOPLAY_TAP_INTERVAL;
            vec![tap]
        }
        None => Vec::new(),
    }
}
