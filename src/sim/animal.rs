//! Per-animal lifecycle state machine
//!
//! ```text
//! Dormant <-> Illuminated -> Active -> Dormant   (ReturnToDormant)
//!                                   -> Vanished  (Vanish, terminal)
//! ```

use serde::{Deserialize, Serialize};

use super::puzzle::{Puzzle, TapResult};
use crate::tuning::SolveBehavior;

/// Lifecycle state of an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimalState {
    /// Waiting in the dark
    Dormant,
    /// Currently under the searchlight; a tap activates it
    Illuminated,
    /// Showing its puzzle and accepting slot taps
    Active,
    /// Gone for good; ignored by light, taps and the clock
    Vanished,
}

/// What a slot tap did to an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOutcome {
    Ignored,
    Progress(u8),
    Reset,
    Solved,
}

/// One animal in its arena slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    /// Stable index, equal to its arena slot
    pub id: usize,
    pub state: AnimalState,
    /// Seconds until this animal loses the level
    pub countdown: u32,
    /// Set by the first illumination; informational only
    pub has_appeared: bool,
    pub puzzle: Puzzle,
    /// Correct in-order taps since activation or the last mistake
    pub tap_progress: u8,
    /// Seconds since activation, drives the reveal animation
    pub reveal_elapsed: f32,
}

impl Animal {
    pub fn new(id: usize, countdown: u32, puzzle: Puzzle) -> Self {
        Self {
            id,
            state: AnimalState::Dormant,
            countdown,
            has_appeared: false,
            puzzle,
            tap_progress: 0,
            reveal_elapsed: 0.0,
        }
    }

    #[inline]
    pub fn is_vanished(&self) -> bool {
        self.state == AnimalState::Vanished
    }

    /// Only dormant or illuminated animals react to the searchlight
    #[inline]
    pub fn is_illuminable(&self) -> bool {
        matches!(self.state, AnimalState::Dormant | AnimalState::Illuminated)
    }

    /// Dormant -> Illuminated
    pub fn illuminate(&mut self) -> bool {
        if self.state != AnimalState::Dormant {
            return false;
        }
        self.state = AnimalState::Illuminated;
        self.has_appeared = true;
        true
    }

    /// Illuminated -> Dormant
    pub fn darken(&mut self) -> bool {
        if self.state != AnimalState::Illuminated {
            return false;
        }
        self.state = AnimalState::Dormant;
        true
    }

    /// Illuminated -> Active with a fresh puzzle
    pub fn activate(&mut self, puzzle: Puzzle) -> bool {
        if self.state != AnimalState::Illuminated {
            return false;
        }
        self.state = AnimalState::Active;
        self.puzzle = puzzle;
        self.tap_progress = 0;
        self.reveal_elapsed = 0.0;
        true
    }

    /// Advance the reveal animation (active animals only)
    pub fn advance_reveal(&mut self, dt: f32) {
        if self.state == AnimalState::Active {
            self.reveal_elapsed += dt;
        }
    }

    /// Slot currently spotlighted by the reveal animation
    pub fn highlight_slot(&self, per_slot: f32) -> Option<usize> {
        (self.state == AnimalState::Active)
            .then(|| self.puzzle.highlight_slot(self.reveal_elapsed, per_slot))
    }

    /// Feed a slot tap to an active animal
    ///
    /// A solve applies `behavior` immediately: either back to `Dormant` with
    /// `bonus` seconds added, or straight to `Vanished`.
    pub fn tap_slot(&mut self, slot: usize, behavior: SolveBehavior, bonus: u32) -> SlotOutcome {
        if self.state != AnimalState::Active {
            return SlotOutcome::Ignored;
        }
        match self.puzzle.check_tap(self.tap_progress, slot) {
            TapResult::Ignored => SlotOutcome::Ignored,
            TapResult::Advanced(n) => {
                self.tap_progress = n;
                SlotOutcome::Progress(n)
            }
            TapResult::Reset => {
                self.tap_progress = 0;
                SlotOutcome::Reset
            }
            TapResult::Solved => {
                self.tap_progress = 0;
                self.reveal_elapsed = 0.0;
                match behavior {
                    SolveBehavior::ReturnToDormant => {
                        self.state = AnimalState::Dormant;
                        self.countdown = self.countdown.saturating_add(bonus);
                    }
                    SolveBehavior::Vanish => {
                        self.state = AnimalState::Vanished;
                    }
                }
                SlotOutcome::Solved
            }
        }
    }

    /// Remove one second from the countdown, floored at zero
    pub fn tick_countdown(&mut self) {
        if !self.is_vanished() {
            self.countdown = self.countdown.saturating_sub(1);
        }
    }

    /// Ran out of time while still in play
    #[inline]
    pub fn is_expired(&self) -> bool {
        !self.is_vanished() && self.countdown == 0
    }
}
