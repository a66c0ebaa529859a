//! Color/order puzzles shown by an active animal
//!
//! A puzzle is five colored slots plus a secret order in which they must be
//! tapped. The reveal animation spotlights the slots in that order.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::consts::PUZZLE_SLOTS;

/// Slot colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PuzzleColor {
    Red,
    Green,
    Blue,
    Yellow,
}

impl PuzzleColor {
    /// The fixed palette every puzzle draws from
    pub const PALETTE: [PuzzleColor; 4] = [
        PuzzleColor::Red,
        PuzzleColor::Green,
        PuzzleColor::Blue,
        PuzzleColor::Yellow,
    ];
}

/// Outcome of feeding one tap to a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapResult {
    /// Slot index outside the puzzle
    Ignored,
    /// Correct slot; carries the new progress
    Advanced(u8),
    /// Wrong slot; progress dropped back to zero
    Reset,
    /// Final slot of the order tapped
    Solved,
}

/// One generated puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Permutation of slot indices; the order slots must be tapped in
    pub reveal_order: [u8; PUZZLE_SLOTS],
    /// Color of each slot; four distinct colors, one of them twice
    pub slot_colors: [PuzzleColor; PUZZLE_SLOTS],
}

impl Puzzle {
    /// Draw a fresh puzzle. Order and colors are independent draws.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut reveal_order = [0u8, 1, 2, 3, 4];
        reveal_order.shuffle(rng);

        let extra = PuzzleColor::PALETTE[rng.random_range(0..PuzzleColor::PALETTE.len())];
        let [a, b, c, d] = PuzzleColor::PALETTE;
        let mut slot_colors = [a, b, c, d, extra];
        slot_colors.shuffle(rng);

        Self {
            reveal_order,
            slot_colors,
        }
    }

    /// Slot the player must tap after `progress` correct taps
    pub fn expected_slot(&self, progress: u8) -> Option<usize> {
        self.reveal_order.get(progress as usize).map(|&s| s as usize)
    }

    /// Validate a tap on `slot` given current `progress`
    pub fn check_tap(&self, progress: u8, slot: usize) -> TapResult {
        if slot >= PUZZLE_SLOTS {
            return TapResult::Ignored;
        }
        match self.expected_slot(progress) {
            Some(expected) if expected == slot => {
                let next = progress + 1;
                if next as usize == PUZZLE_SLOTS {
                    TapResult::Solved
                } else {
                    TapResult::Advanced(next)
                }
            }
            _ => TapResult::Reset,
        }
    }

    /// Slot spotlighted by the reveal animation after `elapsed` seconds
    ///
    /// Freezes on the last slot once the full order has been shown.
    pub fn highlight_slot(&self, elapsed: f32, per_slot: f32) -> usize {
        let step = if per_slot > 0.0 {
            (elapsed.max(0.0) / per_slot).floor() as usize
        } else {
            PUZZLE_SLOTS - 1
        };
        self.reveal_order[step.min(PUZZLE_SLOTS - 1)] as usize
    }
}
