//! Per-frame simulation driver
//!
//! One call per rendered frame. Queued input is applied first, then the
//! lights move, the searchlight picks its animal, reveal animations run, and
//! every whole second banked so far runs the level clock.

use super::autoplay;
use super::light::{IlluminationDetector, PollingDetector, apply_illumination};
use super::state::{GameState, Tap};
use crate::consts::*;

/// Input gathered by the host since the previous frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Taps in arrival order
    pub taps: Vec<Tap>,
    /// Pause (`Some(true)`) or resume (`Some(false)`)
    pub set_paused: Option<bool>,
    /// Restart the level before anything else
    pub reset: bool,
    /// Attract mode - autoplay taps for the player
    pub autoplay: bool,
}

/// Advance the game by one frame using the polling detector
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    tick_with(state, input, dt, &PollingDetector);
}

/// Advance the game by one frame with a caller-supplied detector
pub fn tick_with<D: IlluminationDetector + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    detector: &D,
) {
    if input.reset {
        state.reset();
    }
    if let Some(paused) = input.set_paused {
        state.set_paused(paused);
    }

    // Paused or finished levels are frozen, not just hidden
    if !state.is_running() {
        return;
    }
    for tap in &input.taps {
        state.handle_tap(*tap);
    }

    if !dt.is_finite() || dt <= 0.0 {
        return;
    }
    let dt = dt.min(MAX_FRAME_DT);

    if input.autoplay {
        for tap in autoplay::plan(state, dt) {
            state.handle_tap(tap);
        }
    }

    state.time_secs += dt;

    // Lights
    state.searchlight.advance(state.tuning.searchlight_speed, dt);
    for light in &mut state.roaming_lights {
        light.advance(&state.arena, &state.tuning, dt, &mut state.rng);
    }

    // Illumination
    let light_pos = state.searchlight.position(&state.arena);
    let target = detector.detect(
        light_pos,
        state.arena.illumination_radius(),
        &state.arena,
        &state.animals,
    );
    apply_illumination(&mut state.animals, target);

    // Reveal animations
    for animal in &mut state.animals {
        animal.advance_reveal(dt);
    }

    // Level clock
    state.second_accumulator += dt;
    while state.second_accumulator >= SECOND && !state.outcome.is_terminal() {
        state.second_accumulator -= SECOND;
        state.outcome = state.clock.tick_second(&mut state.animals);
        if state.outcome.is_terminal() {
            log::info!(
                "Level over: {:?} at {:.1}s ({}s left on clock)",
                state.outcome,
                state.time_secs,
                state.clock.remaining_seconds
            );
        }
    }
}
