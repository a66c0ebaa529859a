//! Game state and core simulation types
//!
//! The driver owns everything here exclusively; detectors and evaluators
//! only ever borrow it for a single step.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::animal::{Animal, AnimalState, SlotOutcome};
use super::clock::{LevelClock, Outcome};
use super::geometry::{Arena, Rect};
use super::light::{RoamingLight, Searchlight};
use super::puzzle::Puzzle;
use crate::settings::Settings;
use crate::tuning::LevelTuning;

/// A player tap, either raw or already resolved by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tap {
    /// Screen position, resolved against the arena geometry
    Point(Vec2),
    /// Tap on an animal's body
    Animal(usize),
    /// Tap on one puzzle slot of an animal
    Slot { animal: usize, slot: usize },
}

/// Complete level state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Level seed for reproducibility
    pub seed: u64,
    pub tuning: LevelTuning,
    pub settings: Settings,
    pub arena: Arena,
    /// Sorted by id; index == id
    pub animals: Vec<Animal>,
    pub searchlight: Searchlight,
    /// Decorative only
    pub roaming_lights: Vec<RoamingLight>,
    pub clock: LevelClock,
    pub outcome: Outcome,
    /// Paused by the player
    pub paused: bool,
    /// Time banked toward the next clock step
    pub second_accumulator: f32,
    /// Simulated seconds since setup or the last reset
    pub time_secs: f32,
    /// Number of resets since construction (feeds the reseed)
    pub resets: u32,
    /// Seconds until autoplay may tap again
    pub autoplay_cooldown: f32,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Set up a level in `rect`
    ///
    /// Invalid tuning is replaced by the defaults so setup always succeeds.
    pub fn new(seed: u64, rect: Rect, tuning: LevelTuning, settings: Settings) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("Rejected level tuning ({e}); using defaults");
                LevelTuning::default()
            }
        };
        let arena = Arena::new(rect, tuning.animal_count);

        let mut state = Self {
            seed,
            clock: LevelClock::new(tuning.level_seconds),
            tuning,
            settings,
            arena,
            animals: Vec::new(),
            searchlight: Searchlight::default(),
            roaming_lights: Vec::new(),
            outcome: Outcome::Ongoing,
            paused: false,
            second_accumulator: 0.0,
            time_secs: 0.0,
            resets: 0,
            autoplay_cooldown: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.populate();

        log::info!(
            "Level ready: seed={} animals={} clock={}s",
            seed,
            state.animals.len(),
            state.clock.remaining_seconds
        );
        state
    }

    /// Animals, puzzles and decorative lights from the current RNG
    fn populate(&mut self) {
        let countdown = self.tuning.animal_countdown_seconds;
        self.animals = (0..self.tuning.animal_count)
            .map(|id| Animal::new(id, countdown, Puzzle::generate(&mut self.rng)))
            .collect();

        let count = self.settings.effective_roaming_lights();
        self.roaming_lights = (0..count)
            .map(|_| RoamingLight::spawn(&self.arena, &mut self.rng))
            .collect();
    }

    /// Back to a fresh level: everything dormant, full clocks, new puzzles
    pub fn reset(&mut self) {
        self.resets = self.resets.wrapping_add(1);
        self.rng = Pcg32::seed_from_u64(self.seed.wrapping_add(self.resets as u64));
        self.clock = LevelClock::new(self.tuning.level_seconds);
        self.searchlight = Searchlight::default();
        self.outcome = Outcome::Ongoing;
        self.paused = false;
        self.second_accumulator = 0.0;
        self.time_secs = 0.0;
        self.autoplay_cooldown = 0.0;
        self.populate();

        log::info!("Level reset (#{})", self.resets);
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            log::info!("{}", if paused { "Paused" } else { "Resumed" });
        }
        self.paused = paused;
    }

    /// Rebuild the arena for a new host size; animals keep their slots
    pub fn resize(&mut self, rect: Rect) {
        self.arena = Arena::new(rect, self.tuning.animal_count);
        for light in &mut self.roaming_lights {
            light.pos = self.arena.clamp_to_disc(light.pos);
            light.target = self.arena.clamp_to_disc(light.target);
        }
        log::debug!(
            "Arena resized: center={:?} radius={}",
            self.arena.center,
            self.arena.radius
        );
    }

    /// Whether taps and frames currently do anything
    #[inline]
    pub fn is_running(&self) -> bool {
        !self.paused && !self.outcome.is_terminal()
    }

    /// The animal under the searchlight, if any
    pub fn illuminated(&self) -> Option<usize> {
        self.animals
            .iter()
            .find(|a| a.state == AnimalState::Illuminated)
            .map(|a| a.id)
    }

    /// Resolve a screen position to an animal or puzzle slot
    ///
    /// Puzzle slots of active animals take priority over animal bodies.
    pub fn resolve_point(&self, point: Vec2) -> Option<Tap> {
        let slot = self
            .animals
            .iter()
            .filter(|a| a.state == AnimalState::Active)
            .find_map(|a| {
                self.arena
                    .puzzle_slot_at(a.id, point)
                    .map(|slot| Tap::Slot { animal: a.id, slot })
            });
        slot.or_else(|| {
            self.animals
                .iter()
                .filter(|a| !a.is_vanished())
                .find(|a| self.arena.animal_contains(a.id, point))
                .map(|a| Tap::Animal(a.id))
        })
    }

    /// Apply one tap. Returns true if any animal changed.
    ///
    /// Out-of-range ids and slots, taps while paused and taps after the
    /// level ended are ignored.
    pub fn handle_tap(&mut self, tap: Tap) -> bool {
        if !self.is_running() {
            return false;
        }
        match tap {
            Tap::Point(point) => match self.resolve_point(point) {
                Some(resolved) => self.handle_tap(resolved),
                None => false,
            },
            Tap::Animal(id) => self.activate(id),
            Tap::Slot { animal, slot } => self.tap_slot(animal, slot),
        }
    }

    /// Illuminated -> Active, with a freshly drawn puzzle
    fn activate(&mut self, id: usize) -> bool {
        let Some(animal) = self.animals.get_mut(id) else {
            return false;
        };
        if animal.state != AnimalState::Illuminated {
            return false;
        }
        let puzzle = Puzzle::generate(&mut self.rng);
        let activated = animal.activate(puzzle);
        if activated {
            log::info!("Animal {} active (countdown {}s)", id, animal.countdown);
        }
        activated
    }

    fn tap_slot(&mut self, id: usize, slot: usize) -> bool {
        let behavior = self.tuning.solve_behavior;
        let bonus = self.tuning.solve_bonus_seconds;
        let Some(animal) = self.animals.get_mut(id) else {
            return false;
        };
        match animal.tap_slot(slot, behavior, bonus) {
            SlotOutcome::Ignored => false,
            SlotOutcome::Progress(n) => {
                log::debug!("Animal {} slot {} correct ({}/5)", id, slot, n);
                true
            }
            SlotOutcome::Reset => {
                log::debug!("Animal {} slot {} wrong, progress reset", id, slot);
                true
            }
            SlotOutcome::Solved => {
                log::info!(
                    "Animal {} solved -> {:?} (countdown {}s)",
                    id,
                    animal.state,
                    animal.countdown
                );
                true
            }
        }
    }
}
