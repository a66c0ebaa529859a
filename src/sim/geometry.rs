//! Arena geometry: slot placement on the circle and hit-testing
//!
//! All sizes scale with min(width, height) of the host rectangle, so the
//! arena is rebuilt from scratch whenever the host reports a new size.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::polar_to_cartesian;

/// Axis-aligned host rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size / 2.0
    }

    pub fn min_dimension(&self) -> f32 {
        self.size.x.min(self.size.y).max(0.0)
    }
}

/// Immutable arena layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    pub center: Vec2,
    pub radius: f32,
    /// min(width, height) of the host rectangle
    pub min_dimension: f32,
    /// Animal positions by slot index
    slots: Vec<Vec2>,
}

impl Arena {
    /// Lay out `count` slots evenly around the circle, slot 0 at angle 0
    pub fn new(rect: Rect, count: usize) -> Self {
        let center = rect.center();
        let min_dimension = rect.min_dimension();
        let radius = ARENA_RADIUS_FACTOR * min_dimension;
        let step = std::f32::consts::TAU / count.max(1) as f32;
        let slots = (0..count)
            .map(|i| center + polar_to_cartesian(radius, i as f32 * step))
            .collect();

        Self {
            center,
            radius,
            min_dimension,
            slots,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slot_positions(&self) -> &[Vec2] {
        &self.slots
    }

    pub fn slot_position(&self, slot: usize) -> Option<Vec2> {
        self.slots.get(slot).copied()
    }

    #[inline]
    pub fn illumination_radius(&self) -> f32 {
        ILLUMINATION_RADIUS_FACTOR * self.min_dimension
    }

    #[inline]
    pub fn animal_hit_radius(&self) -> f32 {
        ANIMAL_HIT_RADIUS_FACTOR * self.min_dimension
    }

    #[inline]
    pub fn puzzle_slot_hit_radius(&self) -> f32 {
        PUZZLE_SLOT_HIT_RADIUS_FACTOR * self.min_dimension
    }

    /// Where puzzle slot `slot` of the animal in `animal_slot` is drawn
    ///
    /// Slots sit on a small ring around the animal, slot 0 at the top,
    /// going clockwise on a y-down screen.
    pub fn puzzle_slot_position(&self, animal_slot: usize, slot: usize) -> Option<Vec2> {
        if slot >= PUZZLE_SLOTS {
            return None;
        }
        let anchor = self.slot_position(animal_slot)?;
        let theta = -std::f32::consts::FRAC_PI_2
            + slot as f32 * std::f32::consts::TAU / PUZZLE_SLOTS as f32;
        Some(anchor + polar_to_cartesian(PUZZLE_RING_RADIUS_FACTOR * self.min_dimension, theta))
    }

    /// Puzzle slot of `animal_slot` under `point`, if any
    pub fn puzzle_slot_at(&self, animal_slot: usize, point: Vec2) -> Option<usize> {
        let hit = self.puzzle_slot_hit_radius();
        (0..PUZZLE_SLOTS)
            .filter_map(|s| {
                let pos = self.puzzle_slot_position(animal_slot, s)?;
                let d = pos.distance(point);
                (d <= hit).then_some((s, d))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(s, _)| s)
    }

    /// Whether `point` lands on the body of the animal in `animal_slot`
    pub fn animal_contains(&self, animal_slot: usize, point: Vec2) -> bool {
        self.slot_position(animal_slot)
            .is_some_and(|pos| pos.distance(point) <= self.animal_hit_radius())
    }

    /// Pull a point back onto the arena disc if it sits outside
    pub fn clamp_to_disc(&self, point: Vec2) -> Vec2 {
        self.center + (point - self.center).clamp_length_max(self.radius)
    }

    /// Uniformly distributed point inside the arena disc
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        // sqrt keeps the density uniform over area instead of bunching at the center
        let r = self.radius * rng.random::<f32>().sqrt();
        let theta = rng.random::<f32>() * std::f32::consts::TAU;
        self.center + polar_to_cartesian(r, theta)
    }
}
