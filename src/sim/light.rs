//! Searchlight, roaming lights and illumination detection
//!
//! Only the primary searchlight affects gameplay. Roaming lights are drawn
//! but never consulted by the detector or the clock.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::animal::Animal;
use super::geometry::Arena;
use crate::consts::ROAMING_ESCAPE_FACTOR;
use crate::tuning::LevelTuning;
use crate::{normalize_angle, polar_to_cartesian};

/// The primary searchlight, orbiting on the arena circle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Searchlight {
    /// Current angle (radians, normalized)
    pub theta: f32,
}

impl Searchlight {
    pub fn advance(&mut self, angular_speed: f32, dt: f32) {
        self.theta = normalize_angle(self.theta + angular_speed * dt);
    }

    /// Position on the arena circle
    pub fn position(&self, arena: &Arena) -> Vec2 {
        arena.center + polar_to_cartesian(arena.radius, self.theta)
    }
}

/// A decorative light wandering the arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoamingLight {
    pub pos: Vec2,
    pub vel: Vec2,
    pub target: Vec2,
    /// Seconds since the last retarget
    pub retarget_timer: f32,
}

impl RoamingLight {
    pub fn spawn<R: Rng + ?Sized>(arena: &Arena, rng: &mut R) -> Self {
        Self {
            pos: arena.random_point(rng),
            vel: Vec2::ZERO,
            target: arena.random_point(rng),
            retarget_timer: 0.0,
        }
    }

    /// Steer toward the target at constant cruising speed
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        arena: &Arena,
        tuning: &LevelTuning,
        dt: f32,
        rng: &mut R,
    ) {
        let speed = tuning.roaming_speed * arena.min_dimension;
        let arrival = tuning.roaming_arrival_fraction * arena.min_dimension;

        self.retarget_timer += dt;
        if self.pos.distance(self.target) <= arrival
            || self.retarget_timer >= tuning.roaming_retarget_seconds
        {
            self.target = arena.random_point(rng);
            self.retarget_timer = 0.0;
        }

        // Steering only turns the heading; magnitude stays at cruising speed
        let desired = (self.target - self.pos).normalize_or_zero() * speed;
        let blend = (tuning.roaming_steering * dt).min(1.0);
        let heading = (self.vel + (desired - self.vel) * blend).normalize_or_zero();
        self.vel = if heading == Vec2::ZERO {
            desired
        } else {
            heading * speed
        };
        self.pos += self.vel * dt;

        if self.pos.distance(arena.center) > arena.radius * ROAMING_ESCAPE_FACTOR {
            self.pos = arena.clamp_to_disc(self.pos);
        }
    }
}

/// Finds the animal under the searchlight
///
/// Implementations get borrowed animals for one step only.
pub trait IlluminationDetector {
    /// Id of the single dormant/illuminated animal within `radius` of
    /// `light`, nearest first; `None` clears the target.
    fn detect(&self, light: Vec2, radius: f32, arena: &Arena, animals: &[Animal]) -> Option<usize>;
}

/// Linear scan over every animal each frame
#[derive(Debug, Clone, Copy, Default)]
pub struct PollingDetector;

impl IlluminationDetector for PollingDetector {
    fn detect(&self, light: Vec2, radius: f32, arena: &Arena, animals: &[Animal]) -> Option<usize> {
        animals
            .iter()
            .filter(|a| a.is_illuminable())
            .filter_map(|a| {
                let d = arena.slot_position(a.id)?.distance(light);
                (d <= radius).then_some((a.id, d))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }
}

/// Make `target` the only illuminated animal
///
/// Returns true if any animal changed state.
pub fn apply_illumination(animals: &mut [Animal], target: Option<usize>) -> bool {
    let mut changed = false;
    for animal in animals.iter_mut() {
        if Some(animal.id) == target {
            if animal.illuminate() {
                log::debug!("Animal {} illuminated", animal.id);
                changed = true;
            }
        } else if animal.darken() {
            log::debug!("Animal {} back in the dark", animal.id);
            changed = true;
        }
    }
    changed
}
