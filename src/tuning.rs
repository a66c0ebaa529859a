//! Data-driven level balance
//!
//! Every field has a default so a tuning file only needs to list what it
//! overrides. Rates are expressed per simulated second and scaled by the
//! frame delta, never per frame.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TuningError};

/// What happens to an animal once its puzzle is solved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SolveBehavior {
    /// Animal goes back to sleep and its countdown gets bonus time
    #[default]
    ReturnToDormant,
    /// Animal leaves the arena for good
    Vanish,
}

impl SolveBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            SolveBehavior::ReturnToDormant => "ReturnToDormant",
            SolveBehavior::Vanish => "Vanish",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "returntodormant" | "return" | "loop" => Some(SolveBehavior::ReturnToDormant),
            "vanish" => Some(SolveBehavior::Vanish),
            _ => None,
        }
    }
}

/// Balance values for one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelTuning {
    /// Global countdown; reaching zero wins the level
    pub level_seconds: u32,
    /// Starting countdown of every animal; reaching zero loses the level
    pub animal_countdown_seconds: u32,
    /// Added to an animal's countdown when its puzzle is solved
    pub solve_bonus_seconds: u32,
    /// Animals placed around the arena circle
    pub animal_count: usize,
    /// How long each slot stays spotlighted during the reveal animation
    pub reveal_slot_seconds: f32,
    /// Searchlight angular speed (radians per second)
    pub searchlight_speed: f32,
    /// Roaming light speed as a fraction of min(width, height) per second
    pub roaming_speed: f32,
    /// Roaming lights pick a new target at least this often
    pub roaming_retarget_seconds: f32,
    /// Arrival distance as a fraction of min(width, height)
    pub roaming_arrival_fraction: f32,
    /// How quickly roaming lights turn toward their target (1/s)
    pub roaming_steering: f32,
    pub solve_behavior: SolveBehavior,
}

impl Default for LevelTuning {
    fn default() -> Self {
        Self {
            level_seconds: 90,
            animal_countdown_seconds: 30,
            solve_bonus_seconds: 10,
            animal_count: 5,
            reveal_slot_seconds: 0.8,
            // 0.02 rad per frame at 60 Hz
            searchlight_speed: 1.2,
            roaming_speed: 0.3,
            roaming_retarget_seconds: 3.0,
            roaming_arrival_fraction: 0.02,
            roaming_steering: 4.0,
            solve_behavior: SolveBehavior::ReturnToDormant,
        }
    }
}

impl LevelTuning {
    /// Largest supported animal count (slots stay non-overlapping up to here)
    pub const MAX_ANIMALS: usize = 12;

    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> String {
        // Plain data with no maps keyed by non-strings; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Check every numeric field against its supported range
    pub fn validate(&self) -> Result<()> {
        check("level_seconds", self.level_seconds as f64, 1.0, 3600.0)?;
        check(
            "animal_countdown_seconds",
            self.animal_countdown_seconds as f64,
            1.0,
            3600.0,
        )?;
        check("solve_bonus_seconds", self.solve_bonus_seconds as f64, 0.0, 3600.0)?;
        check(
            "animal_count",
            self.animal_count as f64,
            1.0,
            Self::MAX_ANIMALS as f64,
        )?;
        check("reveal_slot_seconds", self.reveal_slot_seconds as f64, 0.05, 10.0)?;
        check("searchlight_speed", self.searchlight_speed as f64, 0.0, 20.0)?;
        check("roaming_speed", self.roaming_speed as f64, 0.0, 5.0)?;
        check(
            "roaming_retarget_seconds",
            self.roaming_retarget_seconds as f64,
            0.1,
            60.0,
        )?;
        check(
            "roaming_arrival_fraction",
            self.roaming_arrival_fraction as f64,
            0.001,
            0.5,
        )?;
        check("roaming_steering", self.roaming_steering as f64, 0.1, 100.0)?;
        Ok(())
    }
}

fn check(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    // NaN fails both comparisons, so test for "inside" rather than "outside"
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(TuningError::OutOfRange {
            field,
            min,
            max,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = LevelTuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.level_seconds, 90);
        assert_eq!(tuning.animal_countdown_seconds, 30);
        assert_eq!(tuning.solve_bonus_seconds, 10);
        assert_eq!(tuning.animal_count, 5);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning = LevelTuning::from_json(r#"{ "level_seconds": 45, "solve_behavior": "Vanish" }"#)
            .expect("valid tuning");
        assert_eq!(tuning.level_seconds, 45);
        assert_eq!(tuning.solve_behavior, SolveBehavior::Vanish);
        assert_eq!(tuning.animal_count, 5);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = LevelTuning::from_json(r#"{ "animal_count": 0 }"#).unwrap_err();
        match err {
            TuningError::OutOfRange { field, .. } => assert_eq!(field, "animal_count"),
            other => panic!("unexpected error: {other}"),
        }

        let tuning = LevelTuning {
            reveal_slot_seconds: f32::NAN,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            LevelTuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_json_round_trip_keeps_behavior() {
        let tuning = LevelTuning {
            solve_behavior: SolveBehavior::Vanish,
            ..Default::default()
        };
        let back = LevelTuning::from_json(&tuning.to_json()).expect("round trip");
        assert_eq!(back, tuning);
    }

    #[test]
    fn test_solve_behavior_from_str() {
        assert_eq!(SolveBehavior::from_str("vanish"), Some(SolveBehavior::Vanish));
        assert_eq!(
            SolveBehavior::from_str("Loop"),
            Some(SolveBehavior::ReturnToDormant)
        );
        assert_eq!(SolveBehavior::from_str("explode"), None);
        assert_eq!(SolveBehavior::Vanish.as_str(), "Vanish");
    }
}
