//! Read-only view of the level for the presentation layer

use glam::Vec2;
use serde::Serialize;

use super::animal::AnimalState;
use super::clock::Outcome;
use super::puzzle::PuzzleColor;
use super::state::GameState;
use crate::consts::PUZZLE_SLOTS;
use crate::settings::Skin;

/// What the renderer needs to draw one animal
#[derive(Debug, Clone, Serialize)]
pub struct AnimalView {
    pub id: usize,
    pub state: AnimalState,
    pub position: Vec2,
    pub countdown: u32,
    pub slot_colors: [PuzzleColor; PUZZLE_SLOTS],
    /// Slot spotlighted by the reveal animation (active animals only)
    pub highlight_slot: Option<usize>,
    pub tap_progress: u8,
    /// Where the puzzle slots are drawn (active animals only)
    pub puzzle_slots: Vec<Vec2>,
}

/// Frame snapshot
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub animals: Vec<AnimalView>,
    pub remaining_seconds: u32,
    pub outcome: Outcome,
    pub paused: bool,
    pub searchlight: Vec2,
    pub illumination_radius: f32,
    pub roaming_lights: Vec<Vec2>,
    pub skin: Skin,
    pub sprite: &'static str,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        let per_slot = self.tuning.reveal_slot_seconds;
        let animals = self
            .animals
            .iter()
            .map(|a| {
                let active = a.state == AnimalState::Active;
                AnimalView {
                    id: a.id,
                    state: a.state,
                    position: self.arena.slot_position(a.id).unwrap_or(self.arena.center),
                    countdown: a.countdown,
                    slot_colors: a.puzzle.slot_colors,
                    highlight_slot: a.highlight_slot(per_slot),
                    tap_progress: a.tap_progress,
                    puzzle_slots: if active {
                        (0..PUZZLE_SLOTS)
                            .filter_map(|s| self.arena.puzzle_slot_position(a.id, s))
                            .collect()
                    } else {
                        Vec::new()
                    },
                }
            })
            .collect();

        Snapshot {
            animals,
            remaining_seconds: self.clock.remaining_seconds,
            outcome: self.outcome,
            paused: self.paused,
            searchlight: self.searchlight.position(&self.arena),
            illumination_radius: self.arena.illumination_radius(),
            roaming_lights: self.roaming_lights.iter().map(|l| l.pos).collect(),
            skin: self.settings.skin,
            sprite: self.settings.skin.sprite_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::settings::{Settings, Skin};
    use crate::sim::animal::AnimalState;
    use crate::sim::geometry::Rect;
    use crate::sim::state::{GameState, Tap};
    use crate::tuning::LevelTuning;

    fn state() -> GameState {
        let settings = Settings {
            skin: Skin::Skin2,
            ..Default::default()
        };
        GameState::new(
            21,
            Rect::new(0.0, 0.0, 640.0, 480.0),
            LevelTuning::default(),
            settings,
        )
    }

    #[test]
    fn test_snapshot_of_fresh_level() {
        let snap = state().snapshot();
        assert_eq!(snap.animals.len(), 5);
        assert_eq!(snap.remaining_seconds, 90);
        assert_eq!(snap.sprite, "skin2");
        assert_eq!(snap.roaming_lights.len(), 2);
        for view in &snap.animals {
            assert_eq!(view.countdown, 30);
            assert_eq!(view.highlight_slot, None);
            assert!(view.puzzle_slots.is_empty());
        }
    }

    #[test]
    fn test_snapshot_of_active_animal() {
        let mut state = state();
        state.animals[4].state = AnimalState::Illuminated;
        state.handle_tap(Tap::Animal(4));
        let snap = state.snapshot();
        let view = &snap.animals[4];
        assert_eq!(view.state, AnimalState::Active);
        assert_eq!(
            view.highlight_slot,
            Some(state.animals[4].puzzle.reveal_order[0] as usize)
        );
        assert_eq!(view.puzzle_slots.len(), 5);
        assert_eq!(view.slot_colors, state.animals[4].puzzle.slot_colors);
    }

    #[test]
    fn test_snapshot_serializes() {
        let json = serde_json::to_string(&state().snapshot()).expect("serialize");
        assert!(json.contains("\"remaining_seconds\":90"));
        assert!(json.contains("\"outcome\":\"Ongoing\""));
    }
}
