//! Player settings and preferences
//!
//! Passed to the simulation at construction. The host owns persistence; this
//! module only converts to and from JSON.

use serde::{Deserialize, Serialize};

/// Cosmetic skin used to draw the animals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Skin {
    Skin1,
    Skin2,
    Skin3,
    #[default]
    ClownDefault,
}

impl Skin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Skin::Skin1 => "Skin 1",
            Skin::Skin2 => "Skin 2",
            Skin::Skin3 => "Skin 3",
            Skin::ClownDefault => "Clown",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "skin1" | "skin 1" => Some(Skin::Skin1),
            "skin2" | "skin 2" => Some(Skin::Skin2),
            "skin3" | "skin 3" => Some(Skin::Skin3),
            "clown" | "clown_default" | "default" => Some(Skin::ClownDefault),
            _ => None,
        }
    }

    /// Sprite the renderer should draw for animals
    pub fn sprite_name(&self) -> &'static str {
        match self {
            Skin::Skin1 => "skin1",
            Skin::Skin2 => "skin2",
            Skin::Skin3 => "skin3",
            Skin::ClownDefault => "clown_default",
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Selected animal skin
    pub skin: Skin,

    // === Visual Effects ===
    /// Number of decorative roaming lights
    pub roaming_lights: u8,

    // === Accessibility ===
    /// Reduced motion (no roaming lights)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            skin: Skin::ClownDefault,
            roaming_lights: 2,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Upper bound on decorative lights
    pub const MAX_ROAMING_LIGHTS: u8 = 8;

    /// Effective roaming light count (respects reduced_motion)
    pub fn effective_roaming_lights(&self) -> usize {
        if self.reduced_motion {
            0
        } else {
            self.roaming_lights.min(Self::MAX_ROAMING_LIGHTS) as usize
        }
    }

    /// Parse settings, falling back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings ({e}); using defaults");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_skin_is_clown() {
        let settings = Settings::default();
        assert_eq!(settings.skin, Skin::ClownDefault);
        assert_eq!(settings.skin.sprite_name(), "clown_default");
    }

    #[test]
    fn test_reduced_motion_disables_roaming_lights() {
        let mut settings = Settings::default();
        assert_eq!(settings.effective_roaming_lights(), 2);
        settings.reduced_motion = true;
        assert_eq!(settings.effective_roaming_lights(), 0);
    }

    #[test]
    fn test_roaming_lights_capped() {
        let settings = Settings {
            roaming_lights: 200,
            ..Default::default()
        };
        assert_eq!(
            settings.effective_roaming_lights(),
            Settings::MAX_ROAMING_LIGHTS as usize
        );
    }

    #[test]
    fn test_from_json_falls_back() {
        let settings = Settings::from_json("garbage");
        assert_eq!(settings.skin, Skin::ClownDefault);

        let settings = Settings::from_json(r#"{ "skin": "Skin2" }"#);
        assert_eq!(settings.skin, Skin::Skin2);
        assert_eq!(settings.roaming_lights, 2);
    }

    #[test]
    fn test_skin_from_str() {
        assert_eq!(Skin::from_str("Skin 3"), Some(Skin::Skin3));
        assert_eq!(Skin::from_str("clown_default"), Some(Skin::ClownDefault));
        assert_eq!(Skin::from_str("zebra"), None);
        assert_eq!(Skin::from_str(Skin::Skin1.as_str()), Some(Skin::Skin1));
    }

    #[test]
    fn test_to_json_reloads() {
        let settings = Settings {
            skin: Skin::Skin3,
            roaming_lights: 4,
            reduced_motion: true,
        };
        let reloaded = Settings::from_json(&settings.to_json());
        assert_eq!(reloaded.skin, Skin::Skin3);
        assert_eq!(reloaded.roaming_lights, 4);
        assert!(reloaded.reduced_motion);
    }
}
