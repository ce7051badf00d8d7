use serde::{Deserialize, Serialize};

use crate::staff::StaffType;

/// How the written note is placed on the staff.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMode {
    /// Tap or click: a raw coordinate snaps to the nearest staff slot.
    #[default]
    Touch,
    /// Form input: an explicit note name and octave are looked up.
    Select,
}

impl PlacementMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PlacementMode::Touch => "touch",
            PlacementMode::Select => "select",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub placement: PlacementMode,
    /// Staff the sounding note is drawn on.
    pub concert_staff: StaffType,
    /// Horizontal centre of the note head.
    pub note_x: f64,
    pub ledger_half_width: f64,
    pub a4_hz: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            placement: PlacementMode::Touch,
            concert_staff: StaffType::Treble,
            note_x: 200.0,
            ledger_half_width: 20.0,
            a4_hz: 440.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.placement, PlacementMode::Touch);
        assert_eq!(config.concert_staff, StaffType::Treble);
        assert_eq!(config.note_x, 200.0);
        assert_eq!(config.a4_hz, 440.0);
    }

    #[test]
    fn test_partial_config() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"placement":"select","a4_hz":442.0}"#).unwrap();
        assert_eq!(config.placement, PlacementMode::Select);
        assert_eq!(config.a4_hz, 442.0);
        assert_eq!(config.ledger_half_width, 20.0);
        assert_eq!(config.concert_staff, StaffType::Treble);
    }

    #[test]
    fn test_bad_mode_rejected() {
        let result: Result<EngineConfig, _> = serde_json::from_str(r#"{"placement":"drag"}"#);
        assert!(result.is_err());
    }
}
