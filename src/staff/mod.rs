pub mod placement;
pub mod positions;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use positions::{StaffPosition, ALTO_POSITIONS, BASS_POSITIONS, TREBLE_POSITIONS};

/// The five staff lines, top to bottom.
pub const STAFF_LINES: [f64; 5] = [40.0, 60.0, 80.0, 100.0, 120.0];
pub const STAFF_TOP: f64 = 40.0;
pub const STAFF_BOTTOM: f64 = 120.0;
pub const MIDDLE_LINE: f64 = 80.0;
/// Distance between adjacent diatonic slots (a line and the next space).
pub const LINE_SPACING: f64 = 10.0;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StaffType {
    #[default]
    Treble,
    Bass,
    Alto,
}

impl StaffType {
    pub fn positions(self) -> &'static [StaffPosition] {
        match self {
            StaffType::Treble => &TREBLE_POSITIONS,
            StaffType::Bass => &BASS_POSITIONS,
            StaffType::Alto => &ALTO_POSITIONS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StaffType::Treble => "treble",
            StaffType::Bass => "bass",
            StaffType::Alto => "alto",
        }
    }
}

impl FromStr for StaffType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "treble" => Ok(StaffType::Treble),
            "bass" => Ok(StaffType::Bass),
            "alto" => Ok(StaffType::Alto),
            other => Err(EngineError::UnknownStaff(other.to_string())),
        }
    }
}

impl fmt::Display for StaffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
