//! The transpose tool's selection state, held by the UI and passed in by value.

use serde::{Deserialize, Serialize};

use crate::config::{EngineConfig, PlacementMode};
use crate::error::{EngineError, Result};
use crate::instruments::catalog::{index_of, next_index};
use crate::instruments::{Instrument, INSTRUMENTS};
use crate::pitch::Pitch;
use crate::staff::placement::{check_coordinate, nearest_position, position_for};
use crate::transposition::{transpose_placement, NotePlacement, TransposeResult, EMPTY_PROMPT};

/// Raw input from the collaborator: where the user tapped, or what they picked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoteInput {
    Coordinate(f64),
    Pitch(Pitch),
}

impl NoteInput {
    fn kind(&self) -> &'static str {
        match self {
            NoteInput::Coordinate(_) => "coordinate",
            NoteInput::Pitch(_) => "pitch",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TransposeState {
    pub clef_index: usize,
    pub written_note: Option<Pitch>,
    pub written_y: Option<f64>,
}

impl TransposeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current catalog entry. Out-of-range indices from the UI wrap around.
    pub fn instrument(&self) -> &'static Instrument {
        &INSTRUMENTS[self.clef_index % INSTRUMENTS.len()]
    }

    pub fn has_note(&self) -> bool {
        self.written_note.is_some()
    }

    pub fn clear_note(&mut self) {
        self.written_note = None;
        self.written_y = None;
    }

    /// Advance to the next clef. Positions differ per staff, so the note goes.
    pub fn cycle(&mut self) {
        self.clef_index = next_index(self.clef_index % INSTRUMENTS.len());
        self.clear_note();
    }

    pub fn select_instrument(&mut self, id: &str) -> Result<()> {
        self.clef_index = index_of(id)?;
        self.clear_note();
        Ok(())
    }

    /// Place the written note and transpose it. The placement mode decides
    /// which kind of input is accepted. On failure the state is unchanged.
    pub fn place(&mut self, input: NoteInput, config: &EngineConfig) -> Result<TransposeResult> {
        let instrument = self.instrument();
        let table = instrument.positions();

        let (pitch, y) = match (config.placement, input) {
            (PlacementMode::Touch, NoteInput::Coordinate(y)) => {
                let slot = nearest_position(table, check_coordinate(y)?)
                    .ok_or_else(|| EngineError::UnknownStaff(instrument.staff.to_string()))?;
                (slot.pitch(), slot.y)
            }
            (PlacementMode::Select, NoteInput::Pitch(pitch)) => (pitch, position_for(table, pitch)),
            (mode, input) => {
                return Err(EngineError::UnsupportedInput {
                    mode: mode.as_str(),
                    input: input.kind(),
                })
            }
        };

        let result = self.transpose_current(pitch, y, config)?;
        self.written_note = Some(pitch);
        self.written_y = Some(y);
        Ok(result)
    }

    /// Result for whatever is currently placed, if anything.
    pub fn result(&self, config: &EngineConfig) -> Result<Option<TransposeResult>> {
        let Some(pitch) = self.written_note else {
            return Ok(None);
        };
        let y = self
            .written_y
            .unwrap_or_else(|| position_for(self.instrument().positions(), pitch));
        self.transpose_current(pitch, y, config).map(Some)
    }

    pub fn message(&self, config: &EngineConfig) -> Result<String> {
        Ok(match self.result(config)? {
            Some(result) => result.label,
            None => EMPTY_PROMPT.to_string(),
        })
    }

    fn transpose_current(
        &self,
        pitch: Pitch,
        y: f64,
        config: &EngineConfig,
    ) -> Result<TransposeResult> {
        let written = NotePlacement::new(pitch, y, config)?;
        transpose_placement(self.instrument(), written, config)
    }
}
