use serde::Serialize;

use crate::error::{EngineError, Result};
use crate::staff::positions::StaffPosition;
use crate::staff::StaffType;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Instrument {
    pub id: &'static str,
    pub label: &'static str,
    pub instrument_label: &'static str,
    /// Semitones added to the written pitch to get concert pitch.
    pub transposition: i32,
    pub staff: StaffType,
    pub symbol: &'static str,
    /// Where the clef glyph is anchored and how large it is drawn.
    pub clef_y: f64,
    pub font_size: f64,
}

impl Instrument {
    pub fn positions(&self) -> &'static [StaffPosition] {
        self.staff.positions()
    }

    pub fn is_concert_pitch(&self) -> bool {
        self.transposition == 0
    }
}

const G_CLEF: &str = "\u{1D11E}";
const F_CLEF: &str = "\u{1D122}";
const C_CLEF: &str = "\u{1D121}";

/// Clefs and transposing instruments, in the order the clef button cycles.
pub static INSTRUMENTS: [Instrument; 6] = [
    Instrument {
        id: "treble",
        label: "Treble Clef",
        instrument_label: "Concert Pitch (C)",
        transposition: 0,
        staff: StaffType::Treble,
        symbol: G_CLEF,
        clef_y: 80.0,
        font_size: 100.0,
    },
    Instrument {
        id: "Bb",
        label: "B\u{266D} Treble",
        instrument_label: "B\u{266D} (Cl, Tpt, Ten Sax)",
        transposition: -2,
        staff: StaffType::Treble,
        symbol: G_CLEF,
        clef_y: 80.0,
        font_size: 100.0,
    },
    Instrument {
        id: "Eb",
        label: "E\u{266D} Treble",
        instrument_label: "E\u{266D} (Alto Sax)",
        transposition: -9,
        staff: StaffType::Treble,
        symbol: G_CLEF,
        clef_y: 80.0,
        font_size: 100.0,
    },
    Instrument {
        id: "F",
        label: "F Treble",
        instrument_label: "F (Horn)",
        transposition: -7,
        staff: StaffType::Treble,
        symbol: G_CLEF,
        clef_y: 80.0,
        font_size: 100.0,
    },
    Instrument {
        id: "bass",
        label: "Bass Clef",
        instrument_label: "Bass Clef",
        transposition: -12,
        staff: StaffType::Bass,
        symbol: F_CLEF,
        clef_y: 60.0,
        font_size: 85.0,
    },
    Instrument {
        id: "alto",
        label: "Alto Clef",
        instrument_label: "Alto Clef",
        // Alto clef is read at concert pitch here, i.e. viola-style C instruments.
        transposition: 0,
        staff: StaffType::Alto,
        symbol: C_CLEF,
        clef_y: 80.0,
        font_size: 100.0,
    },
];

pub fn get_instruments() -> &'static [Instrument] {
    &INSTRUMENTS
}

pub fn find_instrument(id: &str) -> Result<&'static Instrument> {
    index_of(id).map(|i| &INSTRUMENTS[i])
}

pub fn index_of(id: &str) -> Result<usize> {
    let id = id.trim();
    INSTRUMENTS
        .iter()
        .position(|inst| inst.id == id)
        .ok_or_else(|| EngineError::UnknownInstrument(id.to_string()))
}

/// Index after `index`, wrapping at the end of the catalog.
pub fn next_index(index: usize) -> usize {
    (index + 1) % INSTRUMENTS.len()
}
