use serde::Serialize;

use crate::pitch::NoteName::{A, B, C, D, E, F, G};
use crate::pitch::{NoteName, Pitch};

/// One diatonic slot on the staff. `y` grows downwards.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct StaffPosition {
    pub y: f64,
    pub note: NoteName,
    pub octave: i32,
}

impl StaffPosition {
    const fn at(y: f64, note: NoteName, octave: i32) -> Self {
        StaffPosition { y, note, octave }
    }

    pub fn pitch(&self) -> Pitch {
        Pitch::new(self.note, self.octave)
    }
}

// Lines sit at 40, 60, 80, 100, 120; each table runs from the lowest slot up.

pub const TREBLE_POSITIONS: [StaffPosition; 13] = [
    StaffPosition::at(140.0, C, 4), // middle C, ledger
    StaffPosition::at(130.0, D, 4),
    StaffPosition::at(120.0, E, 4), // bottom line
    StaffPosition::at(110.0, F, 4),
    StaffPosition::at(100.0, G, 4),
    StaffPosition::at(90.0, A, 4),
    StaffPosition::at(80.0, B, 4), // middle line
    StaffPosition::at(70.0, C, 5),
    StaffPosition::at(60.0, D, 5),
    StaffPosition::at(50.0, E, 5),
    StaffPosition::at(40.0, F, 5), // top line
    StaffPosition::at(30.0, G, 5),
    StaffPosition::at(20.0, A, 5),
];

pub const BASS_POSITIONS: [StaffPosition; 13] = [
    StaffPosition::at(140.0, E, 2),
    StaffPosition::at(130.0, F, 2),
    StaffPosition::at(120.0, G, 2), // bottom line
    StaffPosition::at(110.0, A, 2),
    StaffPosition::at(100.0, B, 2),
    StaffPosition::at(90.0, C, 3),
    StaffPosition::at(80.0, D, 3), // middle line
    StaffPosition::at(70.0, E, 3),
    StaffPosition::at(60.0, F, 3), // F clef line
    StaffPosition::at(50.0, G, 3),
    StaffPosition::at(40.0, A, 3), // top line
    StaffPosition::at(30.0, B, 3),
    StaffPosition::at(20.0, C, 4),
];

pub const ALTO_POSITIONS: [StaffPosition; 13] = [
    StaffPosition::at(140.0, D, 3),
    StaffPosition::at(130.0, E, 3),
    StaffPosition::at(120.0, F, 3), // bottom line
    StaffPosition::at(110.0, G, 3),
    StaffPosition::at(100.0, A, 3),
    StaffPosition::at(90.0, B, 3),
    StaffPosition::at(80.0, C, 4), // middle line, middle C
    StaffPosition::at(70.0, D, 4),
    StaffPosition::at(60.0, E, 4),
    StaffPosition::at(50.0, F, 4),
    StaffPosition::at(40.0, G, 4), // top line
    StaffPosition::at(30.0, A, 4),
    StaffPosition::at(20.0, B, 4),
];
