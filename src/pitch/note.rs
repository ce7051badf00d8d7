use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Chromatic names in semitone order. Sharps only.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoteName {
    C,
    #[serde(rename = "C#")]
    Cs,
    D,
    #[serde(rename = "D#")]
    Ds,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    G,
    #[serde(rename = "G#")]
    Gs,
    A,
    #[serde(rename = "A#")]
    As,
    B,
}

impl NoteName {
    pub const ALL: [NoteName; 12] = [
        NoteName::C,
        NoteName::Cs,
        NoteName::D,
        NoteName::Ds,
        NoteName::E,
        NoteName::F,
        NoteName::Fs,
        NoteName::G,
        NoteName::Gs,
        NoteName::A,
        NoteName::As,
        NoteName::B,
    ];

    /// Position in the chromatic set, 0 (C) to 11 (B).
    pub fn index(self) -> i64 {
        self as i64
    }

    /// Wraps any integer into the chromatic set, so negative values work.
    pub fn from_index(index: i64) -> NoteName {
        NoteName::ALL[index.rem_euclid(12) as usize]
    }

    pub fn as_str(self) -> &'static str {
        NOTE_NAMES[self as usize]
    }

    /// The letter with any accidental stripped: C# -> C.
    pub fn natural(self) -> NoteName {
        match self {
            NoteName::Cs => NoteName::C,
            NoteName::Ds => NoteName::D,
            NoteName::Fs => NoteName::F,
            NoteName::Gs => NoteName::G,
            NoteName::As => NoteName::A,
            other => other,
        }
    }

    pub fn is_sharp(self) -> bool {
        self.natural() != self
    }
}

impl FromStr for NoteName {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        NOTE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| NoteName::ALL[i])
            .ok_or_else(|| EngineError::InvalidPitchName(name.to_string()))
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A note name plus an octave. Octave 4 holds middle C; no range is enforced.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pitch {
    pub note: NoteName,
    pub octave: i32,
}

impl Pitch {
    pub fn new(note: NoteName, octave: i32) -> Self {
        Pitch { note, octave }
    }

    /// Build a pitch from a raw note name such as "F#".
    pub fn parse(note: &str, octave: i32) -> Result<Self> {
        Ok(Pitch::new(note.parse()?, octave))
    }

    /// Semitone value: octave * 12 + chromatic index. C4 is 48.
    /// Widened to i64 so every i32 octave has a value.
    pub fn to_semitones(self) -> i64 {
        i64::from(self.octave) * 12 + self.note.index()
    }

    /// Fails when the octave does not fit in an i32.
    pub fn from_semitones(value: i64) -> Result<Self> {
        let octave = i32::try_from(value.div_euclid(12))
            .map_err(|_| EngineError::OctaveOutOfRange(value.div_euclid(12)))?;
        Ok(Pitch {
            note: NoteName::from_index(value),
            octave,
        })
    }

    /// MIDI number, with C4 at 60.
    pub fn midi(self) -> i64 {
        self.to_semitones() + 12
    }

    /// Equal-tempered frequency for the given A4 reference.
    pub fn frequency(self, a4_hz: f64) -> f64 {
        a4_hz * 2f64.powf((self.midi() - 69) as f64 / 12.0)
    }
}

/// Semitone value of a raw name/octave pair. Fails on names outside the set.
pub fn to_semitones(note: &str, octave: i32) -> Result<i64> {
    Pitch::parse(note, octave).map(Pitch::to_semitones)
}

impl FromStr for Pitch {
    type Err = EngineError;

    /// Parses "C4", "F#5" or "A-1".
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_digit() || c == '-')
            .unwrap_or(s.len());
        let (name, octave) = s.split_at(split);
        let note: NoteName = name.parse()?;
        let octave = octave
            .parse::<i32>()
            .map_err(|_| EngineError::InvalidOctave(octave.to_string()))?;
        Ok(Pitch { note, octave })
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.note, self.octave)
    }
}
