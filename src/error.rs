use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// Note name outside C, C#, D, ... B (flats included).
    #[error("invalid pitch name: '{0}'")]
    InvalidPitchName(String),

    #[error("invalid octave: '{0}'")]
    InvalidOctave(String),

    /// Transposition pushed the octave past what a pitch can hold.
    #[error("octave {0} is out of range")]
    OctaveOutOfRange(i64),

    /// NaN, infinite, or too far from the staff to draw.
    #[error("staff coordinate {0} is out of range")]
    CoordinateOutOfRange(f64),

    #[error("unknown instrument: '{0}'")]
    UnknownInstrument(String),

    #[error("unknown staff type: '{0}'")]
    UnknownStaff(String),

    /// A coordinate was fed to select mode, or a pitch to touch mode.
    #[error("{mode} placement does not accept {input} input")]
    UnsupportedInput {
        mode: &'static str,
        input: &'static str,
    },
}
