pub mod note;

pub use note::{to_semitones, NoteName, Pitch, NOTE_NAMES};
