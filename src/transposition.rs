use serde::Serialize;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::instruments::Instrument;
use crate::pitch::Pitch;
use crate::staff::placement::{ledger_lines, position_for, LedgerLine};

/// Shown before any note has been placed.
pub const EMPTY_PROMPT: &str = "Tap staff above to begin";

/// Convert a written pitch to concert pitch.
/// For Bb trumpet: interval = -2, so written C4 sounds as concert A#3.
/// Fails only when the result leaves the representable octave range.
pub fn transpose(written: Pitch, interval: i32) -> Result<Pitch> {
    Pitch::from_semitones(written.to_semitones() + i64::from(interval))
}

/// Convert a concert pitch back to what the instrument reads.
pub fn concert_to_written(concert: Pitch, interval: i32) -> Result<Pitch> {
    Pitch::from_semitones(concert.to_semitones() - i64::from(interval))
}

pub fn is_unison_transposition(interval: i32) -> bool {
    interval == 0
}

/// "Same pitch: C4" for C instruments, "Sounds: A#3" otherwise.
pub fn result_label(concert: Pitch, is_unison: bool) -> String {
    if is_unison {
        format!("Same pitch: {}", concert)
    } else {
        format!("Sounds: {}", concert)
    }
}

/// A note head on a staff.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NotePlacement {
    pub pitch: Pitch,
    pub y: f64,
    pub ledger_lines: Vec<LedgerLine>,
}

impl NotePlacement {
    pub fn new(pitch: Pitch, y: f64, config: &EngineConfig) -> Result<Self> {
        Ok(NotePlacement {
            pitch,
            y,
            ledger_lines: ledger_lines(y, config.note_x, config.ledger_half_width)?,
        })
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TransposeResult {
    pub instrument_id: String,
    pub interval: i32,
    pub written: NotePlacement,
    pub concert_note: Pitch,
    /// Where the concert note sits on the concert staff.
    pub staff_y: f64,
    pub ledger_lines: Vec<LedgerLine>,
    pub is_unison: bool,
    pub label: String,
    pub frequency_hz: f64,
}

/// Transpose a placed written note for `instrument` and place the result on
/// the configured concert staff.
pub fn transpose_placement(
    instrument: &Instrument,
    written: NotePlacement,
    config: &EngineConfig,
) -> Result<TransposeResult> {
    let interval = instrument.transposition;
    let concert_note = transpose(written.pitch, interval)?;
    let staff_y = position_for(config.concert_staff.positions(), concert_note);
    let is_unison = is_unison_transposition(interval);

    Ok(TransposeResult {
        instrument_id: instrument.id.to_string(),
        interval,
        written,
        concert_note,
        staff_y,
        ledger_lines: ledger_lines(staff_y, config.note_x, config.ledger_half_width)?,
        is_unison,
        label: result_label(concert_note, is_unison),
        frequency_hz: concert_note.frequency(config.a4_hz),
    })
}

/// Transpose an explicit written pitch, looking its position up on the
/// instrument's own staff.
pub fn transpose_for(
    instrument: &Instrument,
    written: Pitch,
    config: &EngineConfig,
) -> Result<TransposeResult> {
    let y = position_for(instrument.positions(), written);
    transpose_placement(instrument, NotePlacement::new(written, y, config)?, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::instruments::find_instrument;
    use crate::pitch::NoteName;

    fn p(note: NoteName, octave: i32) -> Pitch {
        Pitch::new(note, octave)
    }

    #[test]
    fn test_bb_instrument() {
        // Written C4 -> concert A#3
        assert_eq!(transpose(p(NoteName::C, 4), -2), Ok(p(NoteName::As, 3)));
        // Written B4 -> concert A4
        assert_eq!(transpose(p(NoteName::B, 4), -2), Ok(p(NoteName::A, 4)));
    }

    #[test]
    fn test_eb_instrument() {
        assert_eq!(transpose(p(NoteName::A, 4), -9), Ok(p(NoteName::C, 4)));
    }

    #[test]
    fn test_bass_clef() {
        assert_eq!(transpose(p(NoteName::G, 3), -12), Ok(p(NoteName::G, 2)));
    }

    #[test]
    fn test_horn() {
        // Written C5 -> concert F4
        assert_eq!(transpose(p(NoteName::C, 5), -7), Ok(p(NoteName::F, 4)));
    }

    #[test]
    fn test_no_transposition() {
        assert_eq!(transpose(p(NoteName::E, 4), 0), Ok(p(NoteName::E, 4)));
        assert!(is_unison_transposition(0));
        assert!(!is_unison_transposition(-2));
    }

    #[test]
    fn test_concert_to_written() {
        assert_eq!(
            concert_to_written(p(NoteName::As, 3), -2),
            Ok(p(NoteName::C, 4))
        );
        assert_eq!(
            concert_to_written(p(NoteName::C, 4), -9),
            Ok(p(NoteName::A, 4))
        );
    }

    #[test]
    fn test_roundtrip() {
        for semis in 0..=108 {
            let written = Pitch::from_semitones(semis).unwrap();
            let concert = transpose(written, -9).unwrap();
            assert_eq!(concert_to_written(concert, -9), Ok(written));
        }
    }

    #[test]
    fn test_extreme_octave() {
        let written = p(NoteName::C, 200_000_000);
        assert_eq!(transpose(written, -2), Ok(p(NoteName::As, 199_999_999)));

        let top = p(NoteName::B, i32::MAX);
        assert_eq!(
            transpose(top, 1),
            Err(EngineError::OctaveOutOfRange(i64::from(i32::MAX) + 1))
        );
        let bottom = p(NoteName::C, i32::MIN);
        assert!(transpose(bottom, -2).is_err());
        assert!(concert_to_written(bottom, 2).is_err());
        assert_eq!(transpose(bottom, 0), Ok(bottom));
    }

    #[test]
    fn test_transpose_for_extreme_octave() {
        let config = EngineConfig::default();
        let bb = find_instrument("Bb").unwrap();
        let result = transpose_for(bb, p(NoteName::C, 200_000_000), &config).unwrap();
        assert_eq!(result.concert_note, p(NoteName::As, 199_999_999));
        // Off every table, so both notes sit on the middle line
        assert_eq!(result.written.y, 80.0);
        assert_eq!(result.staff_y, 80.0);

        let result = transpose_for(bb, p(NoteName::C, i32::MIN), &config);
        assert!(matches!(result, Err(EngineError::OctaveOutOfRange(_))));
    }

    #[test]
    fn test_labels() {
        assert_eq!(result_label(p(NoteName::C, 4), true), "Same pitch: C4");
        assert_eq!(result_label(p(NoteName::As, 3), false), "Sounds: A#3");
    }

    #[test]
    fn test_transpose_for_bb() {
        let config = EngineConfig::default();
        let bb = find_instrument("Bb").unwrap();
        let result = transpose_for(bb, p(NoteName::D, 5), &config).unwrap();

        assert_eq!(result.written.y, 60.0);
        assert!(result.written.ledger_lines.is_empty());
        assert_eq!(result.concert_note, p(NoteName::C, 5));
        assert_eq!(result.staff_y, 70.0);
        assert!(!result.is_unison);
        assert_eq!(result.label, "Sounds: C5");
        assert_eq!(result.interval, -2);
    }

    #[test]
    fn test_concert_below_staff_gets_ledgers() {
        let config = EngineConfig::default();
        let eb = find_instrument("Eb").unwrap();
        // Written A4 -> concert C4, middle C below the treble staff
        let result = transpose_for(eb, p(NoteName::A, 4), &config).unwrap();
        assert_eq!(result.staff_y, 140.0);
        let ys: Vec<f64> = result.ledger_lines.iter().map(|l| l.y).collect();
        assert_eq!(ys, vec![130.0, 140.0]);
    }

    #[test]
    fn test_concert_off_table_falls_back_to_middle_line() {
        let config = EngineConfig::default();
        let bass = find_instrument("bass").unwrap();
        // Concert G2 is not on the treble table
        let result = transpose_for(bass, p(NoteName::G, 3), &config).unwrap();
        assert_eq!(result.concert_note, p(NoteName::G, 2));
        assert_eq!(result.staff_y, 80.0);
        assert!(result.ledger_lines.is_empty());
    }

    #[test]
    fn test_concert_staff_configurable() {
        let config = EngineConfig {
            concert_staff: crate::staff::StaffType::Bass,
            ..EngineConfig::default()
        };
        let bass = find_instrument("bass").unwrap();
        let result = transpose_for(bass, p(NoteName::G, 3), &config).unwrap();
        assert_eq!(result.staff_y, 120.0);
    }

    #[test]
    fn test_unison_label() {
        let config = EngineConfig::default();
        let alto = find_instrument("alto").unwrap();
        let result = transpose_for(alto, p(NoteName::C, 4), &config).unwrap();
        assert!(result.is_unison);
        assert_eq!(result.label, "Same pitch: C4");
        assert!((result.frequency_hz - 261.6256).abs() < 0.001);
    }
}
