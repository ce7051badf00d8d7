use serde::Serialize;

use super::positions::StaffPosition;
use super::{LINE_SPACING, MIDDLE_LINE, STAFF_BOTTOM, STAFF_TOP};
use crate::error::{EngineError, Result};
use crate::pitch::Pitch;

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct LedgerLine {
    pub y: f64,
    pub x1: f64,
    pub x2: f64,
}

/// Snap a vertical coordinate to the closest slot in `table`.
/// On a tie the earlier entry wins. Returns None only for an empty table.
pub fn nearest_position(table: &[StaffPosition], y: f64) -> Option<&StaffPosition> {
    let (first, rest) = table.split_first()?;
    let mut closest = first;
    let mut min_dist = (y - first.y).abs();

    for pos in rest {
        let dist = (y - pos.y).abs();
        if dist < min_dist {
            min_dist = dist;
            closest = pos;
        }
    }
    Some(closest)
}

/// Coordinate of `pitch` in `table`, matching on the natural letter and the
/// exact octave. Misses land on the middle line.
pub fn position_for(table: &[StaffPosition], pitch: Pitch) -> f64 {
    let natural = pitch.note.natural();
    table
        .iter()
        .find(|p| p.note == natural && p.octave == pitch.octave)
        .map(|p| p.y)
        .unwrap_or(MIDDLE_LINE)
}

/// A note this far beyond the staff is off the drawing.
pub const MAX_LEDGER_LINES: usize = 8;

/// Reject coordinates no staff can show: NaN and the infinities.
pub fn check_coordinate(y: f64) -> Result<f64> {
    if y.is_finite() {
        Ok(y)
    } else {
        Err(EngineError::CoordinateOutOfRange(y))
    }
}

/// Ledger line coordinates for a note at `y`: one per slot strictly outside
/// the staff band, out to and including the note itself.
pub fn ledger_line_ys(y: f64) -> Result<Vec<f64>> {
    let y = check_coordinate(y)?;
    let (edge, step, beyond) = if y > STAFF_BOTTOM {
        (STAFF_BOTTOM, LINE_SPACING, y - STAFF_BOTTOM)
    } else if y < STAFF_TOP {
        (STAFF_TOP, -LINE_SPACING, STAFF_TOP - y)
    } else {
        return Ok(Vec::new());
    };

    let count = (beyond / LINE_SPACING).floor();
    if count > MAX_LEDGER_LINES as f64 {
        return Err(EngineError::CoordinateOutOfRange(y));
    }
    Ok((1..=count as usize).map(|i| edge + step * i as f64).collect())
}

/// Ledger segments centred on the note head at `x`.
pub fn ledger_lines(y: f64, x: f64, half_width: f64) -> Result<Vec<LedgerLine>> {
    let lines = ledger_line_ys(y)?
        .into_iter()
        .map(|ly| LedgerLine {
            y: ly,
            x1: x - half_width,
            x2: x + half_width,
        })
        .collect();
    Ok(lines)
}
