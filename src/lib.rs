use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod instruments;
pub mod pitch;
pub mod session;
pub mod staff;
pub mod transposition;

use config::EngineConfig;
use pitch::Pitch;
use serde::Serialize;
use session::{NoteInput, TransposeState};
use staff::StaffType;
use transposition::TransposeResult;

fn js_err<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(js_err)
}

fn config_from_js(config_js: JsValue) -> Result<EngineConfig, JsValue> {
    if config_js.is_null() || config_js.is_undefined() {
        Ok(EngineConfig::default())
    } else {
        serde_wasm_bindgen::from_value(config_js).map_err(js_err)
    }
}

fn state_from_js(state_js: JsValue) -> Result<TransposeState, JsValue> {
    if state_js.is_null() || state_js.is_undefined() {
        Ok(TransposeState::new())
    } else {
        serde_wasm_bindgen::from_value(state_js).map_err(js_err)
    }
}

#[derive(Serialize)]
struct Placed {
    state: TransposeState,
    result: TransposeResult,
}

/// Transpose a written note by `interval` semitones, returning the concert Pitch.
#[wasm_bindgen]
pub fn transpose_pitch(note: &str, octave: i32, interval: i32) -> Result<JsValue, JsValue> {
    let written = Pitch::parse(note, octave).map_err(js_err)?;
    let concert = transposition::transpose(written, interval).map_err(js_err)?;
    to_js(&concert)
}

/// Like `transpose_pitch`, but takes the written note as text such as "F#4".
#[wasm_bindgen]
pub fn transpose_written(written: &str, interval: i32) -> Result<JsValue, JsValue> {
    let written: Pitch = written.parse().map_err(js_err)?;
    let concert = transposition::transpose(written, interval).map_err(js_err)?;
    to_js(&concert)
}

/// Full TransposeResult for a written note on the given instrument.
#[wasm_bindgen]
pub fn transpose_for_instrument(
    instrument_id: &str,
    note: &str,
    octave: i32,
    config_js: JsValue,
) -> Result<JsValue, JsValue> {
    let config = config_from_js(config_js)?;
    let instrument = instruments::find_instrument(instrument_id).map_err(js_err)?;
    let written = Pitch::parse(note, octave).map_err(js_err)?;
    let result = transposition::transpose_for(instrument, written, &config).map_err(js_err)?;
    to_js(&result)
}

/// The instrument/clef catalog in cycle order.
#[wasm_bindgen]
pub fn get_instruments() -> Result<JsValue, JsValue> {
    to_js(&instruments::get_instruments())
}

#[wasm_bindgen]
pub fn new_transpose_state() -> Result<JsValue, JsValue> {
    to_js(&TransposeState::new())
}

/// Advance to the next clef, clearing the placed note.
#[wasm_bindgen]
pub fn cycle_instrument(state_js: JsValue) -> Result<JsValue, JsValue> {
    let mut state = state_from_js(state_js)?;
    state.cycle();
    to_js(&state)
}

#[wasm_bindgen]
pub fn select_instrument(state_js: JsValue, instrument_id: &str) -> Result<JsValue, JsValue> {
    let mut state = state_from_js(state_js)?;
    state.select_instrument(instrument_id).map_err(js_err)?;
    to_js(&state)
}

/// Snap a tap at staff coordinate `y` to a written note and transpose it.
/// Returns `{ state, result }`.
#[wasm_bindgen]
pub fn place_note(state_js: JsValue, y: f64, config_js: JsValue) -> Result<JsValue, JsValue> {
    let mut state = state_from_js(state_js)?;
    let config = config_from_js(config_js)?;
    let result = state
        .place(NoteInput::Coordinate(y), &config)
        .map_err(js_err)?;
    to_js(&Placed { state, result })
}

/// Place an explicitly chosen written note. Returns `{ state, result }`.
#[wasm_bindgen]
pub fn select_note(
    state_js: JsValue,
    note: &str,
    octave: i32,
    config_js: JsValue,
) -> Result<JsValue, JsValue> {
    let mut state = state_from_js(state_js)?;
    let config = config_from_js(config_js)?;
    let pitch = Pitch::parse(note, octave).map_err(js_err)?;
    let result = state.place(NoteInput::Pitch(pitch), &config).map_err(js_err)?;
    to_js(&Placed { state, result })
}

/// "Same pitch: X", "Sounds: X", or the empty-staff prompt.
#[wasm_bindgen]
pub fn transpose_message(state_js: JsValue, config_js: JsValue) -> Result<String, JsValue> {
    let state = state_from_js(state_js)?;
    let config = config_from_js(config_js)?;
    state.message(&config).map_err(js_err)
}

#[wasm_bindgen]
pub fn nearest_staff_note(staff_name: &str, y: f64) -> Result<JsValue, JsValue> {
    let staff_type: StaffType = staff_name.parse().map_err(js_err)?;
    let y = staff::placement::check_coordinate(y).map_err(js_err)?;
    let slot = staff::placement::nearest_position(staff_type.positions(), y)
        .ok_or_else(|| JsValue::from_str("empty staff table"))?;
    to_js(&slot.pitch())
}

/// Ledger line y coordinates for a note head at `y`, as a Float64Array.
/// Fails for non-finite `y` or a note too far off the staff.
#[wasm_bindgen]
pub fn ledger_lines(y: f64) -> Result<js_sys::Float64Array, JsValue> {
    let ys = staff::placement::ledger_line_ys(y).map_err(js_err)?;
    let arr = js_sys::Float64Array::new_with_length(ys.len() as u32);
    for (i, ly) in ys.iter().enumerate() {
        arr.set_index(i as u32, *ly);
    }
    Ok(arr)
}

#[wasm_bindgen]
pub fn note_frequency(note: &str, octave: i32, a4_hz: f64) -> Result<f64, JsValue> {
    let pitch = Pitch::parse(note, octave).map_err(js_err)?;
    Ok(pitch.frequency(a4_hz))
}
