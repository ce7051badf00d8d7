pub mod catalog;

pub use catalog::{find_instrument, get_instruments, Instrument, INSTRUMENTS};
