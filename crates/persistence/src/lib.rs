//! Flat-file snapshot persistence for the inventory.
//!
//! The snapshot is a pretty-printed JSON object mapping item names to
//! quantities, keys in sorted order so consecutive saves diff cleanly.
//! Neither `load` nor `save` fails outward: every failure is absorbed
//! into the log channel and the inventory keeps its last valid state.

pub mod snapshot;

pub use snapshot::{DEFAULT_DATA_FILE, PersistenceError, load, save};
