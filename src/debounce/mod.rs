// src/debounce/mod.rs
// =============================================================================
// This module turns a stream of raw input values into "stabilized" values.
//
// A value is stabilized once the input has stopped changing for a quiet
// period. Typing "o", "oc", "oct", "octo" quickly produces a single
// "octo" downstream instead of four searches.
// =============================================================================

mod debouncer;

pub use debouncer::{DebouncedValues, Debouncer};
