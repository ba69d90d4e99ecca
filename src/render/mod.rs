// src/render/mod.rs
// =============================================================================
// This module turns search results into something to display.
//
// Submodules:
// - view: the pure mapping from (query, results) to a View
// - text: prints a View for the terminal
//
// A View is plain data (and Serialize), so `--json` output and the tests
// both look at exactly what the terminal output is built from.
// =============================================================================

mod text;
mod view;

pub use view::{render, render_state};
