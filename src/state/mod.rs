// src/state/mod.rs
// =============================================================================
// This module holds the view state: what the renderer shows right now.
//
// - store: ResultStore, the only place the state is mutated, with
//   subscriptions for whoever needs to re-render on change
// =============================================================================

mod store;

pub use store::{ResultStore, ViewState};
