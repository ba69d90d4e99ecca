// src/search/mod.rs
// =============================================================================
// This module runs a complete search: users first, then their repositories.
//
// Submodules:
// - aggregate: the SearchClient and the AggregateResult it produces
// =============================================================================

mod aggregate;

pub use aggregate::{AggregateResult, SearchClient, SearchError, UserRepos};
