// src/config.rs
// =============================================================================
// Runtime configuration shared by every command.
//
// Most knobs are fixed constants: page sizes and the debounce delay are
// part of the tool's behavior, not user settings. The few things that
// vary per run (API location, HTTP timeout, what to do when the user
// search fails) are collected from the command line into `Config`.
// =============================================================================

use std::time::Duration;

/// Maximum number of users requested from the search endpoint
pub const PRIMARY_PAGE_SIZE: usize = 5;

/// Maximum number of repositories requested per user
pub const SECONDARY_PAGE_SIZE: usize = 3;

/// How long the input must stay unchanged before a search fires
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(1000);

/// Public GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Per-request timeout, same as the link checker's client
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// What happens when the user search request itself fails.
//
// The repository requests never fail a search (they fall back to an
// empty list), so this only concerns the first request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimaryFailure {
    /// Show the regular "No Items" state, as if nothing matched
    #[default]
    SilentEmpty,
    /// Report the error to the caller
    Surface,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the GitHub API (no trailing path required)
    pub api_url: String,
    /// Timeout applied to every HTTP request
    pub timeout: Duration,
    /// Policy for a failed user search
    pub primary_failure: PrimaryFailure,
}

impl Config {
    // Builds a config from the values clap hands us
    pub fn new(api_url: impl Into<String>, timeout_secs: u64, surface_errors: bool) -> Self {
        Self {
            api_url: api_url.into(),
            timeout: Duration::from_secs(timeout_secs),
            primary_failure: if surface_errors {
                PrimaryFailure::Surface
            } else {
                PrimaryFailure::SilentEmpty
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, false)
    }
}
