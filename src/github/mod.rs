// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Two read-only endpoints are used:
// - GET /search/users?q=...&per_page=N      (who matches the query)
// - GET /users/{login}/repos?per_page=N     (a user's repositories)
//
// The search code never uses reqwest directly. It goes through the
// `GitHubApi` trait, so tests can plug in a fake API that answers from
// fixtures (and fails on demand) without touching the network.
// =============================================================================

mod client;
mod models;

use async_trait::async_trait;

pub use client::GitHubClient;
pub use models::{Repository, SearchResponse, User};

// Errors from a single API request
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid API URL: {0}")]
    InvalidUrl(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

// The two lookups the search pipeline needs
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Users matching `query`, in the API's ranking order, at most `per_page`
    async fn search_users(&self, query: &str, per_page: usize) -> Result<Vec<User>, FetchError>;

    /// Repositories owned by `login`, at most `per_page`
    async fn list_repos(&self, login: &str, per_page: usize)
        -> Result<Vec<Repository>, FetchError>;
}
