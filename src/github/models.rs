// src/github/models.rs
// =============================================================================
// The subset of GitHub API responses we care about.
//
// serde ignores any JSON field we don't declare, so these structs only
// list what the search and the renderer actually read. Everything except
// the identifying fields is optional or defaulted: GitHub omits or nulls
// fields fairly freely, and a missing description must not break a search.
// =============================================================================

use serde::{Deserialize, Serialize};

/// Response from the user search endpoint (`/search/users`)
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<User>,
}

/// A user returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique handle, used as the group key and label
    pub login: String,
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// A repository from `/users/{login}/repos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}
