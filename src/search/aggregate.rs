// src/search/aggregate.rs
// =============================================================================
// The fetch-and-aggregate pipeline.
//
// search("octo"):
// 1. GET /search/users?q=octo&per_page=5
// 2. For every user, concurrently: GET /users/{login}/repos?per_page=3
// 3. Wait for ALL repository requests to settle
// 4. Pair each user with its repositories, in the order the search
//    returned the users
//
// Failure handling:
// - Blank query: empty result, no request at all
// - User search fails: empty result (or an error, see PrimaryFailure)
// - One repository request fails: that user gets an empty list and we log
//   a warning; the other users are unaffected
// =============================================================================

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::config::{PrimaryFailure, PRIMARY_PAGE_SIZE, SECONDARY_PAGE_SIZE};
use crate::github::{FetchError, GitHubApi, Repository, User};

/// A matched user together with their top repositories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRepos {
    pub user: User,
    pub repos: Vec<Repository>,
}

/// Users in search order, each with at most SECONDARY_PAGE_SIZE repositories
pub type AggregateResult = Vec<UserRepos>;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("user search failed: {0}")]
    Primary(#[source] FetchError),
}

pub struct SearchClient {
    api: Arc<dyn GitHubApi>,
    primary_failure: PrimaryFailure,
}

impl SearchClient {
    pub fn new(api: Arc<dyn GitHubApi>, primary_failure: PrimaryFailure) -> Self {
        Self {
            api,
            primary_failure,
        }
    }

    // Runs one full search cycle
    //
    // Only returns Err when the user search fails and the policy is
    // PrimaryFailure::Surface. Repository failures never fail a search.
    pub async fn search(&self, query: &str) -> Result<AggregateResult, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let users = match self.api.search_users(query, PRIMARY_PAGE_SIZE).await {
            Ok(users) => users,
            Err(e) => {
                return match self.primary_failure {
                    PrimaryFailure::SilentEmpty => {
                        debug!(query, error = %e, "user search failed, showing no items");
                        Ok(Vec::new())
                    }
                    PrimaryFailure::Surface => Err(SearchError::Primary(e)),
                };
            }
        };

        let users = unique_users(users);
        debug!(query, count = users.len(), "fetching repositories");

        // join_all keeps the input order, whatever order the requests finish in
        let fetches = users.into_iter().map(|user| self.fetch_repos(user));
        Ok(join_all(fetches).await)
    }

    async fn fetch_repos(&self, user: User) -> UserRepos {
        match self.api.list_repos(&user.login, SECONDARY_PAGE_SIZE).await {
            Ok(mut repos) => {
                repos.truncate(SECONDARY_PAGE_SIZE);
                UserRepos { user, repos }
            }
            Err(e) => {
                warn!(login = %user.login, error = %e, "Error fetching repos");
                UserRepos {
                    user,
                    repos: Vec::new(),
                }
            }
        }
    }
}

// Caps the list at PRIMARY_PAGE_SIZE and drops repeated logins,
// keeping the first occurrence
fn unique_users(users: Vec<User>) -> Vec<User> {
    let mut seen = HashSet::new();
    users
        .into_iter()
        .filter(|user| seen.insert(user.login.clone()))
        .take(PRIMARY_PAGE_SIZE)
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why join_all and not buffer_unordered?
//    - buffer_unordered yields results as they complete (any order)
//    - join_all waits for every future and returns results in input order
//    - We need the search order, and at most 5 requests need no limit
//
// 2. Why Arc<dyn GitHubApi>?
//    - dyn: the client doesn't care which API implementation it talks to
//    - Arc: the same API handle is shared by many concurrent searches
//
// 3. Why does fetch_repos return UserRepos and not Result?
//    - A failed repository request is not an error for the search as a
//      whole; it is turned into an empty list right where it happens
// -----------------------------------------------------------------------------
