// src/state/store.rs
// =============================================================================
// A small observable state container for search results.
//
// Every search cycle goes through two calls:
//   let ticket = store.begin("octo");    // new query, loading = true
//   ...run the search...
//   store.finish(ticket, outcome);       // apply if still the latest
//
// Searches run concurrently and can finish in any order. Each `begin`
// hands out a sequence number; `finish` only applies an outcome whose
// ticket is the most recent one, so a slow, stale search can never
// overwrite the results of a newer query.
//
// Observers subscribe through a tokio watch channel and are woken on every
// applied change.
// =============================================================================

use tokio::sync::watch;
use tracing::debug;

use crate::search::{AggregateResult, SearchError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// The debounced query the current state belongs to
    pub query: String,
    pub result: AggregateResult,
    /// Set only when a surfaced user-search error ended the last cycle
    pub error: Option<String>,
    /// A search for `query` is in flight
    pub loading: bool,
    latest: u64,
}

/// Handle for one search cycle, returned by `ResultStore::begin`
#[derive(Debug)]
pub struct Ticket {
    seq: u64,
    query: String,
}

impl Ticket {
    pub fn query(&self) -> &str {
        &self.query
    }
}

pub struct ResultStore {
    tx: watch::Sender<ViewState>,
}

impl ResultStore {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(ViewState::default());
        Self { tx }
    }

    // Starts a new search cycle for `query`
    //
    // The query label updates right away; the previous results stay
    // visible until this cycle finishes.
    pub fn begin(&self, query: &str) -> Ticket {
        let mut seq = 0;
        self.tx.send_modify(|state| {
            state.latest += 1;
            seq = state.latest;
            state.query = query.to_string();
            state.loading = true;
        });

        Ticket {
            seq,
            query: query.to_string(),
        }
    }

    // Applies the outcome of a search cycle
    //
    // Returns false (and changes nothing) if a newer cycle has begun since.
    pub fn finish(&self, ticket: Ticket, outcome: Result<AggregateResult, SearchError>) -> bool {
        self.tx.send_if_modified(|state| {
            if state.latest != ticket.seq {
                debug!(
                    query = ticket.query.as_str(),
                    seq = ticket.seq,
                    latest = state.latest,
                    "discarding stale search result"
                );
                return false;
            }

            match outcome {
                Ok(result) => {
                    state.result = result;
                    state.error = None;
                }
                Err(e) => {
                    state.result = Vec::new();
                    state.error = Some(e.to_string());
                }
            }
            state.loading = false;
            true
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> ViewState {
        self.tx.borrow().clone()
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::FetchError;
    use crate::search::UserRepos;
    use crate::testing::user;

    fn result_for(logins: &[&str]) -> AggregateResult {
        logins
            .iter()
            .map(|l| UserRepos {
                user: user(l),
                repos: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn test_begin_then_finish() {
        let store = ResultStore::new();

        let ticket = store.begin("octo");
        assert_eq!(ticket.query(), "octo");
        let state = store.snapshot();
        assert_eq!(state.query, "octo");
        assert!(state.loading);

        assert!(store.finish(ticket, Ok(result_for(&["alice"]))));
        let state = store.snapshot();
        assert!(!state.loading);
        assert_eq!(state.result.len(), 1);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_stale_result_discarded() {
        let store = ResultStore::new();

        let old = store.begin("oct");
        let new = store.begin("octo");

        assert!(store.finish(new, Ok(result_for(&["alice", "bob"]))));
        // The older search finishes last
        assert!(!store.finish(old, Ok(result_for(&["carol"]))));

        let state = store.snapshot();
        assert_eq!(state.query, "octo");
        assert_eq!(state.result, result_for(&["alice", "bob"]));
    }

    #[test]
    fn test_stale_result_does_not_end_loading() {
        let store = ResultStore::new();

        let old = store.begin("a");
        let _new = store.begin("ab");
        assert!(!store.finish(old, Ok(result_for(&["x"]))));

        let state = store.snapshot();
        assert!(state.loading);
        assert!(state.result.is_empty());
    }

    #[test]
    fn test_error_clears_results() {
        let store = ResultStore::new();

        let ticket = store.begin("octo");
        store.finish(ticket, Ok(result_for(&["alice"])));

        let ticket = store.begin("down");
        let error = SearchError::Primary(FetchError::Status {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            url: "https://api.github.com/search/users".to_string(),
        });
        store.finish(ticket, Err(error));

        let state = store.snapshot();
        assert!(state.result.is_empty());
        assert!(state.error.unwrap().contains("503"));
    }

    #[tokio::test]
    async fn test_subscribers_notified_on_change() {
        let store = ResultStore::new();
        let mut updates = store.subscribe();

        let ticket = store.begin("octo");
        updates.changed().await.unwrap();
        assert!(updates.borrow_and_update().loading);

        store.finish(ticket, Ok(result_for(&["alice"])));
        updates.changed().await.unwrap();
        assert_eq!(updates.borrow_and_update().result.len(), 1);
    }

    #[test]
    fn test_subscribers_not_notified_by_stale_finish() {
        let store = ResultStore::new();
        let old = store.begin("a");
        let _new = store.begin("ab");

        let updates = store.subscribe();
        store.finish(old, Ok(Vec::new()));
        assert!(!updates.has_changed().unwrap());
    }
}
