// src/session.rs
// =============================================================================
// The interactive search session.
//
// Every line read from stdin is the new content of the search box. The
// pieces are wired like this:
//
//   stdin lines ──► Debouncer ──► one search task per stabilized query
//                                          │
//                                          ▼
//   stdout ◄── renderer ◄── subscribe ── ResultStore (latest search wins)
//
// Searches are not cancelled when a newer query arrives; they run to
// completion and the store drops their result if it is stale.
// At EOF the last pending value is flushed, the session waits for all
// in-flight searches and exits.
//
// Rust concepts used:
// - tokio::spawn: runs a future as an independent task
// - Arc: shares the search client and the store between tasks
// - JoinSet: keeps track of many spawned tasks so we can wait for them
// =============================================================================

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::debug;

use crate::config::{Config, DEBOUNCE_DELAY};
use crate::debounce::{DebouncedValues, Debouncer};
use crate::github::GitHubClient;
use crate::render;
use crate::search::SearchClient;
use crate::state::ResultStore;

// Handles the 'interactive' subcommand
//
// Parameters:
//   config: API location, timeout and error policy
//   expand_all: show every user group expanded instead of only the first
pub async fn run_interactive(config: &Config, expand_all: bool) -> Result<()> {
    // One HTTP client for the whole session (connection pooling)
    let api = GitHubClient::new(config).context("Failed to create GitHub client")?;
    let search = Arc::new(SearchClient::new(Arc::new(api), config.primary_failure));

    // The single place where displayed results live
    let store = Arc::new(ResultStore::new());

    // Print the initial empty view ("No Items") before anything is typed
    println!("{}", render::render_state(&store.snapshot()).to_text(expand_all));

    // Renderer task: wakes up on every applied state change and reprints.
    // The loop ends once every store handle is dropped.
    let mut updates = store.subscribe();
    let renderer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let view = render::render_state(&updates.borrow_and_update());
            println!("{}", view.to_text(expand_all));
        }
    });

    // Raw input goes in one end, stabilized queries come out the other
    let (input, debounced) = Debouncer::new(String::new(), DEBOUNCE_DELAY);

    // Reader task: each stdin line replaces the search box content.
    // Dropping `input` at EOF closes the debouncer.
    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            input.set(line);
        }
        Ok::<_, std::io::Error>(())
    });

    // Runs until stdin is closed and every search has settled
    drive(search, store, debounced).await?;

    // The outer `?` catches a panicked task, the inner one an I/O error
    reader
        .await
        .context("stdin reader panicked")?
        .context("Failed to read stdin")?;

    // All store handles are gone now, which ends the renderer loop
    renderer.await.context("renderer panicked")?;
    Ok(())
}

// Starts a search for every stabilized query and waits for all of them
//
// Queries are trimmed here, once, so the "Showing users for" label and the
// search itself agree: blank input behaves exactly like an empty box.
pub async fn drive(
    search: Arc<SearchClient>,
    store: Arc<ResultStore>,
    mut debounced: DebouncedValues<String>,
) -> Result<()> {
    let mut in_flight = JoinSet::new();

    while let Some(raw) = debounced.next().await {
        let query = raw.trim();
        debug!(query, "query stabilized");

        // Label updates now; results arrive when the task finishes
        let ticket = store.begin(query);

        // Each task gets its own handles to the shared client and store
        let search = search.clone();
        let store = store.clone();

        in_flight.spawn(async move {
            let outcome = search.search(ticket.query()).await;
            store.finish(ticket, outcome);
        });

        // Reap whatever already finished so the set doesn't grow forever
        while let Some(done) = in_flight.try_join_next() {
            done.context("search task panicked")?;
        }
    }

    while let Some(done) = in_flight.join_next().await {
        done.context("search task panicked")?;
    }
    Ok(())
}
