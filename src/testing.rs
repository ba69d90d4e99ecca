// src/testing.rs
// =============================================================================
// Test helpers: an in-memory `GitHubApi` answering from fixtures.
//
// - Search results are keyed by query; an unknown query fails with HTTP 500
// - Repositories are keyed by login; an unknown login fails with HTTP 500
// - Optional per-query / per-login delays let tests control completion order
//   (use with `#[tokio::test(start_paused = true)]`)
//
// Also: `capture_logs()`, which records tracing output so tests can check
// that a diagnostic was actually emitted.
// =============================================================================

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::github::{FetchError, GitHubApi, Repository, User};

#[derive(Debug, Default)]
pub struct FakeApi {
    users: HashMap<String, Vec<User>>,
    repos: HashMap<String, Vec<Repository>>,
    search_delays: HashMap<String, Duration>,
    repo_delays: HashMap<String, Duration>,
    search_calls: AtomicUsize,
    repo_calls: AtomicUsize,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(mut self, query: &str, logins: &[&str]) -> Self {
        self.users
            .insert(query.to_string(), logins.iter().map(|l| user(l)).collect());
        self
    }

    pub fn with_repos(mut self, login: &str, repos: Vec<Repository>) -> Self {
        self.repos.insert(login.to_string(), repos);
        self
    }

    pub fn with_search_delay(mut self, query: &str, delay: Duration) -> Self {
        self.search_delays.insert(query.to_string(), delay);
        self
    }

    pub fn with_repo_delay(mut self, login: &str, delay: Duration) -> Self {
        self.repo_delays.insert(login.to_string(), delay);
        self
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn repo_calls(&self) -> usize {
        self.repo_calls.load(Ordering::SeqCst)
    }
}

fn server_error(what: &str) -> FetchError {
    FetchError::Status {
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        url: format!("fake://{}", what),
    }
}

#[async_trait]
impl GitHubApi for FakeApi {
    async fn search_users(&self, query: &str, per_page: usize) -> Result<Vec<User>, FetchError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.search_delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
        match self.users.get(query) {
            Some(users) => Ok(users.iter().take(per_page).cloned().collect()),
            None => Err(server_error(&format!("search/users?q={}", query))),
        }
    }

    async fn list_repos(
        &self,
        login: &str,
        _per_page: usize,
    ) -> Result<Vec<Repository>, FetchError> {
        self.repo_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.repo_delays.get(login) {
            tokio::time::sleep(*delay).await;
        }
        // per_page deliberately ignored so callers' own truncation is exercised
        self.repos
            .get(login)
            .cloned()
            .ok_or_else(|| server_error(&format!("users/{}/repos", login)))
    }
}

pub fn user(login: &str) -> User {
    User {
        login: login.to_string(),
        id: 0,
        avatar_url: None,
        html_url: None,
    }
}

pub fn repo(name: &str, description: Option<&str>, stars: Option<u64>) -> Repository {
    Repository {
        name: name.to_string(),
        description: description.map(str::to_string),
        stargazers_count: stars,
        language: None,
        html_url: None,
    }
}

// Shared buffer the capturing subscriber writes into
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// Installs a plain-text subscriber for the current thread
//
// Keep the guard alive for as long as logs should be captured. Works with
// `#[tokio::test]`, whose runtime runs every task on the test thread.
pub fn capture_logs() -> (tracing::subscriber::DefaultGuard, LogCapture) {
    let capture = LogCapture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    (tracing::subscriber::set_default(subscriber), capture)
}
