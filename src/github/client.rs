// src/github/client.rs
// =============================================================================
// reqwest implementation of the `GitHubApi` trait.
//
// Strategy:
// - One shared reqwest Client (connection pooling, default headers, timeout)
// - Endpoints are built with the `url` crate so logins and queries are
//   percent-encoded properly
// - Any non-2xx status is an error; the caller decides what that means
//
// GitHub rejects requests without a User-Agent, so we always send one.
// =============================================================================

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::{FetchError, GitHubApi, Repository, SearchResponse, User};
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base: Url,
}

impl GitHubClient {
    // Creates a client for the API at `config.api_url`
    //
    // Fails if the URL doesn't parse or can't have path segments
    // (e.g. "mailto:..."), or if reqwest can't build its TLS backend.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let base = Url::parse(&config.api_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", config.api_url, e)))?;

        if base.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(config.api_url.clone()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("github-user-repos/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, base })
    }

    // Appends path segments to the base URL
    //
    // Example:
    //   base = "https://api.github.com", segments = ["users", "octocat", "repos"]
    //   -> "https://api.github.com/users/octocat/repos"
    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn search_url(&self, query: &str, per_page: usize) -> Result<Url, FetchError> {
        let mut url = self.endpoint(&["search", "users"])?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("per_page", &per_page.to_string());
        Ok(url)
    }

    fn repos_url(&self, login: &str, per_page: usize) -> Result<Url, FetchError> {
        let mut url = self.endpoint(&["users", login, "repos"])?;
        url.query_pairs_mut()
            .append_pair("per_page", &per_page.to_string());
        Ok(url)
    }

    // GETs a URL and decodes the JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!(%url, "GET");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn search_users(&self, query: &str, per_page: usize) -> Result<Vec<User>, FetchError> {
        let url = self.search_url(query, per_page)?;
        let response: SearchResponse = self.get_json(url).await?;
        Ok(response.items)
    }

    async fn list_repos(
        &self,
        login: &str,
        per_page: usize,
    ) -> Result<Vec<Repository>, FetchError> {
        let url = self.repos_url(login, per_page)?;
        self.get_json(url).await
    }
}
