// src/render/view.rs
// =============================================================================
// Pure rendering: (debounced query, AggregateResult) -> View.
//
// Layout rules:
// - Header: "Total N items", plus "Showing users for <query>" when the
//   query is not empty
// - No results: a single "No Items" placeholder instead of any groups
// - One collapsible group per user, labeled with the login; only the first
//   group starts expanded
// - A group without repositories shows "No Repository"
// - A repository card shows its name, description ("No description" if
//   missing) and star count (0 if missing)
// =============================================================================

use serde::Serialize;

use crate::search::{AggregateResult, UserRepos};
use crate::state::ViewState;

pub const NO_ITEMS: &str = "No Items";
pub const NO_REPOSITORY: &str = "No Repository";
pub const NO_DESCRIPTION: &str = "No description";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub total: usize,
    /// The debounced query, omitted when empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showing_for: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub loading: bool,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Body {
    NoItems,
    Groups { groups: Vec<Group> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub label: String,
    pub expanded: bool,
    pub content: GroupContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GroupContent {
    NoRepository,
    Cards { cards: Vec<Card> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub name: String,
    pub description: String,
    pub stars: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

pub fn render(query: &str, result: &AggregateResult) -> View {
    let body = if result.is_empty() {
        Body::NoItems
    } else {
        let groups = result
            .iter()
            .enumerate()
            .map(|(idx, entry)| group(entry, idx == 0))
            .collect();
        Body::Groups { groups }
    };

    View {
        total: result.len(),
        showing_for: (!query.is_empty()).then(|| query.to_string()),
        error: None,
        loading: false,
        body,
    }
}

// Renders the store's current state, including loading and error markers
pub fn render_state(state: &ViewState) -> View {
    View {
        error: state.error.clone(),
        loading: state.loading,
        ..render(&state.query, &state.result)
    }
}

fn group(entry: &UserRepos, expanded: bool) -> Group {
    let content = if entry.repos.is_empty() {
        GroupContent::NoRepository
    } else {
        let cards = entry
            .repos
            .iter()
            .map(|repo| Card {
                name: repo.name.clone(),
                description: repo
                    .description
                    .clone()
                    .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
                stars: repo.stargazers_count.unwrap_or(0),
                language: repo.language.clone(),
                url: repo.html_url.clone(),
            })
            .collect();
        GroupContent::Cards { cards }
    };

    Group {
        label: entry.user.login.clone(),
        expanded,
        content,
    }
}
