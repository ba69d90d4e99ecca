// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - search: run one search for a query and print the result
// - interactive: read the search box contents line by line from stdin,
//   debounce them, and re-render as results arrive
//
// Options shared by both (API URL, timeout, error policy) live in
// `ApiArgs` and are flattened into each subcommand.
// =============================================================================

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(
    name = "github-user-repos",
    version,
    about = "Search GitHub users and show their top repositories",
    long_about = "github-user-repos searches GitHub for users matching a name and lists \
                  up to three repositories for each of the first five matches, with star counts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search once and print the results
    ///
    /// Example: github-user-repos search octo --expand-all
    Search {
        /// Name (or part of a name) to search for
        query: String,

        /// Output results in JSON format instead of text
        #[arg(long)]
        json: bool,

        /// Expand every user group (only the first one is expanded by default)
        #[arg(long)]
        expand_all: bool,

        #[command(flatten)]
        api: ApiArgs,
    },

    /// Read queries from stdin, one line per edit of the search box
    ///
    /// Each line replaces the current input. A search runs once the input
    /// has been unchanged for one second. End with Ctrl-D.
    Interactive {
        /// Expand every user group (only the first one is expanded by default)
        #[arg(long)]
        expand_all: bool,

        #[command(flatten)]
        api: ApiArgs,
    },
}

#[derive(Args, Debug)]
pub struct ApiArgs {
    /// Base URL of the GitHub API
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Timeout for each HTTP request, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Report a failed user search as an error instead of showing "No Items"
    #[arg(long)]
    pub surface_errors: bool,
}

impl ApiArgs {
    pub fn to_config(&self) -> Config {
        Config::new(self.api_url.clone(), self.timeout, self.surface_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PrimaryFailure;

    #[test]
    fn test_search_defaults() {
        let cli = Cli::try_parse_from(["github-user-repos", "search", "octo"]).unwrap();
        match cli.command {
            Commands::Search {
                query,
                json,
                expand_all,
                api,
            } => {
                assert_eq!(query, "octo");
                assert!(!json);
                assert!(!expand_all);
                let config = api.to_config();
                assert_eq!(config.api_url, DEFAULT_API_URL);
                assert_eq!(config.primary_failure, PrimaryFailure::SilentEmpty);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_interactive_options() {
        let cli = Cli::try_parse_from([
            "github-user-repos",
            "interactive",
            "--expand-all",
            "--surface-errors",
            "--api-url",
            "http://localhost:9000",
            "--timeout",
            "2",
        ])
        .unwrap();
        match cli.command {
            Commands::Interactive { expand_all, api } => {
                assert!(expand_all);
                let config = api.to_config();
                assert_eq!(config.api_url, "http://localhost:9000");
                assert_eq!(config.timeout.as_secs(), 2);
                assert_eq!(config.primary_failure, PrimaryFailure::Surface);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["github-user-repos", "search"]).is_err());
    }
}
