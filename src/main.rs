// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing, to stderr, filtered by RUST_LOG)
// 2. Parse command-line arguments using clap
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 2 = error)
//
// Rust concepts used:
// - async/await: the user search and the repository fetches are network I/O
// - Result<T, E> and `?`: errors bubble up to main, which picks the exit code
// - Arc: the search client shares one API handle across concurrent fetches
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;        // src/cli.rs - command-line parsing
mod config;     // src/config.rs - constants and runtime settings
mod debounce;   // src/debounce/ - input stabilization
mod github;     // src/github/ - GitHub REST API client
mod render;     // src/render/ - turning results into text / JSON
mod search;     // src/search/ - users + repositories pipeline
mod session;    // src/session.rs - the interactive loop
mod state;      // src/state/ - observable view state

#[cfg(test)]
mod testing;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::Config;
use github::GitHubClient;
use search::SearchClient;

#[tokio::main]
async fn main() {
    // Logging first, so even argument handling can emit diagnostics
    init_logging();

    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so stdout stays clean for text and JSON output.
// Defaults to warnings only (failed repository fetches show up there).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Returns:
//   Ok(0) = results (or "No Items") printed
//   Err   = unexpected error, mapped to exit code 2 by main
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Match on which subcommand was used
    match cli.command {
        Commands::Search {
            query,
            json,
            expand_all,
            api,
        } => handle_search(&query, &api.to_config(), json, expand_all).await,
        Commands::Interactive { expand_all, api } => {
            session::run_interactive(&api.to_config(), expand_all).await?;
            Ok(0)
        }
    }
}

// Handles the 'search' subcommand
//
// Parameters:
//   query: the name to search for (whitespace around it is ignored)
//   config: API location, timeout and error policy
//   json: print the rendered view as JSON instead of text
//   expand_all: expand every user group in text output
async fn handle_search(query: &str, config: &Config, json: bool, expand_all: bool) -> Result<i32> {
    // Trim once so the label and the request use the same query
    let query = query.trim();

    // Build the HTTP client and wrap it in the search pipeline
    let api = GitHubClient::new(config).context("Failed to create GitHub client")?;
    let search = SearchClient::new(Arc::new(api), config.primary_failure);

    // Only fails when --surface-errors is set and the user search failed
    let result = search.search(query).await?;
    let view = render::render(query, &result);

    // Print either JSON or the human-readable view
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view.to_text(expand_all));
    }
    Ok(0)
}
