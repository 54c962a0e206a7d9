//! CLI interface module
//!
//! One-shot commands over the same store and validators as the TUI.

pub mod commands;

use std::fmt;
use std::sync::Arc;

use crate::cli::{Commands, ConfigCommands};
use crate::client::HttpUrlApi;
use crate::config::ApiConfig;
use crate::errors::LinkdeckError;
use crate::store::UrlStore;
use commands::{config_generate, delete_url, list_urls, shorten_url};

#[derive(Debug)]
pub enum CliError {
    /// Rejected locally before any request
    InvalidInput(String),
    /// The backend call failed
    RequestError(LinkdeckError),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::InvalidInput(msg) => format!("Invalid input: {}", msg),
            CliError::RequestError(err) => format!("Request failed: {}", err.format_simple()),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::InvalidInput(msg) => {
                format!("{} {}", "Invalid input:".yellow().bold(), msg.white())
            }
            CliError::RequestError(err) => err.format_colored(),
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<LinkdeckError> for CliError {
    fn from(err: LinkdeckError) -> Self {
        match err {
            LinkdeckError::Validation(msg) => CliError::InvalidInput(msg),
            other => CliError::RequestError(other),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, api: &ApiConfig) -> Result<(), CliError> {
    // Generate doesn't need a backend
    if let Commands::Config {
        action: ConfigCommands::Generate { output_path, force },
    } = cmd
    {
        return config_generate(output_path, force).await;
    }

    let store = UrlStore::new(Arc::new(HttpUrlApi::from_config(api)));

    match cmd {
        Commands::List => list_urls(&store).await,

        Commands::Shorten { url, alias } => shorten_url(&store, &url, alias.as_deref()).await,

        Commands::Delete { alias } => delete_url(&store, alias).await,

        Commands::Config { .. } => unreachable!("handled above"),

        #[cfg(feature = "tui")]
        Commands::Tui => unreachable!("TUI handled in main"),
    }
}
