//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for linkdeck using clap's derive macros.

use clap::{Parser, Subcommand};

/// Linkdeck - a terminal client for a URL shortening service
#[derive(Parser)]
#[command(name = "linkdeck")]
#[command(version)]
#[command(about = "A terminal client for a URL shortening service", long_about = None)]
pub struct Cli {
    /// Override the backend base URL (e.g. http://localhost:8080)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Config file path (default: linkdeck.toml)
    #[arg(long, short = 'c', global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start TUI mode (default)
    #[cfg(feature = "tui")]
    Tui,

    /// List all shortened URLs
    List,

    /// Shorten a URL
    Shorten {
        /// Original URL; the scheme is optional
        url: String,

        /// Custom alias (letters, numbers, hyphens, underscores)
        #[arg(long, short = 'a')]
        alias: Option<String>,
    },

    /// Delete a shortened URL by alias
    Delete {
        /// Alias to delete
        alias: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: linkdeck.toml, `-` for stdout)
        output_path: Option<String>,

        /// Overwrite without asking
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_shorten_with_alias() {
        let cli = Cli::parse_from([
            "linkdeck",
            "--api-url",
            "http://sho.rt",
            "shorten",
            "example.com",
            "--alias",
            "my-alias_1",
        ]);
        assert_eq!(cli.api_url.as_deref(), Some("http://sho.rt"));
        match cli.command {
            Some(Commands::Shorten { url, alias }) => {
                assert_eq!(url, "example.com");
                assert_eq!(alias.as_deref(), Some("my-alias_1"));
            }
            _ => panic!("expected shorten"),
        }
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["linkdeck"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_config_generate_force() {
        let cli = Cli::parse_from(["linkdeck", "config", "generate", "out.toml", "--force"]);
        match cli.command {
            Some(Commands::Config {
                action: ConfigCommands::Generate { output_path, force },
            }) => {
                assert_eq!(output_path.as_deref(), Some("out.toml"));
                assert!(force);
            }
            _ => panic!("expected config generate"),
        }
    }
}
