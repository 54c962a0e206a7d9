//! CLI mode
//!
//! This module contains the CLI mode startup logic.
//! It delegates to the actual CLI implementation.

use tracing::debug;

use crate::cli::Commands;
use crate::config::get_config;
use crate::interfaces::cli::CliError;

/// Run CLI mode against the configured backend
pub async fn run_cli(cmd: Commands) -> Result<(), CliError> {
    let config = get_config();
    debug!("CLI mode, backend endpoint {}", config.api.endpoint());
    crate::interfaces::cli::run_cli_command(cmd, &config.api).await
}
