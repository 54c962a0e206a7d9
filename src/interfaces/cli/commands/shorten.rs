//! Shorten URL command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::store::UrlStore;
use crate::structs::ShortenRequest;
use crate::utils::{validate_custom_alias, validate_original_url, validate_required};

/// Validate locally, then create. Bad input never reaches the backend.
pub async fn shorten_url(
    store: &UrlStore,
    original_url: &str,
    alias: Option<&str>,
) -> Result<(), CliError> {
    let request = ShortenRequest::from_input(original_url, alias);

    validate_required(&request.original_url)
        .and_then(|_| validate_original_url(&request.original_url))
        .map_err(|e| CliError::InvalidInput(e.to_string()))?;
    validate_custom_alias(request.custom_alias.as_deref())
        .map_err(|e| CliError::InvalidInput(e.to_string()))?;

    if request.custom_alias.is_none() {
        println!(
            "{} No alias given, the server will generate one",
            "ℹ".bold().blue()
        );
    }

    let created = store.shorten_url().run(request).await?;

    println!(
        "{} Shortened: {} -> {}",
        "✓".bold().green(),
        created.short_url.cyan(),
        created.original_url.blue().underline()
    );
    println!("  {} {}", "alias:".dimmed(), created.alias.magenta());

    Ok(())
}
