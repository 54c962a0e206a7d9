//! Delete URL command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::store::UrlStore;

pub async fn delete_url(store: &UrlStore, alias: String) -> Result<(), CliError> {
    let alias = alias.trim().to_string();
    if alias.is_empty() {
        return Err(CliError::InvalidInput("Alias must not be empty".to_string()));
    }

    store.delete_url().run(alias.clone()).await?;

    println!("{} Deleted short URL: {}", "✓".bold().green(), alias.cyan());
    Ok(())
}
