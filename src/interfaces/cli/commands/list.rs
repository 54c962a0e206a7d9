//! List URLs command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::store::UrlStore;
use crate::utils::format_date_to_locale;

pub async fn list_urls(store: &UrlStore) -> Result<(), CliError> {
    let urls = store.urls().fetch().await?;

    if urls.is_empty() {
        println!("{} No URLs shortened yet", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Shortened URLs:".bold().green());
    println!();
    for entry in urls.iter() {
        println!(
            "  {} {} -> {} {}",
            entry.alias.cyan(),
            entry.short_url.magenta(),
            entry.original_url.blue().underline(),
            format!("({})", format_date_to_locale(&entry.created_at)).dimmed()
        );
    }
    println!();
    println!(
        "{} Total {} shortened URLs",
        "ℹ".bold().blue(),
        urls.len().to_string().green()
    );
    Ok(())
}
