//! TUI mode
//!
//! This module contains the TUI (Terminal User Interface) mode startup logic.
//! It delegates to the actual TUI implementation.

use std::sync::Arc;

use tracing::debug;

use crate::client::HttpUrlApi;
use crate::config::get_config;
use crate::store::UrlStore;

/// Run TUI mode
///
/// This function:
/// 1. Installs the color-eyre report and panic hooks
/// 2. Builds the store over the configured backend
/// 3. Delegates to the actual TUI implementation
pub async fn run_tui() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = get_config();
    debug!("TUI mode, backend endpoint {}", config.api.endpoint());

    let store = UrlStore::new(Arc::new(HttpUrlApi::from_config(&config.api)));
    crate::interfaces::tui::run_tui(store, config.api.short_link_prefix()).await
}
