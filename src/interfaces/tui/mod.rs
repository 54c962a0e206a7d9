//! Terminal User Interface (TUI) module
//!
//! Form + list over the shared URL store. The loop never awaits network
//! work: it draws, drains completions, then polls the terminal with a tick.

use std::io;

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::info;

mod app;
mod constants;
mod event_handler;
mod ui;

pub use app::{App, AppEvent, CurrentScreen, Focus, FormField, FormState, ListView};

use crate::store::UrlStore;
use constants::TICK_RATE;
use ui::ui;

/// Run the TUI application
pub async fn run_tui(store: UrlStore, short_link_prefix: String) -> color_eyre::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it
    let mut app = App::new(&store, short_link_prefix);
    info!("TUI started against {} backend", app.backend_name);
    app.refetch();
    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main application loop
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> color_eyre::Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        app.drain_events();

        // Render UI
        terminal.draw(|f| ui(f, app))?;

        // Handle events; polling blocks, so keep it off the async workers
        if !tokio::task::spawn_blocking(|| event::poll(TICK_RATE)).await?? {
            continue;
        }

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && event_handler::handle_key_event(app, key)
        {
            return Ok(());
        }
    }
}
