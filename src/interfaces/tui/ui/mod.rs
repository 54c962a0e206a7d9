// UI submodules
mod common;
mod help;
mod shorten_form;
mod url_list;

pub use common::{draw_error_banner, draw_footer, draw_status_bar, draw_title_bar};
pub use help::draw_help_screen;
pub use shorten_form::draw_shorten_form;
pub use url_list::draw_url_list;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &App) {
    let banner_height = if app.banner().is_some() { 3 } else { 0 };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title
            Constraint::Length(banner_height), // Error banner
            Constraint::Length(11),            // Create form
            Constraint::Min(6),                // URL list
            Constraint::Length(3),             // Status
            Constraint::Length(2),             // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);
    draw_error_banner(frame, app, main_chunks[1]);
    draw_shorten_form(frame, app, main_chunks[2]);
    draw_url_list(frame, app, main_chunks[3]);
    draw_status_bar(frame, app, main_chunks[4]);
    draw_footer(frame, app, main_chunks[5]);

    if app.current_screen == CurrentScreen::Help {
        let area = frame.area();
        draw_help_screen(frame, area);
    }
}
