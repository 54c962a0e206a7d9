use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::common::centered_rect;
use crate::interfaces::tui::constants::HELP_POPUP;

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn shortcut<'a>(keys: &'a str, desc: &'a str, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<17}", keys), Style::default().fg(color)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let (width, height) = HELP_POPUP;
    let popup_area = centered_rect(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title("Help - Keyboard Shortcuts")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, popup_area);

    let inner_area = popup_area.inner(Margin::new(2, 1));

    let help_text = vec![
        Line::from(""),
        section("FORM"),
        shortcut("Tab / Shift-Tab", "Next / previous field", Color::Cyan),
        shortcut("Enter", "Shorten URL", Color::Green),
        shortcut("Esc", "Go to the list", Color::Cyan),
        Line::from(""),
        section("LIST"),
        shortcut("Up/Down, j/k", "Navigate list", Color::Cyan),
        shortcut("d", "Delete selected URL", Color::Red),
        shortcut("y", "Copy short URL", Color::Green),
        shortcut("r", "Retry failed actions and reload", Color::Yellow),
        shortcut("a", "Back to the form", Color::Cyan),
        Line::from(""),
        section("GENERAL"),
        shortcut("?", "Toggle this help", Color::Blue),
        shortcut("q", "Quit (from the list)", Color::Magenta),
        shortcut("Ctrl-C", "Quit", Color::Magenta),
    ];

    frame.render_widget(Paragraph::new(help_text), inner_area);
}
