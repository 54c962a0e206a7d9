use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::interfaces::tui::app::{App, CurrentScreen, Focus};
use crate::interfaces::tui::constants::colors;

/// Draw title bar with version and statistics
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("Linkdeck", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors::MUTED),
        ),
        Span::styled("| ", Style::default().fg(colors::MUTED)),
        Span::styled(
            format!("Total: {} ", app.entries().len()),
            Style::default().fg(colors::WARNING),
        ),
    ];

    if app.urls.is_fetching() {
        spans.push(Span::styled("| syncing ", Style::default().fg(colors::MUTED)));
    }

    let title = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw the top-level error banner, if any error is set
pub fn draw_error_banner(frame: &mut Frame, app: &App, area: Rect) {
    let Some(error) = app.banner() else {
        return;
    };

    let banner = Paragraph::new(error.message().to_string())
        .style(Style::default().fg(Color::White).bg(colors::ERROR).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(error.error_type()),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(banner, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.status_message.is_empty() {
        (
            format!("[SUCCESS] {}", app.status_message),
            Style::default().fg(Color::Black).bg(colors::SUCCESS).bold(),
        )
    } else {
        (
            format!("Ready | {}", app.short_link_prefix),
            Style::default().fg(colors::PRIMARY),
        )
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match (app.current_screen, app.focus) {
        (CurrentScreen::Help, _) => vec![("q/Esc", "Close", Color::Red)],
        (CurrentScreen::Main, Focus::List) => vec![
            ("Up/Down", "Navigate", Color::Cyan),
            ("Tab", "Form", Color::Cyan),
            ("d", "Delete", Color::Red),
            ("y", "Copy", Color::Green),
            ("r", "Retry", Color::Yellow),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        (CurrentScreen::Main, _) => vec![
            ("Tab", "Switch Field", Color::Cyan),
            ("Enter", "Shorten", Color::Green),
            ("Esc", "List", Color::Yellow),
            ("Ctrl-C", "Quit", Color::Magenta),
        ],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

/// 创建居中矩形
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
