use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, FormField};
use crate::interfaces::tui::constants::{colors, text};

pub fn draw_shorten_form(frame: &mut Frame, app: &App, area: Rect) {
    let form_focused = app.focus.field().is_some();

    let block = Block::default()
        .title(text::FORM_TITLE)
        .title_style(Style::default().fg(colors::SUCCESS).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if form_focused {
            Style::default().fg(colors::SUCCESS)
        } else {
            Style::default().fg(colors::MUTED)
        });
    frame.render_widget(block, area);

    let inner_area = area.inner(Margin::new(2, 1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Original URL + error
            Constraint::Length(4), // Custom alias + error
            Constraint::Length(1), // Submit
        ])
        .split(inner_area);

    draw_field(frame, app, FormField::OriginalUrl, None, chunks[0]);
    draw_field(
        frame,
        app,
        FormField::CustomAlias,
        Some(app.short_link_prefix.as_str()),
        chunks[1],
    );
    draw_submit(frame, app, chunks[2]);
}

fn draw_field(frame: &mut Frame, app: &App, field: FormField, prefix: Option<&str>, area: Rect) {
    let field_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let focused = app.focus.field() == Some(field);
    let border_style = if focused {
        Style::default()
            .fg(colors::HIGHLIGHT_FG)
            .bg(colors::HIGHLIGHT_BG)
            .bold()
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = Vec::new();
    if let Some(prefix) = prefix {
        spans.push(Span::styled(prefix, Style::default().fg(colors::MUTED)));
    }
    spans.push(Span::raw(app.form.input(field)));
    if focused {
        spans.push(Span::styled("_", Style::default().fg(colors::WARNING)));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(field.display_title())
            .border_style(border_style),
    );
    frame.render_widget(input, field_area[0]);

    if let Some(error) = app.form.visible_error(field) {
        let error_text = Paragraph::new(error.as_str()).style(Style::default().fg(colors::ERROR));
        frame.render_widget(error_text, field_area[1]);
    }
}

fn draw_submit(frame: &mut Frame, app: &App, area: Rect) {
    let (label, style) = if app.shorten.is_pending() {
        (text::SUBMITTING, Style::default().fg(colors::WARNING).bold())
    } else if app.submit_disabled() {
        (text::SUBMIT, Style::default().fg(colors::MUTED))
    } else {
        (text::SUBMIT, Style::default().fg(colors::SUCCESS).bold())
    };

    let button = Paragraph::new(Line::from(vec![
        Span::styled(format!("[ {} ]", label), style),
        Span::styled("  Enter to submit", Style::default().fg(colors::MUTED)),
    ]));
    frame.render_widget(button, area);
}
