use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState},
};

use crate::interfaces::tui::app::{App, Focus, ListView};
use crate::interfaces::tui::constants::{URL_TRUNCATE_LENGTH, colors, text};
use crate::utils::{format_date_to_locale, truncate_display};

pub fn draw_url_list(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::List;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::MUTED)
        })
        .title_style(
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        );

    match app.list_view() {
        ListView::Error(error) => {
            let body = vec![
                Line::from(""),
                Line::from(Span::styled(
                    error.message().to_string(),
                    Style::default()
                        .fg(colors::ERROR)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Press ", Style::default().fg(colors::MUTED)),
                    Span::styled(
                        "[r]",
                        Style::default()
                            .fg(colors::WARNING)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" to retry", Style::default().fg(colors::MUTED)),
                ]),
            ];
            render_message(frame, block.title(text::LIST_TITLE), body, area);
        }
        ListView::Loading => {
            let body = vec![
                Line::from(""),
                Line::from(Span::styled(
                    text::LOADING,
                    Style::default().fg(colors::MUTED),
                )),
            ];
            render_message(frame, block.title(text::LIST_TITLE), body, area);
        }
        ListView::Empty => {
            let body = vec![
                Line::from(""),
                Line::from(Span::styled(
                    text::EMPTY,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
            ];
            render_message(frame, block.title(text::LIST_TITLE), body, area);
        }
        ListView::Populated(urls) => {
            let header = Row::new(vec!["Alias", "Short URL", "Original URL", "Created"])
                .style(
                    Style::default()
                        .fg(colors::WARNING)
                        .add_modifier(Modifier::BOLD),
                )
                .bottom_margin(1);

            let rows = urls.iter().map(|entry| {
                Row::new(vec![
                    Span::styled(
                        entry.alias.clone(),
                        Style::default()
                            .fg(colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(entry.short_url.clone()),
                    Span::raw(truncate_display(&entry.original_url, URL_TRUNCATE_LENGTH)),
                    Span::styled(
                        format_date_to_locale(&entry.created_at),
                        Style::default().fg(colors::MUTED),
                    ),
                ])
            });

            let title = if app.delete_disabled() {
                format!("{} ({}) | deleting...", text::LIST_TITLE, urls.len())
            } else {
                format!("{} ({})", text::LIST_TITLE, urls.len())
            };

            let table = Table::new(
                rows,
                [
                    Constraint::Length(16), // Alias
                    Constraint::Length(32), // Short URL
                    Constraint::Min(20),    // Original URL
                    Constraint::Length(22), // Created
                ],
            )
            .header(header)
            .block(block.title(title))
            .row_highlight_style(if focused {
                Style::default()
                    .bg(colors::MUTED)
                    .fg(ratatui::style::Color::White)
            } else {
                Style::default()
            })
            .highlight_symbol("▶ ")
            .column_spacing(1);

            let mut state = TableState::default();
            state.select(Some(app.selected_index.min(urls.len().saturating_sub(1))));
            frame.render_stateful_widget(table, area, &mut state);
        }
    }
}

fn render_message(frame: &mut Frame, block: Block<'_>, body: Vec<Line<'_>>, area: Rect) {
    let paragraph = Paragraph::new(body)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
