//! Loading and error panels shared by the fetching screens.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_LOADING};
use crate::error::FetchError;

pub fn render_loading(frame: &mut Frame, area: Rect, what: &str) {
    let text = vec![
        Line::from(Span::styled(
            "Loading...",
            Style::default()
                .fg(COLOR_LOADING)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Loading {}...", what),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(panel());
    frame.render_widget(paragraph, area);
}

/// Terminal error state. Never shows stale or empty data in its place.
pub fn render_error(frame: &mut Frame, area: Rect, err: &FetchError) {
    let text = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(err.user_message()),
        Line::from(Span::styled(
            format!("[{}]", err.error_code()),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(panel().border_style(Style::default().fg(COLOR_ERROR)));
    frame.render_widget(paragraph, area);
}

fn panel() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}
