use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_PRIMARY};
use crate::screens::AboutInfo;

pub fn render_about(frame: &mut Frame, area: Rect, info: &AboutInfo) {
    let heading = Style::default()
        .fg(COLOR_PRIMARY)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(COLOR_DIM);

    let mut lines = vec![
        Line::from(Span::styled(info.name, heading)),
        Line::from(Span::styled(info.tagline, dim)),
        Line::from(format!("v{}", info.version)),
        Line::from(""),
        Line::from(info.description),
        Line::from(""),
        Line::from(Span::styled("Built with", heading)),
        Line::from(info.technologies.join(" · ")),
        Line::from(""),
        Line::from(Span::styled("Data source", heading)),
        Line::from(info.data_source),
        Line::from(""),
        Line::from(Span::styled("Features", heading)),
    ];
    for (title, desc) in info.features {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", title), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(*desc, dim),
        ]));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(paragraph, area);
}
