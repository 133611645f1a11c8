//! User profile rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::status::{render_error, render_loading};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_PRIMARY};
use crate::models::Profile;
use crate::screens::ProfileController;
use crate::view_state::ViewState;

pub fn render_profile(frame: &mut Frame, area: Rect, controller: &ProfileController) {
    match controller.state() {
        ViewState::Loading => render_loading(frame, area, "profile"),
        ViewState::Error(err) => render_error(frame, area, &err),
        ViewState::Ready(profile) => render_ready(frame, area, &profile),
    }
}

fn render_ready(frame: &mut Frame, area: Rect, profile: &Profile) {
    let user = &profile.user;
    let heading = Style::default()
        .fg(COLOR_PRIMARY)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(COLOR_DIM);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("[{}] ", user.initials()), heading),
            Span::styled(user.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            format!("@{} • {} posts", user.username, profile.post_count()),
            dim,
        )),
        Line::from(""),
        Line::from(Span::styled("Contact", heading)),
        Line::from(format!("Email:   {}", user.email)),
        Line::from(format!("Phone:   {}", user.phone)),
        Line::from(format!("Website: {}", user.website)),
        Line::from(""),
        Line::from(Span::styled("Address", heading)),
        Line::from(user.address.single_line()),
        Line::from(Span::styled(
            format!("📍 {}, {}", user.address.geo.lat, user.address.geo.lng),
            dim,
        )),
        Line::from(""),
        Line::from(Span::styled("Company", heading)),
        Line::from(user.company.name.clone()),
        Line::from(Span::styled(format!("\"{}\"", user.company.catch_phrase), dim)),
        Line::from(Span::styled(user.company.bs.clone(), dim)),
        Line::from(""),
        Line::from(Span::styled(format!("Posts ({})", profile.post_count()), heading)),
    ];

    if profile.posts.is_empty() {
        lines.push(Line::from(Span::styled("No posts yet.", dim)));
    }
    for (index, post) in profile.posts.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("{}. {}", index + 1, post.title),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(post.body.replace('\n', " "), dim)));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(paragraph, area);
}
