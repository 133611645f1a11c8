//! Users list rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
    Frame,
};

use super::status::{render_error, render_loading};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_PRIMARY, COLOR_TEXT};
use crate::screens::UserListController;
use crate::view_state::ViewState;

pub fn render_user_list(frame: &mut Frame, area: Rect, controller: &UserListController) {
    let users = match controller.state() {
        ViewState::Loading => return render_loading(frame, area, "users"),
        ViewState::Error(err) => return render_error(frame, area, &err),
        ViewState::Ready(users) => users,
    };

    let items: Vec<ListItem> = users
        .iter()
        .map(|user| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("[{:<2}] ", user.initials()),
                        Style::default().fg(COLOR_PRIMARY),
                    ),
                    Span::styled(
                        user.name.clone(),
                        Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("     {}  ·  Company: {}", user.email, user.company.name),
                    Style::default().fg(COLOR_DIM),
                )),
            ])
        })
        .collect();

    let title = format!(" Choose a User ({}) ", users.len());
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(COLOR_BORDER)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("› ");

    let mut state = ListState::default();
    if !users.is_empty() {
        state.select(Some(controller.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}
