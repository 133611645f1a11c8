//! Terminal rendering.
//!
//! Pure functions from the displayed screen's state to widgets: a header with
//! the route title, the screen body, and a one-line key hint footer.

mod about;
mod profile;
mod status;
mod theme;
mod user_list;

pub use theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_LOADING, COLOR_PRIMARY, COLOR_TEXT};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};

/// Render the whole frame.
pub fn render(frame: &mut Frame, app: &App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let Some(entry) = app.current() else {
        return;
    };

    render_header(frame, header, entry.screen.title());

    match &entry.screen {
        Screen::UserList(controller) => user_list::render_user_list(frame, body, controller),
        Screen::Profile(controller) => profile::render_profile(frame, body, controller),
        Screen::About(screen) => about::render_about(frame, body, screen.info()),
    }

    render_footer(frame, footer, key_hints(&entry.screen));
}

fn render_header(frame: &mut Frame, area: Rect, title: &str) {
    let line = Line::from(Span::styled(
        format!(" {} ", title),
        Style::default()
            .fg(Color::White)
            .bg(COLOR_PRIMARY)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(COLOR_PRIMARY)),
        area,
    );
}

fn render_footer(frame: &mut Frame, area: Rect, hints: &str) {
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(COLOR_DIM))),
        area,
    );
}

fn key_hints(screen: &Screen) -> &'static str {
    match screen {
        Screen::UserList(_) => "↑/↓ select · Enter open · a about · q quit",
        Screen::Profile(_) => "←/p previous · →/n next · Esc back · q quit",
        Screen::About(_) => "Esc back · q quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockHttpClient;
    use crate::api::DirectoryClient;
    use crate::error::FetchError;
    use crate::navigation::Route;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        buffer_text(&terminal)
    }

    fn started_app() -> App {
        let mut app = App::new(DirectoryClient::with_http(
            "http://directory.test",
            Arc::new(MockHttpClient::new()),
        ));
        app.start(Route::UserList);
        app
    }

    #[tokio::test]
    async fn test_loading_and_error_render_distinctly() {
        let mut app = started_app();
        let loading = draw(&app);
        assert!(loading.contains("Users List"));
        assert!(loading.contains("Loading users"));

        let screen = app.current().map(|e| e.id).unwrap();
        app.handle_message(crate::app::AppMessage::UsersLoaded {
            screen,
            cycle: 1,
            result: Err(FetchError::Other {
                message: "offline".to_string(),
            }),
        });

        let failed = draw(&app);
        assert!(failed.contains("Error"));
        assert!(failed.contains("E_NET_OTHER"));
        assert!(!failed.contains("Loading users"));
    }

    #[tokio::test]
    async fn test_about_screen_renders_static_info() {
        let mut app = started_app();
        app.navigate(Route::About);
        let text = draw(&app);
        assert!(text.contains("About App"));
        assert!(text.contains("User Browser"));
        assert!(text.contains("Esc back"));
    }

    #[tokio::test]
    async fn test_invalid_profile_parameter_renders_error() {
        let mut app = started_app();
        app.open_profile_param("abc");
        let text = draw(&app);
        assert!(text.contains("User Profile"));
        assert!(text.contains("E_INVALID_ID"));
    }

    #[tokio::test]
    async fn test_ready_profile_shows_single_line_address() {
        let mut app = started_app();
        let user_id = crate::models::UserId::new(1).unwrap();
        app.navigate(Route::Profile(user_id));
        let user: crate::models::UserRecord = serde_json::from_value(serde_json::json!({
            "id": 1, "name": "Leanne Graham", "username": "Bret", "email": "s@april.biz",
            "phone": "1-770", "website": "hildegard.org",
            "address": {"street": "Kulas Light", "suite": "Apt. 556", "city": "Gwenborough",
                        "zipcode": "92998-3874", "geo": {"lat": "-37.3159", "lng": "81.1496"}},
            "company": {"name": "Romaguera-Crona", "catchPhrase": "cp", "bs": "bs"}
        }))
        .unwrap();

        let screen = app.current().map(|e| e.id).unwrap();
        assert!(app.handle_message(crate::app::AppMessage::ProfileLoaded {
            screen,
            cycle: 1,
            user_id,
            result: Ok(crate::models::Profile {
                user,
                posts: Vec::new(),
            }),
        }));

        let text = draw(&app);
        assert!(text.contains("Kulas Light, Apt. 556, Gwenborough - 92998-3874"));
        assert!(text.contains("No posts yet."));
    }
}
