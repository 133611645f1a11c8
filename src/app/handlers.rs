//! Message and key handling for the App.

use crossterm::event::KeyCode;

use super::{App, AppMessage, Screen};
use crate::models::UserId;
use crate::navigation::NavigationIntent;

enum KeyAction {
    Intent(NavigationIntent),
    /// Re-supply the profile screen's id in place
    ProfileId(UserId),
}

impl App {
    /// Route a fetch completion to the screen that started it.
    ///
    /// Returns `true` if the message changed a screen's state. Messages for
    /// screens that have since been popped are dropped.
    pub fn handle_message(&mut self, msg: AppMessage) -> bool {
        let screen_id = msg.screen();
        let Some(entry) = self.screen_mut(screen_id) else {
            tracing::debug!(screen = %screen_id, "dropping result for closed screen");
            return false;
        };

        match (msg, &mut entry.screen) {
            (AppMessage::UsersLoaded { cycle, result, .. }, Screen::UserList(controller)) => {
                controller.handle_loaded(cycle, result)
            }
            (
                AppMessage::ProfileLoaded {
                    cycle,
                    user_id,
                    result,
                    ..
                },
                Screen::Profile(controller),
            ) => controller.handle_loaded(cycle, user_id, result),
            (msg, _) => {
                tracing::warn!(screen = %screen_id, ?msg, "message does not match screen kind");
                false
            }
        }
    }

    /// Handle one key press on the displayed screen.
    pub fn handle_key(&mut self, key: KeyCode) {
        if key == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        let Some(entry) = self.current_mut() else {
            return;
        };

        let action = match &mut entry.screen {
            Screen::UserList(controller) => match key {
                KeyCode::Up | KeyCode::Char('k') => {
                    controller.move_up();
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    controller.move_down();
                    None
                }
                KeyCode::Enter => controller.open_selected().map(KeyAction::Intent),
                KeyCode::Char('a') => Some(KeyAction::Intent(controller.open_about())),
                _ => None,
            },
            Screen::Profile(controller) => match key {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                    Some(KeyAction::Intent(controller.go_back()))
                }
                KeyCode::Char('n') | KeyCode::Right => {
                    controller.user_id().map(|id| KeyAction::ProfileId(id.next()))
                }
                KeyCode::Char('p') | KeyCode::Left => controller
                    .user_id()
                    .and_then(|id| id.prev())
                    .map(KeyAction::ProfileId),
                _ => None,
            },
            Screen::About(screen) => match key {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                    Some(KeyAction::Intent(screen.go_back()))
                }
                _ => None,
            },
        };

        match action {
            Some(KeyAction::Intent(intent)) => self.apply(intent),
            Some(KeyAction::ProfileId(id)) => {
                self.set_profile_id(id);
            }
            None => {}
        }
    }
}
