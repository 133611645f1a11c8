//! Applying navigation intents to the screen stack.

use super::{App, Screen, ScreenEntry};
use crate::models::{InvalidUserId, UserId};
use crate::navigation::{NavigationIntent, Route, RouteError};
use crate::screens::{AboutScreen, ProfileController, UserListController};

impl App {
    pub fn apply(&mut self, intent: NavigationIntent) {
        match intent {
            NavigationIntent::Navigate(route) => self.navigate(route),
            NavigationIntent::Back => {
                self.back();
            }
        }
    }

    /// Start at a route path such as `/profile/3`, with the list below it.
    ///
    /// A profile path whose id is not a positive integer still opens the
    /// profile screen, which shows the invalid id as its error. Unknown paths
    /// push nothing.
    pub fn start_at(&mut self, path: &str) -> Result<(), RouteError> {
        match Route::parse(path) {
            Ok(route) => {
                self.start(route);
                Ok(())
            }
            Err(RouteError::InvalidParam(InvalidUserId(raw))) => {
                self.start(Route::UserList);
                self.open_profile_param(&raw);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Push and activate a new screen for `route`.
    pub fn navigate(&mut self, route: Route) {
        let id = self.allocate_screen_id();
        let client = self.client.clone();
        let tx = self.message_tx.clone();

        let screen = match route {
            Route::UserList => {
                let mut controller = UserListController::new(id, client, tx);
                controller.activate();
                Screen::UserList(controller)
            }
            Route::Profile(user_id) => {
                let mut controller = ProfileController::new(id, client, tx);
                controller.set_user_id(user_id);
                Screen::Profile(controller)
            }
            Route::About => Screen::About(AboutScreen),
        };

        tracing::info!(%id, %route, "navigate");
        self.stack.push(ScreenEntry { id, screen });
    }

    /// Push a profile screen fed with a raw, unparsed route parameter.
    pub fn open_profile_param(&mut self, raw: &str) {
        let id = self.allocate_screen_id();
        let mut controller =
            ProfileController::new(id, self.client.clone(), self.message_tx.clone());
        controller.set_route_param(raw);

        tracing::info!(%id, raw, "navigate to profile by raw parameter");
        self.stack.push(ScreenEntry {
            id,
            screen: Screen::Profile(controller),
        });
    }

    /// Pop the top screen. The root screen is never popped.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        if let Some(entry) = self.stack.pop() {
            tracing::info!(id = %entry.id, screen = entry.screen.title(), "back");
        }
        true
    }

    /// Re-supply the id of the profile screen on top without recreating it.
    ///
    /// Returns `false` when the top screen is not a profile or the id is
    /// unchanged.
    pub fn set_profile_id(&mut self, user_id: UserId) -> bool {
        match self.stack.last_mut().map(|entry| &mut entry.screen) {
            Some(Screen::Profile(controller)) => controller.set_user_id(user_id),
            _ => false,
        }
    }
}
