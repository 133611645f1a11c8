//! Application state: the navigation stack and the screens on it.
//!
//! `App` is owned by the event loop. Screens are created when pushed and
//! dropped when popped; dropping a controller aborts its in-flight fetch.

mod handlers;
mod messages;
mod navigation;

pub use messages::AppMessage;

use tokio::sync::mpsc;

use crate::api::DirectoryClient;
use crate::navigation::Route;
use crate::screens::{AboutScreen, ProfileController, ScreenId, UserListController};

/// A live screen and its controller.
#[derive(Debug)]
pub enum Screen {
    UserList(UserListController),
    Profile(ProfileController),
    About(AboutScreen),
}

impl Screen {
    /// Address of the screen. A profile opened with an invalid id has none.
    pub fn route(&self) -> Option<Route> {
        match self {
            Screen::UserList(_) => Some(Route::UserList),
            Screen::Profile(controller) => controller.user_id().map(Route::Profile),
            Screen::About(_) => Some(Route::About),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::UserList(_) => "Users List",
            Screen::Profile(_) => "User Profile",
            Screen::About(_) => "About App",
        }
    }
}

/// One entry of the navigation stack.
#[derive(Debug)]
pub struct ScreenEntry {
    pub id: ScreenId,
    pub screen: Screen,
}

/// Main application state
pub struct App {
    client: DirectoryClient,
    /// Bottom is the root list screen, top is what is displayed
    stack: Vec<ScreenEntry>,
    next_screen_id: u64,
    /// Receiver for async fetch completions, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender handed to every controller
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Set when the user asked to quit
    pub should_quit: bool,
}

impl App {
    pub fn new(client: DirectoryClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            client,
            stack: Vec::new(),
            next_screen_id: 0,
            message_rx: Some(message_rx),
            message_tx,
            should_quit: false,
        }
    }

    /// Push the root list screen, then `initial` on top of it if it is not
    /// the list itself. Must be called from within a tokio runtime.
    pub fn start(&mut self, initial: Route) {
        if self.stack.is_empty() {
            self.navigate(Route::UserList);
        }
        if initial != Route::UserList {
            self.navigate(initial);
        }
    }

    pub fn client(&self) -> &DirectoryClient {
        &self.client
    }

    /// The displayed screen.
    pub fn current(&self) -> Option<&ScreenEntry> {
        self.stack.last()
    }

    pub fn current_mut(&mut self) -> Option<&mut ScreenEntry> {
        self.stack.last_mut()
    }

    pub fn current_route(&self) -> Option<Route> {
        self.current().and_then(|entry| entry.screen.route())
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn screen(&self, id: ScreenId) -> Option<&ScreenEntry> {
        self.stack.iter().find(|entry| entry.id == id)
    }

    fn screen_mut(&mut self, id: ScreenId) -> Option<&mut ScreenEntry> {
        self.stack.iter_mut().find(|entry| entry.id == id)
    }

    fn allocate_screen_id(&mut self) -> ScreenId {
        self.next_screen_id += 1;
        ScreenId(self.next_screen_id)
    }
}
