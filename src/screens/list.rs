//! Users list screen.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::ScreenId;
use crate::api::DirectoryClient;
use crate::app::AppMessage;
use crate::error::FetchResult;
use crate::models::{UserId, UserRecord};
use crate::navigation::{NavigationIntent, Route};
use crate::view_state::{ViewState, ViewStateStore};

/// Drives the users list: one `GET /users` per activation.
#[derive(Debug)]
pub struct UserListController {
    screen: ScreenId,
    client: DirectoryClient,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    store: ViewStateStore<Vec<UserRecord>>,
    /// Tag of the most recent cycle
    cycle: u64,
    activated: bool,
    task: Option<JoinHandle<()>>,
    /// Highlighted row
    selected: usize,
}

impl UserListController {
    pub fn new(
        screen: ScreenId,
        client: DirectoryClient,
        message_tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            screen,
            client,
            message_tx,
            store: ViewStateStore::new(),
            cycle: 0,
            activated: false,
            task: None,
            selected: 0,
        }
    }

    pub fn screen_id(&self) -> ScreenId {
        self.screen
    }

    /// Start the fetch. Only the first call does anything; the list does not
    /// refetch on its own.
    pub fn activate(&mut self) {
        if self.activated {
            return;
        }
        self.activated = true;
        self.cycle += 1;
        self.store.begin();

        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        let screen = self.screen;
        let cycle = self.cycle;

        tracing::debug!(%screen, cycle, "users list cycle started");
        self.task = Some(tokio::spawn(async move {
            let result = client.fetch_all_users().await;
            let _ = message_tx.send(AppMessage::UsersLoaded {
                screen,
                cycle,
                result,
            });
        }));
    }

    /// Apply a completed fetch. Returns `false` if the message was stale.
    pub fn handle_loaded(&mut self, cycle: u64, result: FetchResult<Vec<UserRecord>>) -> bool {
        if cycle != self.cycle {
            tracing::debug!(screen = %self.screen, cycle, current = self.cycle, "dropping stale users result");
            return false;
        }
        self.task = None;

        match result {
            Ok(users) => {
                tracing::debug!(screen = %self.screen, count = users.len(), "users loaded");
                self.selected = self.selected.min(users.len().saturating_sub(1));
                self.store.resolve(users)
            }
            Err(err) => {
                tracing::warn!(screen = %self.screen, code = err.error_code(), error = %err, "users fetch failed");
                self.store.fail(err)
            }
        }
    }

    pub fn state(&self) -> ViewState<Vec<UserRecord>> {
        self.store.current()
    }

    pub fn store(&self) -> &ViewStateStore<Vec<UserRecord>> {
        &self.store
    }

    /// Navigation target for a tapped row. Does not touch state.
    pub fn select_user(&self, id: UserId) -> NavigationIntent {
        NavigationIntent::Navigate(Route::Profile(id))
    }

    pub fn open_about(&self) -> NavigationIntent {
        NavigationIntent::Navigate(Route::About)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let len = self.store.current().ready().map_or(0, Vec::len);
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Intent for the highlighted row, once the list is ready.
    pub fn open_selected(&self) -> Option<NavigationIntent> {
        let state = self.store.current();
        let user = state.ready()?.get(self.selected)?;
        Some(self.select_user(user.id))
    }
}

impl Drop for UserListController {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
