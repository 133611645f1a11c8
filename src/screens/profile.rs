//! User profile screen.
//!
//! The screen is keyed by a user id that the navigation layer may re-supply
//! at any time. Every id change starts a new cycle: the previous task is
//! aborted, the cycle counter moves on, and any completion still tagged with
//! an older cycle or a different id is dropped when it arrives.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::ScreenId;
use crate::api::DirectoryClient;
use crate::app::AppMessage;
use crate::error::{FetchError, FetchResult};
use crate::models::{Profile, UserId};
use crate::navigation::NavigationIntent;
use crate::view_state::{ViewState, ViewStateStore};

#[derive(Debug)]
pub struct ProfileController {
    screen: ScreenId,
    client: DirectoryClient,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    store: ViewStateStore<Profile>,
    user_id: Option<UserId>,
    cycle: u64,
    task: Option<JoinHandle<()>>,
}

impl ProfileController {
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
            user_id: None,
            cycle: 0,
            task: None,
        }
    }

    pub fn screen_id(&self) -> ScreenId {
        self.screen
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Supply the id parameter. Returns `true` if a new cycle started;
    /// re-supplying the current id is a no-op.
    pub fn set_user_id(&mut self, id: UserId) -> bool {
        if self.user_id == Some(id) {
            return false;
        }
        self.start_cycle(Some(id));

        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        let screen = self.screen;
        let cycle = self.cycle;

        self.task = Some(tokio::spawn(async move {
            let result = tokio::try_join!(
                client.fetch_user_by_id(id),
                client.fetch_posts_by_user_id(id)
            )
            .map(|(user, posts)| Profile { user, posts });

            let _ = message_tx.send(AppMessage::ProfileLoaded {
                screen,
                cycle,
                user_id: id,
                result,
            });
        }));
        true
    }

    /// Supply the id as the raw route parameter.
    ///
    /// A parameter that is not a positive integer ends a fresh cycle in
    /// [`FetchError::InvalidId`] without touching the network.
    pub fn set_route_param(&mut self, raw: &str) -> bool {
        match raw.parse::<UserId>() {
            Ok(id) => self.set_user_id(id),
            Err(_) => {
                tracing::warn!(screen = %self.screen, raw, "invalid profile route parameter");
                self.start_cycle(None);
                self.store.fail(FetchError::InvalidId {
                    raw: raw.to_string(),
                });
                true
            }
        }
    }

    /// Apply a completed cycle. Returns `false` if the result was stale.
    pub fn handle_loaded(
        &mut self,
        cycle: u64,
        user_id: UserId,
        result: FetchResult<Profile>,
    ) -> bool {
        if cycle != self.cycle || self.user_id != Some(user_id) {
            tracing::debug!(
                screen = %self.screen,
                cycle,
                %user_id,
                current = self.cycle,
                "dropping stale profile result"
            );
            return false;
        }
        self.task = None;

        match result {
            Ok(profile) => {
                tracing::debug!(screen = %self.screen, %user_id, posts = profile.post_count(), "profile loaded");
                self.store.resolve(profile)
            }
            Err(err) => {
                tracing::warn!(screen = %self.screen, %user_id, code = err.error_code(), error = %err, "profile fetch failed");
                self.store.fail(err)
            }
        }
    }

    pub fn state(&self) -> ViewState<Profile> {
        self.store.current()
    }

    pub fn store(&self) -> &ViewStateStore<Profile> {
        &self.store
    }

    pub fn go_back(&self) -> NavigationIntent {
        NavigationIntent::Back
    }

    fn start_cycle(&mut self, id: Option<UserId>) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.user_id = id;
        self.cycle += 1;
        self.store.begin();
        tracing::debug!(screen = %self.screen, cycle = self.cycle, user_id = ?id, "profile cycle started");
    }
}

impl Drop for ProfileController {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockHttpClient;
    use std::sync::Arc;

    fn setup() -> (
        ProfileController,
        MockHttpClient,
        mpsc::UnboundedReceiver<AppMessage>,
    ) {
        let mock = MockHttpClient::new();
        let client = DirectoryClient::with_http("http://directory.test", Arc::new(mock.clone()));
        let (tx, rx) = mpsc::unbounded_channel();
        (ProfileController::new(ScreenId(2), client, tx), mock, rx)
    }

    #[tokio::test]
    async fn test_same_id_does_not_refetch() {
        let (mut controller, _mock, _rx) = setup();
        let id = UserId::new(1).unwrap();

        assert!(controller.set_user_id(id));
        assert!(!controller.set_user_id(id));
        assert_eq!(controller.user_id(), Some(id));
    }

    #[tokio::test]
    async fn test_invalid_route_param_fails_without_request() {
        let (mut controller, mock, _rx) = setup();

        assert!(controller.set_route_param("abc"));
        assert_eq!(
            controller.state(),
            ViewState::Error(FetchError::InvalidId {
                raw: "abc".to_string()
            })
        );
        assert_eq!(controller.user_id(), None);
        assert!(mock.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_result_for_other_id_is_dropped() {
        let (mut controller, _mock, _rx) = setup();
        controller.set_user_id(UserId::new(1).unwrap());

        let applied = controller.handle_loaded(
            1,
            UserId::new(2).unwrap(),
            Err(FetchError::user_not_found(2)),
        );
        assert!(!applied);
        assert!(controller.state().is_loading());
    }

    #[test]
    fn test_go_back() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let client = DirectoryClient::with_http(
            "http://directory.test",
            Arc::new(MockHttpClient::new()),
        );
        let controller = ProfileController::new(ScreenId(2), client, tx);
        assert_eq!(controller.go_back(), NavigationIntent::Back);
    }
}
