//! Whole-app navigation flows driven by key presses.

mod common;

use common::{mock_client, next_message, post_json, posts_url, uid, user_json, user_url, users_url};
use crossterm::event::KeyCode;
use rolodex::adapters::MockHttpClient;
use rolodex::app::{App, AppMessage, Screen};
use rolodex::navigation::Route;
use tokio::sync::mpsc;

fn seeded() -> (App, MockHttpClient, mpsc::UnboundedReceiver<AppMessage>) {
    let (client, mock) = mock_client();
    mock.set_json(
        &users_url(),
        serde_json::json!([user_json(3, "Clementine"), user_json(1, "Leanne"), user_json(2, "Ervin")]),
    );
    for id in 1..=4 {
        mock.set_json(&user_url(id), user_json(id, &format!("User {}", id)));
        mock.set_json(&posts_url(id), serde_json::json!([post_json(id * 10, id, "t", "b")]));
    }
    let mut app = App::new(client);
    let rx = app.message_rx.take().expect("receiver present on a new app");
    (app, mock, rx)
}

fn profile_name(app: &App) -> Option<String> {
    match &app.current()?.screen {
        Screen::Profile(controller) => controller.state().ready().map(|p| p.user.name.clone()),
        _ => None,
    }
}

#[tokio::test]
async fn test_browse_list_profile_and_back() {
    let (mut app, mock, mut rx) = seeded();

    app.start(Route::UserList);
    let msg = next_message(&mut rx).await;
    assert!(app.handle_message(msg));

    // Second row of [3, 1, 2] is user 1.
    app.handle_key(KeyCode::Down);
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.current_route(), Some(Route::Profile(uid(1))));
    assert_eq!(app.depth(), 2);

    let msg = next_message(&mut rx).await;
    assert!(app.handle_message(msg));
    assert_eq!(profile_name(&app), Some("User 1".to_string()));

    app.handle_key(KeyCode::Esc);
    assert_eq!(app.current_route(), Some(Route::UserList));
    assert_eq!(app.depth(), 1);

    // The list kept its data and did not refetch.
    match &app.current().expect("root screen").screen {
        Screen::UserList(controller) => assert!(controller.state().is_ready()),
        _ => panic!("root should be the users list"),
    }
    assert_eq!(mock.request_count(&users_url()), 1);
}

#[tokio::test]
async fn test_next_and_previous_reuse_profile_screen() {
    let (mut app, mock, mut rx) = seeded();

    app.start(Route::Profile(uid(1)));
    let mut pending = vec![next_message(&mut rx).await, next_message(&mut rx).await];
    for msg in pending.drain(..) {
        assert!(app.handle_message(msg));
    }
    assert_eq!(profile_name(&app), Some("User 1".to_string()));
    let screen_id = app.current().map(|entry| entry.id);

    app.handle_key(KeyCode::Char('n'));
    assert_eq!(app.current_route(), Some(Route::Profile(uid(2))));
    assert_eq!(app.current().map(|entry| entry.id), screen_id);
    assert_eq!(profile_name(&app), None);

    let msg = next_message(&mut rx).await;
    assert!(app.handle_message(msg));
    assert_eq!(profile_name(&app), Some("User 2".to_string()));

    app.handle_key(KeyCode::Char('p'));
    let msg = next_message(&mut rx).await;
    assert!(app.handle_message(msg));
    assert_eq!(profile_name(&app), Some("User 1".to_string()));

    // No user before 1.
    app.handle_key(KeyCode::Char('p'));
    assert_eq!(app.current_route(), Some(Route::Profile(uid(1))));
    assert_eq!(mock.request_count(&user_url(1)), 2);
    assert_eq!(app.depth(), 2);
}

#[tokio::test]
async fn test_result_for_popped_screen_is_dropped() {
    let (mut app, _mock, mut rx) = seeded();

    app.start(Route::UserList);
    let list_msg = next_message(&mut rx).await;
    app.handle_message(list_msg);

    app.navigate(Route::Profile(uid(4)));
    let profile_msg = next_message(&mut rx).await;
    assert!(app.back());

    assert!(!app.handle_message(profile_msg));
    assert_eq!(app.depth(), 1);
}

#[tokio::test]
async fn test_about_screen_round_trip() {
    let (mut app, _mock, mut rx) = seeded();

    app.start(Route::UserList);
    let msg = next_message(&mut rx).await;
    app.handle_message(msg);

    app.handle_key(KeyCode::Char('a'));
    assert_eq!(app.current_route(), Some(Route::About));
    assert!(matches!(app.current().map(|e| &e.screen), Some(Screen::About(_))));

    app.handle_key(KeyCode::Backspace);
    assert_eq!(app.current_route(), Some(Route::UserList));

    // Back on the root does nothing.
    app.handle_key(KeyCode::Esc);
    assert_eq!(app.depth(), 1);
}

#[tokio::test]
async fn test_quit_key_sets_flag() {
    let (mut app, _mock, _rx) = seeded();
    app.start(Route::About);

    app.handle_key(KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_start_path_with_bad_profile_id_shows_error() {
    let (mut app, mock, mut rx) = seeded();

    app.start_at("/profile/-1").unwrap();
    let msg = next_message(&mut rx).await;
    assert!(app.handle_message(msg));

    match &app.current().expect("profile screen").screen {
        Screen::Profile(controller) => {
            let state = controller.state();
            let err = state.error().expect("invalid id is an error");
            assert_eq!(err.error_code(), "E_INVALID_ID");
        }
        _ => panic!("expected the profile screen on top"),
    }
    assert_eq!(mock.get_requests().len(), 1);

    // Next/previous need a valid id to step from.
    app.handle_key(KeyCode::Char('n'));
    assert_eq!(app.current_route(), None);

    app.handle_key(KeyCode::Esc);
    assert_eq!(app.current_route(), Some(Route::UserList));
}
