//! Contract test over the public crate surface: the navigation
//! side-channel, the fixed route set and the retention policy behave as a
//! consumer of the library observes them.

use chrono::{Duration, Utc};

use gmb_copilot_frontend::gateway::decode::parse_action_block;
use gmb_copilot_frontend::models::{AppAction, ChatMessage, Role};
use gmb_copilot_frontend::routes::Route;
use gmb_copilot_frontend::storage::Store;

#[test]
fn side_channel_example_from_the_wire_contract() {
    let (text, action) = parse_action_block(
        "Hello |||JSON_ACTION_START|||{\"type\":\"NAVIGATE\",\"path\":\"/profile\",\"label\":\"Go\"}|||JSON_ACTION_END|||",
    );
    assert_eq!(text, "Hello");
    assert_eq!(
        action,
        Some(AppAction::Navigate {
            path: "/profile".to_string(),
            label: "Go".to_string(),
        })
    );

    let (text, action) = parse_action_block(
        "Hello |||JSON_ACTION_START|||{broken|||JSON_ACTION_END|||",
    );
    assert_eq!(text, "Hello");
    assert!(action.is_none());
}

#[test]
fn the_addressable_surface_is_exactly_ten_routes() {
    assert_eq!(Route::ALL.len(), 10);
    for route in Route::ALL {
        assert_eq!(Route::parse(route.path()), Some(route));
        assert_eq!(Route::from_hash(&format!("#{}", route.path())), route);
    }
    assert_eq!(Route::parse("/calendar"), None);
    assert_eq!(Route::from_hash("#/nope"), Route::Agent);
    assert_eq!(Route::from_hash(""), Route::Agent);
}

#[test]
fn store_applies_retention_on_load() {
    let store = Store::memory();
    let now = Utc::now();
    let mut old = ChatMessage::new(Role::User, "ancien", now);
    old.timestamp = now - Duration::days(45);
    let fresh = ChatMessage::new(Role::Model, "frais", now);
    store.save_chat_history(&[old, fresh.clone()]);

    let loaded = store.load_chat_history(now);
    assert_eq!(loaded, vec![fresh]);
}
