//! Chat transcript retention on load.

use chrono::{Duration, Utc};

use crate::constants::WELCOME_TEXT;
use crate::models::{ChatMessage, Role};
use crate::storage::{apply_retention, Store};

fn message_aged(days: i64, text: &str) -> ChatMessage {
    let mut msg = ChatMessage::new(Role::User, text, Utc::now());
    msg.timestamp = Utc::now() - Duration::days(days);
    msg
}

#[test]
fn messages_past_the_window_are_dropped_on_load() {
    let store = Store::memory();
    store.save_chat_history(&[
        message_aged(40, "trop vieux"),
        message_aged(2, "récent"),
    ]);

    let loaded = store.load_chat_history(Utc::now());
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].text, "récent");
}

#[test]
fn fully_expired_history_substitutes_the_welcome_message() {
    let store = Store::memory();
    store.save_chat_history(&[message_aged(31, "a"), message_aged(90, "b")]);

    let loaded = store.load_chat_history(Utc::now());
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].text, WELCOME_TEXT);
    assert_eq!(loaded[0].role, Role::Model);
}

#[test]
fn empty_store_yields_the_welcome_message() {
    let store = Store::memory();
    let loaded = store.load_chat_history(Utc::now());
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].text, WELCOME_TEXT);
}

#[test]
fn boundary_is_exclusive_at_exactly_thirty_days() {
    let now = Utc::now();
    let mut on_boundary = ChatMessage::new(Role::User, "pile 30 jours", now);
    on_boundary.timestamp = now - Duration::days(30);
    let mut inside = ChatMessage::new(Role::User, "29 jours", now);
    inside.timestamp = now - Duration::days(29);

    let kept = apply_retention(vec![on_boundary, inside], now);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].text, "29 jours");
}
