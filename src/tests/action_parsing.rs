//! Navigation side-channel parsing.

use proptest::prelude::*;

use crate::gateway::decode::{parse_action_block, ACTION_END, ACTION_START};
use crate::models::AppAction;

#[test]
fn well_formed_block_is_parsed_and_stripped() {
    let text = format!(
        "Hello {}{{\"type\":\"NAVIGATE\",\"path\":\"/profile\",\"label\":\"Go\"}}{}",
        ACTION_START, ACTION_END
    );
    let (display, action) = parse_action_block(&text);
    assert_eq!(display, "Hello");
    assert_eq!(
        action,
        Some(AppAction::Navigate {
            path: "/profile".to_string(),
            label: "Go".to_string(),
        })
    );
}

#[test]
fn malformed_payload_is_stripped_but_dropped() {
    let text = format!("Voici ma réponse. {}not json at all{}", ACTION_START, ACTION_END);
    let (display, action) = parse_action_block(&text);
    assert_eq!(display, "Voici ma réponse.");
    assert!(action.is_none());
}

#[test]
fn unterminated_block_is_left_verbatim() {
    let text = format!("Réponse {}{{\"type\":\"NAVIGATE\"", ACTION_START);
    let (display, action) = parse_action_block(&text);
    assert_eq!(display, text);
    assert!(action.is_none());
}

#[test]
fn only_first_block_is_consumed() {
    let text = format!(
        "A {s}{{\"type\":\"NAVIGATE\",\"path\":\"/metrics\",\"label\":\"Stats\"}}{e} B {s}{{\"type\":\"NAVIGATE\",\"path\":\"/content\",\"label\":\"Posts\"}}{e}",
        s = ACTION_START,
        e = ACTION_END
    );
    let (display, action) = parse_action_block(&text);
    assert!(display.contains("B"));
    assert!(display.contains(ACTION_START));
    assert_eq!(
        action,
        Some(AppAction::Navigate {
            path: "/metrics".to_string(),
            label: "Stats".to_string(),
        })
    );
}

#[test]
fn wrong_action_type_is_dropped() {
    let text = format!(
        "Ok {}{{\"type\":\"DELETE_EVERYTHING\",\"path\":\"/\",\"label\":\"x\"}}{}",
        ACTION_START, ACTION_END
    );
    let (display, action) = parse_action_block(&text);
    assert_eq!(display, "Ok");
    assert!(action.is_none());
}

proptest! {
    /// Text that never contains the start delimiter passes through intact.
    #[test]
    fn plain_text_never_yields_an_action(text in "[a-zA-Z0-9 àéèç.,!?\n]{0,200}") {
        let (display, action) = parse_action_block(&text);
        prop_assert_eq!(display, text);
        prop_assert!(action.is_none());
    }

    /// A well-formed block appended to arbitrary plain text is always
    /// recognized and stripped.
    #[test]
    fn embedded_block_is_always_stripped(
        prefix in "[a-zA-Z0-9 àéè.,!?\n]{0,120}",
        path in prop::sample::select(vec!["/profile", "/content", "/metrics", "/images"]),
        label in "[a-zA-Z ]{1,24}",
    ) {
        let text = format!(
            "{}{}{{\"type\":\"NAVIGATE\",\"path\":\"{}\",\"label\":\"{}\"}}{}",
            prefix, ACTION_START, path, label, ACTION_END
        );
        let (display, action) = parse_action_block(&text);
        prop_assert_eq!(display, prefix.trim());
        prop_assert_eq!(
            action,
            Some(AppAction::Navigate { path: path.to_string(), label: label.clone() })
        );
    }
}
