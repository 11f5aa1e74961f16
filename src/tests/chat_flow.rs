//! Conversational agent state machine: submit guard, reply, error and
//! reset transitions, exercised straight through the update layer.

use crate::constants::{CHAT_ERROR_TEXT, MEMORY_CLEARED_TEXT};
use crate::messages::{Command, Message};
use crate::models::{AgentReply, Role};
use crate::state::{AppState, ChatPhase};
use crate::storage::Store;
use crate::update::update;

fn test_state() -> AppState {
    AppState::with_store(Store::memory())
}

fn submit(state: &mut AppState, text: &str) -> Vec<Command> {
    update(state, Message::ChatInputChanged(text.to_string()));
    update(state, Message::SendChatMessage)
}

#[test]
fn submit_dispatches_one_gateway_call_and_enters_awaiting() {
    let mut state = test_state();
    let cmds = submit(&mut state, "Analyse mes stats");

    assert_eq!(state.chat.phase, ChatPhase::Awaiting);
    assert!(state.chat.input.is_empty());
    assert_eq!(state.chat.messages.len(), 1);
    assert_eq!(state.chat.messages[0].role, Role::User);
    assert_eq!(
        cmds.iter()
            .filter(|c| matches!(c, Command::SendChatTurn { .. }))
            .count(),
        1
    );
}

#[test]
fn history_sent_to_the_gateway_excludes_the_new_turn() {
    let mut state = test_state();
    state.chat.messages = vec![crate::models::ChatMessage::welcome(chrono::Utc::now())];

    let cmds = submit(&mut state, "Bonjour");
    let Some(Command::SendChatTurn { message, history }) = cmds
        .iter()
        .find(|c| matches!(c, Command::SendChatTurn { .. }))
    else {
        panic!("expected a SendChatTurn command");
    };
    assert_eq!(message, "Bonjour");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].0, Role::Model);
}

#[test]
fn second_submit_while_awaiting_is_rejected() {
    let mut state = test_state();
    submit(&mut state, "première question");

    let cmds = submit(&mut state, "deuxième question");
    assert!(
        !cmds.iter().any(|c| matches!(c, Command::SendChatTurn { .. })),
        "no second call may be dispatched while one is outstanding"
    );
    // The rejected turn must not be appended either.
    assert_eq!(state.chat.messages.len(), 1);
}

#[test]
fn empty_input_never_dispatches() {
    let mut state = test_state();
    let cmds = submit(&mut state, "   ");
    assert!(!cmds.iter().any(|c| matches!(c, Command::SendChatTurn { .. })));
    assert!(state.chat.messages.is_empty());
    assert_eq!(state.chat.phase, ChatPhase::Idle);
}

#[test]
fn reply_appends_model_turn_and_returns_to_idle() {
    let mut state = test_state();
    submit(&mut state, "question");

    update(
        &mut state,
        Message::ChatReplyReceived(AgentReply {
            text: "réponse".to_string(),
            sources: Vec::new(),
            action: None,
        }),
    );

    assert_eq!(state.chat.phase, ChatPhase::Idle);
    assert_eq!(state.chat.messages.len(), 2);
    assert_eq!(state.chat.messages[1].role, Role::Model);
    assert_eq!(state.chat.messages[1].text, "réponse");

    // The next submit is accepted again.
    let cmds = submit(&mut state, "suite");
    assert!(cmds.iter().any(|c| matches!(c, Command::SendChatTurn { .. })));
}

#[test]
fn error_appends_apology_and_is_not_sticky() {
    let mut state = test_state();
    submit(&mut state, "question");

    update(
        &mut state,
        Message::ChatRequestFailed("boom".to_string()),
    );

    assert_eq!(state.chat.phase, ChatPhase::Idle);
    assert_eq!(state.chat.messages.last().map(|m| m.text.as_str()), Some(CHAT_ERROR_TEXT));

    let cmds = submit(&mut state, "on réessaye");
    assert!(cmds.iter().any(|c| matches!(c, Command::SendChatTurn { .. })));
}

#[test]
fn clear_history_resets_to_the_notice_turn() {
    let mut state = test_state();
    submit(&mut state, "question");
    update(
        &mut state,
        Message::ChatReplyReceived(AgentReply {
            text: "réponse".to_string(),
            sources: Vec::new(),
            action: None,
        }),
    );

    update(&mut state, Message::ClearChatHistory);
    assert_eq!(state.chat.messages.len(), 1);
    assert_eq!(state.chat.messages[0].text, MEMORY_CLEARED_TEXT);

    // The reset transcript is what the store now holds.
    let reloaded = state.store.load_chat_history(chrono::Utc::now());
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].text, MEMORY_CLEARED_TEXT);
}

#[test]
fn transcript_persists_through_the_store_on_each_turn() {
    let mut state = test_state();
    submit(&mut state, "persisté ?");
    let reloaded = state.store.load_chat_history(chrono::Utc::now());
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].text, "persisté ?");
}
