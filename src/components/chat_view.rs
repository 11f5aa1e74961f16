//! Chat agent screen: transcript, citations, suggested-action buttons and
//! the single-submission input row.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement};

use crate::dom_utils::{create, create_text, ensure_styles, on_click, on_enter, on_input};
use crate::messages::Message;
use crate::models::{AppAction, Role};
use crate::state::{dispatch_global_message, AppState, ChatPhase};

pub fn render(document: &Document, root: &Element, state: &AppState) -> Result<(), JsValue> {
    ensure_styles(document, "chat-styles", CHAT_CSS);

    // ---------------- Header ----------------
    let header = create(document, "div", "chat-header")?;
    let title_box = create(document, "div", "")?;
    let title = create_text(document, "h2", "screen-title", "Agent SEO Autonome")?;
    let badge = create_text(document, "span", "memory-badge", "Mémoire active (30j)")?;
    title.append_child(&badge)?;
    title_box.append_child(&title)?;
    title_box.append_child(&create_text(
        document,
        "p",
        "screen-subtitle",
        "Optimisation Google Business Profile & SEO Local",
    )?.into())?;
    header.append_child(&title_box)?;

    let clear = create_text(document, "button", "clear-button", "Effacer la mémoire")?;
    on_click(&clear, || {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Voulez-vous effacer l'historique de conversation ?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if confirmed {
            dispatch_global_message(Message::ClearChatHistory);
        }
    })?;
    header.append_child(&clear)?;
    root.append_child(&header)?;

    // ---------------- Transcript ----------------
    let panel = create(document, "div", "chat-panel")?;
    let messages_el = create(document, "div", "chat-messages")?;
    messages_el.set_id("chat-messages");

    for msg in &state.chat.messages {
        messages_el.append_child(&render_message(document, msg)?.into())?;
    }

    if state.chat.phase == ChatPhase::Awaiting {
        let pending = create(document, "div", "chat-row model")?;
        let bubble = create_text(document, "div", "bubble model pending", "Analyse en cours...")?;
        pending.append_child(&bubble)?;
        messages_el.append_child(&pending)?;
    }
    panel.append_child(&messages_el)?;

    // ---------------- Input row ----------------
    let input_row = create(document, "div", "chat-input-row")?;
    let input = create(document, "input", "chat-input text-input")?;
    input.set_id("chat-input");
    input.set_attribute(
        "placeholder",
        "Posez une question (ex: Mets à jour mes horaires, Analyse mes stats...)",
    )?;
    if let Some(input_el) = input.dyn_ref::<HtmlInputElement>() {
        input_el.set_value(&state.chat.input);
        input_el.set_disabled(state.chat.phase == ChatPhase::Awaiting);
    }
    on_input(&input, |value| {
        dispatch_global_message(Message::ChatInputChanged(value))
    })?;
    on_enter(&input, || dispatch_global_message(Message::SendChatMessage))?;
    input_row.append_child(&input)?;

    let send = create_text(document, "button", "primary-button", "Envoyer")?;
    if let Some(button) = send.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(state.chat.phase == ChatPhase::Awaiting);
    }
    on_click(&send, || dispatch_global_message(Message::SendChatMessage))?;
    input_row.append_child(&send)?;

    panel.append_child(&input_row)?;
    root.append_child(&panel)?;

    // Keep the latest turn in view.
    messages_el.set_scroll_top(messages_el.scroll_height());
    Ok(())
}

fn render_message(document: &Document, msg: &crate::models::ChatMessage) -> Result<Element, JsValue> {
    let row_class = match msg.role {
        Role::User => "chat-row user",
        Role::Model => "chat-row model",
    };
    let row = create(document, "div", row_class)?;
    let stack = create(document, "div", "bubble-stack")?;

    let bubble_class = match msg.role {
        Role::User => "bubble user",
        Role::Model => "bubble model",
    };
    stack.append_child(&create_text(document, "div", bubble_class, &msg.text)?.into())?;

    if let Some(action) = &msg.action {
        let AppAction::Navigate { label, .. } = action;
        let button = create_text(
            document,
            "button",
            "action-button",
            &format!("Action Suggérée : {}", label),
        )?;
        let action = action.clone();
        on_click(&button, move || {
            dispatch_global_message(Message::ApplyAgentAction(action.clone()))
        })?;
        stack.append_child(&button)?;
    }

    if !msg.sources.is_empty() {
        let sources_box = create(document, "div", "sources-box")?;
        sources_box.append_child(&create_text(document, "div", "sources-title", "Sources trouvées")?.into())?;
        for source in &msg.sources {
            let link = create_text(document, "a", "source-link", &source.title)?;
            link.set_attribute("href", &source.uri)?;
            link.set_attribute("target", "_blank")?;
            link.set_attribute("rel", "noopener noreferrer")?;
            sources_box.append_child(&link)?;
        }
        stack.append_child(&sources_box)?;
    }

    stack.append_child(&create_text(
        document,
        "span",
        "bubble-time",
        &crate::utils::short_time(&msg.timestamp),
    )?.into())?;

    row.append_child(&stack)?;
    Ok(row)
}

const CHAT_CSS: &str = "
.chat-header{display:flex;justify-content:space-between;align-items:flex-start;margin-bottom:16px}
.memory-badge{margin-left:12px;font-size:11px;background:rgba(99,102,241,.2);color:#a5b4fc;border:1px solid rgba(99,102,241,.3);border-radius:999px;padding:2px 8px;vertical-align:middle}
.clear-button{background:rgba(49,46,129,.4);border:1px solid rgba(99,102,241,.3);color:#a5b4fc;border-radius:8px;padding:8px 12px;cursor:pointer}
.clear-button:hover{background:rgba(153,27,27,.4);color:#fecaca}
.chat-panel{background:rgba(30,27,75,.5);border:1px solid rgba(99,102,241,.2);border-radius:16px;display:flex;flex-direction:column;height:calc(100vh - 220px)}
.chat-messages{flex:1;overflow-y:auto;padding:20px;display:flex;flex-direction:column;gap:14px}
.chat-row{display:flex}
.chat-row.user{justify-content:flex-end}
.bubble-stack{display:flex;flex-direction:column;max-width:75%}
.chat-row.user .bubble-stack{align-items:flex-end}
.bubble{padding:12px 16px;border-radius:16px;font-size:14px;white-space:pre-wrap}
.bubble.user{background:#4f46e5;color:#fff;border-top-right-radius:4px}
.bubble.model{background:#1e1b4b;border:1px solid rgba(99,102,241,.2);color:#e2e8f0;border-top-left-radius:4px}
.bubble.pending{color:#a5b4fc;font-style:italic}
.action-button{margin-top:10px;background:linear-gradient(90deg,#4f46e5,#9333ea);color:#fff;border:none;border-radius:10px;padding:10px 14px;font-weight:600;cursor:pointer}
.sources-box{margin-top:8px;background:rgba(17,24,39,.5);border:1px solid rgba(49,46,129,.5);border-radius:8px;padding:8px;font-size:12px}
.sources-title{color:#818cf8;font-weight:600;margin-bottom:4px}
.source-link{display:inline-block;color:#a5b4fc;margin-right:10px;max-width:200px;overflow:hidden;text-overflow:ellipsis;white-space:nowrap;vertical-align:bottom}
.bubble-time{font-size:10px;color:rgba(129,140,248,.5);margin-top:4px}
.chat-input-row{display:flex;gap:10px;padding:14px;border-top:1px solid rgba(99,102,241,.2)}
.chat-input{background:rgba(17,24,39,.8);border:1px solid rgba(99,102,241,.3);color:#fff}
";
