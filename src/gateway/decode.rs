//! Pure reply decoding.  Nothing in this module touches `JsValue` or the
//! DOM, so the whole wire contract is testable on the host target.

use serde_json::Value;

use crate::constants::{DEFAULT_REVIEW_RESPONSE, EMPTY_REPLY_TEXT};
use crate::models::{
    AgentReply, AppAction, CompetitorData, GeneratedStrategy, ImagePayload, ReviewAssessment,
    Sentiment, SourceLink,
};
use crate::routes::Route;

use super::schemas;
use super::types::GenerateContentResponse;

/// Exact delimiter pair framing the navigation side-channel.  Also embedded
/// in the chat system instruction (`prompts::chat_system_instruction`).
pub const ACTION_START: &str = "|||JSON_ACTION_START|||";
pub const ACTION_END: &str = "|||JSON_ACTION_END|||";

/// Split a reply into display text and the optional navigation action.
///
/// Only the first complete delimiter block is considered.  The block is
/// always stripped from the text; if its payload is not valid action JSON
/// the action is silently dropped.  An unterminated start delimiter is left
/// in place – there is no escaping rule on this wire, so half a frame is
/// treated as ordinary text.
pub fn parse_action_block(text: &str) -> (String, Option<AppAction>) {
    let Some(start) = text.find(ACTION_START) else {
        return (text.to_string(), None);
    };
    let payload_start = start + ACTION_START.len();
    let Some(end) = text[payload_start..].find(ACTION_END) else {
        return (text.to_string(), None);
    };
    let payload = text[payload_start..payload_start + end].trim();
    let rest = &text[payload_start + end + ACTION_END.len()..];

    let mut display = String::with_capacity(start + rest.len());
    display.push_str(&text[..start]);
    display.push_str(rest);

    let action = serde_json::from_str::<AppAction>(payload).ok();
    (display.trim().to_string(), action)
}

/// Collapse the first candidate's text parts into one string.
pub fn first_text(resp: &GenerateContentResponse) -> Option<String> {
    let content = resp.candidates.first()?.content.as_ref()?;
    let text: String = content
        .parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// First inline image of the first candidate, if any.
pub fn first_inline_image(resp: &GenerateContentResponse) -> Option<ImagePayload> {
    let content = resp.candidates.first()?.content.as_ref()?;
    content.parts.iter().find_map(|p| {
        p.inline_data.as_ref().map(|d| ImagePayload {
            mime_type: d.mime_type.clone(),
            data: d.data.clone(),
        })
    })
}

/// Grounding citations projected into a uri-deduplicated list, in reply
/// order.  Chunks without both uri and title are skipped.
pub fn grounding_sources(resp: &GenerateContentResponse) -> Vec<SourceLink> {
    let mut seen = std::collections::HashSet::new();
    let mut sources = Vec::new();
    let chunks = resp
        .candidates
        .first()
        .and_then(|c| c.grounding_metadata.as_ref())
        .map(|m| m.grounding_chunks.as_slice())
        .unwrap_or_default();
    for chunk in chunks {
        if let Some(web) = &chunk.web {
            if let (Some(uri), Some(title)) = (&web.uri, &web.title) {
                if seen.insert(uri.clone()) {
                    sources.push(SourceLink {
                        uri: uri.clone(),
                        title: title.clone(),
                    });
                }
            }
        }
    }
    sources
}

/// Full chat-turn decode: fallback text, side-channel parse, citation
/// projection.  Actions pointing outside the fixed route set are dropped
/// here so the UI never renders a dead suggestion button.
pub fn decode_chat_reply(resp: &GenerateContentResponse) -> AgentReply {
    let raw = first_text(resp).unwrap_or_else(|| EMPTY_REPLY_TEXT.to_string());
    let (text, action) = parse_action_block(&raw);
    let action = action.filter(|a| {
        let AppAction::Navigate { path, .. } = a;
        Route::parse(path).is_some()
    });
    AgentReply {
        text,
        sources: grounding_sources(resp),
        action,
    }
}

/// Strict strategy decode: schema-validate first, then map into the typed
/// result.  Order and field values of the posts are preserved as sent.
pub fn decode_strategy(text: &str) -> Result<GeneratedStrategy, String> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| format!("invalid strategy JSON: {}", e))?;
    if !schemas::validate_strategy_reply(&value) {
        return Err("strategy reply does not match the declared schema".to_string());
    }
    serde_json::from_value(value).map_err(|e| format!("strategy decode failed: {}", e))
}

/// Review assessment decode.  Any failure – missing text, malformed JSON,
/// shape violation – yields the neutral default instead of an error.
pub fn decode_review_assessment(text: Option<&str>) -> ReviewAssessment {
    let fallback = ReviewAssessment {
        sentiment: Sentiment::Neutral,
        response: DEFAULT_REVIEW_RESPONSE.to_string(),
    };
    let Some(text) = text else { return fallback };
    let Ok(value) = serde_json::from_str::<Value>(text) else {
        return fallback;
    };
    if !schemas::validate_review_reply(&value) {
        return fallback;
    }
    serde_json::from_value(value).unwrap_or(fallback)
}

/// Competitor findings decode.  A missing reply text decodes to the empty
/// array; malformed present text is a decode failure like any other.
pub fn decode_competitors(text: Option<&str>) -> Result<Vec<CompetitorData>, String> {
    let Some(text) = text else { return Ok(Vec::new()) };
    let value: Value =
        serde_json::from_str(text).map_err(|e| format!("invalid competitor JSON: {}", e))?;
    if !schemas::validate_competitor_reply(&value) {
        return Err("competitor reply does not match the declared schema".to_string());
    }
    serde_json::from_value(value).map_err(|e| format!("competitor decode failed: {}", e))
}
