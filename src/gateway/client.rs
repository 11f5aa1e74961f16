//! The six gateway operations.  Each is a single round trip – no retry, no
//! backoff – because every caller treats failure as "show an error, let the
//! user resubmit".
//!
//! Request construction is split into pure builder functions so the wire
//! shape (model choice, prompt, declared schema, tool set) can be asserted
//! in host-target tests without a browser.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::models::{AgentReply, CompetitorData, GeneratedStrategy, ImagePayload, ReviewAssessment, Role};

use super::config::ApiConfig;
use super::decode;
use super::prompts;
use super::schemas;
use super::types::{
    Content, GenerateContentRequest, GenerationConfig, ImageConfig, Part, ThinkingConfig, Tool,
};

pub const STRATEGY_MODEL: &str = "gemini-3-pro-preview";
pub const CHAT_MODEL: &str = "gemini-3-pro-preview";
pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const REVIEW_MODEL: &str = "gemini-2.5-flash";

// ---------------------------------------------------------------------------
// Request builders (pure)
// ---------------------------------------------------------------------------

pub fn strategy_request(business_name: &str, industry: &str, offers: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::text(
            Some("user"),
            prompts::strategy_prompt(business_name, industry, offers),
        )],
        generation_config: Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schemas::strategy_response_schema()),
            thinking_config: Some(ThinkingConfig {
                thinking_budget: 32768,
            }),
            image_config: None,
        }),
        ..Default::default()
    }
}

pub fn image_generation_request(prompt: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::text(Some("user"), prompt)],
        generation_config: Some(GenerationConfig {
            image_config: Some(ImageConfig {
                aspect_ratio: "1:1".to_string(),
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn image_edit_request(image_base64: &str, mime_type: &str, prompt: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![
                Part::inline_data(mime_type, image_base64),
                Part::text(prompt),
            ],
        }],
        ..Default::default()
    }
}

pub fn chat_request(message: &str, history: &[(Role, String)]) -> GenerateContentRequest {
    let mut contents: Vec<Content> = history
        .iter()
        .map(|(role, text)| Content::text(Some(role.as_str()), text.clone()))
        .collect();
    contents.push(Content::text(Some("user"), message));
    GenerateContentRequest {
        contents,
        system_instruction: Some(Content {
            role: None,
            parts: vec![Part::text(prompts::chat_system_instruction())],
        }),
        tools: Some(vec![Tool::google_search()]),
        generation_config: None,
    }
}

pub fn review_request(
    review_text: &str,
    rating: u8,
    author: &str,
    business_name: &str,
) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::text(
            Some("user"),
            prompts::review_prompt(review_text, rating, author, business_name),
        )],
        generation_config: Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn competitor_request(my_business: &str, competitors: &[String]) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::text(
            Some("user"),
            prompts::competitor_prompt(my_business, competitors),
        )],
        generation_config: Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schemas::competitor_response_schema()),
            thinking_config: Some(ThinkingConfig {
                thinking_budget: 16384,
            }),
            image_config: None,
        }),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

async fn post_generate_content(
    model: &str,
    request: &GenerateContentRequest,
) -> Result<super::types::GenerateContentResponse, JsValue> {
    let body = serde_json::to_string(request)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize request: {}", e)))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let headers = Headers::new()?;
    headers.append("Content-Type", "application/json")?;
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&body));

    let url = ApiConfig::default().generate_content_url(model);
    let request = Request::new_with_str_and_init(&url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "Gateway request failed: {} {}",
            resp.status(),
            resp.status_text()
        )));
    }

    let json = JsFuture::from(resp.json()?).await?;
    serde_wasm_bindgen::from_value(json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse gateway reply: {}", e)))
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Draft a content strategy: a profile description plus eight posts.
pub async fn generate_marketing_strategy(
    business_name: &str,
    industry: &str,
    offers: &str,
) -> Result<GeneratedStrategy, JsValue> {
    let request = strategy_request(business_name, industry, offers);
    let resp = post_generate_content(STRATEGY_MODEL, &request).await?;
    let text = decode::first_text(&resp)
        .ok_or_else(|| JsValue::from_str("Réponse vide du modèle"))?;
    decode::decode_strategy(&text).map_err(|e| JsValue::from_str(&e))
}

/// Generate a square image from a text prompt.
pub async fn generate_image(prompt: &str) -> Result<ImagePayload, JsValue> {
    let request = image_generation_request(prompt);
    let resp = post_generate_content(IMAGE_MODEL, &request).await?;
    decode::first_inline_image(&resp)
        .ok_or_else(|| JsValue::from_str("Aucune image dans la réponse"))
}

/// Rework a previously captured image according to a text instruction.
pub async fn edit_image(
    image_base64: &str,
    mime_type: &str,
    prompt: &str,
) -> Result<ImagePayload, JsValue> {
    let request = image_edit_request(image_base64, mime_type, prompt);
    let resp = post_generate_content(IMAGE_MODEL, &request).await?;
    decode::first_inline_image(&resp)
        .ok_or_else(|| JsValue::from_str("Aucune image dans la réponse"))
}

/// One conversational turn.  The full prior transcript is resent so the
/// stateless endpoint behaves like a stateful chat.
pub async fn send_chat_turn(
    message: &str,
    history: &[(Role, String)],
) -> Result<AgentReply, JsValue> {
    let request = chat_request(message, history);
    let resp = post_generate_content(CHAT_MODEL, &request).await?;
    Ok(decode::decode_chat_reply(&resp))
}

/// Sentiment plus a drafted owner response for one review.  Decode failures
/// fold into the neutral default; only transport errors surface.
pub async fn generate_review_response(
    review_text: &str,
    rating: u8,
    author: &str,
    business_name: &str,
) -> Result<ReviewAssessment, JsValue> {
    let request = review_request(review_text, rating, author, business_name);
    let resp = post_generate_content(REVIEW_MODEL, &request).await?;
    Ok(decode::decode_review_assessment(
        decode::first_text(&resp).as_deref(),
    ))
}

/// Strengths/weaknesses/keywords for each named competitor.
pub async fn analyze_competitors(
    my_business: &str,
    competitors: &[String],
) -> Result<Vec<CompetitorData>, JsValue> {
    let request = competitor_request(my_business, competitors);
    let resp = post_generate_content(CHAT_MODEL, &request).await?;
    decode::decode_competitors(decode::first_text(&resp).as_deref())
        .map_err(|e| JsValue::from_str(&e))
}
