//! Request builders: model inputs must land in the camelCase wire shape the
//! endpoint expects, with the right schema and tool attachments.

use serde_json::Value;

use crate::gateway::client::{
    chat_request, competitor_request, image_edit_request, image_generation_request,
    review_request, strategy_request,
};
use crate::models::Role;

fn to_value<T: serde::Serialize>(req: &T) -> Value {
    serde_json::to_value(req).expect("request serializes")
}

#[test]
fn strategy_request_declares_schema_and_thinking_budget() {
    let value = to_value(&strategy_request("Pizza chez Joe", "Restaurant Italien", "four à bois"));

    let prompt = value["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Pizza chez Joe"));
    assert!(prompt.contains("Restaurant Italien"));
    assert!(prompt.contains("four à bois"));
    assert!(prompt.contains("8 Google Business Posts"));

    let config = &value["generationConfig"];
    assert_eq!(config["responseMimeType"], "application/json");
    assert_eq!(config["thinkingConfig"]["thinkingBudget"], 32768);
    assert_eq!(config["responseSchema"]["type"], "OBJECT");
    assert_eq!(
        config["responseSchema"]["properties"]["posts"]["type"],
        "ARRAY"
    );
    // Nothing the endpoint rejects may be present.
    assert!(value.get("tools").is_none());
    assert!(value.get("systemInstruction").is_none());
}

#[test]
fn chat_request_resends_the_full_transcript() {
    let history = vec![
        (Role::Model, "Bonjour !".to_string()),
        (Role::User, "Salut".to_string()),
    ];
    let value = to_value(&chat_request("Analyse mes stats", &history));

    let contents = value["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 3);
    assert_eq!(contents[0]["role"], "model");
    assert_eq!(contents[1]["role"], "user");
    assert_eq!(contents[2]["role"], "user");
    assert_eq!(contents[2]["parts"][0]["text"], "Analyse mes stats");

    assert!(value["tools"][0]["googleSearch"].is_object());
    let system = value["systemInstruction"]["parts"][0]["text"].as_str().unwrap();
    assert!(system.contains("Google Business Profile"));
    assert!(system.contains("|||JSON_ACTION_START|||"));
    assert!(system.contains("/competitors"));
}

#[test]
fn image_requests_carry_aspect_ratio_or_source_image() {
    let generate = to_value(&image_generation_request("une devanture"));
    assert_eq!(generate["generationConfig"]["imageConfig"]["aspectRatio"], "1:1");
    assert_eq!(generate["contents"][0]["parts"][0]["text"], "une devanture");

    let edit = to_value(&image_edit_request("QUJD", "image/jpeg", "plus lumineux"));
    let parts = edit["contents"][0]["parts"].as_array().unwrap();
    assert_eq!(parts[0]["inlineData"]["mimeType"], "image/jpeg");
    assert_eq!(parts[0]["inlineData"]["data"], "QUJD");
    assert_eq!(parts[1]["text"], "plus lumineux");
    // Editing keeps the source geometry; no imageConfig is declared.
    assert!(edit.get("generationConfig").is_none());
}

#[test]
fn review_request_embeds_review_fields_without_schema() {
    let value = to_value(&review_request("Service impeccable", 5, "Sophie", "Dootri Agency"));
    let prompt = value["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Service impeccable"));
    assert!(prompt.contains("5/5"));
    assert!(prompt.contains("Sophie"));
    assert!(prompt.contains("Dootri Agency"));

    assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
    assert!(value["generationConfig"].get("responseSchema").is_none());
}

#[test]
fn competitor_request_lists_every_competitor() {
    let competitors = vec!["Agence Alpha".to_string(), "Studio Beta".to_string()];
    let value = to_value(&competitor_request("Dootri Agency", &competitors));
    let prompt = value["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Agence Alpha, Studio Beta"));

    let config = &value["generationConfig"];
    assert_eq!(config["thinkingConfig"]["thinkingBudget"], 16384);
    assert_eq!(config["responseSchema"]["type"], "ARRAY");
}
