//! Structured-reply decoding against the declared schemas.

use serde_json::json;

use crate::gateway::decode::{
    decode_chat_reply, decode_competitors, decode_review_assessment, decode_strategy,
    first_inline_image, grounding_sources,
};
use crate::gateway::types::GenerateContentResponse;
use crate::models::{AppAction, Sentiment};

fn strategy_json_with_posts(count: usize) -> String {
    let posts: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "title": format!("Post {}", i),
                "content": format!("Contenu {}", i),
                "type": if i % 2 == 0 { "Update" } else { "Offer" },
            })
        })
        .collect();
    json!({ "description": "Une description optimisée SEO.", "posts": posts }).to_string()
}

#[test]
fn strategy_decode_preserves_all_eight_posts_in_order() {
    let decoded = decode_strategy(&strategy_json_with_posts(8)).expect("valid reply decodes");
    assert_eq!(decoded.description, "Une description optimisée SEO.");
    assert_eq!(decoded.posts.len(), 8);
    for (i, post) in decoded.posts.iter().enumerate() {
        assert_eq!(post.title, format!("Post {}", i));
        assert_eq!(post.content, format!("Contenu {}", i));
    }
    assert_eq!(decoded.posts[1].kind, "Offer");
}

#[test]
fn strategy_decode_rejects_shape_violations() {
    assert!(decode_strategy("not json").is_err());
    assert!(decode_strategy("{\"description\": \"ok\"}").is_err());
    let wrong_type = json!({ "description": "ok", "posts": "huit" }).to_string();
    assert!(decode_strategy(&wrong_type).is_err());
}

#[test]
fn review_decode_defaults_to_neutral_on_any_failure() {
    let fallback = decode_review_assessment(None);
    assert_eq!(fallback.sentiment, Sentiment::Neutral);
    assert_eq!(fallback.response, crate::constants::DEFAULT_REVIEW_RESPONSE);

    assert_eq!(
        decode_review_assessment(Some("pas du JSON")).sentiment,
        Sentiment::Neutral
    );
    assert_eq!(
        decode_review_assessment(Some("{\"sentiment\":\"enthusiastic\",\"response\":\"x\"}"))
            .sentiment,
        Sentiment::Neutral
    );
}

#[test]
fn review_decode_accepts_valid_reply() {
    let reply = json!({ "sentiment": "negative", "response": "Nous sommes navrés." }).to_string();
    let decoded = decode_review_assessment(Some(&reply));
    assert_eq!(decoded.sentiment, Sentiment::Negative);
    assert_eq!(decoded.response, "Nous sommes navrés.");
}

#[test]
fn competitor_decode_handles_missing_text_and_bad_json() {
    assert_eq!(decode_competitors(None).expect("missing text is empty"), vec![]);
    assert!(decode_competitors(Some("{}")).is_err());

    let reply = json!([{
        "name": "Agence Alpha",
        "strengths": ["notoriété", "avis", "photos"],
        "weaknesses": ["prix", "horaires", "réactivité"],
        "keywords": ["seo local", "marketing", "gmb"],
    }])
    .to_string();
    let decoded = decode_competitors(Some(&reply)).expect("valid array decodes");
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].name, "Agence Alpha");
    assert_eq!(decoded[0].keywords.len(), 3);
}

fn response_from_json(value: serde_json::Value) -> GenerateContentResponse {
    serde_json::from_value(value).expect("response JSON parses")
}

#[test]
fn chat_decode_projects_deduplicated_sources() {
    let resp = response_from_json(json!({
        "candidates": [{
            "content": { "parts": [{ "text": "Réponse avec sources." }] },
            "groundingMetadata": {
                "groundingChunks": [
                    { "web": { "uri": "https://a.example", "title": "A" } },
                    { "web": { "uri": "https://a.example", "title": "A encore" } },
                    { "web": { "uri": "https://b.example", "title": "B" } },
                    { "web": { "uri": "https://c.example" } },
                ]
            }
        }]
    }));
    let sources = grounding_sources(&resp);
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].uri, "https://a.example");
    assert_eq!(sources[0].title, "A");
    assert_eq!(sources[1].uri, "https://b.example");
}

#[test]
fn chat_decode_drops_actions_outside_the_route_set() {
    let resp = response_from_json(json!({
        "candidates": [{
            "content": { "parts": [{
                "text": "Allons-y |||JSON_ACTION_START|||{\"type\":\"NAVIGATE\",\"path\":\"/admin\",\"label\":\"Go\"}|||JSON_ACTION_END|||"
            }] }
        }]
    }));
    let reply = decode_chat_reply(&resp);
    assert_eq!(reply.text, "Allons-y");
    assert!(reply.action.is_none());
}

#[test]
fn chat_decode_keeps_known_route_actions() {
    let resp = response_from_json(json!({
        "candidates": [{
            "content": { "parts": [{
                "text": "Je vous y emmène. |||JSON_ACTION_START|||{\"type\":\"NAVIGATE\",\"path\":\"/metrics\",\"label\":\"Voir les stats\"}|||JSON_ACTION_END|||"
            }] }
        }]
    }));
    let reply = decode_chat_reply(&resp);
    assert_eq!(reply.text, "Je vous y emmène.");
    assert_eq!(
        reply.action,
        Some(AppAction::Navigate {
            path: "/metrics".to_string(),
            label: "Voir les stats".to_string(),
        })
    );
}

#[test]
fn chat_decode_falls_back_on_empty_reply() {
    let reply = decode_chat_reply(&response_from_json(json!({ "candidates": [] })));
    assert_eq!(reply.text, crate::constants::EMPTY_REPLY_TEXT);
    assert!(reply.sources.is_empty());
}

#[test]
fn image_decode_finds_inline_payload() {
    let resp = response_from_json(json!({
        "candidates": [{
            "content": { "parts": [
                { "text": "voici votre image" },
                { "inlineData": { "mimeType": "image/png", "data": "QUJD" } }
            ] }
        }]
    }));
    let image = first_inline_image(&resp).expect("inline image present");
    assert_eq!(image.mime_type, "image/png");
    assert_eq!(image.to_data_url(), "data:image/png;base64,QUJD");

    let none = first_inline_image(&response_from_json(json!({
        "candidates": [{ "content": { "parts": [{ "text": "texte seulement" }] } }]
    })));
    assert!(none.is_none());
}
