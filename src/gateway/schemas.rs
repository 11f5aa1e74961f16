//! Reply-shape contracts, in two renditions:
//!
//! * the `responseSchema` values declared to the model in each request
//!   (the REST API's OpenAPI-style uppercase type names), and
//! * compiled JSON Schema validators the decoder runs against reply text
//!   before serde sees it, so a shape violation is reported as a decode
//!   failure instead of a confusing field error.

use jsonschema::JSONSchema;
use lazy_static::lazy_static;
use serde_json::{json, Value};

lazy_static! {
    static ref STRATEGY_REPLY_SCHEMA: JSONSchema = {
        // At compile-time embed the schema JSON string.
        let raw = include_str!("schema/strategy_reply.json");
        let parsed: Value = serde_json::from_str(raw).expect("Strategy reply schema must be valid JSON");
        JSONSchema::compile(&parsed).expect("valid strategy reply schema")
    };
    static ref REVIEW_REPLY_SCHEMA: JSONSchema = {
        let raw = include_str!("schema/review_reply.json");
        let parsed: Value = serde_json::from_str(raw).expect("Review reply schema must be valid JSON");
        JSONSchema::compile(&parsed).expect("valid review reply schema")
    };
    static ref COMPETITOR_REPLY_SCHEMA: JSONSchema = {
        let raw = include_str!("schema/competitor_reply.json");
        let parsed: Value = serde_json::from_str(raw).expect("Competitor reply schema must be valid JSON");
        JSONSchema::compile(&parsed).expect("valid competitor reply schema")
    };
}

pub fn validate_strategy_reply(value: &Value) -> bool {
    STRATEGY_REPLY_SCHEMA.validate(value).is_ok()
}

pub fn validate_review_reply(value: &Value) -> bool {
    REVIEW_REPLY_SCHEMA.validate(value).is_ok()
}

pub fn validate_competitor_reply(value: &Value) -> bool {
    COMPETITOR_REPLY_SCHEMA.validate(value).is_ok()
}

/// `responseSchema` declared with the strategy request.
pub fn strategy_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "description": { "type": "STRING" },
            "posts": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "content": { "type": "STRING" },
                        "type": { "type": "STRING" }
                    }
                }
            }
        }
    })
}

/// `responseSchema` declared with the competitor-analysis request.
pub fn competitor_response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "strengths": { "type": "ARRAY", "items": { "type": "STRING" } },
                "weaknesses": { "type": "ARRAY", "items": { "type": "STRING" } },
                "keywords": { "type": "ARRAY", "items": { "type": "STRING" } }
            }
        }
    })
}
