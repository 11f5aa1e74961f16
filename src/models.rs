use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{CHAT_ERROR_TEXT, MEMORY_CLEARED_TEXT, WELCOME_TEXT};

/// Who authored a chat turn.  Serialized as the lowercase wire role the
/// gateway expects ("user" / "model").
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// The logged-in user.  Lives under its own storage key for the duration of
/// the session and is removed on logout.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub avatar: String,
}

/// Editable Google Business Profile data.  The 750 character description
/// bound is a UI convention only and is never enforced on save.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug, Default)]
pub struct BusinessProfile {
    pub name: String,
    pub industry: String,
    pub location: String,
    pub description: String,
    pub services: Vec<String>,
    pub website: String,
    pub phone: String,
}

/// A grounding citation surfaced alongside a chat reply.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct SourceLink {
    pub uri: String,
    pub title: String,
}

/// Structured suggestion embedded in a chat reply.  The wire format is the
/// delimiter-framed JSON block described in `gateway::decode`; at the API
/// boundary it is this tagged union, not a string to be re-parsed.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(tag = "type")]
pub enum AppAction {
    #[serde(rename = "NAVIGATE")]
    Navigate { path: String, label: String },
}

/// One transcript entry.  Append-only except for the full history reset.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<AppAction>,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: crate::utils::new_id(),
            role,
            text: text.into(),
            timestamp,
            sources: Vec::new(),
            action: None,
        }
    }

    /// The default greeting shown when no (unexpired) history exists.
    pub fn welcome(now: DateTime<Utc>) -> Self {
        Self::new(Role::Model, WELCOME_TEXT, now)
    }

    /// The single entry the transcript is reset to on "clear history".
    pub fn reset_notice(now: DateTime<Utc>) -> Self {
        Self::new(Role::Model, MEMORY_CLEARED_TEXT, now)
    }

    /// The apology turn appended when a gateway call fails.
    pub fn apology(now: DateTime<Utc>) -> Self {
        Self::new(Role::Model, CHAT_ERROR_TEXT, now)
    }
}

/// One manually entered row of weekly performance counters.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct TrackerEntry {
    pub id: String,
    pub period: String,
    pub impressions: u32,
    pub clicks: u32,
    pub calls: u32,
    pub reviews: u32,
    pub rating: f64,
}

#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum ChecklistCategory {
    Optimization,
    Weekly,
    Monthly,
}

impl ChecklistCategory {
    pub const ALL: [ChecklistCategory; 3] = [
        ChecklistCategory::Optimization,
        ChecklistCategory::Weekly,
        ChecklistCategory::Monthly,
    ];

    /// French heading used by the checklist screen.
    pub fn label(&self) -> &'static str {
        match self {
            ChecklistCategory::Optimization => "Optimisation",
            ChecklistCategory::Weekly => "Hebdomadaire",
            ChecklistCategory::Monthly => "Mensuel",
        }
    }
}

/// A recurring task.  Toggled by the user, never created or deleted.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct ChecklistItem {
    pub id: String,
    pub task: String,
    pub completed: bool,
    pub category: ChecklistCategory,
}

#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

/// A customer review.  `sentiment` and `response` are filled in exactly once
/// by the gateway and treated as immutable afterwards.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct CustomerReview {
    pub id: String,
    pub author: String,
    pub rating: u8,
    pub text: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

/// Gateway output of the review-assessment operation.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct ReviewAssessment {
    pub sentiment: Sentiment,
    pub response: String,
}

/// Per-competitor findings, wholly produced by the gateway and never
/// persisted.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct CompetitorData {
    pub name: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub keywords: Vec<String>,
}

/// One generated Google Business post.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct GmbPost {
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Full output of the strategy operation: a profile description plus the
/// eight posts requested from the model.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct GeneratedStrategy {
    pub description: String,
    pub posts: Vec<GmbPost>,
}

/// A decoded inline image from the gateway.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: String,
}

impl ImagePayload {
    /// Data URL usable directly as an `<img src>` / download href.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Decoded chat turn: display text with the side-channel action already
/// stripped out, plus deduplicated grounding citations.
#[derive(Clone, PartialEq, Debug)]
pub struct AgentReply {
    pub text: String,
    pub sources: Vec<SourceLink>,
    pub action: Option<AppAction>,
}
