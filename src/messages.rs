// frontend/src/messages.rs
//
// The events that can occur in the UI, plus the side-effect commands the
// update layer hands back for execution.

use crate::models::{
    AgentReply, AppAction, CompetitorData, GeneratedStrategy, ImagePayload, ReviewAssessment,
    Role, UserProfile,
};
use crate::routes::Route;
use crate::state::StudioMode;

/// Text fields of the business profile form.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProfileField {
    Name,
    Industry,
    Location,
    Description,
    Website,
    Phone,
}

/// Inputs of the content generator form.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContentField {
    BusinessName,
    Industry,
    Offers,
}

/// Inputs of the tracker entry form.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TrackerField {
    Period,
    Impressions,
    Clicks,
    Calls,
    Reviews,
    Rating,
}

#[derive(Clone, Debug)]
pub enum Message {
    // Session
    Login(UserProfile),
    Logout,

    // Navigation
    Navigate(Route),
    /// A suggestion from the chat agent was accepted by the user.
    ApplyAgentAction(AppAction),

    // Chat agent
    ChatInputChanged(String),
    SendChatMessage,
    ChatReplyReceived(AgentReply),
    ChatRequestFailed(String),
    ClearChatHistory,

    // Business profile
    ProfileFieldChanged(ProfileField, String),
    ProfileServiceChanged { index: usize, value: String },
    ProfileServiceAdded,
    ProfileServiceRemoved(usize),
    SaveProfile,
    ProfileSaveFlashEnded,
    ConnectGoogle,
    GoogleConnected,

    // Content generator
    ContentFieldChanged(ContentField, String),
    GenerateStrategy,
    StrategyGenerated(GeneratedStrategy),
    StrategyFailed(String),

    // Image studio
    StudioModeSelected(StudioMode),
    ImagePromptChanged(String),
    SourceImageLoaded { mime_type: String, data: String },
    SubmitImageRequest,
    ImageReady(ImagePayload),
    ImageFailed(String),

    // Checklist
    ToggleChecklistItem(String),

    // Metrics tracker
    TrackerFieldChanged(TrackerField, String),
    AddTrackerEntry,
    DeleteTrackerEntry(String),

    // Reputation manager
    GenerateReviewReply(String),
    ReviewAssessed {
        review_id: String,
        assessment: ReviewAssessment,
    },
    ReviewAssessmentFailed {
        review_id: String,
        error: String,
    },

    // Competitor analysis
    CompetitorsInputChanged(String),
    AnalyzeCompetitors,
    CompetitorsAnalyzed(Vec<CompetitorData>),
    CompetitorAnalysisFailed(String),
}

/// Commands represent side effects that should be executed after state
/// updates.  This separates pure state changes from effects like gateway
/// calls and DOM updates.
pub enum Command {
    /// Chain another message through the dispatch loop.
    SendMessage(Box<Message>),

    /// Execute a DOM update after the state borrow is released.
    UpdateUI(Box<dyn FnOnce() + 'static>),

    /// Reflect the active route into `location.hash`.
    SetHash(Route),

    /// Dispatch one chat turn to the gateway.
    SendChatTurn {
        message: String,
        history: Vec<(Role, String)>,
    },

    /// Request a content strategy draft.
    GenerateStrategy {
        business_name: String,
        industry: String,
        offers: String,
    },

    /// Request a fresh image.
    GenerateImage { prompt: String },

    /// Request an edit of a captured image.
    EditImage {
        data: String,
        mime_type: String,
        prompt: String,
    },

    /// Request sentiment + response draft for one review.
    AssessReview {
        review_id: String,
        review_text: String,
        rating: u8,
        author: String,
        business_name: String,
    },

    /// Request a competitor analysis.
    AnalyzeCompetitors {
        my_business: String,
        competitors: Vec<String>,
    },

    /// Simulated Google account link (fixed delay, then flag flips).
    ConnectGoogle,

    /// Clear the "saved" confirmation after its flash interval.
    ScheduleSaveFlashEnd,

    /// Represents no side effect.
    NoOp,
}

impl Command {
    /// Helper to create a SendMessage command.
    pub fn send(msg: Message) -> Self {
        Command::SendMessage(Box::new(msg))
    }

    /// Helper to create a NoOp command.
    #[allow(dead_code)]
    pub fn none() -> Self {
        Command::NoOp
    }

    /// Helper to create an UpdateUI command.
    pub fn update_ui<F>(f: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Command::UpdateUI(Box::new(f))
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::SendMessage(msg) => f.debug_tuple("SendMessage").field(msg).finish(),
            Command::UpdateUI(_) => f.write_str("UpdateUI(..)"),
            Command::SetHash(route) => f.debug_tuple("SetHash").field(route).finish(),
            Command::SendChatTurn { message, history } => f
                .debug_struct("SendChatTurn")
                .field("message", message)
                .field("history_len", &history.len())
                .finish(),
            Command::GenerateStrategy { business_name, .. } => f
                .debug_struct("GenerateStrategy")
                .field("business_name", business_name)
                .finish(),
            Command::GenerateImage { .. } => f.write_str("GenerateImage"),
            Command::EditImage { .. } => f.write_str("EditImage"),
            Command::AssessReview { review_id, .. } => f
                .debug_struct("AssessReview")
                .field("review_id", review_id)
                .finish(),
            Command::AnalyzeCompetitors { competitors, .. } => f
                .debug_struct("AnalyzeCompetitors")
                .field("competitors", competitors)
                .finish(),
            Command::ConnectGoogle => f.write_str("ConnectGoogle"),
            Command::ScheduleSaveFlashEnd => f.write_str("ScheduleSaveFlashEnd"),
            Command::NoOp => f.write_str("NoOp"),
        }
    }
}
