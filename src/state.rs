use std::cell::RefCell;

use chrono::Utc;

use crate::messages::{Command, Message};
use crate::models::{
    BusinessProfile, ChatMessage, ChecklistItem, CompetitorData, CustomerReview, GeneratedStrategy,
    ImagePayload, TrackerEntry, UserProfile,
};
use crate::routes::Route;
use crate::storage::Store;
use crate::update::update;

/// Chat screen phases.  Error is an event (an appended apology turn), not a
/// sticky state, so two variants suffice.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChatPhase {
    Idle,
    Awaiting,
}

pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub phase: ChatPhase,
}

impl ChatState {
    fn new() -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            phase: ChatPhase::Idle,
        }
    }
}

pub struct ProfileState {
    pub profile: BusinessProfile,
    pub google_connected: bool,
    pub connecting: bool,
    pub saved_flash: bool,
}

impl ProfileState {
    fn new() -> Self {
        Self {
            profile: BusinessProfile::default(),
            google_connected: false,
            connecting: false,
            saved_flash: false,
        }
    }

    /// Grapheme count backing the 750-character description convention.
    pub fn description_grapheme_count(&self) -> usize {
        use unicode_segmentation::UnicodeSegmentation;
        self.profile.description.graphemes(true).count()
    }
}

pub struct ContentState {
    pub business_name: String,
    pub industry: String,
    pub offers: String,
    pub loading: bool,
    pub result: Option<GeneratedStrategy>,
    pub error: Option<String>,
    /// True when the form was pre-filled from the stored profile (one-time
    /// copy at screen initialization, not a live reference).
    pub seeded_from_profile: bool,
}

impl ContentState {
    fn new() -> Self {
        Self {
            business_name: String::new(),
            industry: String::new(),
            offers: String::new(),
            loading: false,
            result: None,
            error: None,
            seeded_from_profile: false,
        }
    }

    /// Copy profile fields into the form once.
    pub fn seed_from(&mut self, profile: &BusinessProfile) {
        if !profile.name.is_empty() {
            self.business_name = profile.name.clone();
            self.seeded_from_profile = true;
        }
        if !profile.industry.is_empty() {
            self.industry = profile.industry.clone();
        }
        if !profile.services.is_empty() {
            self.offers = profile.services.join(", ");
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StudioMode {
    Generate,
    Edit,
}

pub struct ImageStudioState {
    pub mode: StudioMode,
    pub prompt: String,
    pub source: Option<ImagePayload>,
    pub loading: bool,
    pub result: Option<ImagePayload>,
    pub error: Option<String>,
}

impl ImageStudioState {
    fn new() -> Self {
        Self {
            mode: StudioMode::Generate,
            prompt: String::new(),
            source: None,
            loading: false,
            result: None,
            error: None,
        }
    }
}

/// Form buffer for a tracker row in progress.
#[derive(Clone, Debug)]
pub struct TrackerForm {
    pub period: String,
    pub impressions: u32,
    pub clicks: u32,
    pub calls: u32,
    pub reviews: u32,
    pub rating: f64,
}

impl TrackerForm {
    pub fn empty() -> Self {
        Self {
            period: String::new(),
            impressions: 0,
            clicks: 0,
            calls: 0,
            reviews: 0,
            rating: 5.0,
        }
    }
}

pub struct MetricsState {
    pub entries: Vec<TrackerEntry>,
    pub form: TrackerForm,
}

impl MetricsState {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            form: TrackerForm::empty(),
        }
    }
}

pub struct ReputationState {
    pub reviews: Vec<CustomerReview>,
    /// Review currently awaiting its assessment; gates the screen's submit
    /// controls so only one call is in flight.
    pub loading_id: Option<String>,
}

impl ReputationState {
    fn new() -> Self {
        Self {
            reviews: crate::constants::seed_reviews(),
            loading_id: None,
        }
    }
}

pub struct CompetitorState {
    pub input: String,
    pub loading: bool,
    pub results: Vec<CompetitorData>,
}

impl CompetitorState {
    fn new() -> Self {
        Self {
            input: String::new(),
            loading: false,
            results: Vec::new(),
        }
    }
}

/// Global application state: the session, the active route, and one
/// container per screen.  Mutation happens exclusively through `dispatch`.
pub struct AppState {
    pub store: Store,
    pub current_user: Option<UserProfile>,
    pub route: Route,
    pub chat: ChatState,
    pub profile: ProfileState,
    pub content: ContentState,
    pub images: ImageStudioState,
    pub checklist: Vec<ChecklistItem>,
    pub metrics: MetricsState,
    pub reputation: ReputationState,
    pub competitors: CompetitorState,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_store(Store::local())
    }

    /// State over an explicit store – used by tests with a memory backend.
    pub fn with_store(store: Store) -> Self {
        Self {
            store,
            current_user: None,
            route: Route::Agent,
            chat: ChatState::new(),
            profile: ProfileState::new(),
            content: ContentState::new(),
            images: ImageStudioState::new(),
            checklist: crate::constants::default_checklist(),
            metrics: MetricsState::new(),
            reputation: ReputationState::new(),
            competitors: CompetitorState::new(),
        }
    }

    /// Seed every screen container from persistent storage.  Called once at
    /// startup, before the first render.
    pub fn boot(&mut self, initial_route: Route) {
        self.current_user = self.store.load_session();
        self.chat.messages = self.store.load_chat_history(Utc::now());
        self.profile.profile = self.store.load_profile();
        self.profile.google_connected = self.store.google_connected();
        self.metrics.entries = self.store.load_tracker_entries();
        let profile = self.profile.profile.clone();
        self.content.seed_from(&profile);
        self.route = initial_route;
    }

    /// Run one message through the update layer and hand back the side
    /// effects for execution outside the state borrow.
    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update(self, msg)
    }

    /// Business name used when a gateway operation needs one: the stored
    /// profile's, or the demo default before any profile exists.
    pub fn business_name_or_default(&self) -> String {
        if self.profile.profile.name.trim().is_empty() {
            crate::constants::DEFAULT_BUSINESS_NAME.to_string()
        } else {
            self.profile.profile.name.clone()
        }
    }
}

// We use thread_local to store our app state
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Global helper for dispatching messages: updates state, then executes the
/// returned commands once the mutable borrow is released.
pub fn dispatch_global_message(msg: Message) {
    let commands = APP_STATE.with(|state| {
        let mut state = state.borrow_mut();
        state.dispatch(msg)
    });
    for command in commands {
        crate::command_executors::execute(command);
    }
}
