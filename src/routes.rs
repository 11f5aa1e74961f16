//! The fixed set of navigable screens.  These ten paths are the complete
//! addressable surface of the application; chat navigation suggestions must
//! resolve into this set or are dropped.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Agent,
    Dashboard,
    Profile,
    Content,
    Images,
    Checklist,
    Metrics,
    Reputation,
    Competitors,
    Prompts,
}

impl Route {
    pub const ALL: [Route; 10] = [
        Route::Agent,
        Route::Dashboard,
        Route::Profile,
        Route::Content,
        Route::Images,
        Route::Checklist,
        Route::Metrics,
        Route::Reputation,
        Route::Competitors,
        Route::Prompts,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Agent => "/",
            Route::Dashboard => "/dashboard",
            Route::Profile => "/profile",
            Route::Content => "/content",
            Route::Images => "/images",
            Route::Checklist => "/checklist",
            Route::Metrics => "/metrics",
            Route::Reputation => "/reputation",
            Route::Competitors => "/competitors",
            Route::Prompts => "/prompts",
        }
    }

    /// Sidebar label (French, like the rest of the UI).
    pub fn label(&self) -> &'static str {
        match self {
            Route::Agent => "Agent IA",
            Route::Dashboard => "Vue d'ensemble",
            Route::Profile => "Profil GMB",
            Route::Content => "Générateur de Contenu",
            Route::Images => "Studio Images",
            Route::Checklist => "Checklist",
            Route::Metrics => "Suivi Métriques",
            Route::Reputation => "Réputation",
            Route::Competitors => "Concurrents",
            Route::Prompts => "Prompts Nano Banana",
        }
    }

    /// Strict lookup used to validate agent-suggested paths.
    pub fn parse(path: &str) -> Option<Route> {
        Route::ALL.iter().copied().find(|r| r.path() == path)
    }

    /// Lenient parse of a `location.hash` value.  Unknown or empty fragments
    /// fall back to the chat agent, mirroring the catch-all redirect.
    pub fn from_hash(hash: &str) -> Route {
        let path = hash.trim_start_matches('#');
        let path = if path.is_empty() { "/" } else { path };
        Route::parse(path).unwrap_or(Route::Agent)
    }
}
