/// Gateway endpoint configuration.
pub struct ApiConfig {
    base_url: String,
    api_key: String,
}

/// localStorage key for a runtime-provided API key.  Takes effect when no
/// key was baked in at build time.
#[allow(dead_code)] // only read on the wasm target
const API_KEY_STORAGE_KEY: &str = "gmb-api-key";

impl Default for ApiConfig {
    /// Points at the public Generative Language endpoint with whatever key
    /// can be resolved.  An empty key is allowed – requests will come back
    /// as HTTP errors and surface through the normal screen-boundary path,
    /// which beats panicking during startup in an unconfigured dev session.
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key: resolve_api_key(),
        }
    }
}

impl ApiConfig {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Full URL of the `generateContent` call for a model.
    pub fn generate_content_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        )
    }
}

/// Build-time key (`GEMINI_API_KEY` environment variable) wins; otherwise
/// the key the user stored from the browser console.
fn resolve_api_key() -> String {
    if let Some(key) = option_env!("GEMINI_API_KEY") {
        return key.to_string();
    }
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(key) = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(API_KEY_STORAGE_KEY).ok().flatten())
        {
            return key;
        }
    }
    String::new()
}
