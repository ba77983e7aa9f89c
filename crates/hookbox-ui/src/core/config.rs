//! Demo page configuration and URL helpers.

/// Default public API queried by the demo page.
pub const DEFAULT_API_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Runtime settings for the demo page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// Base URL of the character API, without a trailing slash.
    pub api_base_url: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl DemoConfig {
    /// Build a config from an optional override, falling back to the default
    /// when the override is missing or blank.
    #[must_use]
    pub fn from_override(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(base) if !base.is_empty() => Self {
                api_base_url: base.trim_end_matches('/').to_string(),
            },
            _ => Self::default(),
        }
    }

    /// URL of the character with the given id.
    #[must_use]
    pub fn character_url(&self, id: u32) -> String {
        format!("{}/character/{id}", self.api_base_url)
    }
}
