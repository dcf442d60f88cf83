//! Endpoint configuration.

pub const DEFAULT_API_BASE: &str = "https://api.alquran.cloud/v1";
pub const DEFAULT_CDN_BASE: &str = "https://cdn.islamic.network";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base of the JSON API, without a trailing slash.
    pub api_base: String,
    /// Host serving `quran/images/{surah}_{verse}.png`.
    pub cdn_base: String,
}

impl ApiConfig {
    pub fn new(api_base: impl Into<String>, cdn_base: impl Into<String>) -> Self {
        Self {
            api_base: trim_base(api_base.into()),
            cdn_base: trim_base(cdn_base.into()),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_CDN_BASE)
    }
}

fn trim_base(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}
