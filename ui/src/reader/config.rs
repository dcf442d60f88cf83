//! Reader configuration. Platform crates provide it through the Dioxus context.

use api::{ApiConfig, Edition};

pub const DEFAULT_SHARE_ORIGIN: &str = "https://ayah.app";
pub const DEFAULT_TOAST_MS: u64 = 3_000;

/// Which optional parts of the reader are switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub search: bool,
    pub share: bool,
    pub reset: bool,
    pub dark_mode: bool,
}

impl Features {
    pub const ALL: Features = Features {
        search: true,
        share: true,
        reset: true,
        dark_mode: true,
    };

    /// Plain previous/next reader without search, share, reset or theming.
    pub const MINIMAL: Features = Features {
        search: false,
        share: false,
        reset: false,
        dark_mode: false,
    };
}

impl Default for Features {
    fn default() -> Self {
        Self::ALL
    }
}

/// Where `retreat` lands when it crosses into the previous surah.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetreatPolicy {
    /// Verse 1 of the previous surah.
    #[default]
    FirstVerse,
    /// Last verse of the previous surah, from the static verse-count table.
    LastVerse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontRange {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl FontRange {
    pub fn clamp(self, px: u32) -> u32 {
        px.clamp(self.min, self.max)
    }
}

impl Default for FontRange {
    fn default() -> Self {
        Self {
            min: 16,
            max: 40,
            default: 24,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReaderConfig {
    pub api: ApiConfig,
    /// Used for share links when the app is not served from a web origin (desktop).
    pub share_origin: String,
    pub features: Features,
    pub retreat: RetreatPolicy,
    pub initial_edition: Edition,
    pub toast_ms: u64,
    pub font: FontRange,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            share_origin: DEFAULT_SHARE_ORIGIN.to_string(),
            features: Features::default(),
            retreat: RetreatPolicy::default(),
            initial_edition: Edition::default(),
            toast_ms: DEFAULT_TOAST_MS,
            font: FontRange::default(),
        }
    }
}

impl ReaderConfig {
    pub fn with_features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    pub fn with_retreat(mut self, retreat: RetreatPolicy) -> Self {
        self.retreat = retreat;
        self
    }
}
