//! Client for the public Quran API (api.alquran.cloud) and the verse image CDN.
//!
//! The reader in `ayah-ui` only ever talks to the service through [`QuranSource`],
//! so tests can swap in canned data.

mod client;
mod config;
mod edition;
mod error;
mod model;
pub mod surah;

pub use client::{search_url, status_error, verse_url, QuranClient, QuranSource};
pub use config::ApiConfig;
pub use edition::{Edition, TextDirection, ARABIC_EDITION};
pub use error::ApiError;
pub use model::{image_url, Position, SearchMatch, VerseData};

/// Re-exported so share links and request URLs are built with one URL type.
pub use reqwest::Url;
