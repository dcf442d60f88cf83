//! Verse, search and position types, plus the JSON shapes the service returns.

use std::fmt;

use serde::Deserialize;

use crate::edition::Edition;
use crate::error::ApiError;

/// A (surah, verse) pair. Both numbers are at least 1; the upper bounds are
/// only known once the surah has been loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    surah: u32,
    verse: u32,
}

impl Position {
    pub const FIRST: Position = Position { surah: 1, verse: 1 };

    pub fn new(surah: u32, verse: u32) -> Result<Self, ApiError> {
        if surah == 0 || verse == 0 {
            return Err(ApiError::InvalidInput(format!("{surah}:{verse}")));
        }
        Ok(Self { surah, verse })
    }

    /// Parse a user-typed coordinate. Blank, negative, zero and non-numeric input is rejected.
    pub fn parse_number(raw: &str) -> Result<u32, ApiError> {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(value) if value >= 1 => {
                u32::try_from(value).map_err(|_| ApiError::InvalidInput(trimmed.to_string()))
            }
            _ => Err(ApiError::InvalidInput(trimmed.to_string())),
        }
    }

    pub fn surah(self) -> u32 {
        self.surah
    }

    pub fn verse(self) -> u32 {
        self.verse
    }

    pub fn with_surah(self, surah: u32) -> Result<Self, ApiError> {
        Self::new(surah, self.verse)
    }

    pub fn with_verse(self, verse: u32) -> Result<Self, ApiError> {
        Self::new(self.surah, verse)
    }

    pub fn next_verse(self) -> Self {
        Self {
            surah: self.surah,
            verse: self.verse.saturating_add(1),
        }
    }

    pub fn start_of_next_surah(self) -> Self {
        Self {
            surah: self.surah.saturating_add(1),
            verse: 1,
        }
    }

    pub fn previous_verse(self) -> Option<Self> {
        (self.verse > 1).then(|| Self {
            surah: self.surah,
            verse: self.verse - 1,
        })
    }

    /// Step into the previous surah landing on `verse` (clamped to 1).
    pub fn in_previous_surah(self, verse: u32) -> Option<Self> {
        (self.surah > 1).then(|| Self {
            surah: self.surah - 1,
            verse: verse.max(1),
        })
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.surah, self.verse)
    }
}

/// One verse with its Arabic text and a translation, as shown by the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseData {
    pub position: Position,
    pub edition: Edition,
    pub arabic_text: String,
    pub translation_text: String,
    /// Arabic surah name.
    pub surah_name: String,
    pub english_name: String,
    pub translation_of_name: String,
    /// "Meccan" or "Medinan".
    pub revelation_type: String,
    pub verse_count: u32,
}

impl VerseData {
    pub(crate) fn from_payloads(
        arabic: AyahPayload,
        translation: AyahPayload,
        edition: Edition,
    ) -> Result<Self, ApiError> {
        let position = Position::new(translation.surah.number, translation.number_in_surah)?;
        let verse_count = translation
            .surah
            .number_of_ayahs
            .or(arabic.surah.number_of_ayahs)
            .ok_or_else(|| ApiError::Decode("missing numberOfAyahs".to_string()))?;

        Ok(Self {
            position,
            edition,
            arabic_text: arabic.text,
            translation_text: translation.text,
            surah_name: translation.surah.name,
            english_name: translation.surah.english_name,
            translation_of_name: translation.surah.english_name_translation,
            revelation_type: translation.surah.revelation_type,
            verse_count,
        })
    }
}

/// A search hit in the order the service returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub surah: u32,
    pub surah_english_name: String,
    pub verse: u32,
    pub text: String,
}

impl SearchMatch {
    pub fn position(&self) -> Result<Position, ApiError> {
        Position::new(self.surah, self.verse)
    }
}

impl From<MatchPayload> for SearchMatch {
    fn from(payload: MatchPayload) -> Self {
        Self {
            surah: payload.surah.number,
            surah_english_name: payload.surah.english_name,
            verse: payload.number_in_surah,
            text: payload.text,
        }
    }
}

/// `{cdn}/quran/images/{surah}_{verse}.png`; existence is never checked.
pub fn image_url(cdn_base: &str, position: Position) -> String {
    format!(
        "{}/quran/images/{}_{}.png",
        cdn_base.trim_end_matches('/'),
        position.surah(),
        position.verse()
    )
}

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AyahPayload {
    pub text: String,
    pub number_in_surah: u32,
    pub surah: SurahPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SurahPayload {
    pub number: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub english_name: String,
    #[serde(default)]
    pub english_name_translation: String,
    #[serde(default)]
    pub number_of_ayahs: Option<u32>,
    #[serde(default)]
    pub revelation_type: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchPayload {
    #[serde(default)]
    pub matches: Vec<MatchPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MatchPayload {
    pub text: String,
    pub number_in_surah: u32,
    pub surah: SurahPayload,
}

/// Body the service sends with non-2xx replies,
/// e.g. `{"code":404,"status":"NOT FOUND","data":"..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<String> {
        match self.data.as_ref() {
            Some(serde_json::Value::String(text)) if !text.is_empty() => Some(text.clone()),
            _ => self.status.clone(),
        }
    }
}
