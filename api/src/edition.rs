//! Translation editions offered by the reader.

use serde::{Deserialize, Serialize};

/// Edition used for the Arabic text shown above every translation.
pub const ARABIC_EDITION: &str = "quran-uthmani";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edition {
    /// Muhammad Asad, English.
    #[default]
    English,
    /// Ahmed Ali, Urdu.
    Urdu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl Edition {
    pub const ALL: [Edition; 2] = [Edition::English, Edition::Urdu];

    /// Identifier understood by the API (`/ayah/{ref}/{id}`).
    pub fn id(self) -> &'static str {
        match self {
            Edition::English => "en.asad",
            Edition::Urdu => "ur.ahmedali",
        }
    }

    /// Short code carried in share links (`lang=`).
    pub fn code(self) -> &'static str {
        match self {
            Edition::English => "en",
            Edition::Urdu => "ur",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|edition| edition.code().eq_ignore_ascii_case(code) || edition.id() == code)
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Edition::English => TextDirection::Ltr,
            Edition::Urdu => TextDirection::Rtl,
        }
    }
}
