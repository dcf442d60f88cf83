//! Display model for the reader screen, derived from engine state alone.

use api::{ApiError, Edition, Position, TextDirection};

use crate::core::format;

use super::engine::{LoadState, ReaderEngine, SearchStatus, Toast};

/// Longest search hit preview shown in the result list.
const PREVIEW_CHARS: usize = 180;

#[derive(Debug, Clone, PartialEq)]
pub struct ReaderDisplay {
    pub theme_class: &'static str,
    pub font_size_px: u32,
    pub edition: Edition,
    /// `dir` attribute for the translation text.
    pub translation_dir: &'static str,
    pub surah_input: String,
    pub verse_input: String,
    pub status: DisplayStatus,
    pub verse: Option<VerseCard>,
    pub search: Option<SearchPanel>,
    pub controls: Controls,
    pub toast: Option<Toast>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayStatus {
    Idle,
    Loading,
    Ready,
    Error(ApiError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseCard {
    pub reference: String,
    pub surah_name: String,
    pub english_name: String,
    pub translation_of_name: String,
    pub revelation_type: String,
    pub arabic: String,
    pub translation: String,
    pub verse_number: u32,
    pub verse_count: u32,
    pub image_url: Option<String>,
    /// A newer verse is loading; this card is about to be replaced.
    pub stale: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPanel {
    pub query: String,
    pub busy: bool,
    pub error: Option<ApiError>,
    pub rows: Vec<ResultRow>,
    /// A search finished with no hits.
    pub empty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub index: usize,
    pub reference: String,
    pub surah_english_name: String,
    pub preview: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub can_retreat: bool,
    pub show_reset: bool,
    pub show_share: bool,
    pub show_theme_toggle: bool,
    pub dark_mode: bool,
    pub font_min: u32,
    pub font_max: u32,
}

pub fn project(engine: &ReaderEngine) -> ReaderDisplay {
    let features = engine.config().features;
    let position = engine.position();

    let status = match engine.load_state() {
        LoadState::Idle => DisplayStatus::Idle,
        LoadState::Loading => DisplayStatus::Loading,
        LoadState::Loaded => DisplayStatus::Ready,
        LoadState::Error(err) => DisplayStatus::Error(err.clone()),
    };

    let verse = engine.verse().map(|verse| VerseCard {
        reference: verse.position.to_string(),
        surah_name: verse.surah_name.clone(),
        english_name: verse.english_name.clone(),
        translation_of_name: verse.translation_of_name.clone(),
        revelation_type: verse.revelation_type.clone(),
        arabic: verse.arabic_text.clone(),
        translation: verse.translation_text.clone(),
        verse_number: verse.position.verse(),
        verse_count: verse.verse_count,
        image_url: engine.image_url().map(str::to_string),
        stale: status == DisplayStatus::Loading,
    });

    let search = features.search.then(|| SearchPanel {
        query: engine.query().to_string(),
        busy: *engine.search_status() == SearchStatus::Searching,
        error: match engine.search_status() {
            SearchStatus::Error(err) => Some(err.clone()),
            _ => None,
        },
        rows: engine
            .results()
            .iter()
            .enumerate()
            .map(|(index, hit)| ResultRow {
                index,
                reference: format!("{}:{}", hit.surah, hit.verse),
                surah_english_name: hit.surah_english_name.clone(),
                preview: format::preview(&hit.text, PREVIEW_CHARS),
            })
            .collect(),
        empty: *engine.search_status() == SearchStatus::Ready && engine.results().is_empty(),
    });

    ReaderDisplay {
        theme_class: if engine.dark_mode() {
            "reader theme-dark"
        } else {
            "reader theme-light"
        },
        font_size_px: engine.font_size(),
        edition: engine.edition(),
        translation_dir: match engine.edition().direction() {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        },
        surah_input: position.surah().to_string(),
        verse_input: position.verse().to_string(),
        status,
        verse,
        search,
        controls: Controls {
            can_retreat: position != Position::FIRST,
            show_reset: features.reset,
            show_share: features.share,
            show_theme_toggle: features.dark_mode,
            dark_mode: engine.dark_mode(),
            font_min: engine.config().font.min,
            font_max: engine.config().font.max,
        },
        toast: engine.toast().cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::config::{Features, ReaderConfig};
    use api::{SearchMatch, VerseData};

    fn sample_verse() -> VerseData {
        VerseData {
            position: Position::new(2, 255).unwrap(),
            edition: Edition::Urdu,
            arabic_text: "ٱللَّهُ لَآ إِلَـٰهَ إِلَّا هُوَ".into(),
            translation_text: "اللہ (وہ ہے کہ) اس کے سوا کوئی معبود نہیں".into(),
            surah_name: "سُورَةُ البَقَرَةِ".into(),
            english_name: "Al-Baqara".into(),
            translation_of_name: "The Cow".into(),
            revelation_type: "Medinan".into(),
            verse_count: 286,
        }
    }

    #[test]
    fn fresh_engine_projects_idle_first_verse() {
        let display = project(&ReaderEngine::default());
        assert_eq!(display.status, DisplayStatus::Idle);
        assert_eq!((display.surah_input.as_str(), display.verse_input.as_str()), ("1", "1"));
        assert!(display.verse.is_none());
        assert!(!display.controls.can_retreat);
        assert_eq!(display.theme_class, "reader theme-light");
        assert_eq!(display.font_size_px, 24);
        assert_eq!(display.search.as_ref().map(|s| s.rows.len()), Some(0));
    }

    #[test]
    fn loaded_verse_card() {
        let mut engine = ReaderEngine::default();
        engine.set_language(Edition::Urdu);
        engine.set_surah("2");
        engine.set_verse("255");
        let token = engine.verse_token();
        engine.apply_verse(token, Ok(sample_verse()));
        engine.toggle_dark_mode();

        let display = project(&engine);
        let card = display.verse.expect("verse card");
        assert_eq!(display.status, DisplayStatus::Ready);
        assert_eq!(card.reference, "2:255");
        assert_eq!((card.verse_number, card.verse_count), (255, 286));
        assert_eq!(card.english_name, "Al-Baqara");
        assert_eq!(
            card.image_url.as_deref(),
            Some("https://cdn.islamic.network/quran/images/2_255.png")
        );
        assert!(!card.stale);
        assert_eq!(display.translation_dir, "rtl");
        assert_eq!(display.theme_class, "reader theme-dark");
        assert!(display.controls.dark_mode);
        assert!(display.controls.can_retreat);
    }

    #[test]
    fn search_rows_follow_result_order() {
        let mut engine = ReaderEngine::default();
        engine.search("throne");
        let token = engine.search_token();
        engine.apply_search(
            token,
            Ok(vec![
                SearchMatch {
                    surah: 2,
                    surah_english_name: "Al-Baqara".into(),
                    verse: 255,
                    text: "His throne extends over the heavens and the earth".into(),
                },
                SearchMatch {
                    surah: 9,
                    surah_english_name: "At-Tawba".into(),
                    verse: 129,
                    text: "the Sustainer, in awesome almightiness enthroned".into(),
                },
            ]),
        );

        let panel = project(&engine).search.expect("search enabled");
        let refs: Vec<_> = panel.rows.iter().map(|row| row.reference.as_str()).collect();
        assert_eq!(refs, ["2:255", "9:129"]);
        assert_eq!(panel.rows[1].index, 1);
        assert!(!panel.busy);
        assert!(!panel.empty);
    }

    #[test]
    fn empty_search_flagged_only_after_completion() {
        let mut engine = ReaderEngine::default();
        engine.search("zzz");
        assert!(project(&engine).search.unwrap().busy);

        let token = engine.search_token();
        engine.apply_search(token, Ok(Vec::new()));
        let panel = project(&engine).search.unwrap();
        assert!(panel.empty);
        assert!(!panel.busy);
    }

    #[test]
    fn disabled_features_hide_controls() {
        let engine = ReaderEngine::new(ReaderConfig::default().with_features(Features::MINIMAL));
        let display = project(&engine);
        assert!(display.search.is_none());
        assert!(!display.controls.show_reset);
        assert!(!display.controls.show_share);
        assert!(!display.controls.show_theme_toggle);
    }

    #[test]
    fn error_status_carries_message() {
        let mut engine = ReaderEngine::default();
        engine.set_surah("0");
        assert_eq!(
            project(&engine).status,
            DisplayStatus::Error(ApiError::InvalidInput("0".into()))
        );
    }
}
