//! Reader state machine: position, verse loading, search and toasts.
//!
//! The engine performs no I/O. Each transition mutates the state in place and
//! returns the [`ReaderCommand`]s the runtime must execute; their results come
//! back as [`ReaderMsg`]s. Every verse and search request carries a
//! [`RequestToken`] and only the response to the newest token is applied.

use api::{image_url, surah, ApiError, Edition, Position, SearchMatch, VerseData};
use dioxus::logger::tracing::debug;

use crate::core::share::ShareOutcome;

use super::config::{ReaderConfig, RetreatPolicy};
use super::link::ShareLink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(ApiError),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Searching,
    Ready,
    Error(ApiError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastMessage {
    LinkCopied,
    ShareFailed(String),
    VerseFailed(ApiError),
    SearchFailed(ApiError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: ToastMessage,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReaderMsg {
    /// First load; a deep link (if any) replaces the initial position.
    Start { link: Option<ShareLink> },
    SetSurah(String),
    SetVerse(String),
    SetLanguage(Edition),
    Advance,
    Retreat,
    Reset,
    ToggleDarkMode,
    SetFontSize(u32),
    SetQuery(String),
    SubmitSearch,
    SelectResult(usize),
    Share,
    VerseFetched {
        token: RequestToken,
        outcome: Result<VerseData, ApiError>,
    },
    SearchFinished {
        token: RequestToken,
        outcome: Result<Vec<SearchMatch>, ApiError>,
    },
    ShareFinished(Result<ShareOutcome, String>),
    DismissToast(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReaderCommand {
    FetchVerse {
        token: RequestToken,
        position: Position,
        edition: Edition,
    },
    Search {
        token: RequestToken,
        query: String,
        edition: Edition,
    },
    Share(ShareLink),
    ExpireToast {
        id: u64,
        after_ms: u64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReaderEngine {
    config: ReaderConfig,
    position: Position,
    edition: Edition,
    dark_mode: bool,
    font_size: u32,
    load: LoadState,
    verse: Option<VerseData>,
    image_url: Option<String>,
    verse_token: RequestToken,
    query: String,
    search: SearchStatus,
    results: Vec<SearchMatch>,
    search_token: RequestToken,
    toast: Option<Toast>,
    toast_counter: u64,
}

impl Default for ReaderEngine {
    fn default() -> Self {
        Self::new(ReaderConfig::default())
    }
}

impl ReaderEngine {
    pub fn new(config: ReaderConfig) -> Self {
        Self {
            position: Position::FIRST,
            edition: config.initial_edition,
            dark_mode: false,
            font_size: config.font.default,
            load: LoadState::Idle,
            verse: None,
            image_url: None,
            verse_token: RequestToken::default(),
            query: String::new(),
            search: SearchStatus::Idle,
            results: Vec::new(),
            search_token: RequestToken::default(),
            toast: None,
            toast_counter: 0,
            config,
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn edition(&self) -> Edition {
        self.edition
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn verse(&self) -> Option<&VerseData> {
        self.verse.as_ref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn search_status(&self) -> &SearchStatus {
        &self.search
    }

    pub fn results(&self) -> &[SearchMatch] {
        &self.results
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Token of the newest verse request; responses with any other token are dropped.
    pub fn verse_token(&self) -> RequestToken {
        self.verse_token
    }

    pub fn search_token(&self) -> RequestToken {
        self.search_token
    }

    pub fn dispatch(&mut self, msg: ReaderMsg) -> Vec<ReaderCommand> {
        match msg {
            ReaderMsg::Start { link } => self.start(link),
            ReaderMsg::SetSurah(raw) => self.set_surah(&raw),
            ReaderMsg::SetVerse(raw) => self.set_verse(&raw),
            ReaderMsg::SetLanguage(edition) => self.set_language(edition),
            ReaderMsg::Advance => self.advance(),
            ReaderMsg::Retreat => self.retreat(),
            ReaderMsg::Reset => self.reset(),
            ReaderMsg::ToggleDarkMode => {
                self.toggle_dark_mode();
                Vec::new()
            }
            ReaderMsg::SetFontSize(px) => {
                self.set_font_size(px);
                Vec::new()
            }
            ReaderMsg::SetQuery(query) => {
                self.set_query(query);
                Vec::new()
            }
            ReaderMsg::SubmitSearch => self.submit_search(),
            ReaderMsg::SelectResult(index) => self.select_result(index),
            ReaderMsg::Share => self.share(),
            ReaderMsg::VerseFetched { token, outcome } => self.apply_verse(token, outcome),
            ReaderMsg::SearchFinished { token, outcome } => self.apply_search(token, outcome),
            ReaderMsg::ShareFinished(outcome) => self.share_finished(outcome),
            ReaderMsg::DismissToast(id) => {
                self.dismiss_toast(id);
                Vec::new()
            }
        }
    }

    pub fn start(&mut self, link: Option<ShareLink>) -> Vec<ReaderCommand> {
        if let Some(link) = link {
            debug!(position = %link.position, edition = link.edition.id(), "restoring shared link");
            self.position = link.position;
            self.edition = link.edition;
        }
        self.begin_load()
    }

    pub fn set_surah(&mut self, raw: &str) -> Vec<ReaderCommand> {
        match Position::parse_number(raw).and_then(|surah| self.position.with_surah(surah)) {
            Ok(position) => self.move_to(position),
            Err(err) => self.reject_input(err),
        }
    }

    pub fn set_verse(&mut self, raw: &str) -> Vec<ReaderCommand> {
        match Position::parse_number(raw).and_then(|verse| self.position.with_verse(verse)) {
            Ok(position) => self.move_to(position),
            Err(err) => self.reject_input(err),
        }
    }

    pub fn set_language(&mut self, edition: Edition) -> Vec<ReaderCommand> {
        if edition == self.edition && self.is_current() {
            return Vec::new();
        }
        self.edition = edition;
        self.begin_load()
    }

    /// Next verse, or verse 1 of the next surah after the last verse. The next surah
    /// is not validated; past 114 the fetch fails and reports the error.
    pub fn advance(&mut self) -> Vec<ReaderCommand> {
        let current = self.position;
        let next = match self.known_verse_count() {
            Some(count) if current.verse() < count => current.next_verse(),
            _ => current.start_of_next_surah(),
        };
        self.move_to(next)
    }

    /// Previous verse; from verse 1 steps into the previous surah per [`RetreatPolicy`].
    /// No-op at 1:1.
    pub fn retreat(&mut self) -> Vec<ReaderCommand> {
        let current = self.position;
        let target = current.previous_verse().or_else(|| {
            let landing = match self.config.retreat {
                RetreatPolicy::FirstVerse => 1,
                RetreatPolicy::LastVerse => {
                    surah::verse_count(current.surah().saturating_sub(1)).unwrap_or(1)
                }
            };
            current.in_previous_surah(landing)
        });

        match target {
            Some(position) => self.move_to(position),
            None => Vec::new(),
        }
    }

    pub fn reset(&mut self) -> Vec<ReaderCommand> {
        if !self.config.features.reset {
            debug!("reset disabled");
            return Vec::new();
        }
        self.position = Position::FIRST;
        self.clear_search();
        self.begin_load()
    }

    pub fn toggle_dark_mode(&mut self) {
        if self.config.features.dark_mode {
            self.dark_mode = !self.dark_mode;
        }
    }

    pub fn set_font_size(&mut self, px: u32) {
        self.font_size = self.config.font.clamp(px);
    }

    pub fn set_query(&mut self, query: String) {
        if self.config.features.search {
            self.query = query;
        }
    }

    /// Submit the current query. Blank queries are ignored without touching results.
    pub fn submit_search(&mut self) -> Vec<ReaderCommand> {
        if !self.config.features.search {
            return Vec::new();
        }
        let query = self.query.trim();
        if query.is_empty() {
            debug!("ignoring blank search");
            return Vec::new();
        }
        let query = query.to_string();

        self.search_token = self.search_token.next();
        self.search = SearchStatus::Searching;
        vec![ReaderCommand::Search {
            token: self.search_token,
            query,
            edition: self.edition,
        }]
    }

    /// Shorthand for typing `query` and submitting it.
    pub fn search(&mut self, query: &str) -> Vec<ReaderCommand> {
        self.set_query(query.to_string());
        self.submit_search()
    }

    /// Jump to a search hit; clears the query and results.
    pub fn select_result(&mut self, index: usize) -> Vec<ReaderCommand> {
        let Some(position) = self.results.get(index).and_then(|hit| hit.position().ok()) else {
            debug!(index, "no search result at index");
            return Vec::new();
        };
        self.clear_search();
        self.position = position;
        self.begin_load()
    }

    pub fn share(&mut self) -> Vec<ReaderCommand> {
        if !self.config.features.share {
            return Vec::new();
        }
        vec![ReaderCommand::Share(ShareLink::new(self.position, self.edition))]
    }

    pub fn apply_verse(
        &mut self,
        token: RequestToken,
        outcome: Result<VerseData, ApiError>,
    ) -> Vec<ReaderCommand> {
        if token != self.verse_token {
            debug!(?token, latest = ?self.verse_token, "dropping stale verse response");
            return Vec::new();
        }

        match outcome {
            Ok(verse) => {
                self.image_url = Some(image_url(&self.config.api.cdn_base, self.position));
                self.verse = Some(verse);
                self.load = LoadState::Loaded;
                Vec::new()
            }
            Err(err) => self.fail_load(err),
        }
    }

    pub fn apply_search(
        &mut self,
        token: RequestToken,
        outcome: Result<Vec<SearchMatch>, ApiError>,
    ) -> Vec<ReaderCommand> {
        if token != self.search_token || self.search != SearchStatus::Searching {
            debug!(?token, latest = ?self.search_token, "dropping stale search response");
            return Vec::new();
        }

        match outcome {
            Ok(matches) => {
                self.results = matches;
                self.search = SearchStatus::Ready;
                Vec::new()
            }
            Err(err) => {
                self.results.clear();
                self.search = SearchStatus::Error(err.clone());
                vec![self.raise_toast(ToastMessage::SearchFailed(err))]
            }
        }
    }

    pub fn share_finished(&mut self, outcome: Result<ShareOutcome, String>) -> Vec<ReaderCommand> {
        match outcome {
            Ok(ShareOutcome::Copied) => vec![self.raise_toast(ToastMessage::LinkCopied)],
            Ok(ShareOutcome::Shared | ShareOutcome::Cancelled) => Vec::new(),
            Err(reason) => vec![self.raise_toast(ToastMessage::ShareFailed(reason))],
        }
    }

    /// Only the toast with `id` is removed; an older timer cannot close a newer toast.
    pub fn dismiss_toast(&mut self, id: u64) {
        if self.toast.as_ref().is_some_and(|toast| toast.id == id) {
            self.toast = None;
        }
    }

    fn is_current(&self) -> bool {
        matches!(self.load, LoadState::Loading | LoadState::Loaded)
    }

    /// Verse count of the current surah: from the loaded verse when it belongs to
    /// this surah, otherwise from the static table.
    fn known_verse_count(&self) -> Option<u32> {
        self.verse
            .as_ref()
            .filter(|verse| verse.position.surah() == self.position.surah())
            .map(|verse| verse.verse_count)
            .or_else(|| surah::verse_count(self.position.surah()))
    }

    fn move_to(&mut self, position: Position) -> Vec<ReaderCommand> {
        if position == self.position && self.is_current() {
            return Vec::new();
        }
        self.position = position;
        self.begin_load()
    }

    fn begin_load(&mut self) -> Vec<ReaderCommand> {
        self.verse_token = self.verse_token.next();
        self.load = LoadState::Loading;
        debug!(
            position = %self.position,
            edition = self.edition.id(),
            token = ?self.verse_token,
            "loading verse"
        );
        vec![ReaderCommand::FetchVerse {
            token: self.verse_token,
            position: self.position,
            edition: self.edition,
        }]
    }

    /// Invalid coordinates keep the position, clear the verse and supersede any request in flight.
    fn reject_input(&mut self, err: ApiError) -> Vec<ReaderCommand> {
        self.verse_token = self.verse_token.next();
        self.fail_load(err)
    }

    fn fail_load(&mut self, err: ApiError) -> Vec<ReaderCommand> {
        self.verse = None;
        self.image_url = None;
        self.load = LoadState::Error(err.clone());
        vec![self.raise_toast(ToastMessage::VerseFailed(err))]
    }

    fn clear_search(&mut self) {
        self.search_token = self.search_token.next();
        self.query.clear();
        self.results.clear();
        self.search = SearchStatus::Idle;
    }

    fn raise_toast(&mut self, message: ToastMessage) -> ReaderCommand {
        self.toast_counter += 1;
        let id = self.toast_counter;
        self.toast = Some(Toast { id, message });
        ReaderCommand::ExpireToast {
            id,
            after_ms: self.config.toast_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::config::Features;

    fn pos(surah: u32, verse: u32) -> Position {
        Position::new(surah, verse).unwrap()
    }

    fn verse(surah: u32, verse: u32, count: u32) -> VerseData {
        VerseData {
            position: pos(surah, verse),
            edition: Edition::English,
            arabic_text: "نص".into(),
            translation_text: format!("translation {surah}:{verse}"),
            surah_name: "سورة".into(),
            english_name: format!("Surah {surah}"),
            translation_of_name: "Name".into(),
            revelation_type: "Meccan".into(),
            verse_count: count,
        }
    }

    /// Engine sitting on `surah:verse` with that verse loaded.
    fn loaded_at(surah: u32, verse_no: u32, count: u32) -> ReaderEngine {
        let mut engine = ReaderEngine::default();
        engine.start(Some(ShareLink::new(pos(surah, verse_no), Edition::English)));
        let token = engine.verse_token();
        engine.apply_verse(token, Ok(verse(surah, verse_no, count)));
        assert_eq!(engine.load_state(), &LoadState::Loaded);
        engine
    }

    fn fetch_of(commands: &[ReaderCommand]) -> Option<(Position, Edition)> {
        commands.iter().find_map(|command| match command {
            ReaderCommand::FetchVerse { position, edition, .. } => Some((*position, *edition)),
            _ => None,
        })
    }

    #[test]
    fn start_loads_the_first_verse() {
        let mut engine = ReaderEngine::default();
        assert_eq!(engine.load_state(), &LoadState::Idle);
        let commands = engine.start(None);
        assert_eq!(fetch_of(&commands), Some((pos(1, 1), Edition::English)));
        assert_eq!(engine.load_state(), &LoadState::Loading);
    }

    #[test]
    fn loaded_verse_sets_image_url() {
        let engine = loaded_at(2, 255, 286);
        assert_eq!(
            engine.image_url(),
            Some("https://cdn.islamic.network/quran/images/2_255.png")
        );
    }

    #[test]
    fn advance_within_surah() {
        let mut engine = loaded_at(1, 3, 7);
        let commands = engine.advance();
        assert_eq!(engine.position(), pos(1, 4));
        assert_eq!(fetch_of(&commands), Some((pos(1, 4), Edition::English)));
    }

    #[test]
    fn advance_from_last_verse_crosses_surah() {
        let mut engine = loaded_at(1, 7, 7);
        engine.advance();
        assert_eq!(engine.position(), pos(2, 1));
    }

    #[test]
    fn advance_past_last_surah_is_not_validated() {
        let mut engine = loaded_at(114, 6, 6);
        let commands = engine.advance();
        assert_eq!(fetch_of(&commands), Some((pos(115, 1), Edition::English)));
    }

    #[test]
    fn retreat_within_surah() {
        let mut engine = loaded_at(2, 10, 286);
        engine.retreat();
        assert_eq!(engine.position(), pos(2, 9));
    }

    #[test]
    fn retreat_from_first_verse_lands_on_verse_one_by_default() {
        let mut engine = loaded_at(3, 1, 200);
        engine.retreat();
        assert_eq!(engine.position(), pos(2, 1));
    }

    #[test]
    fn retreat_can_land_on_last_verse() {
        let config = ReaderConfig::default().with_retreat(RetreatPolicy::LastVerse);
        let mut engine = ReaderEngine::new(config);
        engine.start(Some(ShareLink::new(pos(3, 1), Edition::English)));
        engine.retreat();
        assert_eq!(engine.position(), pos(2, 286));
    }

    #[test]
    fn retreat_at_opening_is_a_no_op() {
        let mut engine = loaded_at(1, 1, 7);
        let token = engine.verse_token();
        assert!(engine.retreat().is_empty());
        assert_eq!(engine.verse_token(), token);
    }

    #[test]
    fn invalid_input_reports_and_clears_the_verse() {
        let mut engine = loaded_at(2, 5, 286);
        let commands = engine.set_verse("-4");
        assert_eq!(engine.position(), pos(2, 5));
        assert!(engine.verse().is_none());
        assert!(engine.image_url().is_none());
        assert_eq!(
            engine.load_state(),
            &LoadState::Error(ApiError::InvalidInput("-4".into()))
        );
        assert_eq!(fetch_of(&commands), None);
        assert!(matches!(
            engine.toast().map(|t| &t.message),
            Some(ToastMessage::VerseFailed(_))
        ));

        // Retyping the same valid verse recovers.
        let commands = engine.set_verse("5");
        assert_eq!(fetch_of(&commands), Some((pos(2, 5), Edition::English)));
    }

    #[test]
    fn invalid_input_supersedes_requests_in_flight() {
        let mut engine = ReaderEngine::default();
        engine.start(None);
        let in_flight = engine.verse_token();
        engine.set_surah("abc");
        engine.apply_verse(in_flight, Ok(verse(1, 1, 7)));
        assert!(engine.verse().is_none());
        assert!(matches!(engine.load_state(), LoadState::Error(_)));
    }

    #[test]
    fn set_surah_keeps_verse() {
        let mut engine = loaded_at(1, 4, 7);
        let commands = engine.set_surah("18");
        assert_eq!(fetch_of(&commands), Some((pos(18, 4), Edition::English)));
    }

    #[test]
    fn unchanged_position_does_not_refetch() {
        let mut engine = loaded_at(2, 2, 286);
        assert!(engine.set_verse("2").is_empty());
        assert!(engine.set_language(Edition::English).is_empty());
    }

    #[test]
    fn failed_fetch_clears_verse_and_raises_toast() {
        let mut engine = loaded_at(1, 1, 7);
        engine.advance();
        let token = engine.verse_token();
        let commands = engine.apply_verse(
            token,
            Err(ApiError::Status {
                status: 404,
                message: "Not Found".into(),
            }),
        );
        assert!(engine.verse().is_none());
        assert!(matches!(
            engine.load_state(),
            LoadState::Error(ApiError::Status { status: 404, .. })
        ));
        assert!(matches!(
            commands.as_slice(),
            [ReaderCommand::ExpireToast { after_ms: 3_000, .. }]
        ));
    }

    #[test]
    fn stale_verse_responses_are_dropped() {
        let mut engine = loaded_at(1, 1, 7);
        engine.advance();
        let first = engine.verse_token();
        engine.advance();
        let second = engine.verse_token();
        assert!(second > first);

        engine.apply_verse(second, Ok(verse(1, 3, 7)));
        engine.apply_verse(first, Ok(verse(1, 2, 7)));
        assert_eq!(engine.verse().map(|v| v.position), Some(pos(1, 3)));
        assert_eq!(engine.position(), pos(1, 3));
    }

    #[test]
    fn previous_verse_stays_visible_while_loading() {
        let mut engine = loaded_at(1, 1, 7);
        engine.advance();
        assert_eq!(engine.load_state(), &LoadState::Loading);
        assert_eq!(engine.verse().map(|v| v.position), Some(pos(1, 1)));
    }

    #[test]
    fn advance_without_loaded_verse_uses_verse_table() {
        let mut engine = ReaderEngine::default();
        engine.start(Some(ShareLink::new(pos(2, 5), Edition::English)));
        engine.advance();
        assert_eq!(engine.position(), pos(2, 6));
    }

    #[test]
    fn reset_returns_to_opening_and_clears_search() {
        let mut engine = loaded_at(18, 10, 110);
        engine.search("cave");
        let token = engine.search_token();
        engine.apply_search(
            token,
            Ok(vec![SearchMatch {
                surah: 18,
                surah_english_name: "Al-Kahf".into(),
                verse: 9,
                text: "the cave".into(),
            }]),
        );

        let commands = engine.reset();
        assert_eq!(engine.position(), Position::FIRST);
        assert_eq!(engine.query(), "");
        assert!(engine.results().is_empty());
        assert_eq!(engine.search_status(), &SearchStatus::Idle);
        assert_eq!(fetch_of(&commands), Some((Position::FIRST, Edition::English)));
    }

    #[test]
    fn reset_reloads_even_at_opening() {
        let mut engine = loaded_at(1, 1, 7);
        assert!(fetch_of(&engine.reset()).is_some());
    }

    #[test]
    fn blank_search_is_ignored() {
        let mut engine = loaded_at(1, 1, 7);
        let token = engine.search_token();
        assert!(engine.search("").is_empty());
        assert!(engine.search("   ").is_empty());
        assert_eq!(engine.search_token(), token);
        assert_eq!(engine.search_status(), &SearchStatus::Idle);
    }

    #[test]
    fn search_trims_the_query() {
        let mut engine = ReaderEngine::default();
        let commands = engine.search("  mercy ");
        assert!(matches!(
            commands.as_slice(),
            [ReaderCommand::Search { query, edition: Edition::English, .. }] if query == "mercy"
        ));
        assert_eq!(engine.search_status(), &SearchStatus::Searching);
    }

    #[test]
    fn stale_search_responses_are_dropped() {
        let mut engine = ReaderEngine::default();
        engine.search("light");
        let old = engine.search_token();
        engine.search("night");
        engine.apply_search(old, Ok(Vec::new()));
        assert_eq!(engine.search_status(), &SearchStatus::Searching);
    }

    #[test]
    fn search_failure_is_reported() {
        let mut engine = ReaderEngine::default();
        engine.search("light");
        let token = engine.search_token();
        engine.apply_search(token, Err(ApiError::Network("offline".into())));
        assert_eq!(
            engine.search_status(),
            &SearchStatus::Error(ApiError::Network("offline".into()))
        );
        assert!(matches!(
            engine.toast().map(|t| &t.message),
            Some(ToastMessage::SearchFailed(_))
        ));
    }

    #[test]
    fn language_switch_refetches_same_position() {
        let mut engine = loaded_at(2, 255, 286);
        let commands = engine.set_language(Edition::Urdu);
        assert_eq!(fetch_of(&commands), Some((pos(2, 255), Edition::Urdu)));
    }

    #[test]
    fn share_builds_link_for_current_verse() {
        let mut engine = loaded_at(36, 58, 83);
        engine.set_language(Edition::Urdu);
        let commands = engine.share();
        assert_eq!(
            commands,
            vec![ReaderCommand::Share(ShareLink::new(pos(36, 58), Edition::Urdu))]
        );
    }

    #[test]
    fn share_outcomes() {
        let mut engine = ReaderEngine::default();
        assert!(engine.share_finished(Ok(ShareOutcome::Shared)).is_empty());
        assert!(engine.toast().is_none());

        engine.share_finished(Ok(ShareOutcome::Copied));
        assert_eq!(engine.toast().map(|t| &t.message), Some(&ToastMessage::LinkCopied));

        engine.share_finished(Err("blocked".into()));
        assert_eq!(
            engine.toast().map(|t| &t.message),
            Some(&ToastMessage::ShareFailed("blocked".into()))
        );
    }

    #[test]
    fn expired_toast_timer_leaves_newer_toast() {
        let mut engine = ReaderEngine::default();
        engine.share_finished(Ok(ShareOutcome::Copied));
        let first = engine.toast().unwrap().id;
        engine.share_finished(Ok(ShareOutcome::Copied));
        let second = engine.toast().unwrap().id;

        engine.dismiss_toast(first);
        assert_eq!(engine.toast().map(|t| t.id), Some(second));
        engine.dismiss_toast(second);
        assert!(engine.toast().is_none());
    }

    #[test]
    fn font_size_is_clamped() {
        let mut engine = ReaderEngine::default();
        assert_eq!(engine.font_size(), 24);
        engine.set_font_size(99);
        assert_eq!(engine.font_size(), 40);
        engine.set_font_size(3);
        assert_eq!(engine.font_size(), 16);
    }

    #[test]
    fn disabled_features_ignore_their_messages() {
        let config = ReaderConfig::default().with_features(Features::MINIMAL);
        let mut engine = ReaderEngine::new(config);
        engine.start(None);
        let token = engine.verse_token();

        assert!(engine.dispatch(ReaderMsg::SetQuery("light".into())).is_empty());
        assert!(engine.dispatch(ReaderMsg::SubmitSearch).is_empty());
        assert!(engine.dispatch(ReaderMsg::Share).is_empty());
        assert!(engine.dispatch(ReaderMsg::Reset).is_empty());
        engine.dispatch(ReaderMsg::ToggleDarkMode);

        assert_eq!(engine.query(), "");
        assert!(!engine.dark_mode());
        assert_eq!(engine.verse_token(), token);
    }
}
