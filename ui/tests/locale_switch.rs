//! Switching the interface language changes labels only. Reader state and the
//! translation edition are untouched, and errors are re-described in the new
//! language from the same stored error.

use api::{ApiError, Edition, Position, VerseData};
use ui::i18n;
use ui::reader::{project, LoadState, ReaderEngine, ReaderMsg, ShareLink};

fn loaded_engine() -> ReaderEngine {
    let mut engine = ReaderEngine::default();
    let position = Position::new(18, 10).unwrap();
    engine.dispatch(ReaderMsg::Start {
        link: Some(ShareLink::new(position, Edition::English)),
    });
    engine.dispatch(ReaderMsg::ToggleDarkMode);
    engine.dispatch(ReaderMsg::SetFontSize(32));
    engine.dispatch(ReaderMsg::VerseFetched {
        token: engine.verse_token(),
        outcome: Ok(VerseData {
            position,
            edition: Edition::English,
            arabic_text: "إِذْ أَوَى ٱلْفِتْيَةُ إِلَى ٱلْكَهْفِ".into(),
            translation_text: "When those youths took refuge in the cave".into(),
            surah_name: "سُورَةُ الكَهفِ".into(),
            english_name: "Al-Kahf".into(),
            translation_of_name: "The Cave".into(),
            revelation_type: "Meccan".into(),
            verse_count: 110,
        }),
    });
    engine
}

#[test]
fn locale_change_keeps_reader_state_and_relabels_errors() {
    i18n::init();
    i18n::set_language("en-US").unwrap();

    let mut engine = loaded_engine();
    assert_eq!(*engine.load_state(), LoadState::Loaded);
    let before = project(&engine);

    i18n::set_language("ur-PK").unwrap();
    assert_eq!(i18n::current_language(), "ur-PK");
    assert!(i18n::is_rtl());
    assert_eq!(project(&engine), before);
    assert_eq!(engine.position(), Position::new(18, 10).unwrap());
    assert_eq!(engine.edition(), Edition::English);
    assert!(engine.dark_mode());
    assert_eq!(engine.font_size(), 32);

    engine.dispatch(ReaderMsg::SetVerse("0".into()));
    let LoadState::Error(err) = engine.load_state().clone() else {
        panic!("invalid verse should be reported");
    };
    assert_eq!(err, ApiError::InvalidInput("0".into()));
    let urdu = i18n::describe_error(&err);

    i18n::set_language("en-US").unwrap();
    let english = i18n::describe_error(&err);
    assert_ne!(urdu, english);
    assert!(english.contains("valid surah"), "{english}");
}
