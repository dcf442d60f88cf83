use std::cell::RefCell;
use std::rc::Rc;

use api::{ApiConfig, Edition, QuranClient};
use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::platform;
use crate::i18n::describe_error;
use crate::t;

use super::config::ReaderConfig;
use super::engine::{ReaderCommand, ReaderEngine, ReaderMsg, ToastMessage};
use super::link::ShareLink;
use super::projection::{project, DisplayStatus, ReaderDisplay, SearchPanel, VerseCard};
use super::runtime;

#[component]
pub fn ReaderView() -> Element {
    let config = try_use_context::<ReaderConfig>().unwrap_or_default();
    // Subscribe to the launcher's interface-language signal so labels follow it.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();
    let client = use_hook({
        let api_config: ApiConfig = config.api.clone();
        move || QuranClient::new(api_config)
    });
    let origin = use_hook({
        let fallback = config.share_origin.clone();
        move || platform::page_origin().unwrap_or(fallback)
    });
    let engine = use_signal({
        let config = config.clone();
        move || ReaderEngine::new(config)
    });

    let sender_slot: Rc<RefCell<Option<UnboundedSender<ReaderMsg>>>> =
        use_hook(|| Rc::new(RefCell::new(None)));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<ReaderMsg>| {
        let sender_slot = sender_slot_for_loop.clone();
        let client = client.clone();
        let origin = origin.clone();
        let mut engine_signal = engine;

        async move {
            while let Some(msg) = rx.next().await {
                let commands = engine_signal.with_mut(|eng| eng.dispatch(msg));
                for command in commands {
                    queue_command(sender_slot.clone(), client.clone(), origin.clone(), command);
                }
            }
        }
    });

    sender_slot.borrow_mut().replace(coroutine.tx());

    use_hook({
        let default_edition = config.initial_edition;
        move || {
            let link = platform::page_query()
                .and_then(|query| ShareLink::from_query(&query, default_edition));
            info!(deep_link = link.is_some(), "reader starting");
            coroutine.send(ReaderMsg::Start { link });
        }
    });

    // The theme applies to the whole document, not just the reader card.
    use_effect(move || {
        let dark = engine.read().dark_mode();
        let _ = document::eval(&format!(
            "document.documentElement.classList.toggle('dark', {dark});"
        ));
    });

    let send = move |msg: ReaderMsg| coroutine.send(msg);
    let display = project(&engine.read());

    rsx! {
        article { class: "{display.theme_class}",
            div { style: "display:none", "{lang_marker}" }
            {render_toolbar(&display, send)}

            if let Some(panel) = display.search.clone() {
                {render_search(panel, send)}
            }

            section { class: "reader-card",
                {match display.status.clone() {
                    DisplayStatus::Idle => rsx! {
                        p { class: "reader-card__placeholder", {t!("reader-idle")} }
                    },
                    DisplayStatus::Loading if display.verse.is_none() => rsx! {
                        p { class: "reader-card__placeholder", {t!("reader-loading")} }
                    },
                    DisplayStatus::Error(err) => {
                        let message = describe_error(&err);
                        rsx! {
                            p { class: "reader-card__error", role: "alert", "⚠️ {message}" }
                        }
                    }
                    _ => rsx! {},
                }}

                if let Some(card) = display.verse.clone() {
                    {render_verse(card, &display)}
                }

                {render_pager(&display, send)}
            }

            if let Some(toast) = display.toast.clone() {
                div { class: "toast", role: "status",
                    span { class: "toast__message", {toast_text(&toast.message)} }
                    button {
                        r#type: "button",
                        class: "button button--ghost toast__dismiss",
                        onclick: move |_| send(ReaderMsg::DismissToast(toast.id)),
                        {t!("toast-dismiss")}
                    }
                }
            }
        }
    }
}

fn queue_command(
    sender_slot: Rc<RefCell<Option<UnboundedSender<ReaderMsg>>>>,
    client: QuranClient,
    origin: String,
    command: ReaderCommand,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            let msg = runtime::execute(&client, command, &origin).await;
            let _ = sender.unbounded_send(msg);
        });
    }
}

fn render_toolbar(display: &ReaderDisplay, send: impl Fn(ReaderMsg) + Copy + 'static) -> Element {
    let controls = display.controls;
    let theme_label = if controls.dark_mode {
        t!("reader-theme-light")
    } else {
        t!("reader-theme-dark")
    };

    rsx! {
        div { class: "reader-toolbar",
            label { class: "reader-field",
                span { class: "reader-field__label", {t!("reader-surah-label")} }
                input {
                    r#type: "number",
                    min: "1",
                    max: "114",
                    class: "reader-field__input",
                    value: "{display.surah_input}",
                    onchange: move |evt: FormEvent| send(ReaderMsg::SetSurah(evt.value())),
                }
            }
            label { class: "reader-field",
                span { class: "reader-field__label", {t!("reader-verse-label")} }
                input {
                    r#type: "number",
                    min: "1",
                    class: "reader-field__input",
                    value: "{display.verse_input}",
                    onchange: move |evt: FormEvent| send(ReaderMsg::SetVerse(evt.value())),
                }
            }
            label { class: "reader-field",
                span { class: "reader-field__label", {t!("reader-edition-label")} }
                select {
                    class: "reader-field__input",
                    value: "{display.edition.code()}",
                    onchange: move |evt: FormEvent| {
                        if let Some(edition) = Edition::from_code(&evt.value()) {
                            send(ReaderMsg::SetLanguage(edition));
                        }
                    },
                    for edition in Edition::ALL {
                        option {
                            key: "{edition.code()}",
                            value: "{edition.code()}",
                            selected: edition == display.edition,
                            {edition_label(edition)}
                        }
                    }
                }
            }
            label { class: "reader-field reader-field--range",
                span { class: "reader-field__label", {t!("reader-font-size")} }
                input {
                    r#type: "range",
                    min: "{controls.font_min}",
                    max: "{controls.font_max}",
                    step: "1",
                    value: "{display.font_size_px}",
                    oninput: move |evt: FormEvent| {
                        if let Ok(px) = evt.value().parse::<u32>() {
                            send(ReaderMsg::SetFontSize(px));
                        }
                    },
                }
            }
            div { class: "reader-toolbar__actions",
                if controls.show_theme_toggle {
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        aria_pressed: "{controls.dark_mode}",
                        onclick: move |_| send(ReaderMsg::ToggleDarkMode),
                        "{theme_label}"
                    }
                }
                if controls.show_share {
                    button {
                        r#type: "button",
                        class: "button button--accent",
                        onclick: move |_| send(ReaderMsg::Share),
                        {t!("reader-share")}
                    }
                }
                if controls.show_reset {
                    button {
                        r#type: "button",
                        class: "button",
                        onclick: move |_| send(ReaderMsg::Reset),
                        {t!("reader-reset")}
                    }
                }
            }
        }
    }
}

fn render_search(panel: SearchPanel, send: impl Fn(ReaderMsg) + Copy + 'static) -> Element {
    let status_line = if panel.busy {
        Some(t!("search-busy"))
    } else if panel.empty {
        Some(t!("search-no-results"))
    } else if !panel.rows.is_empty() {
        Some(t!("search-result-count", count = panel.rows.len()))
    } else {
        None
    };

    rsx! {
        section { class: "reader-search",
            form {
                class: "reader-search__form",
                role: "search",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    send(ReaderMsg::SubmitSearch);
                },
                label { class: "visually-hidden", r#for: "reader-search-input",
                    {t!("search-label")}
                }
                input {
                    id: "reader-search-input",
                    r#type: "search",
                    class: "reader-search__input",
                    placeholder: t!("search-placeholder"),
                    value: "{panel.query}",
                    oninput: move |evt: FormEvent| send(ReaderMsg::SetQuery(evt.value())),
                }
                button {
                    r#type: "submit",
                    class: "button button--primary",
                    disabled: panel.busy,
                    {t!("search-submit")}
                }
            }

            if let Some(line) = status_line {
                p { class: "reader-search__meta", "{line}" }
            }
            if let Some(err) = panel.error.clone() {
                p { class: "reader-search__error",
                    {t!("search-failed", reason = describe_error(&err))}
                }
            }

            if !panel.rows.is_empty() {
                ul { class: "reader-search__results",
                    for row in panel.rows.into_iter() {
                        li { key: "{row.index}-{row.reference}",
                            button {
                                r#type: "button",
                                class: "reader-search__result",
                                onclick: move |_| send(ReaderMsg::SelectResult(row.index)),
                                span { class: "reader-search__reference",
                                    "{row.surah_english_name} · {row.reference}"
                                }
                                span { class: "reader-search__preview", "{row.preview}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_verse(card: VerseCard, display: &ReaderDisplay) -> Element {
    let counter = t!(
        "reader-counter",
        verse = card.verse_number,
        count = card.verse_count
    );
    let image_alt = t!("reader-image-alt", reference = card.reference.clone());
    let card_class = if card.stale {
        "reader-verse reader-verse--stale"
    } else {
        "reader-verse"
    };

    rsx! {
        div { class: "{card_class}",
            header { class: "reader-verse__header",
                h2 { class: "reader-verse__surah", "{card.english_name}" }
                p { class: "reader-verse__surah-meta",
                    span { lang: "ar", dir: "rtl", "{card.surah_name}" }
                    " · {card.translation_of_name} · {card.revelation_type}"
                }
            }
            p {
                class: "reader-verse__arabic",
                lang: "ar",
                dir: "rtl",
                style: "font-size: {display.font_size_px}px",
                "{card.arabic}"
            }
            if let Some(src) = card.image_url.clone() {
                img {
                    class: "reader-verse__image",
                    src: "{src}",
                    alt: "{image_alt}",
                    loading: "lazy",
                }
            }
            p { class: "reader-verse__translation", dir: "{display.translation_dir}",
                "{card.translation}"
            }
            span { class: "reader-verse__counter", "{counter}" }
        }
    }
}

fn render_pager(display: &ReaderDisplay, send: impl Fn(ReaderMsg) + Copy + 'static) -> Element {
    rsx! {
        nav { class: "reader-pager",
            button {
                r#type: "button",
                class: "button",
                disabled: !display.controls.can_retreat,
                onclick: move |_| send(ReaderMsg::Retreat),
                "‹ "
                {t!("reader-previous")}
            }
            button {
                r#type: "button",
                class: "button button--primary",
                onclick: move |_| send(ReaderMsg::Advance),
                {t!("reader-next")}
                " ›"
            }
        }
    }
}

fn edition_label(edition: Edition) -> String {
    match edition {
        Edition::English => t!("edition-en"),
        Edition::Urdu => t!("edition-ur"),
    }
}

fn toast_text(message: &ToastMessage) -> String {
    match message {
        ToastMessage::LinkCopied => t!("toast-link-copied"),
        ToastMessage::ShareFailed(reason) => t!("toast-share-failed", reason = reason.clone()),
        ToastMessage::VerseFailed(err) => describe_error(err),
        ToastMessage::SearchFailed(err) => t!("search-failed", reason = describe_error(err)),
    }
}
