use crate::i18n;
use crate::t;
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Link factories supplied by each launcher, so `ui` never names a platform
/// `Route` enum. Each closure receives the localised label and returns a
/// `Link` that contains it.
///
/// ```ignore
/// register_nav(NavBuilder {
///     reader: |label| rsx!( Link { class: "navbar__link", to: Route::Reader {}, "{label}" } ),
///     about: |label| rsx!( Link { class: "navbar__link", to: Route::About {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub reader: fn(label: &str) -> Element,
    pub about: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// Install the launcher's links. Only the first registration wins.
pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        debug!("navbar links already registered");
    }
}

/// Brand, page links and the interface-language switcher.
///
/// Launchers may provide a `Signal<String>` holding the UI language code; the
/// navbar writes to it on change so the rest of the tree re-renders.
#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Subscribe to the shared language signal.
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                debug!(lang = %val, "interface language changed");
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!(%err, lang = %val, "could not switch interface language"),
        }
    };

    let internal_nav = NAV_BUILDER.get().map(|b| {
        let reader = (b.reader)(&t!("nav-reader"));
        let about = (b.about)(&t!("nav-about"));
        rsx! {
            nav { class: "navbar__links",
                {reader}
                {about}
            }
        }
    });

    let dir = if i18n::is_rtl() { "rtl" } else { "ltr" };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar", dir: "{dir}",
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-mark", lang: "ar", "آية" }
                        span { class: "navbar__brand-name", "Ayah" }
                    }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs() {
                                option {
                                    key: "{code}",
                                    value: "{code}",
                                    selected: code == current_lang(),
                                    "{code}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
