use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::reader::ReaderConfig;
use ui::views::{About, Reader};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Reader {},
    #[route("/about")]
    About {},
}

fn nav_reader(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Reader {},
        "{label}"
    })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::About {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        reader: nav_reader,
        about: nav_about,
    });

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    // Share links point back at whatever origin served the page; the reader
    // reads `window.location` itself, so the default config is enough here.
    use_context_provider(ReaderConfig::default);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        Router::<Route> {}
    }
}

/// Web router layout around the shared navbar.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
