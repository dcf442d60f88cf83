use api::{Edition, ARABIC_EDITION};
use dioxus::prelude::*;

use crate::components::AppFooter;
use crate::reader::ReaderConfig;
use crate::t;

#[component]
pub fn About() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();
    let config = try_use_context::<ReaderConfig>().unwrap_or_default();

    rsx! {
        section { class: "page page-about",
            div { style: "display:none", "{lang_marker}" }
            h1 { {t!("about-title")} }
            p { {t!("about-intro")} }
            p { {t!("about-sources")} }
            ul { class: "page-about__sources",
                li { a { href: "{config.api.api_base}", rel: "noopener", "{config.api.api_base}" } }
                li { a { href: "{config.api.cdn_base}", rel: "noopener", "{config.api.cdn_base}" } }
            }
            h2 { {t!("about-editions")} }
            ul { class: "page-about__editions",
                li { key: "{ARABIC_EDITION}", code { "{ARABIC_EDITION}" } }
                for edition in Edition::ALL {
                    li { key: "{edition.id()}",
                        code { "{edition.id()}" }
                        " · "
                        {edition_name(edition)}
                    }
                }
            }
        }
        AppFooter {}
    }
}

fn edition_name(edition: Edition) -> String {
    match edition {
        Edition::English => t!("edition-en"),
        Edition::Urdu => t!("edition-ur"),
    }
}
