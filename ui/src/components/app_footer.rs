use dioxus::prelude::*;

use crate::core::format;
use crate::t;

#[component]
pub fn AppFooter() -> Element {
    let year = format::current_year();
    rsx! {
        footer { class: "footer",
            p { class: "footer__rights", {t!("footer-rights", year = year.to_string())} }
        }
    }
}
