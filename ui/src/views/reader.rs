use dioxus::prelude::*;

use crate::components::AppFooter;
use crate::reader::ReaderView;

#[component]
pub fn Reader() -> Element {
    // Re-render the page when the launcher's language signal changes.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        section { class: "page page-reader",
            div { style: "display:none", "{lang_marker}" }
            ReaderView {}
        }
        AppFooter {}
    }
}
