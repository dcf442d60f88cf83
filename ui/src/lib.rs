//! Shared UI crate for Ayah. The reader engine, views and platform glue live here.

use dioxus::prelude::manganis;

pub mod core;
pub mod i18n;
pub mod reader;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod app_footer;
    pub use app_footer::AppFooter;
}

/// Shared stylesheet for every platform (web links it, desktop inlines it).
pub const THEME_CSS: dioxus::prelude::Asset = dioxus::prelude::asset!("/assets/theme/main.css");
