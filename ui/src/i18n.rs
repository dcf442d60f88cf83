//! Localisation of the reader chrome for `ayah-ui`.
//!
//! Built on `i18n-embed` (language negotiation, Fluent formatting),
//! `rust-embed` (compile-time embedding of `.ftl` files) and `i18n-embed-fl`
//! (checked `fl!` lookups).
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/ayah-ui.ftl   (fallback/reference)
//!   ur-PK/ayah-ui.ftl
//! ```
//!
//! The UI locale only affects labels. The translation shown under each verse
//! is picked separately through [`api::Edition`].
//!
//! ```ignore
//! use crate::t;
//! ui::i18n::init();
//! let label = t!("nav-reader");
//! ```
use std::sync::Once;

use api::ApiError;
use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Short form of `fl!` bound to the shared [`LOADER`].
///
/// ```ignore
/// t!("nav-reader");
/// t!("reader-counter", verse = 3, count = 7);
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback bundle lives at `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "ayah-ui";

const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load bundles for the user's preferred languages. Safe to call repeatedly.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => debug!(?selected, "i18n bundles loaded"),
            Err(err) => warn!(%err, "i18n language selection failed; using fallback"),
        }
    });
}

/// Switch the UI language. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        debug!(tag, "ignoring unparseable language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Language tags with an embedded bundle, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Tag of the bundle currently used for lookups.
pub fn current_language() -> String {
    let current = LOADER.current_languages();
    current
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_else(|| FALLBACK.to_string())
}

/// Localised text for a client error. Details reported by the service itself
/// are passed through as they arrive.
pub fn describe_error(err: &ApiError) -> String {
    match err {
        ApiError::InvalidInput(value) => crate::t!("error-invalid-input", value = value.clone()),
        ApiError::EmptyQuery => crate::t!("error-empty-query"),
        ApiError::Status { status, message } => {
            crate::t!("error-status", status = status.to_string(), message = message.clone())
        }
        ApiError::Network(reason) => crate::t!("error-network", reason = reason.clone()),
        ApiError::Decode(reason) => crate::t!("error-decode", reason = reason.clone()),
        ApiError::Url(reason) => crate::t!("error-url", reason = reason.clone()),
    }
}

/// Whether the active UI language is written right to left.
pub fn is_rtl() -> bool {
    current_language().starts_with("ur")
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
