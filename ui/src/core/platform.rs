//! Platform detection helpers and executor glue.

use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    /// Whether a link can be handed to a native share sheet before falling back to the clipboard.
    pub fn may_share_natively(self) -> bool {
        matches!(self, Self::Web)
    }
}

/// Run a future on the UI executor. Results are expected to travel back over a channel.
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(future);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        dioxus::prelude::spawn(future);
    }
}

/// Origin of the page serving the app (`https://host:port`), if there is one.
pub fn page_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .filter(|origin| !origin.is_empty() && origin != "null")
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Raw query string of the page URL (including the leading `?`), used for deep links.
pub fn page_query() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .filter(|search| !search.is_empty())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
