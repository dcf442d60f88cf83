//! Hand a link to the platform: the Web Share sheet when the browser has one,
//! otherwise the clipboard (browser or OS).

use dioxus::logger::tracing::{info, warn};

use super::platform::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// A native share sheet accepted the link.
    Shared,
    /// The user closed the share sheet.
    Cancelled,
    /// The link was written to the clipboard.
    Copied,
}

pub async fn deliver(url: String, title: String) -> Result<ShareOutcome, String> {
    if Platform::current().may_share_natively() {
        if let Some(outcome) = native_share(&url, &title).await {
            info!(?outcome, "share sheet finished");
            return Ok(outcome);
        }
    }

    match copy_to_clipboard(url).await {
        Ok(()) => Ok(ShareOutcome::Copied),
        Err(err) => {
            warn!(%err, "clipboard copy failed");
            Err(err)
        }
    }
}

/// `None` means no usable share sheet; the caller falls back to the clipboard.
#[cfg(target_arch = "wasm32")]
async fn native_share(url: &str, title: &str) -> Option<ShareOutcome> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let navigator = web_sys::window()?.navigator();
    let share = js_sys::Reflect::get(&navigator, &JsValue::from_str("share"))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;

    let data = js_sys::Object::new();
    js_sys::Reflect::set(&data, &JsValue::from_str("url"), &JsValue::from_str(url)).ok()?;
    js_sys::Reflect::set(&data, &JsValue::from_str("title"), &JsValue::from_str(title)).ok()?;

    let promise = share
        .call1(&navigator, &data)
        .ok()?
        .dyn_into::<js_sys::Promise>()
        .ok()?;

    match JsFuture::from(promise).await {
        Ok(_) => Some(ShareOutcome::Shared),
        Err(err) if error_name(&err).as_deref() == Some("AbortError") => {
            Some(ShareOutcome::Cancelled)
        }
        Err(_) => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn native_share(_url: &str, _title: &str) -> Option<ShareOutcome> {
    None
}

#[cfg(target_arch = "wasm32")]
fn error_name(err: &wasm_bindgen::JsValue) -> Option<String> {
    js_sys::Reflect::get(err, &wasm_bindgen::JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string())
}

async fn copy_to_clipboard(payload: String) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        if async_clipboard_write(&payload).await {
            return Ok(());
        }
        legacy_clipboard_write(&payload)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard.set_text(payload).map_err(|err| err.to_string())
    }
}

/// `navigator.clipboard.writeText`, looked up dynamically (insecure origins lack it).
#[cfg(target_arch = "wasm32")]
async fn async_clipboard_write(payload: &str) -> bool {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let Some(window) = web_sys::window() else {
        return false;
    };
    let navigator = window.navigator();
    let Ok(clipboard) = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")) else {
        return false;
    };
    if clipboard.is_undefined() || clipboard.is_null() {
        return false;
    }
    let Some(write_text) = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
    else {
        return false;
    };
    let Some(promise) = write_text
        .call1(&clipboard, &JsValue::from_str(payload))
        .ok()
        .and_then(|p| p.dyn_into::<js_sys::Promise>().ok())
    else {
        return false;
    };
    JsFuture::from(promise).await.is_ok()
}

#[cfg(target_arch = "wasm32")]
fn legacy_clipboard_write(payload: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or("window unavailable")?;
    let document = window.document().ok_or("document unavailable")?;
    let body = document.body().ok_or("missing body")?;

    let textarea = document
        .create_element("textarea")
        .map_err(|_| "Unable to create textarea")?
        .dyn_into::<web_sys::HtmlTextAreaElement>()
        .map_err(|_| "Textarea cast failed")?;
    textarea.set_value(payload);
    let style = textarea.style();
    style.set_property("position", "fixed").ok();
    style.set_property("top", "0").ok();
    style.set_property("left", "0").ok();
    style.set_property("opacity", "0").ok();

    body.append_child(&textarea).ok();
    textarea.select();
    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .map(|html| html.exec_command("copy").unwrap_or(false))
        .unwrap_or(false);
    textarea.remove();

    if copied {
        Ok(())
    } else {
        Err("Clipboard copy blocked".into())
    }
}
