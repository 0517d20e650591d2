//! Clipboard utilities for copying text to clipboard
//!
//! Uses the Web Clipboard API when the page has it, and falls back to a
//! temporary textarea plus `document.execCommand("copy")` otherwise.

use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};

/// Copy text and run `on_done` afterwards.
///
/// `on_done` runs whether or not either copy path succeeded; failures are
/// only logged.
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_done: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        if !write_with_clipboard_api(&text).await {
            if let Err(e) = copy_with_textarea(&text) {
                log::warn!("clipboard: fallback copy failed: {}", e);
            }
        }
        on_done();
    });
}

async fn write_with_clipboard_api(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let navigator = window.navigator();
    // insecure origins have no navigator.clipboard
    let available = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false);
    if !available {
        return false;
    }
    let promise = navigator.clipboard().write_text(text);
    match wasm_bindgen_futures::JsFuture::from(promise).await {
        Ok(_) => true,
        Err(e) => {
            log::warn!("clipboard: writeText rejected: {:?}", e);
            false
        }
    }
}

fn copy_with_textarea(text: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;
    let body = document.body().ok_or_else(|| "no body".to_string())?;

    let textarea: web_sys::HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(|e| format!("{e:?}"))?
        .dyn_into()
        .map_err(|e| format!("{e:?}"))?;
    textarea.set_value(text);
    let _ = textarea.set_attribute("style", "position: fixed; top: 0; left: 0; opacity: 0;");
    body.append_child(&textarea).map_err(|e| format!("{e:?}"))?;
    textarea.select();

    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .map(|d| d.exec_command("copy").unwrap_or(false))
        .unwrap_or(false);
    let _ = body.remove_child(&textarea);

    if copied {
        Ok(())
    } else {
        Err("execCommand(\"copy\") returned false".to_string())
    }
}
