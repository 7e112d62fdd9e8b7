//! Clipboard utilities for copying text to clipboard
//!
//! Prefers the async Clipboard API in secure contexts and falls back to
//! the legacy select-and-copy technique elsewhere. The outcome is
//! reported through the notification service; failures never propagate
//! to the caller.

use crate::shared::context::AppContext;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(ctx: AppContext, text: &str) {
    let text = text.to_owned();
    spawn_local(async move {
        if clipboard_api_copy(&text).await {
            ctx.notifications.success("Copied to clipboard");
            return;
        }
        match legacy_copy(&text) {
            Ok(true) => ctx.notifications.success("Copied to clipboard"),
            Ok(false) => log::warn!("execCommand copy reported failure"),
            Err(err) => log::warn!("clipboard fallback failed: {err}"),
        }
    });
}

/// Async Clipboard API path; only usable in a secure context.
async fn clipboard_api_copy(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    if !window.is_secure_context() {
        return false;
    }
    let clipboard = window.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .is_ok()
}

/// Legacy fallback: a temporary hidden input is created, selected and
/// copied from. The input is removed on every exit path once it has been
/// attached to the document.
fn legacy_copy(text: &str) -> Result<bool, String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let body = document.body().ok_or("no document body")?;

    let input: web_sys::HtmlInputElement = document
        .create_element("input")
        .map_err(|e| format!("{e:?}"))?
        .dyn_into()
        .map_err(|_| "created element is not an input".to_string())?;
    input.set_value(text);
    input
        .set_attribute("style", "position: fixed; left: -9999px; top: 0;")
        .map_err(|e| format!("{e:?}"))?;

    body.append_child(&input).map_err(|e| format!("{e:?}"))?;
    let _ = input.focus();
    input.select();
    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .ok_or("document is not an HtmlDocument")?
        .exec_command("copy");
    input.remove();

    copied.map_err(|e| format!("{e:?}"))
}
