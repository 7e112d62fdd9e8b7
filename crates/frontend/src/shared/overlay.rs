//! Full-viewport "operation in progress" indicator.
//!
//! The overlay is `Option<message>` behind a signal, so at most one
//! exists and `show` structurally replaces any previous one.

use crate::shared::context::use_app_context;
use leptos::prelude::*;

pub const DEFAULT_OVERLAY_MESSAGE: &str = "Processing...";

#[derive(Clone, Copy)]
pub struct OverlayService {
    message: RwSignal<Option<String>>,
}

impl OverlayService {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
        }
    }

    /// Shows the overlay with the given message, replacing any overlay
    /// already on screen. Synchronous and idempotent.
    pub fn show(&self, message: impl Into<String>) {
        self.message.set(Some(message.into()));
    }

    pub fn show_default(&self) {
        self.show(DEFAULT_OVERLAY_MESSAGE);
    }

    /// Removes the overlay; no-op when none is shown.
    pub fn hide(&self) {
        self.message.set(None);
    }

    /// Reactive read of the current overlay message.
    pub fn message(&self) -> Option<String> {
        self.message.get()
    }
}

impl Default for OverlayService {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || {
            ctx.overlay
                .message()
                .map(|message| {
                    view! {
                        <div
                            class="loading-overlay"
                            style="position: fixed; inset: 0; z-index: 1050; display: flex; flex-direction: column; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.5);"
                        >
                            <div class="spinner" aria-hidden="true"></div>
                            <p class="loading-message">{message}</p>
                        </div>
                    }
                })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_replaces_the_previous_overlay() {
        let overlay = OverlayService::new();
        overlay.show("Signing APK...");
        overlay.show("Applying GUI changes...");
        assert_eq!(
            overlay.message.get_untracked().as_deref(),
            Some("Applying GUI changes...")
        );
    }

    #[test]
    fn hide_is_idempotent() {
        let overlay = OverlayService::new();
        overlay.hide();
        overlay.show_default();
        overlay.hide();
        overlay.hide();
        assert!(overlay.message.get_untracked().is_none());
    }
}
