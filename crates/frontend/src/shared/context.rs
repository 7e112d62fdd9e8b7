use crate::shared::notifications::NotificationService;
use crate::shared::overlay::OverlayService;
use leptos::prelude::*;

/// Application-wide services, built once by the root component and
/// handed down through Leptos context. Anything that needs to emit a
/// notification or drive the loading overlay takes this as an argument
/// instead of reaching for a global.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub notifications: NotificationService,
    pub overlay: OverlayService,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            notifications: NotificationService::new(),
            overlay: OverlayService::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
