//! Transient, auto-expiring status messages.
//!
//! Notifications stack independently in the top-right viewport corner.
//! Each one removes itself after [`NOTIFICATION_TTL_MS`], or earlier when
//! the user dismisses it; the expiry timer finding its entry already gone
//! is a no-op.

use crate::shared::context::use_app_context;
use chrono::{DateTime, Utc};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

pub const NOTIFICATION_TTL_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    /// Visual class of the rendered element. `Error` maps onto the
    /// `danger` style; the others match their own name.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "danger",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
        }
    }

    /// Reactive read of the live notifications, newest last.
    pub fn items(&self) -> Vec<Notification> {
        self.items.get()
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(message, Severity::Info);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, Severity::Error);
    }

    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            created_at: Utc::now(),
        };
        let id = notification.id;
        self.items.update(|items| items.push(notification));

        let items = self.items;
        spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_TTL_MS).await;
            items.update(|items| remove_by_id(items, id));
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.update(|items| remove_by_id(items, id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

fn remove_by_id(items: &mut Vec<Notification>, id: Uuid) {
    items.retain(|n| n.id != id);
}

#[component]
pub fn NotificationArea() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div
            class="notification-area"
            style="position: fixed; top: 16px; right: 16px; z-index: 1100; display: flex; flex-direction: column; gap: 8px;"
        >
            <For
                each=move || ctx.notifications.items()
                key=|n| n.id
                children=move |notification| {
                    let id = notification.id;
                    view! {
                        <div class=format!(
                            "notification notification-{}",
                            notification.severity.css_class(),
                        )>
                            <span>{notification.message.clone()}</span>
                            <button
                                class="notification-close"
                                aria-label="Dismiss"
                                on:click=move |_| ctx.notifications.dismiss(id)
                            >
                                "x"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: Uuid) -> Notification {
        Notification {
            id,
            message: "test".to_string(),
            severity: Severity::Info,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn error_maps_to_danger_class() {
        assert_eq!(Severity::Info.css_class(), "info");
        assert_eq!(Severity::Success.css_class(), "success");
        assert_eq!(Severity::Error.css_class(), "danger");
    }

    #[test]
    fn removing_a_dismissed_notification_is_a_no_op() {
        let id = Uuid::new_v4();
        let other = Uuid::new_v4();
        let mut items = vec![note(id), note(other)];

        // Manual dismissal, then the scheduled expiry firing later.
        remove_by_id(&mut items, id);
        remove_by_id(&mut items, id);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, other);
    }
}
