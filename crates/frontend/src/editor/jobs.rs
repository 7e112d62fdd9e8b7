//! Dispatch of long-running server operations.
//!
//! Each job runs disable -> request -> exactly one outcome -> restore,
//! with the restore step after the outcome branch so it executes once on
//! every path, including a success that schedules a page reload.

use crate::editor::api;
use crate::shared::context::AppContext;
use contracts::ApiStatus;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a success notification stays visible before a scheduled
/// full-page reload takes it away.
pub const RELOAD_DELAY_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    Sign,
    TestAi,
}

impl JobKind {
    fn failure_prefix(&self) -> &'static str {
        match self {
            JobKind::Sign => "Signing",
            JobKind::TestAi => "AI test",
        }
    }

    fn default_success_notice(&self) -> &'static str {
        match self {
            JobKind::Sign => "APK signed successfully!",
            JobKind::TestAi => "AI is working correctly",
        }
    }

    /// Signing updates project state the page renders from; a reload is
    /// needed to pick it up.
    fn reloads_on_success(&self) -> bool {
        matches!(self, JobKind::Sign)
    }

    pub fn overlay_message(&self) -> &'static str {
        match self {
            JobKind::Sign => "Signing APK...",
            JobKind::TestAi => "Testing AI integration...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    Success { notice: String, reload: bool },
    Failure { notice: String },
    NetworkError { notice: String, detail: String },
}

/// Maps a server exchange onto the one outcome the UI acts on.
pub fn classify(kind: JobKind, result: Result<ApiStatus, String>) -> JobOutcome {
    match result {
        Ok(status) if status.success => JobOutcome::Success {
            notice: status
                .message
                .unwrap_or_else(|| kind.default_success_notice().to_string()),
            reload: kind.reloads_on_success(),
        },
        Ok(status) => JobOutcome::Failure {
            notice: format!(
                "{} failed: {}",
                kind.failure_prefix(),
                status.message.unwrap_or_else(|| "Unknown error".to_string())
            ),
        },
        Err(detail) => JobOutcome::NetworkError {
            notice: format!("{} failed: Network error", kind.failure_prefix()),
            detail,
        },
    }
}

fn settle(ctx: AppContext, outcome: JobOutcome) {
    match outcome {
        JobOutcome::Success { notice, reload } => {
            ctx.notifications.success(notice);
            if reload {
                schedule_reload();
            }
        }
        JobOutcome::Failure { notice } => ctx.notifications.error(notice),
        JobOutcome::NetworkError { notice, detail } => {
            log::error!("job failed at transport level: {detail}");
            ctx.notifications.error(notice);
        }
    }
}

/// Sign job for one project. An empty target identifier aborts silently.
pub fn run_sign_job(ctx: AppContext, project_id: String, busy: RwSignal<bool>) {
    if project_id.is_empty() {
        return;
    }
    busy.set(true);
    ctx.overlay.show(JobKind::Sign.overlay_message());

    spawn_local(async move {
        let outcome = classify(JobKind::Sign, api::sign_apk(&project_id).await);
        settle(ctx, outcome);
        // Restore before the reload (if any) fires RELOAD_DELAY_MS later.
        ctx.overlay.hide();
        busy.set(false);
    });
}

pub fn run_test_ai_job(ctx: AppContext, busy: RwSignal<bool>) {
    busy.set(true);
    ctx.overlay.show(JobKind::TestAi.overlay_message());

    spawn_local(async move {
        let outcome = classify(JobKind::TestAi, api::test_ai().await);
        settle(ctx, outcome);
        ctx.overlay.hide();
        busy.set(false);
    });
}

/// Loading state around a native form submission. The browser navigates
/// away on response, so the pending state is never restored here.
pub fn mark_form_pending(ctx: AppContext, busy: RwSignal<bool>, message: &str) {
    busy.set(true);
    ctx.overlay.show(message);
}

fn schedule_reload() {
    spawn_local(async move {
        TimeoutFuture::new(RELOAD_DELAY_MS).await;
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_success_reloads_with_server_message() {
        let outcome = classify(
            JobKind::Sign,
            Ok(ApiStatus::ok("APK signed successfully!")),
        );
        assert_eq!(
            outcome,
            JobOutcome::Success {
                notice: "APK signed successfully!".to_string(),
                reload: true,
            }
        );
    }

    #[test]
    fn sign_success_without_message_uses_default() {
        let outcome = classify(
            JobKind::Sign,
            Ok(ApiStatus {
                success: true,
                message: None,
            }),
        );
        match outcome {
            JobOutcome::Success { notice, reload } => {
                assert_eq!(notice, "APK signed successfully!");
                assert!(reload);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn sign_logical_failure_keeps_server_message_and_does_not_reload() {
        let outcome = classify(JobKind::Sign, Ok(ApiStatus::failed("invalid signature")));
        assert_eq!(
            outcome,
            JobOutcome::Failure {
                notice: "Signing failed: invalid signature".to_string(),
            }
        );
    }

    #[test]
    fn sign_transport_failure_reports_generic_network_error() {
        let outcome = classify(JobKind::Sign, Err("request failed: timed out".to_string()));
        assert_eq!(
            outcome,
            JobOutcome::NetworkError {
                notice: "Signing failed: Network error".to_string(),
                detail: "request failed: timed out".to_string(),
            }
        );
    }

    #[test]
    fn ai_test_never_schedules_a_reload() {
        let outcome = classify(JobKind::TestAi, Ok(ApiStatus::ok("AI is working correctly")));
        match outcome {
            JobOutcome::Success { reload, .. } => assert!(!reload),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn ai_test_failure_uses_its_own_prefix() {
        let outcome = classify(JobKind::TestAi, Err("fetch aborted".to_string()));
        match outcome {
            JobOutcome::NetworkError { notice, .. } => {
                assert_eq!(notice, "AI test failed: Network error");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
