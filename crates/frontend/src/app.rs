use crate::editor::view::EditorPage;
use crate::shared::context::AppContext;
use crate::shared::notifications::NotificationArea;
use crate::shared::overlay::LoadingOverlay;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Single application context, built once and provided to the whole
    // tree. Components that need to notify or manage the overlay take it
    // from context instead of reaching for a global.
    provide_context(AppContext::new());

    view! {
        <NotificationArea />
        <LoadingOverlay />
        <EditorPage />
    }
}
