//! The editor page: upload, project list, modification forms and the
//! live preview panel, wired together at mount time.

use crate::editor::api;
use crate::editor::jobs::{mark_form_pending, run_sign_job, run_test_ai_job};
use crate::editor::preview::{preview_patch, ConnectionStatus};
use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::context::use_app_context;
use crate::shared::icons;
use contracts::ProjectSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

fn format_file_size(bytes: f64) -> String {
    format!("{:.2} MiB", bytes / (1024.0 * 1024.0))
}

// Server routes the card links navigate to; compile and delete redirect,
// download answers with an attachment and leaves the page alone.
fn compile_url(id: Uuid) -> String {
    format!("/compile/{}", id)
}

fn download_url(id: Uuid) -> String {
    format!("/download/{}", id)
}

fn delete_url(id: Uuid) -> String {
    format!("/delete/{}", id)
}

/// One line for the file-info region. The server re-validates the
/// extension; this is only an early hint.
fn describe_selected_file(name: &str, bytes: f64) -> String {
    let mut line = format!("{} ({})", name, format_file_size(bytes));
    if !name.to_lowercase().ends_with(".apk") {
        line.push_str(" - expected an .apk file");
    }
    line
}

#[component]
pub fn EditorPage() -> impl IntoView {
    let ctx = use_app_context();

    let projects = RwSignal::new(Vec::<ProjectSummary>::new());
    let selected = RwSignal::new(None::<ProjectSummary>);
    let file_info = RwSignal::new(None::<(String, f64)>);

    let upload_busy = RwSignal::new(false);
    let modify_busy = RwSignal::new(false);
    let generate_busy = RwSignal::new(false);
    let ai_busy = RwSignal::new(false);

    // Preview display state; only ever patched, never reset wholesale.
    let preview_color = RwSignal::new("#007bff");
    let preview_message = RwSignal::new(None::<&'static str>);
    let connection_status = RwSignal::new(None::<ConnectionStatus>);

    let gui_text = RwSignal::new(String::new());
    let color_scheme = RwSignal::new(String::new());

    let apply_preview = move || {
        let patch = preview_patch(&gui_text.get_untracked(), &color_scheme.get_untracked());
        if let Some(color) = patch.button_color {
            preview_color.set(color);
        }
        if let Some(message) = patch.message {
            preview_message.set(Some(message));
        }
        if let Some(status) = patch.status {
            connection_status.set(Some(status));
        }
    };

    Effect::new(move || {
        spawn_local(async move {
            match api::list_projects().await {
                Ok(list) => projects.set(list),
                Err(err) => {
                    log::error!("failed to load projects: {err}");
                    ctx.notifications.error("Failed to load project list");
                }
            }
        });
    });

    // Re-run icon substitution whenever a render adds new icon slots.
    Effect::new(move || {
        let _ = projects.get();
        let _ = selected.get();
        icons::remap_feather_icons();
    });

    let file_input = NodeRef::<leptos::html::Input>::new();
    let on_file_change = move |_| {
        let info = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(|file| (file.name(), file.size()));
        file_info.set(info);
    };

    view! {
        <main class="editor-page">
            <header class="page-header">
                <h1>
                    <i data-feather="wand"></i>
                    " APK Studio"
                </h1>
            </header>

            <section class="upload-section">
                <h2>"Upload APK"</h2>
                <form
                    method="post"
                    action="/upload"
                    enctype="multipart/form-data"
                    on:submit=move |_| mark_form_pending(
                        ctx,
                        upload_busy,
                        "Uploading and decompiling APK...",
                    )
                >
                    <input
                        type="file"
                        name="apk_file"
                        accept=".apk"
                        node_ref=file_input
                        on:change=on_file_change
                    />
                    <input type="text" name="project_name" placeholder="Project name (optional)" />
                    <button type="submit" disabled=move || upload_busy.get()>
                        {move || if upload_busy.get() { "Uploading..." } else { "Upload" }}
                    </button>
                </form>
                <div class="file-info">
                    {move || {
                        file_info.get().map(|(name, size)| describe_selected_file(&name, size))
                    }}
                </div>
            </section>

            <section class="projects-section">
                <h2>"Projects"</h2>
                {move || {
                    projects
                        .get()
                        .is_empty()
                        .then(|| view! { <p class="empty-hint">"No projects yet. Upload an APK to get started."</p> })
                }}
                <For
                    each=move || projects.get()
                    key=|p| p.id
                    children=move |project| {
                        view! { <ProjectCard project=project selected=selected /> }
                    }
                />
            </section>

            {move || {
                selected
                    .get()
                    .map(|project| {
                        view! {
                            <section class="project-tools">
                                <h2>
                                    <i data-feather="palette"></i>
                                    {format!(" Modify \"{}\"", project.name)}
                                </h2>
                                <form
                                    method="post"
                                    action=format!("/modify_gui/{}", project.id)
                                    on:submit=move |_| mark_form_pending(
                                        ctx,
                                        modify_busy,
                                        "Applying GUI changes...",
                                    )
                                >
                                    <textarea
                                        name="gui_changes"
                                        rows="4"
                                        placeholder="Describe the GUI changes you want..."
                                        prop:value=move || gui_text.get()
                                        on:input=move |ev| {
                                            gui_text.set(event_target_value(&ev));
                                            apply_preview();
                                        }
                                    ></textarea>
                                    <select
                                        name="color_scheme"
                                        on:change=move |ev| {
                                            color_scheme.set(event_target_value(&ev));
                                            apply_preview();
                                        }
                                    >
                                        <option value="">"Keep current colors"</option>
                                        <option value="blue">"Blue"</option>
                                        <option value="green">"Green"</option>
                                        <option value="red">"Red"</option>
                                        <option value="purple">"Purple"</option>
                                        <option value="orange">"Orange"</option>
                                        <option value="dark">"Dark"</option>
                                        <option value="light">"Light"</option>
                                    </select>
                                    <button type="submit" disabled=move || modify_busy.get()>
                                        {move || {
                                            if modify_busy.get() {
                                                "Applying Changes..."
                                            } else {
                                                "Apply GUI Changes"
                                            }
                                        }}
                                    </button>
                                </form>

                                <form
                                    method="post"
                                    action="/generate_function"
                                    on:submit=move |_| mark_form_pending(
                                        ctx,
                                        generate_busy,
                                        "Generating code...",
                                    )
                                >
                                    <input type="hidden" name="project_id" value=project.id.to_string() />
                                    <textarea
                                        name="function_prompt"
                                        rows="3"
                                        placeholder="Describe the function to generate..."
                                    ></textarea>
                                    <button type="submit" disabled=move || generate_busy.get()>
                                        {move || {
                                            if generate_busy.get() {
                                                "Generating..."
                                            } else {
                                                "Generate Code"
                                            }
                                        }}
                                    </button>
                                </form>
                            </section>

                            <section class="preview-panel">
                                <h2>
                                    <i data-feather="color-palette"></i>
                                    " Live Preview"
                                </h2>
                                <button
                                    class="preview-button"
                                    style=move || {
                                        let color = preview_color.get();
                                        format!(
                                            "background-color: {color}; border-color: {color};",
                                        )
                                    }
                                >
                                    "Preview Button"
                                </button>
                                <p class="preview-text">
                                    {move || {
                                        preview_message
                                            .get()
                                            .unwrap_or("Describe changes to see a preview")
                                    }}
                                </p>
                                <p class="preview-status">
                                    "Status: "
                                    <span>
                                        {move || {
                                            connection_status
                                                .get()
                                                .map(|s| s.label())
                                                .unwrap_or("Unknown")
                                        }}
                                    </span>
                                </p>
                            </section>
                        }
                    })
            }}

            <section class="ai-section">
                <h2>"AI Integration"</h2>
                <button disabled=move || ai_busy.get() on:click=move |_| run_test_ai_job(ctx, ai_busy)>
                    {move || if ai_busy.get() { "Testing..." } else { "Test AI" }}
                </button>
            </section>
        </main>
    }
}

#[component]
fn ProjectCard(project: ProjectSummary, selected: RwSignal<Option<ProjectSummary>>) -> impl IntoView {
    let ctx = use_app_context();
    let busy = RwSignal::new(false);
    let id = project.id;
    let select_target = project.clone();

    view! {
        <div class="project-card">
            <h3>{project.name.clone()}</h3>
            <p class="project-meta">
                {project.original_filename.clone()} ", uploaded "
                {project.uploaded_at.format("%d.%m.%Y %H:%M").to_string()}
            </p>
            <span class="status-badge">{project.status.label()}</span>
            <div class="project-actions">
                <button on:click=move |_| selected.set(Some(select_target.clone()))>"Open"</button>
                <button
                    disabled=move || busy.get()
                    on:click=move |_| run_sign_job(ctx, id.to_string(), busy)
                >
                    {move || if busy.get() { "Signing..." } else { "Sign APK" }}
                </button>
                <button on:click=move |_| copy_to_clipboard(ctx, &id.to_string())>"Copy ID"</button>
                <a
                    class="action-link"
                    href=compile_url(id)
                    on:click=move |_| ctx.overlay.show("Compiling APK...")
                >
                    "Compile"
                </a>
                <a
                    class="action-link"
                    href=download_url(id)
                    on:click=move |_| ctx.notifications.info("Preparing download...")
                >
                    "Download"
                </a>
                <a
                    class="action-link"
                    href=delete_url(id)
                    on:click=move |_| ctx.overlay.show_default()
                >
                    "Delete"
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_sizes_render_in_mebibytes() {
        assert_eq!(format_file_size(1024.0 * 1024.0), "1.00 MiB");
        assert_eq!(format_file_size(52_428_800.0), "50.00 MiB");
    }

    #[test]
    fn project_actions_target_the_server_routes() {
        let id = Uuid::parse_str("6f2a7a3e-24a8-4f7d-9f34-1d1f1c2e5b10").unwrap();
        assert_eq!(
            compile_url(id),
            "/compile/6f2a7a3e-24a8-4f7d-9f34-1d1f1c2e5b10"
        );
        assert_eq!(
            download_url(id),
            "/download/6f2a7a3e-24a8-4f7d-9f34-1d1f1c2e5b10"
        );
        assert_eq!(
            delete_url(id),
            "/delete/6f2a7a3e-24a8-4f7d-9f34-1d1f1c2e5b10"
        );
    }

    #[test]
    fn non_apk_selection_gets_a_warning() {
        let line = describe_selected_file("notes.txt", 1024.0 * 1024.0);
        assert!(line.contains("expected an .apk file"), "{line}");
    }

    #[test]
    fn apk_selection_is_described_plainly() {
        let line = describe_selected_file("My_Game.APK", 2.0 * 1024.0 * 1024.0);
        assert_eq!(line, "My_Game.APK (2.00 MiB)");
    }
}
