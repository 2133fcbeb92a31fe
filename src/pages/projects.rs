//! Projects screen: owned projects as cards with a create/edit dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads are scoped to the signed-in owner and re-issued whenever the edit
//! dialog closes, so the list tracks the backend rather than being patched
//! optimistically.

use leptos::prelude::*;

use crate::components::project_modal::ProjectModal;
use crate::net::types::Project;
use crate::state::auth::AuthState;
use crate::util::format::{date_only, url_host};

/// Projects list screen.
#[component]
pub fn ProjectsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let show_modal = RwSignal::new(false);
    let editing = RwSignal::new(None::<Project>);

    // Owned rows, newest first. Read failures are logged by the API layer
    // and the screen falls back to the empty state.
    let projects = LocalResource::new(move || {
        let owner = auth.get().owner_id().map(str::to_owned);
        async move {
            match owner {
                Some(owner) => crate::net::api::fetch_projects(&owner)
                    .await
                    .unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    let on_new = move |_| {
        editing.set(None);
        show_modal.set(true);
    };

    let on_close = Callback::new(move |()| {
        show_modal.set(false);
        editing.set(None);
        projects.refetch();
    });

    view! {
        <div class="page projects-page">
            <header class="page__header">
                <div>
                    <h2>"Projects"</h2>
                    <p class="page__subtitle">"Manage your security projects"</p>
                </div>
                <button class="btn btn--primary" on:click=on_new>
                    "+ New Project"
                </button>
            </header>

            <Suspense fallback=move || view! { <p class="page__loading">"Loading projects..."</p> }>
                {move || {
                    projects
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <div class="empty-state">
                                        <h3>"No projects yet"</h3>
                                        <p>"Get started by creating your first security project"</p>
                                        <button class="btn btn--primary" on:click=on_new>
                                            "Create Your First Project"
                                        </button>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="card-grid">
                                        {list
                                            .into_iter()
                                            .map(|project| {
                                                project_card(project, editing, show_modal)
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <Show when=move || show_modal.get()>
                <ProjectModal project=editing.get() on_close=on_close/>
            </Show>
        </div>
    }
}

/// One clickable project card; clicking opens the edit dialog pre-filled.
fn project_card(
    project: Project,
    editing: RwSignal<Option<Project>>,
    show_modal: RwSignal<bool>,
) -> impl IntoView {
    let for_edit = project.clone();
    let risk_class = format!("badge badge--{}", project.risk_level.as_str());
    let status_class = format!("badge badge--{}", project.status.as_str());
    let description = if project.description.is_empty() {
        "No description provided".to_owned()
    } else {
        project.description.clone()
    };
    let repo_host = url_host(&project.repository_url).map(str::to_owned);
    let scanned = project.last_scan_at.as_ref().map_or_else(
        || "Not scanned yet".to_owned(),
        |at| format!("Scanned {}", date_only(at)),
    );

    view! {
        <div
            class="card card--clickable"
            on:click=move |_| {
                editing.set(Some(for_edit.clone()));
                show_modal.set(true);
            }
        >
            <div class="card__head">
                <h3>{project.name.clone()}</h3>
                <span class=risk_class>{project.risk_level.label()}</span>
            </div>
            <p class="card__description">{description}</p>
            {repo_host.map(|host| view! { <p class="card__meta card__meta--link">{host}</p> })}
            <div class="card__foot">
                <span class="card__meta">{scanned}</span>
                <span class=status_class>{project.status.as_str()}</span>
            </div>
        </div>
    }
}
