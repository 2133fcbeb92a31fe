//! Create/edit dialog for projects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened by the projects screen with the row being edited, or with nothing
//! for a new project. On success the close callback fires and the parent
//! refetches; failures stay inline and the form remains editable.

#[cfg(test)]
#[path = "project_modal_test.rs"]
mod project_modal_test;

use leptos::prelude::*;

use crate::net::types::{
    NewProject, Project, ProjectChanges, ProjectStatus, RiskLevel,
};
use crate::state::auth::AuthState;

/// Transient draft backing the project form fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub repository_url: String,
    pub status: ProjectStatus,
    pub risk_level: RiskLevel,
}

impl ProjectDraft {
    /// Seed the draft from the row being edited, or defaults when creating.
    pub fn seeded(project: Option<&Project>) -> Self {
        match project {
            Some(p) => Self {
                name: p.name.clone(),
                description: p.description.clone(),
                repository_url: p.repository_url.clone(),
                status: p.status,
                risk_level: p.risk_level,
            },
            None => Self::default(),
        }
    }

    /// Insert payload carrying the owning identity explicitly.
    pub fn insert_payload(&self, owner_id: &str) -> NewProject {
        NewProject {
            name: self.name.clone(),
            description: self.description.clone(),
            repository_url: self.repository_url.clone(),
            status: self.status,
            risk_level: self.risk_level,
            owner_id: owner_id.to_owned(),
        }
    }

    /// Update payload; `updated_at` is injected by the caller.
    pub fn update_payload(&self, updated_at: &str) -> ProjectChanges {
        ProjectChanges {
            name: self.name.clone(),
            description: self.description.clone(),
            repository_url: self.repository_url.clone(),
            status: self.status,
            risk_level: self.risk_level,
            updated_at: updated_at.to_owned(),
        }
    }
}

/// Modal dialog for creating or editing a project.
#[component]
pub fn ProjectModal(project: Option<Project>, on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let is_edit = project.is_some();
    let draft = RwSignal::new(ProjectDraft::seeded(project.as_ref()));
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let editing = project;
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        {
            let draft_now = draft.get_untracked();
            let editing = editing.clone();
            let owner = auth.get_untracked().owner_id().map(str::to_owned);
            leptos::task::spawn_local(async move {
                let result = match (&editing, owner) {
                    (Some(project), _) => {
                        let changes = draft_now.update_payload(&crate::util::clock::now_iso());
                        crate::net::api::update_project(&project.id, &changes).await
                    }
                    (None, Some(owner)) => {
                        crate::net::api::create_project(&draft_now.insert_payload(&owner)).await
                    }
                    (None, None) => Err("no signed-in user".to_owned()),
                };
                submitting.set(false);
                match result {
                    Ok(()) => on_close.run(()),
                    Err(message) => error.set(Some(message)),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&editing, &auth);
            submitting.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--form" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h3>{if is_edit { "Edit Project" } else { "Create New Project" }}</h3>
                    <button class="dialog__close" on:click=move |_| on_close.run(())>
                        "\u{00d7}"
                    </button>
                </div>

                <form class="dialog__body" on:submit=on_submit>
                    <Show when=move || error.get().is_some()>
                        <div class="dialog__error">{move || error.get().unwrap_or_default()}</div>
                    </Show>

                    <label class="dialog__label">
                        "Project Name *"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            placeholder="My Security Project"
                            prop:value=move || draft.get().name
                            on:input=move |ev| {
                                draft.update(|d| d.name = event_target_value(&ev));
                            }
                        />
                    </label>

                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__input"
                            rows="3"
                            placeholder="Brief description of your project..."
                            prop:value=move || draft.get().description
                            on:input=move |ev| {
                                draft.update(|d| d.description = event_target_value(&ev));
                            }
                        ></textarea>
                    </label>

                    <label class="dialog__label">
                        "Repository URL"
                        <input
                            class="dialog__input"
                            type="url"
                            placeholder="https://github.com/username/repo"
                            prop:value=move || draft.get().repository_url
                            on:input=move |ev| {
                                draft.update(|d| d.repository_url = event_target_value(&ev));
                            }
                        />
                    </label>

                    <div class="dialog__row">
                        <label class="dialog__label">
                            "Status"
                            <select
                                class="dialog__input"
                                prop:value=move || draft.get().status.as_str()
                                on:change=move |ev| {
                                    draft.update(|d| {
                                        d.status = ProjectStatus::from_value(&event_target_value(&ev));
                                    });
                                }
                            >
                                {ProjectStatus::ALL
                                    .into_iter()
                                    .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>

                        <label class="dialog__label">
                            "Risk Level"
                            <select
                                class="dialog__input"
                                prop:value=move || draft.get().risk_level.as_str()
                                on:change=move |ev| {
                                    draft.update(|d| {
                                        d.risk_level = RiskLevel::from_value(&event_target_value(&ev));
                                    });
                                }
                            >
                                {RiskLevel::ALL
                                    .into_iter()
                                    .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                    </div>

                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                            {move || {
                                if submitting.get() {
                                    "Saving..."
                                } else if is_edit {
                                    "Update Project"
                                } else {
                                    "Create Project"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
