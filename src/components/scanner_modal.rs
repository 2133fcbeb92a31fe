//! Create/edit dialog for scanner integrations.
//!
//! The vendor choices are derived from the chosen scanner kind; switching
//! kind resets the vendor so a stale (kind, vendor) pair cannot be submitted.

#[cfg(test)]
#[path = "scanner_modal_test.rs"]
mod scanner_modal_test;

use leptos::prelude::*;

use crate::net::types::{
    NewScanner, Scanner, ScannerChanges, ScannerKind, ScannerStatus,
};
use crate::state::auth::AuthState;
use crate::util::vendors::vendors_for;

/// Transient draft backing the scanner form fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScannerDraft {
    pub name: String,
    pub kind: ScannerKind,
    pub vendor: String,
    pub api_url: String,
    pub api_key: String,
    pub status: ScannerStatus,
}

impl ScannerDraft {
    /// Seed the draft from the row being edited, or defaults when creating.
    pub fn seeded(scanner: Option<&Scanner>) -> Self {
        match scanner {
            Some(s) => Self {
                name: s.name.clone(),
                kind: s.kind,
                vendor: s.vendor.clone(),
                api_url: s.api_url.clone(),
                api_key: s.api_key.clone(),
                status: s.status,
            },
            None => Self::default(),
        }
    }

    /// Switch scanner kind, resetting the vendor when the kind changes so
    /// the form can only submit vendors belonging to the current kind.
    pub fn set_kind(&mut self, kind: ScannerKind) {
        if kind != self.kind {
            self.kind = kind;
            self.vendor.clear();
        }
    }

    /// Insert payload carrying the owning identity explicitly.
    pub fn insert_payload(&self, owner_id: &str) -> NewScanner {
        NewScanner {
            name: self.name.clone(),
            kind: self.kind,
            vendor: self.vendor.clone(),
            api_url: self.api_url.clone(),
            api_key: self.api_key.clone(),
            status: self.status,
            owner_id: owner_id.to_owned(),
        }
    }

    /// Update payload; `updated_at` is injected by the caller.
    pub fn update_payload(&self, updated_at: &str) -> ScannerChanges {
        ScannerChanges {
            name: self.name.clone(),
            kind: self.kind,
            vendor: self.vendor.clone(),
            api_url: self.api_url.clone(),
            api_key: self.api_key.clone(),
            status: self.status,
            updated_at: updated_at.to_owned(),
        }
    }
}

/// Modal dialog for creating or editing a scanner integration.
#[component]
pub fn ScannerModal(scanner: Option<Scanner>, on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let is_edit = scanner.is_some();
    let draft = RwSignal::new(ScannerDraft::seeded(scanner.as_ref()));
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let editing = scanner;
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
                    (Some(scanner), _) => {
                        let changes = draft_now.update_payload(&crate::util::clock::now_iso());
                        crate::net::api::update_scanner(&scanner.id, &changes).await
                    }
                    (None, Some(owner)) => {
                        crate::net::api::create_scanner(&draft_now.insert_payload(&owner)).await
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
                    <h3>{if is_edit { "Edit Scanner" } else { "Add New Scanner" }}</h3>
                    <button class="dialog__close" on:click=move |_| on_close.run(())>
                        "\u{00d7}"
                    </button>
                </div>

                <form class="dialog__body" on:submit=on_submit>
                    <Show when=move || error.get().is_some()>
                        <div class="dialog__error">{move || error.get().unwrap_or_default()}</div>
                    </Show>

                    <label class="dialog__label">
                        "Scanner Name *"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            placeholder="Production SAST Scanner"
                            prop:value=move || draft.get().name
                            on:input=move |ev| {
                                draft.update(|d| d.name = event_target_value(&ev));
                            }
                        />
                    </label>

                    <div class="dialog__row">
                        <label class="dialog__label">
                            "Scanner Type *"
                            <select
                                class="dialog__input"
                                prop:value=move || draft.get().kind.as_str()
                                on:change=move |ev| {
                                    draft.update(|d| {
                                        d.set_kind(ScannerKind::from_value(&event_target_value(&ev)));
                                    });
                                }
                            >
                                {ScannerKind::ALL
                                    .into_iter()
                                    .map(|k| view! { <option value=k.as_str()>{k.as_str()}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>

                        <label class="dialog__label">
                            "Vendor *"
                            <select
                                class="dialog__input"
                                required
                                prop:value=move || draft.get().vendor
                                on:change=move |ev| {
                                    draft.update(|d| d.vendor = event_target_value(&ev));
                                }
                            >
                                <option value="">"Select vendor"</option>
                                {move || {
                                    vendors_for(draft.get().kind)
                                        .iter()
                                        .map(|v| view! { <option value=*v>{*v}</option> })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                        </label>
                    </div>

                    <label class="dialog__label">
                        "API URL"
                        <input
                            class="dialog__input"
                            type="url"
                            placeholder="https://scanner-api.example.com"
                            prop:value=move || draft.get().api_url
                            on:input=move |ev| {
                                draft.update(|d| d.api_url = event_target_value(&ev));
                            }
                        />
                    </label>

                    <label class="dialog__label">
                        "API Key"
                        <input
                            class="dialog__input"
                            type="password"
                            placeholder="Enter API key"
                            prop:value=move || draft.get().api_key
                            on:input=move |ev| {
                                draft.update(|d| d.api_key = event_target_value(&ev));
                            }
                        />
                        <span class="dialog__hint">"Keep your API keys secure"</span>
                    </label>

                    <label class="dialog__label">
                        "Status"
                        <select
                            class="dialog__input"
                            prop:value=move || draft.get().status.as_str()
                            on:change=move |ev| {
                                draft.update(|d| {
                                    d.status = ScannerStatus::from_value(&event_target_value(&ev));
                                });
                            }
                        >
                            {ScannerStatus::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>

                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                            {move || {
                                if submitting.get() {
                                    "Saving..."
                                } else if is_edit {
                                    "Update Scanner"
                                } else {
                                    "Add Scanner"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
