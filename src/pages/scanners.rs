//! Scanners screen: owned scanner integrations with a create/edit dialog.

use leptos::prelude::*;

use crate::components::scanner_modal::ScannerModal;
use crate::net::types::Scanner;
use crate::state::auth::AuthState;
use crate::util::format::date_only;

/// Scanners list screen.
#[component]
pub fn ScannersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let show_modal = RwSignal::new(false);
    let editing = RwSignal::new(None::<Scanner>);

    let scanners = LocalResource::new(move || {
        let owner = auth.get().owner_id().map(str::to_owned);
        async move {
            match owner {
                Some(owner) => crate::net::api::fetch_scanners(&owner)
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
        scanners.refetch();
    });

    view! {
        <div class="page scanners-page">
            <header class="page__header">
                <div>
                    <h2>"Security Scanners"</h2>
                    <p class="page__subtitle">"Manage your security scanner integrations"</p>
                </div>
                <button class="btn btn--primary" on:click=on_new>
                    "+ Add Scanner"
                </button>
            </header>

            <Suspense fallback=move || view! { <p class="page__loading">"Loading scanners..."</p> }>
                {move || {
                    scanners
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <div class="empty-state">
                                        <h3>"No scanners configured"</h3>
                                        <p>"Add your first security scanner to start scanning"</p>
                                        <button class="btn btn--primary" on:click=on_new>
                                            "Configure Scanner"
                                        </button>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="card-grid">
                                        {list
                                            .into_iter()
                                            .map(|scanner| {
                                                scanner_card(scanner, editing, show_modal)
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
                <ScannerModal scanner=editing.get() on_close=on_close/>
            </Show>
        </div>
    }
}

/// One clickable scanner card; clicking opens the edit dialog pre-filled.
fn scanner_card(
    scanner: Scanner,
    editing: RwSignal<Option<Scanner>>,
    show_modal: RwSignal<bool>,
) -> impl IntoView {
    let for_edit = scanner.clone();
    let kind_class = format!("badge badge--kind-{}", scanner.kind.as_str().to_lowercase());
    let status_class = format!("card__status card__status--{}", scanner.status.as_str());
    let last_connected = scanner
        .last_connected_at
        .as_ref()
        .map(|at| format!("Last connected: {}", date_only(at)));

    view! {
        <div
            class="card card--clickable"
            on:click=move |_| {
                editing.set(Some(for_edit.clone()));
                show_modal.set(true);
            }
        >
            <div class="card__head">
                <h3>{scanner.name.clone()}</h3>
                <span class=kind_class>{scanner.kind.as_str()}</span>
            </div>
            <div class="card__rows">
                <div class="card__row">
                    <span>"Vendor:"</span>
                    <span class="card__row-value">{scanner.vendor.clone()}</span>
                </div>
                <div class="card__row">
                    <span>"Status:"</span>
                    <span class=status_class>{scanner.status.as_str()}</span>
                </div>
            </div>
            {last_connected.map(|text| view! { <p class="card__meta">{text}</p> })}
        </div>
    }
}
