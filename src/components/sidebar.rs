//! Navigation sidebar: view switcher, brand block, and sign-out.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::nav::View;

/// Sidebar listing every view plus the sign-out action.
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let active = expect_context::<RwSignal<View>>();

    let display_name = move || {
        auth.get()
            .profile
            .as_ref()
            .map_or_else(String::new, |p| p.display_name().to_owned())
    };

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::sign_out().await;
                auth.set(AuthState {
                    profile: None,
                    loading: false,
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = auth;
        }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__logo">"\u{1f6e1}"</span>
                <div>
                    <h1 class="sidebar__title">"SecureHub"</h1>
                    <p class="sidebar__subtitle">"Security Platform"</p>
                </div>
            </div>

            <nav class="sidebar__nav">
                {View::ALL
                    .into_iter()
                    .map(|item| {
                        view! {
                            <button
                                class=move || {
                                    if active.get() == item {
                                        "sidebar__item sidebar__item--active"
                                    } else {
                                        "sidebar__item"
                                    }
                                }
                                on:click=move |_| active.set(item)
                            >
                                {item.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="sidebar__footer">
                <span class="sidebar__user">{display_name}</span>
                <button class="sidebar__item sidebar__item--signout" on:click=on_sign_out>
                    "Sign Out"
                </button>
            </div>
        </aside>
    }
}
