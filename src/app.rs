//! Root application component: identity gate plus in-memory view switcher.
//!
//! ARCHITECTURE
//! ============
//! The shell holds exactly two pieces of shared state, the session identity
//! and the active view. While identity is unresolved it renders a spinner;
//! signed out it renders the login screen; otherwise the sidebar plus the
//! one active list screen. There is no router and no persisted URL state.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::sidebar::Sidebar;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::projects::ProjectsPage;
use crate::pages::scanners::ScannersPage;
use crate::pages::scans::ScansPage;
use crate::pages::vulnerabilities::VulnerabilitiesPage;
use crate::state::auth::AuthState;
use crate::state::nav::View;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let nav = RwSignal::new(View::default());
    provide_context(auth);
    provide_context(nav);

    // Resolve the session identity once on startup.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let profile = crate::net::api::fetch_current_profile().await;
            auth.set(AuthState {
                profile,
                loading: false,
            });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/securehub.css"/>
        <Title text="SecureHub"/>

        <Show
            when=move || !auth.get().loading
            fallback=|| {
                view! {
                    <div class="app-loading">
                        <div class="spinner"></div>
                    </div>
                }
            }
        >
            <Show when=move || auth.get().profile.is_some() fallback=|| view! { <LoginPage/> }>
                <div class="app-shell">
                    <Sidebar/>
                    <main class="app-shell__main">
                        {move || match nav.get() {
                            View::Dashboard => view! { <DashboardPage/> }.into_any(),
                            View::Projects => view! { <ProjectsPage/> }.into_any(),
                            View::Scanners => view! { <ScannersPage/> }.into_any(),
                            View::Scans => view! { <ScansPage/> }.into_any(),
                            View::Vulnerabilities => view! { <VulnerabilitiesPage/> }.into_any(),
                        }}
                    </main>
                </div>
            </Show>
        </Show>
    }
}
