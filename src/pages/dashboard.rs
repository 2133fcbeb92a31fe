//! Dashboard overview: aggregate counts, recent activity, quick actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing view. The summary is four independent reads issued
//! concurrently by the API layer; a failure in any one aborts the whole load
//! and the screen falls back to zeroed counts.

use leptos::prelude::*;

use crate::components::stat_card::{StatCard, Trend};
use crate::state::auth::AuthState;
use crate::state::nav::View;
use crate::state::stats::DashboardStats;

/// Dashboard overview screen.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let nav = expect_context::<RwSignal<View>>();

    let stats = LocalResource::new(move || {
        let owner = auth.get().owner_id().map(str::to_owned);
        async move {
            match owner {
                Some(owner) => crate::net::api::load_stats(&owner)
                    .await
                    .unwrap_or_default(),
                None => DashboardStats::default(),
            }
        }
    });

    view! {
        <div class="page dashboard-page">
            <header class="page__header">
                <div>
                    <h2>"Security Dashboard"</h2>
                    <p class="page__subtitle">"Overview of your security posture"</p>
                </div>
            </header>

            <Suspense fallback=move || view! { <p class="page__loading">"Loading overview..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|s| {
                            view! {
                                <div class="dashboard-page__stats">
                                    <StatCard label="Total Projects" value=s.total_projects/>
                                    <StatCard label="Active Scans" value=s.active_scans/>
                                    <StatCard
                                        label="Total Vulnerabilities"
                                        value=s.total_vulnerabilities
                                        trend=s.vulnerabilities_trending_up().then_some(Trend::Up)
                                    />
                                    <StatCard
                                        label="Critical Issues"
                                        value=s.critical_vulnerabilities
                                        trend=Some(
                                            if s.critical_trending_up() { Trend::Up } else { Trend::Down },
                                        )
                                    />
                                </div>

                                <div class="dashboard-page__panels">
                                    <div class="panel">
                                        <h3>"Recent Activity"</h3>
                                        {if s.total_scans == 0 {
                                            view! {
                                                <p class="panel__empty">
                                                    "No recent activity. Start by creating a project."
                                                </p>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <ul class="panel__list">
                                                    <li>
                                                        <span class="panel__item-title">"Scans Completed"</span>
                                                        <span class="panel__item-meta">
                                                            {format!("{} total scans", s.total_scans)}
                                                        </span>
                                                    </li>
                                                    <li>
                                                        <span class="panel__item-title">"Vulnerabilities Found"</span>
                                                        <span class="panel__item-meta">
                                                            {format!("{} issues detected", s.total_vulnerabilities)}
                                                        </span>
                                                    </li>
                                                </ul>
                                            }
                                                .into_any()
                                        }}
                                    </div>

                                    <div class="panel">
                                        <h3>"Quick Actions"</h3>
                                        <div class="panel__actions">
                                            <button class="panel__action" on:click=move |_| nav.set(View::Projects)>
                                                <span class="panel__item-title">"Create New Project"</span>
                                                <span class="panel__item-meta">"Set up a new security project"</span>
                                            </button>
                                            <button class="panel__action" on:click=move |_| nav.set(View::Scans)>
                                                <span class="panel__item-title">"Run Security Scan"</span>
                                                <span class="panel__item-meta">"Start scanning for vulnerabilities"</span>
                                            </button>
                                            <button class="panel__action" on:click=move |_| nav.set(View::Scanners)>
                                                <span class="panel__item-title">"Configure Scanner"</span>
                                                <span class="panel__item-meta">"Add or update scanner integrations"</span>
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
