//! Vulnerabilities screen: findings across all visible projects with a
//! severity/status filter.

use leptos::prelude::*;

use crate::net::types::Vulnerability;
use crate::util::filters::VulnFilter;
use crate::util::format::date_only;

/// Vulnerabilities list screen.
#[component]
pub fn VulnerabilitiesPage() -> impl IntoView {
    let filter = RwSignal::new(VulnFilter::default());

    // The resource tracks the filter signal, so changing the select control
    // re-issues the read with the new server-side clause.
    let vulnerabilities = LocalResource::new(move || {
        let active = filter.get();
        async move {
            crate::net::api::fetch_vulnerabilities(active)
                .await
                .unwrap_or_default()
        }
    });

    view! {
        <div class="page vulnerabilities-page">
            <header class="page__header">
                <div>
                    <h2>"Vulnerabilities"</h2>
                    <p class="page__subtitle">"Security findings across all projects"</p>
                </div>
                <select
                    class="page__filter"
                    prop:value=move || filter.get().value()
                    on:change=move |ev| {
                        filter.set(VulnFilter::from_value(&event_target_value(&ev)));
                    }
                >
                    {VulnFilter::ALL
                        .into_iter()
                        .map(|f| view! { <option value=f.value()>{f.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </header>

            <Suspense fallback=move || {
                view! { <p class="page__loading">"Loading vulnerabilities..."</p> }
            }>
                {move || {
                    vulnerabilities
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <div class="empty-state">
                                        <h3>"No vulnerabilities found"</h3>
                                        <p>{filter.get().empty_message()}</p>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="vuln-list">
                                        {list
                                            .into_iter()
                                            .map(vuln_card)
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// One finding card.
fn vuln_card(vuln: Vulnerability) -> impl IntoView {
    let severity_class = format!("badge badge--{}", vuln.severity.as_str());
    let cve = (!vuln.cve_id.is_empty()).then(|| vuln.cve_id.clone());
    let cwe = (!vuln.cwe_id.is_empty()).then(|| vuln.cwe_id.clone());
    let location = (!vuln.file_path.is_empty()).then(|| match vuln.line_number {
        Some(line) => format!("{}:{line}", vuln.file_path),
        None => vuln.file_path.clone(),
    });
    let detected = date_only(&vuln.created_at).to_owned();

    view! {
        <div class="card vuln-card">
            <div class="card__head">
                <h3>{vuln.title.clone()}</h3>
                <span class=severity_class>{vuln.severity.label().to_uppercase()}</span>
            </div>
            <p class="card__description">{vuln.description.clone()}</p>
            <div class="vuln-card__facts">
                {cve.map(|id| view! {
                    <div class="vuln-card__fact">
                        <span class="vuln-card__fact-label">"CVE ID"</span>
                        <span>{id}</span>
                    </div>
                })}
                {cwe.map(|id| view! {
                    <div class="vuln-card__fact">
                        <span class="vuln-card__fact-label">"CWE ID"</span>
                        <span>{id}</span>
                    </div>
                })}
                <div class="vuln-card__fact">
                    <span class="vuln-card__fact-label">"Status"</span>
                    <span>{vuln.status.label()}</span>
                </div>
                <div class="vuln-card__fact">
                    <span class="vuln-card__fact-label">"Detected"</span>
                    <span>{detected}</span>
                </div>
            </div>
            {location.map(|loc| view! { <p class="vuln-card__location">{loc}</p> })}
        </div>
    }
}
