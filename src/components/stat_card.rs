//! Dashboard stat card with an optional trend hint.

use leptos::prelude::*;

/// Direction hint shown under a stat value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    /// The number is moving the wrong way.
    Up,
    /// The number is improving.
    Down,
}

/// One aggregate count on the dashboard overview.
#[component]
pub fn StatCard(
    label: &'static str,
    value: u64,
    #[prop(optional_no_strip)] trend: Option<Trend>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-card__label">{label}</p>
            <p class="stat-card__value">{value}</p>
            {trend.map(|t| match t {
                Trend::Up => view! {
                    <p class="stat-card__trend stat-card__trend--up">"Needs attention"</p>
                },
                Trend::Down => view! {
                    <p class="stat-card__trend stat-card__trend--down">"Improving"</p>
                },
            })}
        </div>
    }
}
