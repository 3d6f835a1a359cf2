use crate::shared::components::{PageHeader, StatCard};
use contracts::dashboards::d402_overview::{RECENT_ACTIVITY, STAT_CARDS};
use leptos::prelude::*;

/// Static overview: fixed figures, no backend requests
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    view! {
        <div id="d402_overview--dashboard" data-page-category="dashboard" class="page dashboard">
            <PageHeader title="Overview" icon_name="layout-dashboard" />

            <div class="stat-grid">
                {STAT_CARDS.iter().map(|card| view! {
                    <StatCard
                        label=card.title
                        icon_name=card.icon
                        value=Signal::derive(move || card.value.to_string())
                        subtitle=card.delta.to_string()
                    />
                }).collect_view()}
            </div>

            <section class="dashboard__section">
                <h3 class="dashboard__section-title">{"Recent activity"}</h3>
                <ul class="activity-list">
                    {RECENT_ACTIVITY.iter().map(|item| view! {
                        <li class="activity-list__item">
                            <span class="activity-list__when">{item.when}</span>
                            <span class="activity-list__who">{item.who}</span>
                            <span class="activity-list__action">{item.action}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </section>
        </div>
    }
}
