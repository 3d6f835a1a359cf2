use crate::dashboards::d401_software_licenses::api;
use crate::domain::a003_branch::api::fetch_branches;
use crate::shared::components::{format_count, format_percent, PageHeader, StatCard};
use crate::shared::crud_page::load_options;
use crate::shared::icons::icon;
use crate::shared::notifier::{use_notifier, Notifier, NotifyKind};
use crate::shared::query::{always, run_dependent, DependentQuery, FetchOutcome, QueryScheduler};
use chrono::NaiveDate;
use contracts::dashboards::d401_software_licenses::{license_totals, SoftwareLicense};
use contracts::domain::a003_branch::aggregate::Branch;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn format_expiry(license: &SoftwareLicense) -> String {
    license
        .expiry_date
        .map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Software licenses by branch with seat usage and expiry status
#[component]
pub fn SoftwareLicensesDashboard() -> impl IntoView {
    let notifier = use_notifier();
    let branches = RwSignal::new(Vec::<Branch>::new());
    let branch_id = RwSignal::new(String::new());
    let licenses = RwSignal::new(QueryScheduler::<String, SoftwareLicense>::new());
    let reload = RwSignal::new(0u32);

    load_options(branches, "branches", fetch_branches());

    // "" = все филиалы, поэтому запрос разрешён для любого значения
    Effect::new(move |_| {
        reload.track();
        let query = DependentQuery::new(branch_id.get(), always);
        spawn_local(async move {
            let outcome = run_dependent(&licenses, query, |id| async move { api::fetch_licenses(&id).await }).await;
            if let Some(FetchOutcome::Failed(e)) = outcome {
                log::error!("Failed to load software licenses: {}", e);
                notifier.notify(NotifyKind::Error, &e.display_message("Failed to load software licenses"));
            }
        });
    });

    let refresh = move |_| {
        licenses.update(|q| q.reset());
        reload.update(|n| *n += 1);
    };

    let totals = Memo::new(move |_| licenses.with(|q| license_totals(q.data(), today())));

    view! {
        <div id="d401_software_licenses--dashboard" data-page-category="dashboard" class="page dashboard">
            <PageHeader title="Software licenses">
                <select
                    class="form__select"
                    prop:value=move || branch_id.get()
                    on:change=move |ev| branch_id.set(event_target_value(&ev))
                >
                    <option value="">{"All branches"}</option>
                    {move || branches.get().into_iter().map(|b| view! {
                        <option value=b.id.to_string()>{b.branch_name}</option>
                    }).collect_view()}
                </select>
                <button class="button button--secondary" on:click=refresh>
                    {icon("refresh")}
                    {"Refresh"}
                </button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Seats"
                    icon_name="key"
                    value=Signal::derive(move || format_count(totals.get().seats))
                />
                <StatCard
                    label="Used seats"
                    icon_name="users"
                    value=Signal::derive(move || format_count(totals.get().used_seats))
                />
                <StatCard
                    label="Expiring soon"
                    icon_name="alert-triangle"
                    value=Signal::derive(move || totals.get().expiring.to_string())
                />
                <StatCard
                    label="Expired"
                    icon_name="x"
                    value=Signal::derive(move || totals.get().expired.to_string())
                />
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Software"}</th>
                            <th class="table__header-cell">{"Branch"}</th>
                            <th class="table__header-cell table__header-cell--right">{"Seats"}</th>
                            <th class="table__header-cell table__header-cell--right">{"Used"}</th>
                            <th class="table__header-cell table__header-cell--right">{"Available"}</th>
                            <th class="table__header-cell table__header-cell--right">{"Utilisation"}</th>
                            <th class="table__header-cell">{"Expires"}</th>
                            <th class="table__header-cell">{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let today = today();
                            licenses.with(|q| q.data().to_vec()).into_iter().map(|l| {
                                let status = l.expiry_status(today);
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{l.software_name.clone()}</td>
                                        <td class="table__cell">{l.branch_name().to_string()}</td>
                                        <td class="table__cell table__cell--right">{l.seats}</td>
                                        <td class="table__cell table__cell--right">{l.used_seats}</td>
                                        <td class="table__cell table__cell--right">{l.available_seats()}</td>
                                        <td class="table__cell table__cell--right">{format_percent(l.utilisation())}</td>
                                        <td class="table__cell">{format_expiry(&l)}</td>
                                        <td class="table__cell">
                                            <span class=status.css_class()>{status.label()}</span>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || licenses.with(|q| q.is_loading())>
                    <div class="table__loading">{"Loading..."}</div>
                </Show>
                <Show when=move || licenses.with(|q| !q.is_loading() && q.data().is_empty())>
                    <div class="table__empty">{"No licenses"}</div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_expiry() {
        let mut license = SoftwareLicense {
            id: 1,
            software_name: "Office".into(),
            license_key: None,
            seats: 10,
            used_seats: 4,
            expiry_date: None,
            branch: None,
        };
        assert_eq!(format_expiry(&license), "-");
        license.expiry_date = NaiveDate::from_ymd_opt(2025, 3, 9);
        assert_eq!(format_expiry(&license), "09.03.2025");
    }
}
