use crate::dashboards::d400_monthly_expenses::api::{self, ExpenseReport};
use crate::shared::components::{format_money, format_percent, PageHeader, StatCard};
use crate::shared::icons::icon;
use contracts::dashboards::d400_monthly_expenses::{
    available_years, breakdown_shares, filter_by_year, month_label, summarize, ExpenseSummary, ExpenseTrend,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Высота столбика в процентах от максимального значения
fn bar_height(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

fn parse_year(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

#[component]
fn TrendChart(trends: Vec<ExpenseTrend>) -> impl IntoView {
    let max = trends.iter().map(|t| t.total).fold(0.0_f64, f64::max);

    view! {
        <div class="bar-chart">
            {trends.into_iter().map(|t| {
                let style = format!("height: {:.1}%;", bar_height(t.total, max));
                let tooltip = format!("{}: {}", month_label(&t.month), format_money(t.total));
                view! {
                    <div class="bar-chart__column" title=tooltip>
                        <div class="bar-chart__bar" style=style></div>
                        <div class="bar-chart__label">{month_label(&t.month)}</div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

/// Monthly expenses: totals, trend chart, breakdown by category and the per-month table
#[component]
pub fn MonthlyExpensesDashboard() -> impl IntoView {
    let report = RwSignal::new(None::<ExpenseReport>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let selected_year = RwSignal::new(None::<i32>);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::get_expense_report().await {
                Ok(data) => {
                    let _ = report.try_set(Some(data));
                }
                Err(e) => {
                    log::error!("Failed to load expense report: {}", e);
                    let _ = set_error.try_set(Some(e.display_message("Failed to load expense report")));
                }
            }
            let _ = set_loading.try_set(false);
        });
    };

    Effect::new(move |_| load());

    let summary = Memo::new(move |_| report.with(|r| r.as_ref().map(|r| summarize(&r.trends))));
    let years = Memo::new(move |_| {
        report.with(|r| r.as_ref().map(|r| available_years(&r.monthly)).unwrap_or_default())
    });

    let stat = move |pick: fn(&ExpenseSummary) -> String| {
        Signal::derive(move || summary.get().map(|s| pick(&s)).unwrap_or_else(|| "-".to_string()))
    };

    view! {
        <div id="d400_monthly_expenses--dashboard" data-page-category="dashboard" class="page dashboard">
            <PageHeader title="Monthly expenses">
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    {"Refresh"}
                </button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show when=move || loading.get()>
                <div class="dashboard__loading">{"Loading..."}</div>
            </Show>

            <div class="stat-grid">
                <StatCard label="Total spent" icon_name="bar-chart" value=stat(|s| format_money(s.grand_total)) />
                <StatCard
                    label="Average per month"
                    icon_name="layers"
                    value=stat(|s| format_money(s.average_per_month))
                />
                <StatCard
                    label="Peak month"
                    icon_name="alert-triangle"
                    value=stat(|s| s.peak_month.as_deref().map(month_label).unwrap_or_else(|| "-".to_string()))
                    subtitle=Signal::derive(move || summary.get().map(|s| format_money(s.peak_total)))
                />
            </div>

            <section class="dashboard__section">
                <h3 class="dashboard__section-title">{"Expense trend"}</h3>
                {move || report.with(|r| match r {
                    Some(r) if !r.trends.is_empty() => view! { <TrendChart trends=r.trends.clone() /> }.into_any(),
                    _ => view! { <div class="dashboard__empty">{"No data"}</div> }.into_any(),
                })}
            </section>

            <section class="dashboard__section">
                <h3 class="dashboard__section-title">{"By category"}</h3>
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Category"}</th>
                                <th class="table__header-cell table__header-cell--right">{"Total"}</th>
                                <th class="table__header-cell table__header-cell--right">{"Share"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let shares = report.with(|r| r.as_ref().map(|r| breakdown_shares(&r.breakdown)).unwrap_or_default());
                                shares.into_iter().map(|s| view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{s.category}</td>
                                        <td class="table__cell table__cell--right">{format_money(s.total)}</td>
                                        <td class="table__cell table__cell--right">{format_percent(s.percent)}</td>
                                    </tr>
                                }).collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </section>

            <section class="dashboard__section">
                <div class="dashboard__section-header">
                    <h3 class="dashboard__section-title">{"Monthly expenses"}</h3>
                    <select
                        class="form__select"
                        prop:value=move || selected_year.get().map(|y| y.to_string()).unwrap_or_default()
                        on:change=move |ev| selected_year.set(parse_year(&event_target_value(&ev)))
                    >
                        <option value="">{"All years"}</option>
                        {move || years.get().into_iter().map(|y| view! {
                            <option value=y.to_string()>{y.to_string()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Month"}</th>
                                <th class="table__header-cell">{"Category"}</th>
                                <th class="table__header-cell table__header-cell--right">{"Amount"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let year = selected_year.get();
                                let rows = report.with(|r| r.as_ref().map(|r| filter_by_year(&r.monthly, year)).unwrap_or_default());
                                rows.into_iter().map(|row| view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{month_label(&row.month)}</td>
                                        <td class="table__cell">{row.category}</td>
                                        <td class="table__cell table__cell--right">{format_money(row.amount)}</td>
                                    </tr>
                                }).collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_height() {
        assert_eq!(bar_height(50.0, 200.0), 25.0);
        assert_eq!(bar_height(200.0, 200.0), 100.0);
        assert_eq!(bar_height(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_parse_year_empty_means_all() {
        assert_eq!(parse_year("2024"), Some(2024));
        assert_eq!(parse_year(""), None);
    }
}
