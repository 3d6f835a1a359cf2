use crate::domain::a010_equipment::api::fetch_equipment;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{ListPagination, PageHeader};
use crate::shared::config::config;
use crate::shared::crud::{load_list, ListState};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    any_field_contains, compare_text, highlight_matches, ListView, SearchInput, Searchable, Sortable,
    SortableHeader,
};
use crate::shared::notifier::use_notifier;
use contracts::domain::a010_equipment::aggregate::Equipment;
use contracts::domain::a010_equipment::ENTITY_METADATA;
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen_futures::spawn_local;

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

impl Searchable for Equipment {
    fn matches_filter(&self, filter: &str) -> bool {
        any_field_contains(
            &[&self.name, text(&self.category), text(&self.branch), text(&self.assigned_to)],
            filter,
        )
    }
}

impl Sortable for Equipment {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "category" => compare_text(text(&self.category), text(&other.category)),
            "branch" => compare_text(text(&self.branch), text(&other.branch)),
            "assigned_to" => compare_text(text(&self.assigned_to), text(&other.assigned_to)),
            "id" => self.id.cmp(&other.id),
            _ => compare_text(&self.name, &other.name),
        }
    }
}

/// Реестр оборудования (только чтение); строка открывает компоненты актива
#[component]
#[allow(non_snake_case)]
pub fn EquipmentList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notifier = use_notifier();
    let state = RwSignal::new(ListState::<Equipment>::default());
    let view_state = RwSignal::new(ListView::new("name", config().ui.page_size()));

    let fetch = move || {
        spawn_local(async move {
            let failed = format!("Failed to load {}", ENTITY_METADATA.ui.list_name.to_lowercase());
            load_list(fetch_equipment(), &notifier, &state, &failed).await;
        });
    };

    let rows = Memo::new(move |_| state.with(|s| view_state.with(|v| v.page_of(&s.items))));

    fetch();

    view! {
        <div class="page">
            <PageHeader
                title=ENTITY_METADATA.ui.list_name
                icon_name=ENTITY_METADATA.ui.icon
                subtitle="Click a row to manage its components".to_string()
            >
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    {"Refresh"}
                </button>
            </PageHeader>

            <div class="list-toolbar">
                <SearchInput
                    value=Signal::derive(move || view_state.with(|v| v.filter.clone()))
                    on_change=Callback::new(move |f| view_state.update(|v| v.set_filter(f)))
                />
            </div>

            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SortableHeader label="#" field="id" view_state=view_state />
                            <SortableHeader label="Name" field="name" view_state=view_state />
                            <SortableHeader label="Category" field="category" view_state=view_state />
                            <SortableHeader label="Branch" field="branch" view_state=view_state />
                            <SortableHeader label="Assigned to" field="assigned_to" view_state=view_state />
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filter = view_state.with(|v| v.filter.clone());
                            rows.get().0.into_iter().map(|item| {
                                let id = item.id;
                                view! {
                                    <tr class="table__row" on:click=move |_| tabs_store.open_asset_components(id)>
                                        <td class="table__cell">{id}</td>
                                        <td class="table__cell">{highlight_matches(&item.name, &filter)}</td>
                                        <td class="table__cell">{highlight_matches(text(&item.category), &filter)}</td>
                                        <td class="table__cell">{highlight_matches(text(&item.branch), &filter)}</td>
                                        <td class="table__cell">{highlight_matches(text(&item.assigned_to), &filter)}</td>
                                        <td class="table__cell table__cell--actions">{icon("chevron-right")}</td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || state.with(|s| s.loading)>
                    <div class="table__loading">{"Loading..."}</div>
                </Show>
            </div>

            <ListPagination view_state=view_state total_count=Signal::derive(move || rows.get().1) />
        </div>
    }
}
