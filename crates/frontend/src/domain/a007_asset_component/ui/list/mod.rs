use crate::domain::a007_asset_component::api::AssetComponentApi;
use crate::domain::a007_asset_component::ui::details::{ComponentDetails, ComponentRefs};
use crate::domain::a007_asset_component::ui::transfer::TransferDialog;
use crate::domain::a008_asset::api::fetch_asset;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::asset_components_key;
use crate::shared::api_utils::ApiError;
use crate::shared::components::{format_optional_money, ColorBadge, ListPagination};
use crate::shared::crud_page::CrudPage;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    any_field_contains, compare_text, highlight_matches, SearchInput, Searchable, Sortable, SortableHeader,
};
use crate::shared::modal_stack::{ModalStackService, MODAL_WIDE};
use crate::shared::notifier::{use_notifier, Notifier, NotifyKind};
use contracts::domain::a007_asset_component::aggregate::AssetComponent;
use contracts::domain::a007_asset_component::form::ComponentForm;
use contracts::domain::a007_asset_component::ENTITY_METADATA;
use contracts::domain::a008_asset::aggregate::Asset;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen_futures::spawn_local;

impl Searchable for AssetComponent {
    fn matches_filter(&self, filter: &str) -> bool {
        any_field_contains(
            &[
                &self.component_name,
                self.category_name(),
                self.brand.as_deref().unwrap_or(""),
                self.model.as_deref().unwrap_or(""),
                self.serial_number.as_deref().unwrap_or(""),
                self.assigned_to(),
            ],
            filter,
        )
    }
}

impl Sortable for AssetComponent {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "category" => compare_text(self.category_name(), other.category_name()),
            "status" => compare_text(self.status_name(), other.status_name()),
            "assigned_to" => compare_text(self.assigned_to(), other.assigned_to()),
            "serial_number" => compare_text(
                self.serial_number.as_deref().unwrap_or(""),
                other.serial_number.as_deref().unwrap_or(""),
            ),
            "acq_cost" => self
                .acq_cost
                .unwrap_or(0.0)
                .total_cmp(&other.acq_cost.unwrap_or(0.0)),
            _ => compare_text(&self.component_name, &other.component_name),
        }
    }
}

fn or_dash(value: &str) -> String {
    if value.is_empty() { "-".to_string() } else { value.to_string() }
}

/// Компоненты одного актива: список, добавление, редактирование, передача
#[component]
#[allow(non_snake_case)]
pub fn AssetComponentsPage(asset_id: i64, on_close: Callback<()>) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let notifier = use_notifier();

    let page = CrudPage::new(AssetComponentApi::new(asset_id), ENTITY_METADATA.ui, "component_name");
    let refs = ComponentRefs::new();
    let asset = RwSignal::new(None::<Asset>);

    let load_asset = move || {
        spawn_local(async move {
            match fetch_asset(asset_id).await {
                Ok(a) => {
                    let title = format!("Components · {}", a.asset_name);
                    tabs_store.update_tab_title(&asset_components_key(asset_id), &title);
                    let _ = asset.try_set(Some(a));
                }
                Err(ApiError::Http { status: 404 }) => {
                    notifier.notify(NotifyKind::Error, &format!("Asset #{} not found", asset_id));
                    on_close.run(());
                }
                Err(e) => {
                    notifier.notify(NotifyKind::Error, &e.display_message("Failed to load asset"));
                }
            }
        });
    };

    let open_form = move |initial: ComponentForm| {
        let title = if initial.is_edit() { "Edit component" } else { "Add component" };
        modal_stack.push_with_style(title, MODAL_WIDE, move |handle| {
            let on_close = Callback::new(move |_| handle.close());
            view! { <ComponentDetails page=page refs=refs initial=initial.clone() on_close=on_close /> }
                .into_any()
        });
    };

    let open_transfer = move |component: AssetComponent| {
        modal_stack.push("Transfer component", move |handle| {
            let on_close = Callback::new(move |_| handle.close());
            view! {
                <TransferDialog
                    page=page
                    component_id=component.id
                    component_name=component.component_name.clone()
                    current_employee_id=component.employee_id
                    employees=refs.employees
                    on_close=on_close
                />
            }
            .into_any()
        });
    };

    load_asset();
    refs.load();
    page.refresh();

    let header_title = move || {
        asset.with(|a| match a {
            Some(a) => a.asset_name.clone(),
            None => format!("Asset #{}", asset_id),
        })
    };

    view! {
        <div class="page">
            <div class="page-header">
                <div class="page-header__content">
                    <div class="page-header__text">
                        <h1 class="page-header__title">{header_title}</h1>
                        <div class="page-header__subtitle">
                            {move || asset.with(|a| {
                                a.as_ref()
                                    .and_then(|a| a.serial_number.clone())
                                    .map(|sn| format!("S/N {}", sn))
                                    .unwrap_or_default()
                            })}
                        </div>
                    </div>
                </div>
                <div class="page-header__actions">
                    <button class="button button--primary" on:click=move |_| open_form(ComponentForm::default())>
                        {icon("plus")}
                        {"Add component"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| page.refresh()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| on_close.run(())>
                        {icon("x")}
                        {"Close"}
                    </button>
                </div>
            </div>

            <div class="list-toolbar">
                <SearchInput
                    value=Signal::derive(move || page.filter())
                    on_change=Callback::new(move |f| page.set_filter(f))
                />
            </div>

            {move || page.error().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SortableHeader label="Component" field="component_name" view_state=page.view />
                            <SortableHeader label="Category" field="category" view_state=page.view />
                            <SortableHeader label="Serial number" field="serial_number" view_state=page.view />
                            <SortableHeader label="Status" field="status" view_state=page.view />
                            <SortableHeader label="Assigned to" field="assigned_to" view_state=page.view />
                            <SortableHeader label="Cost" field="acq_cost" view_state=page.view />
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filter = page.filter();
                            page.page_rows().0.into_iter().map(|component| {
                                let form = ComponentForm::from(&component);
                                let for_transfer = component.clone();
                                let id = component.id;
                                let name = component.component_name.clone();
                                let status = component.status.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{highlight_matches(&component.component_name, &filter)}</td>
                                        <td class="table__cell">{or_dash(component.category_name())}</td>
                                        <td class="table__cell">
                                            {highlight_matches(component.serial_number.as_deref().unwrap_or("-"), &filter)}
                                        </td>
                                        <td class="table__cell">
                                            {status.map(|s| view! {
                                                <ColorBadge label=s.name color=s.color.unwrap_or_else(|| "#6B7280".to_string()) />
                                            })}
                                        </td>
                                        <td class="table__cell">{or_dash(component.assigned_to())}</td>
                                        <td class="table__cell table__cell--number">
                                            {format_optional_money(component.acq_cost)}
                                        </td>
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--icon" title="Edit"
                                                on:click=move |_| open_form(form.clone())>
                                                {icon("edit")}
                                            </button>
                                            <button class="button button--icon" title="Transfer"
                                                on:click=move |_| open_transfer(for_transfer.clone())>
                                                {icon("transfer")}
                                            </button>
                                            <button
                                                class="button button--icon button--danger"
                                                title="Delete"
                                                on:click=move |ev: MouseEvent| {
                                                    ev.stop_propagation();
                                                    page.delete(id, name.clone());
                                                }
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || page.is_loading()>
                    <div class="table__loading">{"Loading..."}</div>
                </Show>
                <Show when=move || !page.is_loading() && page.filtered_count() == 0>
                    <div class="table__empty">{"No components yet"}</div>
                </Show>
            </div>

            <ListPagination view_state=page.view total_count=Signal::derive(move || page.filtered_count()) />
        </div>
    }
}
