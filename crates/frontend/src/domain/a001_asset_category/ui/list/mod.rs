use crate::domain::a001_asset_category::api::AssetCategoryApi;
use crate::domain::a001_asset_category::ui::details::AssetCategoryDetails;
use crate::shared::components::{ListPagination, PageHeader};
use crate::shared::crud_page::CrudPage;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    any_field_contains, compare_text, highlight_matches, SearchInput, Searchable, Sortable, SortableHeader,
};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a001_asset_category::aggregate::{AssetCategory, AssetCategoryForm};
use contracts::domain::a001_asset_category::ENTITY_METADATA;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for AssetCategory {
    fn matches_filter(&self, filter: &str) -> bool {
        any_field_contains(&[&self.name, self.description.as_deref().unwrap_or("")], filter)
    }
}

impl Sortable for AssetCategory {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "description" => compare_text(
                self.description.as_deref().unwrap_or(""),
                other.description.as_deref().unwrap_or(""),
            ),
            "id" => self.id.cmp(&other.id),
            _ => compare_text(&self.name, &other.name),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AssetCategoryList() -> impl IntoView {
    let page = CrudPage::new(AssetCategoryApi, ENTITY_METADATA.ui, "name");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details = move |initial: AssetCategoryForm| {
        let title = if initial.id.is_some() { "Edit category" } else { "New category" };
        modal_stack.push(title, move |handle| {
            let on_close = Callback::new(move |_| handle.close());
            view! { <AssetCategoryDetails page=page initial=initial.clone() on_close=on_close /> }
                .into_any()
        });
    };

    page.refresh();

    view! {
        <div class="page">
            <PageHeader
                title=ENTITY_METADATA.ui.list_name
                icon_name=ENTITY_METADATA.ui.icon
                count=Signal::derive(move || page.filtered_count())
            >
                <button class="button button--primary" on:click=move |_| open_details(AssetCategoryForm::default())>
                    {icon("plus")}
                    {"New category"}
                </button>
                <button class="button button--secondary" on:click=move |_| page.refresh()>
                    {icon("refresh")}
                    {"Refresh"}
                </button>
            </PageHeader>

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
                            <SortableHeader label="Name" field="name" view_state=page.view />
                            <SortableHeader label="Description" field="description" view_state=page.view />
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filter = page.filter();
                            page.page_rows().0.into_iter().map(|category| {
                                let form = AssetCategoryForm::from(&category);
                                let id = category.id;
                                let name = category.name.clone();
                                view! {
                                    <tr class="table__row" on:click=move |_| open_details(form.clone())>
                                        <td class="table__cell">{highlight_matches(&category.name, &filter)}</td>
                                        <td class="table__cell">
                                            {highlight_matches(category.description.as_deref().unwrap_or("-"), &filter)}
                                        </td>
                                        <td class="table__cell table__cell--actions">
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
            </div>

            <ListPagination view_state=page.view total_count=Signal::derive(move || page.filtered_count()) />
        </div>
    }
}
