use crate::domain::a001_asset_category::api::fetch_categories;
use crate::domain::a002_asset_subcategory::api::AssetSubcategoryApi;
use crate::domain::a002_asset_subcategory::ui::details::AssetSubcategoryDetails;
use crate::shared::components::{ListPagination, PageHeader};
use crate::shared::crud_page::{load_options, CrudPage};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    any_field_contains, compare_text, highlight_matches, SearchInput, Searchable, Sortable, SortableHeader,
};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a001_asset_category::aggregate::AssetCategory;
use contracts::domain::a002_asset_subcategory::aggregate::{AssetSubcategory, AssetSubcategoryForm};
use contracts::domain::a002_asset_subcategory::ENTITY_METADATA;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for AssetSubcategory {
    fn matches_filter(&self, filter: &str) -> bool {
        any_field_contains(
            &[&self.name, self.category_name(), self.description.as_deref().unwrap_or("")],
            filter,
        )
    }
}

impl Sortable for AssetSubcategory {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "category" => compare_text(self.category_name(), other.category_name()),
            "description" => compare_text(
                self.description.as_deref().unwrap_or(""),
                other.description.as_deref().unwrap_or(""),
            ),
            _ => compare_text(&self.name, &other.name),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AssetSubcategoryList() -> impl IntoView {
    let api = AssetSubcategoryApi::new();
    let page = CrudPage::new(api, ENTITY_METADATA.ui, "name");
    let categories = RwSignal::new(Vec::<AssetCategory>::new());
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details = move |initial: AssetSubcategoryForm| {
        let title = if initial.id.is_some() { "Edit subcategory" } else { "New subcategory" };
        modal_stack.push(title, move |handle| {
            let on_close = Callback::new(move |_| handle.close());
            view! {
                <AssetSubcategoryDetails
                    page=page
                    initial=initial.clone()
                    categories=categories
                    on_close=on_close
                />
            }
            .into_any()
        });
    };

    // New subcategory starts in the filtered category
    let new_form = move || AssetSubcategoryForm {
        category_id: api.category_filter.get_untracked(),
        ..Default::default()
    };

    let on_category_filter = move |value: String| {
        api.category_filter.set(value);
        page.refresh();
    };

    load_options(categories, "categories", fetch_categories());
    page.refresh();

    view! {
        <div class="page">
            <PageHeader
                title=ENTITY_METADATA.ui.list_name
                icon_name=ENTITY_METADATA.ui.icon
                count=Signal::derive(move || page.filtered_count())
            >
                <button class="button button--primary" on:click=move |_| open_details(new_form())>
                    {icon("plus")}
                    {"New subcategory"}
                </button>
                <button class="button button--secondary" on:click=move |_| page.refresh()>
                    {icon("refresh")}
                    {"Refresh"}
                </button>
            </PageHeader>

            <div class="list-toolbar">
                <select
                    class="list-toolbar__select"
                    on:change=move |ev| on_category_filter(event_target_value(&ev))
                    prop:value=move || api.category_filter.get()
                >
                    <option value="">{"All categories"}</option>
                    {move || categories.get().into_iter().map(|c| {
                        view! { <option value=c.id.to_string()>{c.name}</option> }
                    }).collect_view()}
                </select>
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
                            <SortableHeader label="Category" field="category" view_state=page.view />
                            <SortableHeader label="Description" field="description" view_state=page.view />
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filter = page.filter();
                            page.page_rows().0.into_iter().map(|sub| {
                                let form = AssetSubcategoryForm::from(&sub);
                                let id = sub.id;
                                let name = sub.name.clone();
                                view! {
                                    <tr class="table__row" on:click=move |_| open_details(form.clone())>
                                        <td class="table__cell">{highlight_matches(&sub.name, &filter)}</td>
                                        <td class="table__cell">{highlight_matches(sub.category_name(), &filter)}</td>
                                        <td class="table__cell">
                                            {highlight_matches(sub.description.as_deref().unwrap_or("-"), &filter)}
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
