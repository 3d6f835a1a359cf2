use crate::domain::a004_section::api::SectionApi;
use crate::domain::a004_section::ui::details::SectionDetails;
use crate::shared::components::{ListPagination, PageHeader};
use crate::shared::crud_page::CrudPage;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    any_field_contains, compare_text, highlight_matches, SearchInput, Searchable, Sortable, SortableHeader,
};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a004_section::aggregate::{Section, SectionForm};
use contracts::domain::a004_section::ENTITY_METADATA;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for Section {
    fn matches_filter(&self, filter: &str) -> bool {
        any_field_contains(&[&self.name, self.description.as_deref().unwrap_or("")], filter)
    }
}

impl Sortable for Section {
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
pub fn SectionList() -> impl IntoView {
    let page = CrudPage::new(SectionApi, ENTITY_METADATA.ui, "name");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details = move |initial: SectionForm| {
        let title = if initial.id.is_some() { "Edit section" } else { "New section" };
        modal_stack.push(title, move |handle| {
            let on_close = Callback::new(move |_| handle.close());
            view! { <SectionDetails page=page initial=initial.clone() on_close=on_close /> }
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
                <button class="button button--primary" on:click=move |_| open_details(SectionForm::default())>
                    {icon("plus")}
                    {"New section"}
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
                            page.page_rows().0.into_iter().map(|section| {
                                let form = SectionForm::from(&section);
                                let id = section.id;
                                let name = section.name.clone();
                                view! {
                                    <tr class="table__row" on:click=move |_| open_details(form.clone())>
                                        <td class="table__cell">{highlight_matches(&section.name, &filter)}</td>
                                        <td class="table__cell">
                                            {highlight_matches(section.description.as_deref().unwrap_or("-"), &filter)}
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
