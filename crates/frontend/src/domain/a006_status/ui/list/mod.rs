use crate::domain::a006_status::api::StatusApi;
use crate::domain::a006_status::ui::details::StatusDetails;
use crate::shared::components::{ColorBadge, ListPagination, PageHeader};
use crate::shared::crud_page::CrudPage;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    any_field_contains, compare_text, SearchInput, Searchable, Sortable, SortableHeader,
};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a006_status::aggregate::{Status, StatusForm};
use contracts::domain::a006_status::ENTITY_METADATA;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for Status {
    fn matches_filter(&self, filter: &str) -> bool {
        any_field_contains(&[&self.name, &self.color], filter)
    }
}

impl Sortable for Status {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "color" => compare_text(&self.color, &other.color),
            _ => compare_text(&self.name, &other.name),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn StatusList() -> impl IntoView {
    let page = CrudPage::new(StatusApi, ENTITY_METADATA.ui, "name");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details = move |initial: StatusForm| {
        let title = if initial.id.is_some() { "Edit status" } else { "New status" };
        modal_stack.push(title, move |handle| {
            let on_close = Callback::new(move |_| handle.close());
            view! { <StatusDetails page=page initial=initial.clone() on_close=on_close /> }.into_any()
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
                <button class="button button--primary" on:click=move |_| open_details(StatusForm::default())>
                    {icon("plus")}
                    {"New status"}
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
                            <SortableHeader label="Status" field="name" view_state=page.view />
                            <SortableHeader label="Color" field="color" view_state=page.view />
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || page.page_rows().0.into_iter().map(|status| {
                            let form = StatusForm::from(&status);
                            let id = status.id;
                            let name = status.name.clone();
                            view! {
                                <tr class="table__row" on:click=move |_| open_details(form.clone())>
                                    <td class="table__cell">
                                        <ColorBadge label=status.name.clone() color=status.color.clone() />
                                    </td>
                                    <td class="table__cell"><code>{status.color.clone()}</code></td>
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
                        }).collect_view()}
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
