use crate::domain::a003_branch::api::fetch_branches;
use crate::domain::a004_section::api::fetch_sections;
use crate::domain::a005_employee::api::EmployeeApi;
use crate::domain::a005_employee::ui::details::EmployeeDetails;
use crate::shared::components::{ListPagination, PageHeader};
use crate::shared::crud_page::{load_options, CrudPage};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    any_field_contains, compare_text, highlight_matches, SearchInput, Searchable, Sortable, SortableHeader,
};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a003_branch::aggregate::Branch;
use contracts::domain::a004_section::aggregate::Section;
use contracts::domain::a005_employee::aggregate::{Employee, EmployeeForm};
use contracts::domain::a005_employee::ENTITY_METADATA;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for Employee {
    fn matches_filter(&self, filter: &str) -> bool {
        any_field_contains(
            &[&self.fullname, self.branch_name(), self.department_name(), self.position_title()],
            filter,
        )
    }
}

impl Sortable for Employee {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "branch" => compare_text(self.branch_name(), other.branch_name()),
            "department" => compare_text(self.department_name(), other.department_name()),
            "position" => compare_text(self.position_title(), other.position_title()),
            _ => compare_text(&self.fullname, &other.fullname),
        }
    }
}

/// Branch select value: "" keeps everyone
fn in_branch(employee: &Employee, branch_filter: &str) -> bool {
    branch_filter.is_empty() || employee.branch_id.to_string() == branch_filter
}

fn or_dash(value: &str) -> String {
    if value.is_empty() { "-".to_string() } else { value.to_string() }
}

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    let page = CrudPage::new(EmployeeApi, ENTITY_METADATA.ui, "fullname");
    let branches = RwSignal::new(Vec::<Branch>::new());
    let sections = RwSignal::new(Vec::<Section>::new());
    let branch_filter = RwSignal::new(String::new());
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details = move |initial: EmployeeForm| {
        let title = if initial.id.is_some() { "Edit employee" } else { "New employee" };
        modal_stack.push(title, move |handle| {
            let on_close = Callback::new(move |_| handle.close());
            view! {
                <EmployeeDetails
                    page=page
                    initial=initial.clone()
                    branches=branches
                    sections=sections
                    on_close=on_close
                />
            }
            .into_any()
        });
    };

    let rows = Memo::new(move |_| {
        let branch = branch_filter.get();
        page.page_rows_where(|e| in_branch(e, &branch))
    });

    load_options(branches, "branches", fetch_branches());
    load_options(sections, "sections", fetch_sections());
    page.refresh();

    view! {
        <div class="page">
            <PageHeader
                title=ENTITY_METADATA.ui.list_name
                icon_name=ENTITY_METADATA.ui.icon
                count=Signal::derive(move || rows.get().1)
            >
                <button class="button button--primary" on:click=move |_| open_details(EmployeeForm::default())>
                    {icon("plus")}
                    {"New employee"}
                </button>
                <button class="button button--secondary" on:click=move |_| page.refresh()>
                    {icon("refresh")}
                    {"Refresh"}
                </button>
            </PageHeader>

            <div class="list-toolbar">
                <select
                    class="list-toolbar__select"
                    prop:value=move || branch_filter.get()
                    on:change=move |ev| {
                        branch_filter.set(event_target_value(&ev));
                        page.view.update(|v| v.page = 0);
                    }
                >
                    <option value="">{"All branches"}</option>
                    {move || branches.get().into_iter().map(|b| {
                        view! { <option value=b.id.to_string()>{b.branch_name}</option> }
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
                            <SortableHeader label="Full name" field="fullname" view_state=page.view />
                            <SortableHeader label="Branch" field="branch" view_state=page.view />
                            <SortableHeader label="Department" field="department" view_state=page.view />
                            <SortableHeader label="Position" field="position" view_state=page.view />
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filter = page.filter();
                            rows.get().0.into_iter().map(|employee| {
                                let form = EmployeeForm::from(&employee);
                                let id = employee.id;
                                let name = employee.fullname.clone();
                                view! {
                                    <tr class="table__row" on:click=move |_| open_details(form.clone())>
                                        <td class="table__cell">{highlight_matches(&employee.fullname, &filter)}</td>
                                        <td class="table__cell">{or_dash(employee.branch_name())}</td>
                                        <td class="table__cell">{or_dash(employee.department_name())}</td>
                                        <td class="table__cell">{or_dash(employee.position_title())}</td>
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

            <ListPagination view_state=page.view total_count=Signal::derive(move || rows.get().1) />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::ListView;

    fn employee(id: i64, name: &str, branch_id: i64) -> Employee {
        Employee {
            id,
            fullname: name.into(),
            branch_id,
            department_id: None,
            position_id: None,
            branch: None,
            department: None,
            position: None,
        }
    }

    #[test]
    fn test_branch_filter_then_search() {
        let items = vec![
            employee(1, "Dana Cruz", 1),
            employee(2, "Dan Reyes", 2),
            employee(3, "Ana Lim", 2),
        ];
        let in_north: Vec<Employee> = items.into_iter().filter(|e| in_branch(e, "2")).collect();
        assert_eq!(in_north.len(), 2);

        let mut view = ListView::new("fullname", 10);
        view.set_filter("dan".into());
        let (rows, count) = view.page_of(&in_north);
        assert_eq!(count, 1);
        assert_eq!(rows[0].fullname, "Dan Reyes");
    }

    #[test]
    fn test_empty_branch_keeps_everyone() {
        assert!(in_branch(&employee(1, "A", 7), ""));
        assert!(!in_branch(&employee(1, "A", 7), "8"));
    }
}
