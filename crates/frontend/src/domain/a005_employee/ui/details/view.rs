use super::view_model::EmployeeDetailsViewModel;
use crate::domain::a005_employee::api::EmployeeApi;
use crate::shared::crud_page::CrudPage;
use crate::shared::icons::icon;
use contracts::domain::a003_branch::aggregate::Branch;
use contracts::domain::a004_section::aggregate::Section;
use contracts::domain::a005_employee::aggregate::EmployeeForm;
use leptos::prelude::*;

#[component]
pub fn EmployeeDetails(
    page: CrudPage<EmployeeApi>,
    initial: EmployeeForm,
    #[prop(into)]
    branches: Signal<Vec<Branch>>,
    /// Departments are sections
    #[prop(into)]
    sections: Signal<Vec<Section>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = EmployeeDetailsViewModel::new(page, initial);

    view! {
        <div class="details-container">
            <div class="details-form">
                <div class="form-group">
                    <label for="employee_fullname">{"Full name"}</label>
                    <input
                        type="text"
                        id="employee_fullname"
                        prop:value=move || vm.form.with(|f| f.fullname.clone())
                        on:input=move |ev| vm.form.update(|f| f.fullname = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="employee_branch">{"Branch"}</label>
                    <select
                        id="employee_branch"
                        prop:value=move || vm.form.with(|f| f.branch_id.clone())
                        on:change=move |ev| vm.form.update(|f| f.branch_id = event_target_value(&ev))
                    >
                        <option value="">{"Select branch"}</option>
                        {move || branches.get().into_iter().map(|b| {
                            let value = b.id.to_string();
                            let selected = vm.form.with_untracked(|f| f.branch_id == value);
                            view! { <option value=value selected=selected>{b.branch_name}</option> }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="employee_department">{"Department"}</label>
                    <select
                        id="employee_department"
                        prop:value=move || vm.form.with(|f| f.department_id.clone())
                        on:change=move |ev| vm.form.update(|f| f.department_id = event_target_value(&ev))
                    >
                        <option value="">{"-"}</option>
                        {move || sections.get().into_iter().map(|s| {
                            let value = s.id.to_string();
                            let selected = vm.form.with_untracked(|f| f.department_id == value);
                            view! { <option value=value selected=selected>{s.name}</option> }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="employee_position">{"Position id"}</label>
                    <input
                        type="number"
                        min="1"
                        id="employee_position"
                        prop:value=move || vm.form.with(|f| f.position_id.clone())
                        on:input=move |ev| vm.form.update(|f| f.position_id = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save_command(on_close)
                    disabled=move || !vm.is_form_valid()
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Update" } else { "Create" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    {icon("x")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
