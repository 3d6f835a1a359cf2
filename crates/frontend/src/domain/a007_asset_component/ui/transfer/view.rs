use super::view_model::TransferViewModel;
use crate::domain::a007_asset_component::api::AssetComponentApi;
use crate::shared::crud_page::CrudPage;
use crate::shared::icons::icon;
use contracts::domain::a005_employee::aggregate::Employee;
use leptos::prelude::*;

#[component]
pub fn TransferDialog(
    page: CrudPage<AssetComponentApi>,
    component_id: i64,
    #[prop(into)]
    component_name: String,
    /// Current holder, excluded from the targets
    current_employee_id: Option<i64>,
    #[prop(into)]
    employees: Signal<Vec<Employee>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = TransferViewModel::new(page, component_id);

    view! {
        <div class="details-container transfer-dialog">
            <p class="transfer-dialog__subject">{icon("transfer")}{component_name}</p>

            <div class="details-form">
                <div class="form-group">
                    <label for="transfer_employee">{"Transfer to"}</label>
                    <select
                        id="transfer_employee"
                        prop:value=move || vm.form.with(|f| f.to_employee_id.clone())
                        on:change=move |ev| vm.form.update(|f| f.to_employee_id = event_target_value(&ev))
                    >
                        <option value="">{"Select employee"}</option>
                        {move || employees.get().into_iter()
                            .filter(|e| Some(e.id) != current_employee_id)
                            .map(|e| {
                                let label = if e.branch_name().is_empty() {
                                    e.fullname.clone()
                                } else {
                                    format!("{} ({})", e.fullname, e.branch_name())
                                };
                                view! { <option value=e.id.to_string()>{label}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="transfer_reason">{"Reason"}</label>
                    <input
                        type="text"
                        id="transfer_reason"
                        prop:value=move || vm.form.with(|f| f.reason.clone())
                        on:input=move |ev| vm.form.update(|f| f.reason = event_target_value(&ev))
                        placeholder="e.g. Replacement"
                    />
                </div>

                <div class="form-group">
                    <label for="transfer_remarks">{"Remarks"}</label>
                    <textarea
                        id="transfer_remarks"
                        rows="2"
                        prop:value=move || vm.form.with(|f| f.remarks.clone())
                        on:input=move |ev| vm.form.update(|f| f.remarks = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.transfer_command(on_close)
                    disabled=move || !vm.is_form_valid()
                >
                    {icon("transfer")}
                    {"Transfer"}
                </button>
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    {icon("x")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
