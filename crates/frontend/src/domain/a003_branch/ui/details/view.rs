use super::view_model::BranchDetailsViewModel;
use crate::domain::a003_branch::api::BranchApi;
use crate::shared::crud_page::CrudPage;
use crate::shared::icons::icon;
use contracts::domain::a003_branch::aggregate::BranchForm;
use leptos::prelude::*;

#[component]
pub fn BranchDetails(page: CrudPage<BranchApi>, initial: BranchForm, on_close: Callback<()>) -> impl IntoView {
    let vm = BranchDetailsViewModel::new(page, initial);

    view! {
        <div class="details-container">
            <div class="details-form">
                <div class="form-group">
                    <label for="branch_name">{"Branch name"}</label>
                    <input
                        type="text"
                        id="branch_name"
                        prop:value=move || vm.form.with(|f| f.branch_name.clone())
                        on:input=move |ev| vm.form.update(|f| f.branch_name = event_target_value(&ev))
                        placeholder="e.g. Head office"
                    />
                </div>

                <div class="form-group">
                    <label for="branch_address">{"Address"}</label>
                    <textarea
                        id="branch_address"
                        prop:value=move || vm.form.with(|f| f.address.clone())
                        on:input=move |ev| vm.form.update(|f| f.address = event_target_value(&ev))
                        rows="2"
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
