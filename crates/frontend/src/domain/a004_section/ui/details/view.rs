use super::view_model::SectionDetailsViewModel;
use crate::domain::a004_section::api::SectionApi;
use crate::shared::crud_page::CrudPage;
use crate::shared::icons::icon;
use contracts::domain::a004_section::aggregate::SectionForm;
use leptos::prelude::*;

#[component]
pub fn SectionDetails(
    page: CrudPage<SectionApi>,
    initial: SectionForm,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = SectionDetailsViewModel::new(page, initial);

    view! {
        <div class="details-container">
            <div class="details-form">
                <div class="form-group">
                    <label for="section_name">{"Name"}</label>
                    <input
                        type="text"
                        id="section_name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        placeholder="e.g. Accounting"
                    />
                </div>

                <div class="form-group">
                    <label for="section_description">{"Description"}</label>
                    <textarea
                        id="section_description"
                        prop:value=move || vm.form.with(|f| f.description.clone())
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                        rows="3"
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
