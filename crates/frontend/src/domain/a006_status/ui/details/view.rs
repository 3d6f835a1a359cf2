use super::view_model::StatusDetailsViewModel;
use crate::domain::a006_status::api::StatusApi;
use crate::shared::crud_page::CrudPage;
use crate::shared::icons::icon;
use contracts::domain::a006_status::aggregate::StatusForm;
use leptos::prelude::*;

#[component]
pub fn StatusDetails(page: CrudPage<StatusApi>, initial: StatusForm, on_close: Callback<()>) -> impl IntoView {
    let vm = StatusDetailsViewModel::new(page, initial);

    view! {
        <div class="details-container">
            <div class="details-form">
                <div class="form-group">
                    <label for="status_name">{"Name"}</label>
                    <input
                        type="text"
                        id="status_name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        placeholder="e.g. In use"
                    />
                </div>

                <div class="form-group">
                    <label for="status_color">{"Color"}</label>
                    <div class="color-input">
                        <span
                            class="color-input__swatch"
                            style=move || format!("background: {};", vm.preview_color())
                        ></span>
                        <input
                            type="text"
                            id="status_color"
                            maxlength="7"
                            prop:value=move || vm.form.with(|f| f.color.clone())
                            on:input=move |ev| vm.form.update(|f| f.color = event_target_value(&ev))
                            placeholder="#3B82F6"
                        />
                    </div>
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
