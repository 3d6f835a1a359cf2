use super::view_model::AssetSubcategoryDetailsViewModel;
use crate::domain::a002_asset_subcategory::api::AssetSubcategoryApi;
use crate::shared::crud_page::CrudPage;
use crate::shared::icons::icon;
use contracts::domain::a001_asset_category::aggregate::AssetCategory;
use contracts::domain::a002_asset_subcategory::aggregate::AssetSubcategoryForm;
use leptos::prelude::*;

#[component]
pub fn AssetSubcategoryDetails(
    page: CrudPage<AssetSubcategoryApi>,
    initial: AssetSubcategoryForm,
    /// Options of the category select
    #[prop(into)]
    categories: Signal<Vec<AssetCategory>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = AssetSubcategoryDetailsViewModel::new(page, initial);

    view! {
        <div class="details-container">
            <div class="details-form">
                <div class="form-group">
                    <label for="subcategory_category">{"Category"}</label>
                    <select
                        id="subcategory_category"
                        prop:value=move || vm.form.with(|f| f.category_id.clone())
                        on:change=move |ev| vm.form.update(|f| f.category_id = event_target_value(&ev))
                    >
                        <option value="">{"Select category"}</option>
                        {move || categories.get().into_iter().map(|c| {
                            let value = c.id.to_string();
                            let selected = vm.form.with_untracked(|f| f.category_id == value);
                            view! { <option value=value selected=selected>{c.name}</option> }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="subcategory_name">{"Name"}</label>
                    <input
                        type="text"
                        id="subcategory_name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        placeholder="e.g. Business laptop"
                    />
                </div>

                <div class="form-group">
                    <label for="subcategory_description">{"Description"}</label>
                    <textarea
                        id="subcategory_description"
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
