use super::view_model::{ComponentDetailsViewModel, ComponentRefs};
use crate::domain::a007_asset_component::api::AssetComponentApi;
use crate::shared::crud_page::CrudPage;
use crate::shared::icons::icon;
use contracts::domain::a007_asset_component::form::{ComponentField, ComponentForm};
use leptos::prelude::*;

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)]
    placeholder: &'static str,
    #[prop(optional)]
    input_type: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=input_type.unwrap_or("text")
                id=id
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn ComponentDetails(
    page: CrudPage<AssetComponentApi>,
    refs: ComponentRefs,
    initial: ComponentForm,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = ComponentDetailsViewModel::new(page, refs, initial);
    vm.watch_category();

    let field = move |read: fn(&ComponentForm) -> String| Signal::derive(move || vm.form.with(read));
    let change = move |make: fn(String) -> ComponentField| Callback::new(move |v: String| vm.apply(make(v)));

    view! {
        <div class="details-container component-details">
            <div class="details-form details-form--two-columns">
                <div class="form-group">
                    <label for="component_category">{"Category"}</label>
                    <select
                        id="component_category"
                        prop:value=move || vm.form.with(|f| f.category_id.clone())
                        on:change=move |ev| vm.apply(ComponentField::CategoryId(event_target_value(&ev)))
                    >
                        <option value="">{"Select category"}</option>
                        {move || refs.categories.get().into_iter().map(|c| {
                            let value = c.id.to_string();
                            let selected = vm.form.with_untracked(|f| f.category_id == value);
                            view! { <option value=value selected=selected>{c.name}</option> }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="component_subcategory">{"Subcategory"}</label>
                    <select
                        id="component_subcategory"
                        prop:value=move || vm.form.with(|f| f.subcategory_id.clone())
                        disabled=move || vm.form.with(|f| f.category_id.is_empty()) || vm.subcategories_loading()
                        on:change=move |ev| vm.apply(ComponentField::SubcategoryId(event_target_value(&ev)))
                    >
                        <option value="">
                            {move || if vm.subcategories_loading() { "Loading..." } else { "-" }}
                        </option>
                        {move || vm.subcategory_options().into_iter().map(|s| {
                            let value = s.id.to_string();
                            let selected = vm.form.with_untracked(|f| f.subcategory_id == value);
                            view! { <option value=value selected=selected>{s.name}</option> }
                        }).collect_view()}
                    </select>
                </div>

                <TextField id="component_brand" label="Brand"
                    value=field(|f| f.brand.clone()) on_input=change(ComponentField::Brand) />
                <TextField id="component_model" label="Model"
                    value=field(|f| f.model.clone()) on_input=change(ComponentField::Model) />
                <TextField id="component_serial" label="Serial number"
                    value=field(|f| f.serial_number.clone()) on_input=change(ComponentField::SerialNumber) />
                <TextField id="component_cost" label="Acquisition cost" input_type="number"
                    value=field(|f| f.acq_cost.clone()) on_input=change(ComponentField::AcqCost) />
            </div>

            <fieldset class="details-form details-form--two-columns spec-fields">
                <legend>{"Specifications"}</legend>
                {move || vm.spec_fields().iter().map(|def| {
                    let key = def.key;
                    view! {
                        <TextField
                            id=key
                            label=def.label
                            placeholder=def.placeholder
                            value=Signal::derive(move || vm.spec_value(key))
                            on_input=Callback::new(move |value: String| {
                                vm.apply(ComponentField::Specification { key: key.to_string(), value })
                            })
                        />
                    }
                }).collect_view()}
            </fieldset>

            <div class="details-form">
                <div class="form-group">
                    <label for="component_name">{"Component name"}</label>
                    <input
                        type="text"
                        id="component_name"
                        prop:value=move || vm.form.with(|f| f.component_name.clone())
                        on:input=move |ev| vm.apply(ComponentField::ComponentName(event_target_value(&ev)))
                    />
                    <small class="form-hint">{"Filled in from category, brand and specifications"}</small>
                </div>

                <div class="form-group">
                    <label for="component_vendor">{"Vendor"}</label>
                    <select
                        id="component_vendor"
                        prop:value=move || vm.form.with(|f| f.vendor_id.clone())
                        on:change=move |ev| vm.apply(ComponentField::VendorId(event_target_value(&ev)))
                    >
                        <option value="">{"-"}</option>
                        {move || refs.vendors.get().into_iter().map(|v| {
                            let value = v.id.to_string();
                            let selected = vm.form.with_untracked(|f| f.vendor_id == value);
                            view! { <option value=value selected=selected>{v.name}</option> }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="component_status">{"Status"}</label>
                    <select
                        id="component_status"
                        prop:value=move || vm.form.with(|f| f.status_id.clone())
                        on:change=move |ev| vm.apply(ComponentField::StatusId(event_target_value(&ev)))
                    >
                        <option value="">{"Select status"}</option>
                        {move || refs.statuses.get().into_iter().map(|s| {
                            let value = s.id.to_string();
                            let selected = vm.form.with_untracked(|f| f.status_id == value);
                            view! { <option value=value selected=selected>{s.name}</option> }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="component_remarks">{"Remarks"}</label>
                    <textarea
                        id="component_remarks"
                        rows="2"
                        prop:value=move || vm.form.with(|f| f.remarks.clone())
                        on:input=move |ev| vm.apply(ComponentField::Remarks(event_target_value(&ev)))
                    />
                </div>
            </div>

            <div class="details-actions">
                <button class="button button--primary" on:click=move |_| vm.save_command(on_close)>
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Update" } else { "Add component" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    {icon("x")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
