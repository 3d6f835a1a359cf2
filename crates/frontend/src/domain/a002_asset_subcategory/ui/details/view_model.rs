use contracts::domain::a002_asset_subcategory::aggregate::AssetSubcategoryForm;
use leptos::prelude::*;

use crate::domain::a002_asset_subcategory::api::AssetSubcategoryApi;
use crate::shared::crud_page::CrudPage;

#[derive(Clone, Copy)]
pub struct AssetSubcategoryDetailsViewModel {
    pub form: RwSignal<AssetSubcategoryForm>,
    page: CrudPage<AssetSubcategoryApi>,
}

impl AssetSubcategoryDetailsViewModel {
    pub fn new(page: CrudPage<AssetSubcategoryApi>, initial: AssetSubcategoryForm) -> Self {
        Self {
            form: RwSignal::new(initial),
            page,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn is_form_valid(&self) -> bool {
        self.form
            .with(|f| !f.category_id.is_empty() && !f.name.trim().is_empty())
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        self.page
            .save(current.id, current.to_payload(), move || on_saved.run(()));
    }
}
