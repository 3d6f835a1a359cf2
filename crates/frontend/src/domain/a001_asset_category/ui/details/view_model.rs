use contracts::domain::a001_asset_category::aggregate::AssetCategoryForm;
use leptos::prelude::*;

use crate::domain::a001_asset_category::api::AssetCategoryApi;
use crate::shared::crud_page::CrudPage;

/// ViewModel for the asset category form
#[derive(Clone, Copy)]
pub struct AssetCategoryDetailsViewModel {
    pub form: RwSignal<AssetCategoryForm>,
    page: CrudPage<AssetCategoryApi>,
}

impl AssetCategoryDetailsViewModel {
    pub fn new(page: CrudPage<AssetCategoryApi>, initial: AssetCategoryForm) -> Self {
        Self {
            form: RwSignal::new(initial),
            page,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| !f.name.trim().is_empty())
    }

    /// Validate, send, refetch the list; `on_saved` closes the modal
    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        self.page
            .save(current.id, current.to_payload(), move || on_saved.run(()));
    }
}
