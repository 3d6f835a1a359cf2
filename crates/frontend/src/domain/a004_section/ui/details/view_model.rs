use contracts::domain::a004_section::aggregate::SectionForm;
use leptos::prelude::*;

use crate::domain::a004_section::api::SectionApi;
use crate::shared::crud_page::CrudPage;

#[derive(Clone, Copy)]
pub struct SectionDetailsViewModel {
    pub form: RwSignal<SectionForm>,
    page: CrudPage<SectionApi>,
}

impl SectionDetailsViewModel {
    pub fn new(page: CrudPage<SectionApi>, initial: SectionForm) -> Self {
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
