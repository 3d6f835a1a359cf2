use contracts::domain::a003_branch::aggregate::BranchForm;
use leptos::prelude::*;

use crate::domain::a003_branch::api::BranchApi;
use crate::shared::crud_page::CrudPage;

#[derive(Clone, Copy)]
pub struct BranchDetailsViewModel {
    pub form: RwSignal<BranchForm>,
    page: CrudPage<BranchApi>,
}

impl BranchDetailsViewModel {
    pub fn new(page: CrudPage<BranchApi>, initial: BranchForm) -> Self {
        Self {
            form: RwSignal::new(initial),
            page,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| !f.branch_name.trim().is_empty())
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        self.page
            .save(current.id, current.to_payload(), move || on_saved.run(()));
    }
}
