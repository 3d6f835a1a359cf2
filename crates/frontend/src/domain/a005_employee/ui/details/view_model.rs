use contracts::domain::a005_employee::aggregate::EmployeeForm;
use leptos::prelude::*;

use crate::domain::a005_employee::api::EmployeeApi;
use crate::shared::crud_page::CrudPage;

#[derive(Clone, Copy)]
pub struct EmployeeDetailsViewModel {
    pub form: RwSignal<EmployeeForm>,
    page: CrudPage<EmployeeApi>,
}

impl EmployeeDetailsViewModel {
    pub fn new(page: CrudPage<EmployeeApi>, initial: EmployeeForm) -> Self {
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
            .with(|f| !f.fullname.trim().is_empty() && !f.branch_id.is_empty())
    }

    /// Position and department ids are checked by `to_payload`
    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        self.page
            .save(current.id, current.to_payload(), move || on_saved.run(()));
    }
}
