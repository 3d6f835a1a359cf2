use contracts::domain::a006_status::aggregate::{StatusForm, DEFAULT_STATUS_COLOR};
use contracts::shared::validation::hex_color;
use leptos::prelude::*;

use crate::domain::a006_status::api::StatusApi;
use crate::shared::crud_page::CrudPage;

#[derive(Clone, Copy)]
pub struct StatusDetailsViewModel {
    pub form: RwSignal<StatusForm>,
    page: CrudPage<StatusApi>,
}

impl StatusDetailsViewModel {
    pub fn new(page: CrudPage<StatusApi>, initial: StatusForm) -> Self {
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

    /// Swatch shown next to the input while the typed value is incomplete
    pub fn preview_color(&self) -> String {
        self.form
            .with(|f| hex_color(&f.color).unwrap_or_else(|_| DEFAULT_STATUS_COLOR.to_string()))
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        self.page
            .save(current.id, current.to_payload(), move || on_saved.run(()));
    }
}
