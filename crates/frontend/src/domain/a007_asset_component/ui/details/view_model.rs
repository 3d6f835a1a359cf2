use contracts::domain::a001_asset_category::aggregate::AssetCategory;
use contracts::domain::a002_asset_subcategory::aggregate::AssetSubcategory;
use contracts::domain::a005_employee::aggregate::Employee;
use contracts::domain::a006_status::aggregate::Status;
use contracts::domain::a007_asset_component::aggregate::ComponentPayload;
use contracts::domain::a007_asset_component::form::{ComponentField, ComponentForm};
use contracts::domain::a007_asset_component::naming::{NamingLookup, SpecFieldDef, SpecProfile};
use contracts::domain::a007_asset_component::specifications::spec_text;
use contracts::domain::a009_vendor::aggregate::Vendor;
use contracts::shared::validation::ValidationError;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_asset_category::api::{fetch_categories, fetch_subcategories_of};
use crate::domain::a005_employee::api::fetch_employees;
use crate::domain::a006_status::api::fetch_statuses;
use crate::domain::a007_asset_component::api::AssetComponentApi;
use crate::domain::a009_vendor::api::fetch_vendors;
use crate::shared::crud_page::{load_options, CrudPage};
use crate::shared::notifier::{use_notifier, BrowserNotifier, Notifier, NotifyKind};
use crate::shared::query::{non_empty_key, run_dependent, DependentQuery, FetchOutcome, QueryScheduler};

/// Reference lists shared by every form of one components page
#[derive(Clone, Copy)]
pub struct ComponentRefs {
    pub categories: RwSignal<Vec<AssetCategory>>,
    pub vendors: RwSignal<Vec<Vendor>>,
    pub statuses: RwSignal<Vec<Status>>,
    pub employees: RwSignal<Vec<Employee>>,
}

impl ComponentRefs {
    pub fn new() -> Self {
        Self {
            categories: RwSignal::new(Vec::new()),
            vendors: RwSignal::new(Vec::new()),
            statuses: RwSignal::new(Vec::new()),
            employees: RwSignal::new(Vec::new()),
        }
    }

    pub fn load(&self) {
        load_options(self.categories, "categories", fetch_categories());
        load_options(self.vendors, "vendors", fetch_vendors());
        load_options(self.statuses, "statuses", fetch_statuses());
        load_options(self.employees, "employees", fetch_employees());
    }
}

/// Spec profile of the category with id `category_id` (text from the select)
fn profile_for(categories: &[AssetCategory], category_id: &str) -> SpecProfile {
    SpecProfile::for_category(NamingLookup::new(categories, &[]).category_name(category_id))
}

/// Create or update payload, depending on the form mode
pub fn component_payload(form: &ComponentForm, asset_id: i64) -> Result<ComponentPayload, ValidationError> {
    if form.is_edit() {
        form.to_update_payload()
    } else {
        form.to_create_payload(asset_id)
    }
}

#[derive(Clone, Copy)]
pub struct ComponentDetailsViewModel {
    pub form: RwSignal<ComponentForm>,
    /// Options of the subcategory select, keyed by the selected category
    pub subcategories: RwSignal<QueryScheduler<String, AssetSubcategory>>,
    pub refs: ComponentRefs,
    /// Spec input set; changes only with the category, not with every keystroke
    pub spec_profile: Memo<SpecProfile>,
    page: CrudPage<AssetComponentApi>,
    notifier: BrowserNotifier,
}

impl ComponentDetailsViewModel {
    pub fn new(page: CrudPage<AssetComponentApi>, refs: ComponentRefs, initial: ComponentForm) -> Self {
        let form = RwSignal::new(initial);
        let category_id = Memo::new(move |_| form.with(|f| f.category_id.clone()));
        let spec_profile = Memo::new(move |_| {
            let id = category_id.get();
            refs.categories.with(|categories| profile_for(categories, &id))
        });
        Self {
            form,
            subcategories: RwSignal::new(QueryScheduler::new()),
            refs,
            spec_profile,
            page,
            notifier: use_notifier(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit())
    }

    /// Apply one operator edit. Subcategory reset and the derived name
    /// happen in the same update.
    pub fn apply(&self, change: ComponentField) {
        let form = self.form;
        let subcategories = self.subcategories;
        self.refs.categories.with_untracked(|categories| {
            subcategories.with_untracked(|subs| {
                let lookup = NamingLookup::new(categories, subs.data());
                form.update(|f| f.apply(change, lookup));
            })
        });
    }

    /// Refetch subcategories whenever the selected category changes
    pub fn watch_category(&self) {
        let form = self.form;
        let store = self.subcategories;
        let notifier = self.notifier;
        let category_key = Memo::new(move |_| form.with(|f| f.category_id.clone()));

        Effect::new(move |_| {
            let query = DependentQuery::new(category_key.get(), non_empty_key);
            spawn_local(async move {
                let outcome = run_dependent(&store, query, |id| async move {
                    fetch_subcategories_of(&id).await
                })
                .await;
                if let Some(FetchOutcome::Failed(e)) = outcome {
                    notifier.notify(NotifyKind::Error, &e.display_message("Failed to load subcategories"));
                }
            });
        });
    }

    pub fn subcategory_options(&self) -> Vec<AssetSubcategory> {
        self.subcategories.with(|q| q.data().to_vec())
    }

    pub fn subcategories_loading(&self) -> bool {
        self.subcategories.with(|q| q.is_loading())
    }

    /// Specification inputs for the selected category
    pub fn spec_fields(&self) -> &'static [SpecFieldDef] {
        self.spec_profile.get().fields()
    }

    pub fn spec_value(&self, key: &str) -> String {
        self.form
            .with(|f| spec_text(&f.specifications, key).unwrap_or_default())
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        let payload = component_payload(&current, self.page.service.asset_id);
        self.page.save(current.id, payload, move || on_saved.run(()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::testing::{MockService, RecordingNotifier};
    use crate::shared::crud::{submit, CrudMessages, ListState};
    use contracts::domain::a007_asset_component::aggregate::AssetComponent;
    use contracts::domain::a007_asset_component::ENTITY_METADATA;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn edit_form() -> ComponentForm {
        ComponentForm {
            id: Some(9),
            category_id: "2".into(),
            component_name: "Memory (8GB DDR4 RAM)".into(),
            status_id: "1".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_edit_without_category_sends_nothing() {
        let service = MockService::<AssetComponent, ComponentPayload>::new(vec![]);
        let notifier = RecordingNotifier::default();
        let store = RefCell::new(ListState::default());
        let form = ComponentForm {
            category_id: String::new(),
            ..edit_form()
        };

        let saved = block_on(submit(
            &service,
            &notifier,
            &store,
            &CrudMessages::new(&ENTITY_METADATA.ui),
            form.id,
            component_payload(&form, 5),
        ));
        assert!(!saved);
        assert_eq!(service.call_count(), 0);
        assert_eq!(
            notifier.last(),
            Some((NotifyKind::Warning, "Category is required".to_string()))
        );
    }

    #[test]
    fn test_profile_for_category_id() {
        let categories: Vec<AssetCategory> = serde_json::from_str(
            r#"[{"id": 1, "name": "Laptop"}, {"id": 2, "name": "Memory"}]"#,
        )
        .unwrap();
        assert_eq!(profile_for(&categories, "2"), SpecProfile::Memory);
        assert_eq!(profile_for(&categories, "1"), SpecProfile::Laptop);
        assert_eq!(profile_for(&categories, ""), SpecProfile::Generic);
        assert_eq!(profile_for(&categories, "99"), SpecProfile::Generic);
    }

    #[test]
    fn test_edit_payload_has_no_asset_id() {
        let payload = component_payload(&edit_form(), 5).unwrap();
        assert_eq!(payload.asset_id, None);

        let create = ComponentForm { id: None, ..edit_form() };
        assert_eq!(component_payload(&create, 5).unwrap().asset_id, Some(5));
    }

    #[test]
    fn test_valid_edit_updates_and_refetches() {
        let service = MockService::<AssetComponent, ComponentPayload>::new(vec![]);
        let notifier = RecordingNotifier::default();
        let store = RefCell::new(ListState::default());
        let form = edit_form();

        let saved = block_on(submit(
            &service,
            &notifier,
            &store,
            &CrudMessages::new(&ENTITY_METADATA.ui),
            form.id,
            component_payload(&form, 5),
        ));
        assert!(saved);
        assert_eq!(*service.calls.borrow(), vec!["update 9", "list"]);
        assert_eq!(service.sent.borrow()[0].brand, None);
        assert_eq!(
            notifier.last(),
            Some((NotifyKind::Success, "Component updated".to_string()))
        );
    }
}
