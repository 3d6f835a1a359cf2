//! Browser wiring of a list page
//!
//! [`CrudPage`] binds a [`CrudService`] to reactive state and spawns the
//! controller steps from `crud`. It is `Copy`, so event handlers and modal
//! builders capture it freely.

use std::future::Future;

use contracts::shared::metadata::EntityUiMetadata;
use contracts::shared::validation::ValidationError;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils::ApiError;
use crate::shared::config::config;
use crate::shared::crud::{refresh, remove, submit, CrudMessages, CrudService, ListState};
use crate::shared::list_utils::{ListView, Searchable, Sortable};
use crate::shared::notifier::{use_notifier, BrowserNotifier, Notifier, NotifyKind};

pub struct CrudPage<S: CrudService> {
    pub service: S,
    pub state: RwSignal<ListState<S::Item>>,
    pub view: RwSignal<ListView>,
    pub ui: EntityUiMetadata,
    notifier: BrowserNotifier,
}

impl<S: CrudService + Copy> Clone for CrudPage<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: CrudService + Copy> Copy for CrudPage<S> {}

impl<S> CrudPage<S>
where
    S: CrudService + Copy + 'static,
    S::Item: Searchable + Sortable + Send + Sync,
    S::Payload: 'static,
{
    /// Must be called inside a component: reads the toast context
    pub fn new(service: S, ui: EntityUiMetadata, sort_field: &str) -> Self {
        Self {
            service,
            state: RwSignal::new(ListState::default()),
            view: RwSignal::new(ListView::new(sort_field, config().ui.page_size())),
            ui,
            notifier: use_notifier(),
        }
    }

    pub fn messages(&self) -> CrudMessages {
        CrudMessages::new(&self.ui)
    }

    pub fn refresh(&self) {
        let this = *self;
        spawn_local(async move {
            let messages = this.messages();
            refresh(&this.service, &this.notifier, &this.state, &messages).await;
        });
    }

    /// Submit a validated form; `on_saved` runs after the backend accepted it
    pub fn save(
        &self,
        id: Option<i64>,
        payload: Result<S::Payload, ValidationError>,
        on_saved: impl FnOnce() + 'static,
    ) {
        let this = *self;
        spawn_local(async move {
            let messages = this.messages();
            if submit(&this.service, &this.notifier, &this.state, &messages, id, payload).await {
                on_saved();
            }
        });
    }

    pub fn delete(&self, id: i64, name: String) {
        let this = *self;
        spawn_local(async move {
            let messages = this.messages();
            remove(&this.service, &this.notifier, &this.state, &messages, id, &name).await;
        });
    }

    /// Rows of the current page and the filtered count
    pub fn page_rows(&self) -> (Vec<S::Item>, usize) {
        self.page_rows_where(|_| true)
    }

    /// Same as `page_rows` after an extra page-specific filter
    pub fn page_rows_where(&self, keep: impl Fn(&S::Item) -> bool) -> (Vec<S::Item>, usize) {
        let view = self.view;
        self.state.with(|s| {
            let items: Vec<S::Item> = s.items.iter().filter(|i| keep(i)).cloned().collect();
            view.with(|v| v.page_of(&items))
        })
    }

    pub fn filter(&self) -> String {
        self.view.with(|v| v.filter.clone())
    }

    pub fn set_filter(&self, filter: String) {
        self.view.update(|v| v.set_filter(filter));
    }

    pub fn filtered_count(&self) -> usize {
        let view = self.view;
        self.state.with(|s| view.with(|v| v.visible(&s.items).len()))
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }
}

/// Fill select options from `fetch`. A failure is reported and the
/// options stay as they were.
pub fn load_options<T, Fut>(target: RwSignal<Vec<T>>, what: &'static str, fetch: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let notifier = use_notifier();
    spawn_local(async move {
        match fetch.await {
            Ok(items) => {
                let _ = target.try_set(items);
            }
            Err(e) => {
                let text = e.display_message(&format!("Failed to load {}", what));
                notifier.notify(NotifyKind::Error, &text);
            }
        }
    });
}
