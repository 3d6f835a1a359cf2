//! Generic list page controller
//!
//! Every reference page works the same way: fetch the list, open a form,
//! submit, confirm and delete, report through the notifier, refetch.
//! The steps live here once; pages plug in a [`CrudService`] and the UI
//! labels of their entity.

use std::future::Future;

use async_trait::async_trait;
use contracts::shared::metadata::EntityUiMetadata;
use contracts::shared::validation::ValidationError;

use crate::shared::api_utils::ApiError;
use crate::shared::notifier::{Notifier, NotifyKind};
use crate::shared::query::{FetchOutcome, RequestToken, RequestTracker};
use crate::shared::state::StateStore;

/// REST resource with the usual four operations
#[async_trait(?Send)]
pub trait CrudService {
    type Item: Clone + 'static;
    type Payload;

    async fn list(&self) -> Result<Vec<Self::Item>, ApiError>;
    async fn create(&self, payload: &Self::Payload) -> Result<(), ApiError>;
    async fn update(&self, id: i64, payload: &Self::Payload) -> Result<(), ApiError>;
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

/// State of one list page
#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    tracker: RequestTracker,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            tracker: RequestTracker::new(),
        }
    }
}

impl<T> ListState<T> {
    pub fn begin_fetch(&mut self) -> RequestToken {
        self.loading = true;
        self.tracker.issue()
    }

    /// Apply a response. A failed fetch keeps the last known items.
    pub fn complete_fetch(&mut self, token: RequestToken, result: Result<Vec<T>, ApiError>) -> FetchOutcome {
        if !self.tracker.is_current(token) {
            log::debug!("list fetch: stale response dropped");
            return FetchOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                FetchOutcome::Applied
            }
            Err(e) => FetchOutcome::Failed(e),
        }
    }
}

/// Operator-facing texts derived from the entity labels
pub struct CrudMessages {
    element: String,
    list: String,
}

impl CrudMessages {
    pub fn new(ui: &EntityUiMetadata) -> Self {
        Self {
            element: ui.element_name.to_string(),
            list: ui.list_name.to_lowercase(),
        }
    }

    pub fn created(&self) -> String {
        format!("{} created", self.element)
    }

    pub fn updated(&self) -> String {
        format!("{} updated", self.element)
    }

    pub fn deleted(&self) -> String {
        format!("{} deleted", self.element)
    }

    pub fn save_failed(&self) -> String {
        format!("Failed to save {}", self.element.to_lowercase())
    }

    pub fn delete_failed(&self) -> String {
        format!("Failed to delete {}", self.element.to_lowercase())
    }

    pub fn load_failed(&self) -> String {
        format!("Failed to load {}", self.list)
    }

    pub fn confirm_delete(&self, name: &str) -> String {
        format!("Delete {} \"{}\"?", self.element.to_lowercase(), name)
    }
}

/// Fetch the list into `store`; failures go to the notifier
pub async fn refresh<S, N, St>(service: &S, notifier: &N, store: &St, messages: &CrudMessages) -> Option<FetchOutcome>
where
    S: CrudService,
    N: Notifier,
    St: StateStore<ListState<S::Item>>,
{
    load_list(service.list(), notifier, store, &messages.load_failed()).await
}

/// Run `fetch` under a fresh token of `store`. Also used by read-only lists
/// that have no [`CrudService`].
pub async fn load_list<T, N, St, Fut>(fetch: Fut, notifier: &N, store: &St, load_failed: &str) -> Option<FetchOutcome>
where
    N: Notifier,
    St: StateStore<ListState<T>>,
    Fut: Future<Output = Result<Vec<T>, ApiError>>,
{
    let token = store.with_state(|s| s.begin_fetch())?;
    let result = fetch.await;
    let outcome = store.with_state(|s| s.complete_fetch(token, result))?;

    if let FetchOutcome::Failed(e) = &outcome {
        let text = e.display_message(load_failed);
        store.with_state(|s| s.error = Some(text.clone()));
        notifier.notify(NotifyKind::Error, &text);
    }
    Some(outcome)
}

/// Validate, create or update, then refetch.
///
/// `payload` carries the local validation result: an `Err` is reported as a
/// warning and nothing is sent. Returns `true` when the backend accepted it.
pub async fn submit<S, N, St>(
    service: &S,
    notifier: &N,
    store: &St,
    messages: &CrudMessages,
    id: Option<i64>,
    payload: Result<S::Payload, ValidationError>,
) -> bool
where
    S: CrudService,
    N: Notifier,
    St: StateStore<ListState<S::Item>>,
{
    let payload = match payload {
        Ok(p) => p,
        Err(e) => {
            notifier.notify(NotifyKind::Warning, &e.to_string());
            return false;
        }
    };

    let result = match id {
        Some(id) => service.update(id, &payload).await,
        None => service.create(&payload).await,
    };

    match result {
        Ok(()) => {
            let text = if id.is_some() { messages.updated() } else { messages.created() };
            log::info!("{}", text);
            notifier.notify(NotifyKind::Success, &text);
            refresh(service, notifier, store, messages).await;
            true
        }
        Err(e) => {
            notifier.notify(NotifyKind::Error, &e.display_message(&messages.save_failed()));
            false
        }
    }
}

/// Confirm, delete, then refetch. Declining sends nothing.
pub async fn remove<S, N, St>(
    service: &S,
    notifier: &N,
    store: &St,
    messages: &CrudMessages,
    id: i64,
    name: &str,
) -> bool
where
    S: CrudService,
    N: Notifier,
    St: StateStore<ListState<S::Item>>,
{
    if !notifier.confirm(&messages.confirm_delete(name)) {
        return false;
    }

    match service.delete(id).await {
        Ok(()) => {
            log::info!("{} {}", messages.deleted(), id);
            notifier.notify(NotifyKind::Success, &messages.deleted());
            refresh(service, notifier, store, messages).await;
            true
        }
        Err(e) => {
            notifier.notify(NotifyKind::Error, &e.display_message(&messages.delete_failed()));
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory service and scripted notifier for controller tests

    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    pub struct RecordingNotifier {
        pub answer: Cell<bool>,
        pub prompts: RefCell<Vec<String>>,
        pub messages: RefCell<Vec<(NotifyKind, String)>>,
    }

    impl RecordingNotifier {
        pub fn answering(answer: bool) -> Self {
            let n = Self::default();
            n.answer.set(answer);
            n
        }

        pub fn last(&self) -> Option<(NotifyKind, String)> {
            self.messages.borrow().last().cloned()
        }
    }

    impl Notifier for RecordingNotifier {
        fn confirm(&self, prompt: &str) -> bool {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.answer.get()
        }

        fn notify(&self, kind: NotifyKind, message: &str) {
            self.messages.borrow_mut().push((kind, message.to_string()));
        }
    }

    /// Records every call; `fail_with` makes mutations fail
    pub struct MockService<T: Clone, P: Clone> {
        pub items: RefCell<Vec<T>>,
        pub calls: RefCell<Vec<String>>,
        pub sent: RefCell<Vec<P>>,
        pub fail_with: RefCell<Option<ApiError>>,
    }

    impl<T: Clone, P: Clone> MockService<T, P> {
        pub fn new(items: Vec<T>) -> Self {
            Self {
                items: RefCell::new(items),
                calls: RefCell::new(Vec::new()),
                sent: RefCell::new(Vec::new()),
                fail_with: RefCell::new(None),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }

        fn outcome(&self) -> Result<(), ApiError> {
            match self.fail_with.borrow().clone() {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl<T: Clone + 'static, P: Clone + 'static> CrudService for MockService<T, P> {
        type Item = T;
        type Payload = P;

        async fn list(&self) -> Result<Vec<T>, ApiError> {
            self.calls.borrow_mut().push("list".into());
            Ok(self.items.borrow().clone())
        }

        async fn create(&self, payload: &P) -> Result<(), ApiError> {
            self.calls.borrow_mut().push("create".into());
            self.sent.borrow_mut().push(payload.clone());
            self.outcome()
        }

        async fn update(&self, id: i64, payload: &P) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("update {}", id));
            self.sent.borrow_mut().push(payload.clone());
            self.outcome()
        }

        async fn delete(&self, id: i64) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("delete {}", id));
            self.outcome()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{MockService, RecordingNotifier};
    use super::*;
    use contracts::shared::api::ApiFailure;
    use futures::executor::block_on;
    use std::cell::RefCell;

    const UI: EntityUiMetadata = EntityUiMetadata {
        element_name: "Branch",
        list_name: "Branches",
        icon: "building",
    };

    fn messages() -> CrudMessages {
        CrudMessages::new(&UI)
    }

    #[test]
    fn test_refresh_fills_list() {
        let service = MockService::<&str, String>::new(vec!["Main", "North"]);
        let notifier = RecordingNotifier::default();
        let store = RefCell::new(ListState::default());

        let outcome = block_on(refresh(&service, &notifier, &store, &messages()));
        assert_eq!(outcome, Some(FetchOutcome::Applied));
        assert_eq!(store.borrow().items, vec!["Main", "North"]);
        assert!(!store.borrow().loading);
    }

    #[test]
    fn test_load_list_reports_failure() {
        let notifier = RecordingNotifier::default();
        let store = RefCell::new(ListState::<i64>::default());

        let outcome = block_on(load_list(
            async { Err(ApiError::Decode("html".into())) },
            &notifier,
            &store,
            "Failed to load equipment",
        ));
        assert!(matches!(outcome, Some(FetchOutcome::Failed(_))));
        assert_eq!(store.borrow().error.as_deref(), Some("Failed to load equipment"));
        assert_eq!(
            notifier.last(),
            Some((NotifyKind::Error, "Failed to load equipment".to_string()))
        );
    }

    #[test]
    fn test_stale_list_response_is_discarded() {
        let mut state: ListState<i64> = ListState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert_eq!(state.complete_fetch(second, Ok(vec![2])), FetchOutcome::Applied);
        assert_eq!(state.complete_fetch(first, Ok(vec![1])), FetchOutcome::Stale);
        assert_eq!(state.items, vec![2]);
    }

    #[test]
    fn test_failed_fetch_keeps_items() {
        let mut state = ListState::default();
        let t = state.begin_fetch();
        state.complete_fetch(t, Ok(vec![1, 2]));

        let t = state.begin_fetch();
        let outcome = state.complete_fetch(t, Err(ApiError::Http { status: 500 }));
        assert_eq!(outcome, FetchOutcome::Failed(ApiError::Http { status: 500 }));
        assert_eq!(state.items, vec![1, 2]);
        assert!(!state.loading);
    }

    #[test]
    fn test_invalid_payload_sends_nothing() {
        let service = MockService::<&str, String>::new(vec![]);
        let notifier = RecordingNotifier::default();
        let store = RefCell::new(ListState::default());

        let saved = block_on(submit(
            &service,
            &notifier,
            &store,
            &messages(),
            Some(3),
            Err(ValidationError::Required("Branch name")),
        ));
        assert!(!saved);
        assert_eq!(service.call_count(), 0);
        assert_eq!(
            notifier.last(),
            Some((NotifyKind::Warning, "Branch name is required".to_string()))
        );
    }

    #[test]
    fn test_update_then_refetch() {
        let service = MockService::<&str, String>::new(vec!["Main"]);
        let notifier = RecordingNotifier::default();
        let store = RefCell::new(ListState::default());

        let saved = block_on(submit(&service, &notifier, &store, &messages(), Some(3), Ok("Main".into())));
        assert!(saved);
        assert_eq!(*service.calls.borrow(), vec!["update 3", "list"]);
        assert_eq!(notifier.messages.borrow()[0], (NotifyKind::Success, "Branch updated".to_string()));
    }

    #[test]
    fn test_create_rejected_shows_field_errors() {
        let service = MockService::<&str, String>::new(vec![]);
        *service.fail_with.borrow_mut() = Some(ApiError::Rejected(ApiFailure {
            message: Some("Invalid".into()),
            field_errors: vec![contracts::shared::api::FieldError {
                field: "branch_name".into(),
                messages: vec!["The branch name has already been taken.".into()],
            }],
        }));
        let notifier = RecordingNotifier::default();
        let store = RefCell::new(ListState::default());

        let saved = block_on(submit(&service, &notifier, &store, &messages(), None, Ok("Main".into())));
        assert!(!saved);
        assert_eq!(*service.calls.borrow(), vec!["create"]);
        assert_eq!(
            notifier.last(),
            Some((NotifyKind::Error, "The branch name has already been taken.".to_string()))
        );
    }

    #[test]
    fn test_delete_without_confirmation_sends_nothing() {
        let service = MockService::<&str, String>::new(vec!["Main"]);
        let notifier = RecordingNotifier::answering(false);
        let store = RefCell::new(ListState::default());

        let deleted = block_on(remove(&service, &notifier, &store, &messages(), 4, "Main"));
        assert!(!deleted);
        assert_eq!(service.call_count(), 0);
        assert_eq!(*notifier.prompts.borrow(), vec!["Delete branch \"Main\"?"]);
    }

    #[test]
    fn test_delete_confirmed() {
        let service = MockService::<&str, String>::new(vec![]);
        let notifier = RecordingNotifier::answering(true);
        let store = RefCell::new(ListState::default());

        let deleted = block_on(remove(&service, &notifier, &store, &messages(), 4, "Main"));
        assert!(deleted);
        assert_eq!(*service.calls.borrow(), vec!["delete 4", "list"]);
    }

    #[test]
    fn test_delete_failure_uses_fallback() {
        let service = MockService::<&str, String>::new(vec![]);
        *service.fail_with.borrow_mut() = Some(ApiError::Network("offline".into()));
        let notifier = RecordingNotifier::answering(true);
        let store = RefCell::new(ListState::default());

        block_on(remove(&service, &notifier, &store, &messages(), 4, "Main"));
        assert_eq!(notifier.last(), Some((NotifyKind::Error, "Failed to delete branch".to_string())));
    }
}
