//! Request tokens and dependent (cascading) queries
//!
//! Every list fetch takes a token from its [`RequestTracker`]. Only the
//! response carrying the latest token is applied; older ones are dropped.
//!
//! A [`DependentQuery`] describes a fetch keyed by another field, e.g. the
//! subcategories of the selected category. [`QueryScheduler`] decides per
//! key change whether to fetch, clear, or do nothing.

use std::future::Future;

use crate::shared::api_utils::ApiError;
use crate::shared::state::StateStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Every token issued so far becomes stale
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

/// What happened to a fetch response
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Applied,
    /// A newer request was issued; the response was dropped
    Stale,
    Failed(ApiError),
}

/// A fetch keyed by another value
#[derive(Debug, Clone)]
pub struct DependentQuery<K> {
    pub key: K,
    pub enabled_when: fn(&K) -> bool,
}

impl<K> DependentQuery<K> {
    pub fn new(key: K, enabled_when: fn(&K) -> bool) -> Self {
        Self { key, enabled_when }
    }

    pub fn is_enabled(&self) -> bool {
        (self.enabled_when)(&self.key)
    }
}

/// Enabled for a non-empty select value
pub fn non_empty_key(key: &String) -> bool {
    !key.trim().is_empty()
}

/// Enabled for every key, including "" (meaning "all")
pub fn always(_key: &String) -> bool {
    true
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryPlan<K> {
    Fetch { key: K, token: RequestToken },
    /// Key disabled: data cleared, pending responses invalidated
    Cleared,
    /// Key unchanged
    Skip,
}

/// Data of one dependent query
#[derive(Debug, Clone)]
pub struct QueryScheduler<K, T> {
    last_key: Option<K>,
    tracker: RequestTracker,
    data: Vec<T>,
    loading: bool,
}

impl<K, T> Default for QueryScheduler<K, T> {
    fn default() -> Self {
        Self {
            last_key: None,
            tracker: RequestTracker::new(),
            data: Vec::new(),
            loading: false,
        }
    }
}

impl<K: Clone + PartialEq, T> QueryScheduler<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn plan(&mut self, query: &DependentQuery<K>) -> QueryPlan<K> {
        if self.last_key.as_ref() == Some(&query.key) {
            return QueryPlan::Skip;
        }
        self.last_key = Some(query.key.clone());

        if !query.is_enabled() {
            self.tracker.invalidate();
            self.data.clear();
            self.loading = false;
            return QueryPlan::Cleared;
        }

        self.loading = true;
        QueryPlan::Fetch {
            key: query.key.clone(),
            token: self.tracker.issue(),
        }
    }

    pub fn complete(&mut self, token: RequestToken, result: Result<Vec<T>, ApiError>) -> FetchOutcome {
        if !self.tracker.is_current(token) {
            log::debug!("dependent query: stale response dropped");
            return FetchOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.data = items;
                FetchOutcome::Applied
            }
            // последний успешный список остаётся на экране
            Err(e) => FetchOutcome::Failed(e),
        }
    }

    /// Forget the last key so the next evaluation fetches again
    pub fn reset(&mut self) {
        self.last_key = None;
    }
}

/// Evaluate `query` against the scheduler in `store` and fetch if needed.
///
/// Returns `None` when nothing was fetched (key unchanged or disabled) or
/// the store is gone.
pub async fn run_dependent<K, T, St, F, Fut>(store: &St, query: DependentQuery<K>, fetch: F) -> Option<FetchOutcome>
where
    K: Clone + PartialEq,
    St: StateStore<QueryScheduler<K, T>>,
    F: FnOnce(K) -> Fut,
    Fut: Future<Output = Result<Vec<T>, ApiError>>,
{
    match store.with_state(|s| s.plan(&query))? {
        QueryPlan::Fetch { key, token } => {
            let result = fetch(key).await;
            store.with_state(|s| s.complete(token, result))
        }
        QueryPlan::Cleared | QueryPlan::Skip => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_tracker_keeps_latest() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue();
        let second = tracker.issue();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        tracker.invalidate();
        assert!(!tracker.is_current(second));
    }

    #[test]
    fn test_empty_key_issues_no_fetch() {
        let store = RefCell::new(QueryScheduler::<String, i64>::new());
        let calls = Cell::new(0);
        let outcome = block_on(run_dependent(
            &store,
            DependentQuery::new(String::new(), non_empty_key),
            |_| {
                calls.set(calls.get() + 1);
                async { Ok(vec![1]) }
            },
        ));
        assert_eq!(outcome, None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_fetch_once_per_key() {
        let store = RefCell::new(QueryScheduler::<String, i64>::new());
        let calls = Cell::new(0);
        for _ in 0..2 {
            block_on(run_dependent(&store, DependentQuery::new("3".to_string(), non_empty_key), |key| {
                calls.set(calls.get() + 1);
                let id: i64 = key.parse().unwrap();
                async move { Ok(vec![id * 10]) }
            }));
        }
        assert_eq!(calls.get(), 1);
        assert_eq!(store.borrow().data(), &[30]);
    }

    #[test]
    fn test_disabling_clears_and_invalidates() {
        let mut sched = QueryScheduler::<String, i64>::new();
        let QueryPlan::Fetch { token, .. } = sched.plan(&DependentQuery::new("1".into(), non_empty_key)) else {
            panic!("expected fetch");
        };
        assert_eq!(sched.complete(token, Ok(vec![7])), FetchOutcome::Applied);

        let QueryPlan::Fetch { token, .. } = sched.plan(&DependentQuery::new("2".into(), non_empty_key)) else {
            panic!("expected fetch");
        };
        assert_eq!(sched.plan(&DependentQuery::new(String::new(), non_empty_key)), QueryPlan::Cleared);
        assert!(sched.data().is_empty());

        // response for "2" arrives after the key was cleared
        assert_eq!(sched.complete(token, Ok(vec![8])), FetchOutcome::Stale);
        assert!(sched.data().is_empty());
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut sched = QueryScheduler::<String, i64>::new();
        let QueryPlan::Fetch { token: first, .. } = sched.plan(&DependentQuery::new("1".into(), always)) else {
            panic!("expected fetch");
        };
        let QueryPlan::Fetch { token: second, .. } = sched.plan(&DependentQuery::new("2".into(), always)) else {
            panic!("expected fetch");
        };
        assert_eq!(sched.complete(second, Ok(vec![2])), FetchOutcome::Applied);
        assert_eq!(sched.complete(first, Ok(vec![1])), FetchOutcome::Stale);
        assert_eq!(sched.data(), &[2]);
        assert!(!sched.is_loading());
    }

    #[test]
    fn test_empty_key_enabled_for_always() {
        let mut sched = QueryScheduler::<String, i64>::new();
        assert!(matches!(
            sched.plan(&DependentQuery::new(String::new(), always)),
            QueryPlan::Fetch { .. }
        ));
    }

    #[test]
    fn test_failed_fetch_keeps_last_rows() {
        let mut sched = QueryScheduler::<String, i64>::new();
        let QueryPlan::Fetch { token, .. } = sched.plan(&DependentQuery::new("1".into(), non_empty_key)) else {
            panic!("expected fetch");
        };
        assert_eq!(sched.complete(token, Ok(vec![7, 8])), FetchOutcome::Applied);

        let QueryPlan::Fetch { token, .. } = sched.plan(&DependentQuery::new("2".into(), non_empty_key)) else {
            panic!("expected fetch");
        };
        assert!(sched.is_loading());
        assert_eq!(
            sched.complete(token, Err(ApiError::Http { status: 500 })),
            FetchOutcome::Failed(ApiError::Http { status: 500 })
        );
        assert_eq!(sched.data(), &[7, 8]);
        assert!(!sched.is_loading());
    }

    #[test]
    fn test_reset_refetches_same_key() {
        let mut sched = QueryScheduler::<String, i64>::new();
        let q = DependentQuery::new("5".to_string(), non_empty_key);
        assert!(matches!(sched.plan(&q), QueryPlan::Fetch { .. }));
        assert_eq!(sched.plan(&q), QueryPlan::Skip);
        sched.reset();
        assert!(matches!(sched.plan(&q), QueryPlan::Fetch { .. }));
    }
}
