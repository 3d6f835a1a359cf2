//! Mutable page state reachable from async tasks
//!
//! Controllers are written against [`StateStore`] so the same code runs on a
//! reactive `RwSignal` in the browser and on a `RefCell` in unit tests.

use leptos::prelude::*;
use std::cell::RefCell;

pub trait StateStore<S> {
    /// Run `f` on the state; `None` when the state no longer exists
    /// (the owning component was disposed).
    fn with_state<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R>;
}

impl<S: Send + Sync + 'static> StateStore<S> for RwSignal<S> {
    fn with_state<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<S> StateStore<S> for RefCell<S> {
    fn with_state<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
