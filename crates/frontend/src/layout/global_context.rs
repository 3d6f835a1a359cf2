//! Open tabs, the active tab and the sidebar state of the shell

use crate::layout::tabs::{asset_components_key, tab_label_for_key};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// `?active=<tab key>`
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
struct ActiveTabQuery {
    active: Option<String>,
}

/// Tab key from a `location.search` value ("?active=a003_branch")
fn active_from_search(search: &str) -> Option<String> {
    serde_qs::from_str::<ActiveTabQuery>(search.trim_start_matches('?'))
        .ok()?
        .active
        .filter(|key| !key.is_empty())
}

fn search_for_active(key: &str) -> String {
    let query = ActiveTabQuery {
        active: Some(key.to_string()),
    };
    format!("?{}", serde_qs::to_string(&query).unwrap_or_default())
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Reopen the tab from `?active=` and mirror the active tab into the URL
    pub fn init_router_integration(&self) {
        if let Some(key) = active_from_search(&current_search()) {
            self.open_tab(&key, &tab_label_for_key(&key));
        }

        let active = self.active;
        Effect::new(move |_| {
            let Some(key) = active.get() else {
                return;
            };
            let new_search = search_for_active(&key);
            if current_search() == new_search {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_search));
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open tab {}", key);
        let exists = self.opened.with_untracked(|tabs| tabs.iter().any(|t| t.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    /// Components page of one asset, one tab per asset
    pub fn open_asset_components(&self, asset_id: i64) {
        let key = asset_components_key(asset_id);
        self.open_tab(&key, &tab_label_for_key(&key));
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    /// Closing the active tab activates the last remaining one
    pub fn close_tab(&self, key: &str) {
        log::debug!("close tab {}", key);
        self.opened.update(|tabs| tabs.retain(|t| t.key != key));
        if self.active.with_untracked(|a| a.as_deref() == Some(key)) {
            let next = self.opened.with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_from_search() {
        assert_eq!(active_from_search("?active=a003_branch"), Some("a003_branch".to_string()));
        assert_eq!(active_from_search(""), None);
        assert_eq!(active_from_search("?active="), None);
        assert_eq!(active_from_search("?other=1"), None);
    }

    #[test]
    fn test_search_round_trip_for_components_tab() {
        let search = search_for_active("a007_asset_component_12");
        assert_eq!(search, "?active=a007_asset_component_12");
        assert_eq!(active_from_search(&search).as_deref(), Some("a007_asset_component_12"));
    }
}
