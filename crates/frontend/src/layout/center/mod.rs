pub mod tab;

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;
use tab::Tab;

/// Tab strip plus the content area
#[component]
pub fn Center(children: Children) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-tabs">
            <div class="app-tabs__strip">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| view! { <Tab tab=tab /> }
                />
            </div>
            <Show when=move || tabs_store.opened.with(|t| t.is_empty())>
                <div class="app-tabs__empty">"Open a section from the menu"</div>
            </Show>
            <div class="app-tabs__content">
                {children()}
            </div>
        </div>
    }
}
