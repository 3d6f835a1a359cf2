use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::notifier::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Modal stack for entity forms and dialogs
    provide_context(ModalStackService::new());

    // Toasts behind the Notifier
    provide_context(ToastService::new());

    view! {
        <AppShell />
        <ModalHost />
        <ToastHost />
    }
}
