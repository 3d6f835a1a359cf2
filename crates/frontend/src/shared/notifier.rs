//! Operator feedback: confirmations and toasts
//!
//! Page controllers never call `window.confirm` or touch the toast list
//! directly. They receive a [`Notifier`], so tests can script answers and
//! record messages.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::config::config;
use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Info,
    Warning,
    Error,
}

impl NotifyKind {
    fn modifier(&self) -> &'static str {
        match self {
            NotifyKind::Success => "toast--success",
            NotifyKind::Info => "toast--info",
            NotifyKind::Warning => "toast--warning",
            NotifyKind::Error => "toast--error",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            NotifyKind::Success => "check",
            NotifyKind::Info => "info",
            NotifyKind::Warning | NotifyKind::Error => "alert-triangle",
        }
    }
}

pub trait Notifier {
    /// Ask the operator; `false` when declined or no window is available
    fn confirm(&self, prompt: &str) -> bool;

    fn notify(&self, kind: NotifyKind, message: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: NotifyKind,
    pub message: String,
}

/// Toast list shown by [`ToastHost`]
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn push(&self, kind: NotifyKind, message: &str) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|t| {
            t.push(Toast {
                id,
                kind,
                message: message.to_string(),
            })
        });

        let svc = *self;
        let timeout = config().ui.toast_timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            svc.dismiss(id);
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }
}

/// Browser implementation: `window.confirm` plus toasts
#[derive(Clone, Copy)]
pub struct BrowserNotifier {
    toasts: ToastService,
}

impl BrowserNotifier {
    pub fn new(toasts: ToastService) -> Self {
        Self { toasts }
    }
}

impl Notifier for BrowserNotifier {
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    fn notify(&self, kind: NotifyKind, message: &str) {
        match kind {
            NotifyKind::Error => log::warn!("{}", message),
            _ => log::debug!("{:?}: {}", kind, message),
        }
        self.toasts.push(kind, message);
    }
}

/// Notifier from the app context
pub fn use_notifier() -> BrowserNotifier {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");
    BrowserNotifier::new(toasts)
}

/// Renders the toast list. Must be mounted exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        <div class="toast-host">
            <For
                each=move || svc.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.kind.modifier())>
                            {icon(toast.kind.icon_name())}
                            // multi-line field errors
                            <span class="toast__message" style="white-space: pre-line;">{toast.message}</span>
                            <button class="toast__close" on:click=move |_| svc.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
