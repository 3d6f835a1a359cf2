//! Global modal stack
//!
//! Entity forms and the transfer dialog are pushed here instead of being
//! rendered by the page. Only the topmost modal reacts to Escape.

use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

/// z-index of the lowest modal; every next one is one level higher
const BASE_Z_INDEX: i32 = 1000;

/// Surface width for forms with two columns (asset components)
pub const MODAL_WIDE: &str = "max-width: min(960px, 95vw); width: min(960px, 95vw);";

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    title: String,
    modal_style: String,
    builder: ModalBuilder,
}

/// Closes the modal it was created for. Copy, so it goes into any handler.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    /// Deferred: safe to call from the click handler of a button inside the modal
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: StoredValue<u64>,
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    /// Open a modal with a title bar; `builder` gets the handle to close it
    pub fn push<F>(&self, title: impl Into<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_with_style(title, "", builder)
    }

    /// Same as `push` with an inline style for the modal surface, e.g. [`MODAL_WIDE`]
    pub fn push_with_style<F>(&self, title: impl Into<String>, modal_style: &str, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let entry = ModalEntry {
            id,
            title: title.into(),
            modal_style: modal_style.to_string(),
            builder: Arc::new(builder),
        };
        self.stack.update(|s| s.push(entry));

        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    pub fn pop(&self) {
        self.stack.update(|s| {
            s.pop();
        });
    }

    // Removing the modal inside the DOM event that triggered the close drops
    // the running handler; wait one tick first.
    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    pub fn pop_deferred(&self) {
        self.defer(|svc| svc.pop());
    }
}

/// Renders every open modal. Mounted once, in `App`.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>().expect("ModalStackService not provided in App");

    Effect::new(move |_| {
        let on_keydown = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .map(|k| k.key() == "Escape")
                .unwrap_or(false);
            if is_escape && svc.stack.with_untracked(|s| !s.is_empty()) {
                svc.pop_deferred();
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
            // lives as long as the app
            on_keydown.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=move || {
                    let levels: Vec<(usize, ModalEntry)> = svc.stack.get().into_iter().enumerate().collect();
                    levels
                }
                key=|(_, entry)| entry.id
                children=move |(level, entry)| {
                    let id = entry.id;
                    let content = (entry.builder)(ModalHandle { id, svc });
                    view! {
                        <ModalFrame
                            z_index=BASE_Z_INDEX + level as i32
                            on_close=Callback::new(move |_| svc.close_deferred(id))
                            title=entry.title.clone()
                            modal_style=entry.modal_style.clone()
                        >
                            {content}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}
