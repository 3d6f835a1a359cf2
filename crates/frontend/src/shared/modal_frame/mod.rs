use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Press and release both landed on the overlay itself, not inside the modal
fn is_overlay_event(ev: &MouseEvent) -> bool {
    match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

/// Overlay with a positioned surface and an optional title bar.
///
/// Save/Cancel buttons are rendered by the content.
#[component]
pub fn ModalFrame(
    on_close: Callback<()>,
    /// Overlay click closes the modal (default: true)
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    #[prop(optional)]
    z_index: Option<i32>,
    /// Empty hides the title bar
    #[prop(optional, into)]
    title: String,
    /// Extra inline style of `div.modal`
    #[prop(optional, into)]
    modal_style: String,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let overlay_style = format!("z-index: {};", z_index.unwrap_or(1000));
    let surface_style = format!("position: relative; {}", modal_style).trim_end().to_string();

    // Выделение текста внутри формы с отпусканием мыши на оверлее не закрывает окно
    let pressed_on_overlay = RwSignal::new(false);

    let on_mouse_down = move |ev: MouseEvent| pressed_on_overlay.set(is_overlay_event(&ev));

    let on_overlay_click = move |ev: MouseEvent| {
        let close = close_on_overlay && pressed_on_overlay.get() && is_overlay_event(&ev);
        pressed_on_overlay.set(false);
        if close {
            // the overlay must outlive its own click dispatch
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    view! {
        <div
            class="modal-overlay"
            style=overlay_style
            on:mousedown=on_mouse_down
            on:click=on_overlay_click
        >
            <div class="modal" style=surface_style on:click=|ev: MouseEvent| ev.stop_propagation()>
                {(!title.is_empty()).then(|| view! {
                    <div class="modal__header">
                        <h3 class="modal__title">{title.clone()}</h3>
                        <button class="modal__close" title="Close" on:click=move |_| on_close.run(())>
                            {icon("x")}
                        </button>
                    </div>
                })}
                <div class="modal__body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
