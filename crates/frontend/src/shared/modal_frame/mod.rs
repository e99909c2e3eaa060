use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// A frame that is busy, or already disposed, stays as it is.
fn can_dismiss(busy: Option<bool>) -> bool {
    busy == Some(false)
}

/// Modal frame: overlay, positioned surface, header with title and close button.
///
/// Closes on Escape, on the close button, and on a click that both starts and
/// ends on the overlay itself. None of these close it while `busy` is true.
#[component]
pub fn ModalFrame(
    /// DOM id of the overlay element.
    #[prop(into)]
    modal_id: String,
    /// Header title.
    #[prop(into)]
    title: String,
    /// Called when the modal should close.
    on_close: Callback<()>,
    /// Blocks every dismissal path, e.g. while a request is in flight.
    #[prop(optional, into)]
    busy: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);
    let dismiss = move || {
        if can_dismiss(busy.try_get_untracked()) {
            on_close.run(());
        }
    };

    let escape_listener = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            dismiss();
        }
    });
    on_cleanup(move || escape_listener.remove());

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Selecting text inside the modal and releasing outside must not close it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Defer to the next tick: the overlay is removed during its own click dispatch.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                dismiss();
            });
        }
    };

    view! {
        <div
            id=modal_id
            class="modal-overlay"
            role="dialog"
            aria-modal="true"
            style="z-index: 1050;"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class="modal" style="position: relative;" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button
                        class="button button--icon modal__close"
                        aria-label="Close"
                        disabled=move || busy.get()
                        on:click=move |_| dismiss()
                    >
                        {icon("x")}
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
