use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay + centered surface used by the reference dialog renderers.
///
/// Renders no header or buttons; the dialog body supplies its own.
#[component]
pub fn DialogFrame(
    /// Called on a direct overlay click (treated as a dismissal).
    on_dismiss: Callback<()>,
    /// Dismiss on overlay click (default: true).
    #[prop(optional)]
    dismiss_on_overlay: Option<bool>,
    /// Extra class for the dialog surface (`div.confirm-dialog`).
    #[prop(optional)]
    class: Option<String>,
    children: Children,
) -> impl IntoView {
    let dismiss_on_overlay = dismiss_on_overlay.unwrap_or(true);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Both press and release must land on the overlay, so selecting text in
    // the dialog and releasing outside does not dismiss it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_dismiss =
            dismiss_on_overlay && overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_dismiss {
            // Next tick: the overlay is removed by the dismissal itself.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_dismiss.run(());
            });
        }
    };

    let surface_class = match class {
        Some(cls) => format!("confirm-dialog {cls}"),
        None => "confirm-dialog".to_string(),
    };

    view! {
        <div
            class="confirm-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=surface_class on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
