//! Reference render callbacks for [`ConfirmComponentHost`](crate::ConfirmComponentHost).
//!
//! Applications with their own design system pass their own callbacks; these
//! exist so a host works out of the box. Class names follow BEM
//! (`confirm-toast`, `confirm-dialog`, `confirm-choice`).

use crate::host::{AlertRenderProps, ChoiceRenderProps, ConfirmRenderProps};
use crate::shared::dialog_frame::DialogFrame;
use contracts::AlertSeverity;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;

/// Toast in a corner; hides itself after the resolved duration.
pub fn alert_toast() -> Callback<AlertRenderProps, AnyView> {
    Callback::new(render_alert_toast)
}

/// Modal confirmation with accept and (unless suppressed) deny buttons.
pub fn confirm_dialog() -> Callback<ConfirmRenderProps, AnyView> {
    Callback::new(render_confirm_dialog)
}

/// Modal list of options with a cancel button.
pub fn choice_dialog() -> Callback<ChoiceRenderProps, AnyView> {
    Callback::new(render_choice_dialog)
}

pub fn toast_class(severity: AlertSeverity) -> String {
    format!("confirm-toast confirm-toast--{}", severity.code())
}

pub fn choice_class(kind: Option<&str>) -> String {
    match kind {
        Some(kind) if !kind.is_empty() => format!("confirm-choice confirm-choice--{kind}"),
        _ => "confirm-choice".to_string(),
    }
}

/// Optional `description` string carried in a choice's extra data.
pub fn extra_description(extra: Option<&Value>) -> Option<String> {
    extra?
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn render_alert_toast(props: AlertRenderProps) -> AnyView {
    if !props.is_visible {
        return view! { <></> }.into_any();
    }

    let AlertRenderProps {
        message,
        severity,
        duration_ms,
        show_id,
        on_close,
        on_expire,
        ..
    } = props;

    let timeout = u32::try_from(duration_ms).unwrap_or(u32::MAX);
    spawn_local(async move {
        TimeoutFuture::new(timeout).await;
        on_expire.run(show_id);
    });

    view! {
        <div class=toast_class(severity) role="status">
            <span class="confirm-toast__message">{message}</span>
            <button class="confirm-toast__close" on:click=move |_| on_close.run(())>
                "×"
            </button>
        </div>
    }
    .into_any()
}

fn render_confirm_dialog(props: ConfirmRenderProps) -> AnyView {
    if !props.is_open {
        return view! { <></> }.into_any();
    }

    let ConfirmRenderProps {
        title,
        message,
        confirm_caption,
        deny_caption,
        on_confirm,
        on_deny,
        ..
    } = props;
    let can_deny = !deny_caption.is_empty();

    view! {
        <DialogFrame on_dismiss=on_deny dismiss_on_overlay=can_deny>
            {title.map(|title| view! { <h2 class="confirm-dialog__title">{title}</h2> })}
            <p class="confirm-dialog__message">{message}</p>
            <div class="confirm-dialog__actions">
                {can_deny.then(|| view! {
                    <button class="button button--secondary" on:click=move |_| on_deny.run(())>
                        {deny_caption}
                    </button>
                })}
                <button class="button button--primary" on:click=move |_| on_confirm.run(())>
                    {confirm_caption}
                </button>
            </div>
        </DialogFrame>
    }
    .into_any()
}

fn render_choice_dialog(props: ChoiceRenderProps) -> AnyView {
    if !props.is_open {
        return view! { <></> }.into_any();
    }

    let ChoiceRenderProps {
        title,
        options,
        kind,
        extra,
        cancel_caption,
        on_confirm,
        on_cancel,
        ..
    } = props;
    let description = extra_description(extra.as_ref());

    let items = options
        .into_iter()
        .map(|option| {
            let text = option.display_text();
            view! {
                <li>
                    <button
                        class="confirm-choice__option"
                        on:click=move |_| on_confirm.run(option.clone())
                    >
                        {text}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <DialogFrame on_dismiss=on_cancel class=choice_class(kind.as_deref())>
            {title.map(|title| view! { <h2 class="confirm-dialog__title">{title}</h2> })}
            {description.map(|text| view! { <p class="confirm-dialog__message">{text}</p> })}
            <ul class="confirm-choice__options">{items}</ul>
            <div class="confirm-dialog__actions">
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {cancel_caption}
                </button>
            </div>
        </DialogFrame>
    }
    .into_any()
}
