use super::slots::{AlertSlot, ChoiceSlot, ConfirmSlot};
use contracts::{AlertSeverity, ChoiceOption};
use leptos::prelude::*;
use serde_json::Value;

/// Passed to the alert render callback.
#[derive(Clone)]
pub struct AlertRenderProps {
    pub is_visible: bool,
    pub message: String,
    pub severity: AlertSeverity,
    pub duration_ms: u64,
    /// Identifies the current show; pass it to `on_expire` from timers.
    pub show_id: u64,
    /// Hides the alert.
    pub on_close: Callback<()>,
    /// Hides the alert only if the given show is still on screen.
    pub on_expire: Callback<u64>,
}

impl AlertRenderProps {
    pub(crate) fn from_slot(
        slot: &AlertSlot,
        on_close: Callback<()>,
        on_expire: Callback<u64>,
    ) -> Self {
        Self {
            is_visible: slot.is_visible,
            message: slot.content.message.clone(),
            severity: slot.content.severity,
            duration_ms: slot.content.duration_ms,
            show_id: slot.show_id,
            on_close,
            on_expire,
        }
    }
}

/// Passed to the confirm render callback.
#[derive(Clone)]
pub struct ConfirmRenderProps {
    pub is_open: bool,
    pub title: Option<String>,
    pub message: String,
    pub confirm_caption: String,
    /// Empty when the deny button is suppressed.
    pub deny_caption: String,
    pub on_confirm: Callback<()>,
    /// Deny or dismiss.
    pub on_deny: Callback<()>,
}

impl ConfirmRenderProps {
    pub(crate) fn from_slot(
        slot: &ConfirmSlot,
        on_confirm: Callback<()>,
        on_deny: Callback<()>,
    ) -> Self {
        Self {
            is_open: slot.is_open,
            title: slot.title.clone(),
            message: slot.message.clone(),
            confirm_caption: slot.yes_caption.clone(),
            deny_caption: slot.no_caption.clone(),
            on_confirm,
            on_deny,
        }
    }
}

/// Passed to the choice render callback.
#[derive(Clone)]
pub struct ChoiceRenderProps {
    pub is_open: bool,
    pub title: Option<String>,
    pub options: Vec<ChoiceOption>,
    pub kind: Option<String>,
    pub extra: Option<Value>,
    pub cancel_caption: String,
    pub on_confirm: Callback<ChoiceOption>,
    pub on_cancel: Callback<()>,
}

impl ChoiceRenderProps {
    pub(crate) fn from_slot(
        slot: &ChoiceSlot,
        on_confirm: Callback<ChoiceOption>,
        on_cancel: Callback<()>,
    ) -> Self {
        Self {
            is_open: slot.is_open,
            title: slot.title.clone(),
            options: slot.options.clone(),
            kind: slot.kind.clone(),
            extra: slot.extra.clone(),
            cancel_caption: slot.cancel_caption.clone(),
            on_confirm,
            on_cancel,
        }
    }
}
