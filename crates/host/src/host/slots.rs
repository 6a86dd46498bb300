//! Display state of the three host slots, independent of any view code.
//!
//! Each slot is a simple `Hidden -> Visible -> Hidden` toggle. Content is kept
//! after hiding so renderers can animate the close.

use confirm_service::{ChoiceResponder, ConfirmResponder};
use contracts::{
    AlertDurations, AlertRequest, AlertSeverity, Captions, ChoiceOption, ChooseOptions,
    ConfirmOptions,
};
use serde_json::Value;

/// Delay between force-closing a visible alert and showing the next one.
pub const REPOST_DELAY_MS: u32 = 10;

/// Resolved content of one alert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertContent {
    pub message: String,
    pub severity: AlertSeverity,
    pub duration_ms: u64,
}

impl AlertContent {
    pub fn resolve(request: AlertRequest, durations: &AlertDurations) -> Self {
        Self {
            duration_ms: durations.resolve(request.severity, request.duration_ms),
            message: request.message,
            severity: request.severity,
        }
    }
}

/// What the host must do after an alert request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertTransition {
    Shown,
    /// The slot was hidden; call [`AlertSlot::fire_repost`] with this
    /// generation after [`REPOST_DELAY_MS`].
    Reposting { generation: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertSlot {
    pub is_visible: bool,
    pub content: AlertContent,
    /// Incremented on every show; renderers use it to expire the right alert.
    pub show_id: u64,
    generation: u64,
    pending: Option<AlertContent>,
}

impl AlertSlot {
    /// A request while an alert is visible (or already waiting to be
    /// reposted) closes the slot and schedules only the newest content.
    pub fn request(
        &mut self,
        request: AlertRequest,
        durations: &AlertDurations,
    ) -> AlertTransition {
        let content = AlertContent::resolve(request, durations);

        if self.is_visible || self.has_pending() {
            self.is_visible = false;
            self.generation += 1;
            self.pending = Some(content);
            AlertTransition::Reposting {
                generation: self.generation,
            }
        } else {
            self.show(content);
            AlertTransition::Shown
        }
    }

    /// Shows the pending alert if `generation` is still the latest one.
    pub fn fire_repost(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.pending.take() {
            Some(content) => {
                self.show(content);
                true
            }
            None => false,
        }
    }

    pub fn hide(&mut self) {
        self.is_visible = false;
    }

    /// Hides only if `show_id` is still on screen.
    pub fn expire(&mut self, show_id: u64) -> bool {
        if self.is_visible && self.show_id == show_id {
            self.is_visible = false;
            true
        } else {
            false
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn show(&mut self, content: AlertContent) {
        self.content = content;
        self.show_id += 1;
        self.is_visible = true;
    }
}

#[derive(Debug, Default)]
pub struct ConfirmSlot {
    pub is_open: bool,
    pub title: Option<String>,
    pub message: String,
    pub yes_caption: String,
    pub no_caption: String,
    responder: Option<ConfirmResponder>,
}

impl ConfirmSlot {
    /// Opens with resolved captions. A request still pending is replaced and
    /// its responder dropped.
    pub fn open(
        &mut self,
        options: ConfirmOptions,
        responder: ConfirmResponder,
        captions: &Captions,
    ) {
        if self.is_pending() {
            log::debug!("confirm request replaced a pending one");
        }
        self.yes_caption = options.resolve_yes(captions.yes.as_deref());
        self.no_caption = options.no.resolve(captions.no.as_deref());
        self.title = options.title;
        self.message = options.message;
        self.responder = Some(responder);
        self.is_open = true;
    }

    /// Hides the slot and hands back the responder, at most once per request.
    pub fn close(&mut self) -> Option<ConfirmResponder> {
        self.is_open = false;
        self.responder.take()
    }

    pub fn is_pending(&self) -> bool {
        self.responder.is_some()
    }
}

#[derive(Debug, Default)]
pub struct ChoiceSlot {
    pub is_open: bool,
    pub title: Option<String>,
    pub options: Vec<ChoiceOption>,
    pub kind: Option<String>,
    pub extra: Option<Value>,
    pub cancel_caption: String,
    responder: Option<ChoiceResponder>,
}

impl ChoiceSlot {
    pub fn open(
        &mut self,
        options: ChooseOptions,
        responder: ChoiceResponder,
        captions: &Captions,
    ) {
        if self.is_pending() {
            log::debug!("choice request replaced a pending one");
        }
        self.cancel_caption = options.resolve_cancel_caption(captions.cancel.as_deref());
        self.title = options.title;
        self.options = options.options;
        self.kind = options.kind;
        self.extra = options.extra;
        self.responder = Some(responder);
        self.is_open = true;
    }

    pub fn close(&mut self) -> Option<ChoiceResponder> {
        self.is_open = false;
        self.responder.take()
    }

    pub fn is_pending(&self) -> bool {
        self.responder.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::DenyCaption;

    fn request(message: &str, severity: AlertSeverity) -> AlertRequest {
        AlertRequest::new(message, severity)
    }

    #[test]
    fn test_alert_shows_with_default_duration() {
        let mut slot = AlertSlot::default();

        let transition = slot.request(
            request("Saved", AlertSeverity::Success),
            &AlertDurations::default(),
        );

        assert_eq!(transition, AlertTransition::Shown);
        assert!(slot.is_visible);
        assert_eq!(slot.content.message, "Saved");
        assert_eq!(slot.content.duration_ms, 3_000);
        assert_eq!(slot.show_id, 1);
    }

    #[test]
    fn test_alert_duration_prefers_explicit_then_table() {
        let durations = AlertDurations {
            error: Some(4_000),
            ..Default::default()
        };
        let mut slot = AlertSlot::default();
        slot.request(request("Boom", AlertSeverity::Error), &durations);
        assert_eq!(slot.content.duration_ms, 4_000);

        let mut slot = AlertSlot::default();
        let explicit = AlertRequest::new(
            "Boom",
            contracts::AlertOptions::new(AlertSeverity::Error).with_duration_ms(500),
        );
        slot.request(explicit, &durations);
        assert_eq!(slot.content.duration_ms, 500);
    }

    #[test]
    fn test_alert_while_visible_hides_then_reposts() {
        let durations = AlertDurations::default();
        let mut slot = AlertSlot::default();
        slot.request(request("first", AlertSeverity::Info), &durations);

        let transition = slot.request(request("second", AlertSeverity::Warning), &durations);

        let AlertTransition::Reposting { generation } = transition else {
            panic!("expected a repost, got {transition:?}");
        };
        assert!(!slot.is_visible);
        assert_eq!(slot.content.message, "first");

        assert!(slot.fire_repost(generation));
        assert!(slot.is_visible);
        assert_eq!(slot.content.message, "second");
        assert_eq!(slot.content.duration_ms, 10_000);
        assert_eq!(slot.show_id, 2);
    }

    #[test]
    fn test_burst_during_repost_shows_only_newest() {
        let durations = AlertDurations::default();
        let mut slot = AlertSlot::default();
        slot.request(request("first", AlertSeverity::Info), &durations);
        let AlertTransition::Reposting { generation: stale } =
            slot.request(request("second", AlertSeverity::Info), &durations)
        else {
            panic!("expected a repost");
        };
        let AlertTransition::Reposting { generation: latest } =
            slot.request(request("third", AlertSeverity::Info), &durations)
        else {
            panic!("expected a repost");
        };

        assert!(!slot.fire_repost(stale));
        assert!(!slot.is_visible);
        assert!(slot.fire_repost(latest));
        assert_eq!(slot.content.message, "third");
        assert!(!slot.has_pending());
    }

    #[test]
    fn test_expire_ignores_previous_shows() {
        let durations = AlertDurations::default();
        let mut slot = AlertSlot::default();
        slot.request(request("first", AlertSeverity::Info), &durations);
        let first_show = slot.show_id;
        slot.hide();
        slot.request(request("second", AlertSeverity::Info), &durations);

        assert!(!slot.expire(first_show));
        assert!(slot.is_visible);
        assert!(slot.expire(slot.show_id));
        assert!(!slot.is_visible);
    }

    #[test]
    fn test_confirm_resolves_captions() {
        let captions = Captions {
            yes: Some("OK".into()),
            no: None,
            cancel: None,
        };
        let mut slot = ConfirmSlot::default();
        let (responder, _rx) = ConfirmResponder::channel();

        slot.open(ConfirmOptions::new("Proceed?").title("Title"), responder, &captions);

        assert!(slot.is_open);
        assert_eq!(slot.title.as_deref(), Some("Title"));
        assert_eq!(slot.yes_caption, "OK");
        assert_eq!(slot.no_caption, "No");
    }

    #[test]
    fn test_confirm_suppressed_no_caption_is_empty() {
        let captions = Captions {
            no: Some("Nope".into()),
            ..Default::default()
        };
        let mut slot = ConfirmSlot::default();
        let (responder, _rx) = ConfirmResponder::channel();
        let options = ConfirmOptions {
            no: DenyCaption::Suppressed,
            ..ConfirmOptions::new("Acknowledge")
        };

        slot.open(options, responder, &captions);

        assert_eq!(slot.no_caption, "");
    }

    #[test]
    fn test_confirm_close_settles_once() {
        let mut slot = ConfirmSlot::default();
        let (responder, mut rx) = ConfirmResponder::channel();
        slot.open(ConfirmOptions::new("Proceed?"), responder, &Captions::default());

        slot.close().unwrap().accept();
        assert!(!slot.is_open);
        assert!(slot.close().is_none());
        assert_eq!(rx.try_recv().unwrap(), Some(true));
        assert_eq!(slot.message, "Proceed?");
    }

    #[test]
    fn test_second_confirm_drops_first_responder() {
        let mut slot = ConfirmSlot::default();
        let (first, mut first_rx) = ConfirmResponder::channel();
        let (second, _second_rx) = ConfirmResponder::channel();
        slot.open(ConfirmOptions::new("one"), first, &Captions::default());
        slot.open(ConfirmOptions::new("two"), second, &Captions::default());

        assert!(first_rx.try_recv().is_err());
        assert_eq!(slot.message, "two");
        assert!(slot.is_pending());
    }

    #[test]
    fn test_choice_open_and_cancel() {
        let captions = Captions {
            cancel: Some("Close".into()),
            ..Default::default()
        };
        let mut slot = ChoiceSlot::default();
        let (responder, mut rx) = ChoiceResponder::channel();
        let options = ChooseOptions::new(vec![ChoiceOption::new("a"), ChoiceOption::new("b")])
            .kind("list")
            .extra(serde_json::json!({ "hint": true }));

        slot.open(options, responder, &captions);

        assert!(slot.is_open);
        assert_eq!(slot.options.len(), 2);
        assert_eq!(slot.kind.as_deref(), Some("list"));
        assert_eq!(slot.cancel_caption, "Close");
        assert!(slot.extra.is_some());

        slot.close().unwrap().cancel();
        assert!(!slot.is_open);
        assert_eq!(rx.try_recv().unwrap(), Some(None));
    }

    #[test]
    fn test_choice_select_delivers_option() {
        let mut slot = ChoiceSlot::default();
        let (responder, mut rx) = ChoiceResponder::channel();
        slot.open(
            ChooseOptions::new(vec![ChoiceOption::new(1), ChoiceOption::new(2)]),
            responder,
            &Captions::default(),
        );
        assert_eq!(slot.cancel_caption, "Cancel");

        let picked = slot.options[1].clone();
        slot.close().unwrap().select(picked.clone());

        assert_eq!(rx.try_recv().unwrap(), Some(Some(picked)));
    }
}
