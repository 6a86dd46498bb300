use super::slots::{AlertSlot, AlertTransition, ChoiceSlot, ConfirmSlot, REPOST_DELAY_MS};
use crate::config::HostConfig;
use confirm_service::{ChoiceResponder, ConfirmResponder, Handlers};
use contracts::{AlertRequest, ChoiceOption, ChooseOptions, ConfirmOptions};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

/// Reactive state of one host: one signal per slot.
#[derive(Clone, Copy)]
pub(crate) struct HostSlots {
    pub alert: RwSignal<AlertSlot>,
    pub confirm: RwSignal<ConfirmSlot>,
    pub choice: RwSignal<ChoiceSlot>,
}

impl HostSlots {
    pub fn new() -> Self {
        Self {
            alert: RwSignal::new(AlertSlot::default()),
            confirm: RwSignal::new(ConfirmSlot::default()),
            choice: RwSignal::new(ChoiceSlot::default()),
        }
    }

    pub fn hide_alert(&self) {
        self.alert.try_update(AlertSlot::hide);
    }

    pub fn expire_alert(&self, show_id: u64) {
        if self.alert.try_update(|slot| slot.expire(show_id)) == Some(true) {
            log::trace!("alert #{show_id} expired");
        }
    }

    // Responders are settled outside the signal update so a waiting caller
    // never observes the slot mid-write.
    pub fn settle_confirm(&self, accepted: bool) {
        match self.confirm.try_update(ConfirmSlot::close).flatten() {
            Some(responder) => responder.respond(accepted),
            None => log::debug!("confirm closed with no pending request"),
        }
    }

    pub fn settle_choice(&self, choice: Option<ChoiceOption>) {
        match self.choice.try_update(ChoiceSlot::close).flatten() {
            Some(responder) => responder.respond(choice),
            None => log::debug!("choice closed with no pending request"),
        }
    }
}

/// The handler set a mounted host registers with the service.
pub(crate) struct HostHandlers {
    slots: HostSlots,
    config: Arc<HostConfig>,
}

impl HostHandlers {
    pub fn new(slots: HostSlots, config: Arc<HostConfig>) -> Self {
        Self { slots, config }
    }
}

impl Handlers for HostHandlers {
    fn alert(&self, request: AlertRequest) {
        let durations = self.config.durations;
        let transition = self
            .slots
            .alert
            .try_update(|slot| slot.request(request, &durations));

        if let Some(AlertTransition::Reposting { generation }) = transition {
            log::debug!("alert visible, reposting as generation {generation}");
            let alert = self.slots.alert;
            spawn_local(async move {
                TimeoutFuture::new(REPOST_DELAY_MS).await;
                alert.try_update(|slot| slot.fire_repost(generation));
            });
        }
    }

    fn confirm(&self, options: ConfirmOptions, responder: ConfirmResponder) {
        let captions = &self.config.strings;
        self.slots
            .confirm
            .try_update(|slot| slot.open(options, responder, captions));
    }

    fn choose(&self, options: ChooseOptions, responder: ChoiceResponder) {
        let captions = &self.config.strings;
        self.slots
            .choice
            .try_update(|slot| slot.open(options, responder, captions));
    }
}
