use contracts::{AlertRequest, ChoiceOption, ChooseOptions, ConfirmOptions};
use futures::channel::oneshot;
use std::fmt;

/// A set of show functions provided by whatever renders alerts and dialogs.
///
/// A host registers one set while mounted; the service forwards every call
/// to the most recently registered set.
pub trait Handlers: Send + Sync {
    fn alert(&self, request: AlertRequest);

    fn confirm(&self, options: ConfirmOptions, responder: ConfirmResponder);

    fn choose(&self, options: ChooseOptions, responder: ChoiceResponder);
}

/// One-shot result callback of a confirmation. Responding consumes it.
pub struct ConfirmResponder {
    tx: oneshot::Sender<bool>,
}

impl ConfirmResponder {
    /// Creates a responder and the receiving end of its result. The service
    /// uses this for every request; hosts use it to drive handler sets directly.
    pub fn channel() -> (Self, oneshot::Receiver<bool>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    pub fn respond(self, accepted: bool) {
        if self.tx.send(accepted).is_err() {
            log::trace!("confirm result dropped: caller no longer waiting");
        }
    }

    pub fn accept(self) {
        self.respond(true);
    }

    pub fn deny(self) {
        self.respond(false);
    }

    /// True once the caller has dropped the pending future.
    pub fn is_abandoned(&self) -> bool {
        self.tx.is_canceled()
    }
}

impl fmt::Debug for ConfirmResponder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmResponder")
            .field("abandoned", &self.is_abandoned())
            .finish()
    }
}

/// One-shot result callback of a choice. `None` cancels.
pub struct ChoiceResponder {
    tx: oneshot::Sender<Option<ChoiceOption>>,
}

impl ChoiceResponder {
    pub fn channel() -> (Self, oneshot::Receiver<Option<ChoiceOption>>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    pub fn respond(self, choice: Option<ChoiceOption>) {
        if self.tx.send(choice).is_err() {
            log::trace!("choice result dropped: caller no longer waiting");
        }
    }

    pub fn select(self, option: ChoiceOption) {
        self.respond(Some(option));
    }

    pub fn cancel(self) {
        self.respond(None);
    }

    pub fn is_abandoned(&self) -> bool {
        self.tx.is_canceled()
    }
}

impl fmt::Debug for ChoiceResponder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChoiceResponder")
            .field("abandoned", &self.is_abandoned())
            .finish()
    }
}
