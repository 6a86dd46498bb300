//! Global service for alerts, confirmations and single-choice dialogs.
//!
//! Business code calls [`alert`], [`confirm`] or [`choose`]; a mounted host
//! component registers a [`Handlers`] set and renders the requests. Calls
//! always go to the most recently registered set.

pub mod error;
pub mod handlers;
pub mod registry;
pub mod service;

pub use error::ServiceError;
pub use handlers::{ChoiceResponder, ConfirmResponder, Handlers};
pub use registry::{HandlerRegistry, HandlerSet};
pub use service::ConfirmService;

use contracts::{AlertOptions, ChoiceOption, ChooseOptions, ConfirmOptions};
use std::future::Future;

/// Registers a handler set on the global service.
pub fn add_handlers(set: HandlerSet) {
    ConfirmService::global().add_handlers(set);
}

/// Removes a handler set from the global service. No-op if absent.
pub fn remove_handlers(set: &HandlerSet) {
    ConfirmService::global().remove_handlers(set);
}

/// Shows an alert through the global service.
pub fn alert(
    message: impl Into<String>,
    options: impl Into<AlertOptions>,
) -> Result<(), ServiceError> {
    ConfirmService::global().alert(message, options)
}

/// Shows a confirmation through the global service.
pub fn confirm(
    options: ConfirmOptions,
) -> impl Future<Output = Result<(), ServiceError>> + Send + 'static {
    ConfirmService::global().confirm(options)
}

/// Shows a choice through the global service.
pub fn choose(
    options: ChooseOptions,
) -> impl Future<Output = Result<ChoiceOption, ServiceError>> + Send + 'static {
    ConfirmService::global().choose(options)
}
