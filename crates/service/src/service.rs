use crate::error::ServiceError;
use crate::handlers::{ChoiceResponder, ConfirmResponder};
use crate::registry::{HandlerRegistry, HandlerSet};
use contracts::{AlertOptions, AlertRequest, ChoiceOption, ChooseOptions, ConfirmOptions};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;

static GLOBAL: Lazy<ConfirmService> = Lazy::new(ConfirmService::new);

/// Facade for showing alerts, confirmations and choices without holding a
/// reference to the component that renders them.
///
/// Cloning is cheap; clones share the same registry. Use
/// [`ConfirmService::global`] for the process-wide instance, or construct a
/// separate one and inject it into a host.
#[derive(Clone, Default)]
pub struct ConfirmService {
    registry: Arc<Mutex<HandlerRegistry>>,
}

impl ConfirmService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global() -> Self {
        GLOBAL.clone()
    }

    pub fn add_handlers(&self, set: HandlerSet) {
        let mut registry = self.registry.lock();
        if registry.contains(&set) {
            log::debug!("handler set registered again, moving it to the top");
        }
        registry.add(set);
        log::debug!("handler set registered ({} active)", registry.len());
    }

    pub fn remove_handlers(&self, set: &HandlerSet) {
        let mut registry = self.registry.lock();
        if registry.remove(set) {
            log::debug!("handler set removed ({} remaining)", registry.len());
        }
    }

    /// Most recently registered handler set.
    pub fn active_handlers(&self) -> Option<HandlerSet> {
        self.registry.lock().active()
    }

    pub fn len(&self) -> usize {
        self.registry.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.lock().is_empty()
    }

    pub fn clear(&self) {
        self.registry.lock().clear();
    }

    // The lock is released before a handler runs, so handlers may add or
    // remove sets themselves.
    fn require_handlers(&self, operation: &str) -> Result<HandlerSet, ServiceError> {
        self.active_handlers().ok_or_else(|| {
            log::warn!("{operation} called with no handler set registered");
            ServiceError::NotInitialized
        })
    }

    /// Shows an alert. Fire-and-forget.
    pub fn alert(
        &self,
        message: impl Into<String>,
        options: impl Into<AlertOptions>,
    ) -> Result<(), ServiceError> {
        let handlers = self.require_handlers("alert")?;
        handlers.alert(AlertRequest::new(message, options));
        Ok(())
    }

    /// Shows a confirmation. Resolves when accepted, fails with
    /// [`ServiceError::Canceled`] when denied.
    ///
    /// The request is dispatched when this is called, not when the future is
    /// first polled.
    pub fn confirm(
        &self,
        options: ConfirmOptions,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send + 'static {
        let pending = self.require_handlers("confirm").map(|handlers| {
            let (responder, rx) = ConfirmResponder::channel();
            handlers.confirm(options, responder);
            rx
        });

        async move {
            match pending?.await {
                Ok(true) => Ok(()),
                // A dropped responder never answered; treat it as a dismissal.
                Ok(false) | Err(_) => Err(ServiceError::Canceled),
            }
        }
    }

    /// Shows a choice. Resolves with the selected option.
    pub fn choose(
        &self,
        options: ChooseOptions,
    ) -> impl Future<Output = Result<ChoiceOption, ServiceError>> + Send + 'static {
        let pending = self.require_handlers("choose").map(|handlers| {
            let (responder, rx) = ChoiceResponder::channel();
            handlers.choose(options, responder);
            rx
        });

        async move {
            match pending?.await {
                Ok(Some(option)) => Ok(option),
                Ok(None) | Err(_) => Err(ServiceError::Canceled),
            }
        }
    }
}
