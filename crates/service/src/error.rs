use thiserror::Error;

/// Errors surfaced to callers of the confirm service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// No handler set is registered.
    #[error("ConfirmService is not initialized.")]
    NotInitialized,

    /// The user declined or dismissed the request.
    #[error("Canceled")]
    Canceled,
}
