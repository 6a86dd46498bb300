use crate::enums::AlertSeverity;
use serde::{Deserialize, Serialize};

/// Per-call alert options. A bare [`AlertSeverity`] converts into this,
/// so call sites can pass either form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlertOptions {
    pub severity: AlertSeverity,
    /// Explicit auto-hide duration; overrides the host's table and defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl AlertOptions {
    pub fn new(severity: AlertSeverity) -> Self {
        Self {
            severity,
            duration_ms: None,
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

impl From<AlertSeverity> for AlertOptions {
    fn from(severity: AlertSeverity) -> Self {
        Self::new(severity)
    }
}

/// Canonical alert request handed to a handler set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRequest {
    pub message: String,
    pub severity: AlertSeverity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl AlertRequest {
    pub fn new(message: impl Into<String>, options: impl Into<AlertOptions>) -> Self {
        let options = options.into();
        Self {
            message: message.into(),
            severity: options.severity,
            duration_ms: options.duration_ms,
        }
    }
}
