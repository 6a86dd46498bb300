use crate::enums::AlertSeverity;
use serde::{Deserialize, Serialize};

/// Default button captions configured by the embedding application.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Captions {
    pub yes: Option<String>,
    pub no: Option<String>,
    pub cancel: Option<String>,
}

/// Per-severity auto-hide durations, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertDurations {
    pub error: Option<u64>,
    pub warning: Option<u64>,
    pub info: Option<u64>,
    pub success: Option<u64>,
}

impl AlertDurations {
    pub fn get(&self, severity: AlertSeverity) -> Option<u64> {
        match severity {
            AlertSeverity::Error => self.error,
            AlertSeverity::Warning => self.warning,
            AlertSeverity::Info => self.info,
            AlertSeverity::Success => self.success,
        }
    }

    /// Explicit per-call value, then this table, then the severity default.
    pub fn resolve(&self, severity: AlertSeverity, explicit: Option<u64>) -> u64 {
        explicit
            .or_else(|| self.get(severity))
            .unwrap_or_else(|| severity.default_duration_ms())
    }
}
