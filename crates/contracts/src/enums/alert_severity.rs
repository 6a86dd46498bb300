use serde::{Deserialize, Serialize};

/// Severity of an alert. Drives both styling and the default auto-hide duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Error,
    Warning,
    #[default]
    Info,
    Success,
}

impl AlertSeverity {
    /// Lowercase code, also used as a CSS modifier by renderers.
    pub fn code(&self) -> &'static str {
        match self {
            AlertSeverity::Error => "error",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Info => "info",
            AlertSeverity::Success => "success",
        }
    }

    /// Auto-hide duration used when neither the call nor the host config sets one.
    pub fn default_duration_ms(&self) -> u64 {
        match self {
            AlertSeverity::Info | AlertSeverity::Success => 3_000,
            AlertSeverity::Warning | AlertSeverity::Error => 10_000,
        }
    }

    pub fn all() -> [AlertSeverity; 4] {
        [
            AlertSeverity::Error,
            AlertSeverity::Warning,
            AlertSeverity::Info,
            AlertSeverity::Success,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "error" => Some(AlertSeverity::Error),
            "warning" => Some(AlertSeverity::Warning),
            "info" => Some(AlertSeverity::Info),
            "success" => Some(AlertSeverity::Success),
            _ => None,
        }
    }
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_durations() {
        assert_eq!(AlertSeverity::Info.default_duration_ms(), 3_000);
        assert_eq!(AlertSeverity::Success.default_duration_ms(), 3_000);
        assert_eq!(AlertSeverity::Warning.default_duration_ms(), 10_000);
        assert_eq!(AlertSeverity::Error.default_duration_ms(), 10_000);
    }

    #[test]
    fn test_code_round_trip() {
        for severity in AlertSeverity::all() {
            assert_eq!(AlertSeverity::from_code(severity.code()), Some(severity));
        }
        assert_eq!(AlertSeverity::from_code("fatal"), None);
    }

    #[test]
    fn test_serde_is_lowercase() {
        let json = serde_json::to_string(&AlertSeverity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let parsed: AlertSeverity = serde_json::from_str("\"success\"").unwrap();
        assert_eq!(parsed, AlertSeverity::Success);
    }
}
