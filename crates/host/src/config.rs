use contracts::{AlertDurations, Captions};
use serde::Deserialize;
use thiserror::Error;

/// Host configuration: default captions and per-severity alert durations.
///
/// Every field is optional; unset values fall back to the built-in defaults
/// ("Yes", "No", "Cancel", 3s for info/success, 10s for warning/error).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub strings: Captions,
    pub durations: AlertDurations,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid host config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl HostConfig {
    /// Parses a TOML document with optional `[strings]` and `[durations]` tables.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str(contents)?;
        Ok(config)
    }

    pub fn with_strings(mut self, strings: Captions) -> Self {
        self.strings = strings;
        self
    }

    pub fn with_durations(mut self, durations: AlertDurations) -> Self {
        self.durations = durations;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::AlertSeverity;

    #[test]
    fn test_empty_document_is_default() {
        let config = HostConfig::from_toml_str("").unwrap();
        assert_eq!(config, HostConfig::default());
    }

    #[test]
    fn test_full_document() {
        let config = HostConfig::from_toml_str(
            r#"
[strings]
yes = "Да"
no = "Нет"
cancel = "Отмена"

[durations]
error = 15000
success = 2000
"#,
        )
        .unwrap();

        assert_eq!(config.strings.yes.as_deref(), Some("Да"));
        assert_eq!(config.strings.cancel.as_deref(), Some("Отмена"));
        assert_eq!(config.durations.resolve(AlertSeverity::Error, None), 15_000);
        assert_eq!(config.durations.resolve(AlertSeverity::Success, None), 2_000);
        assert_eq!(config.durations.resolve(AlertSeverity::Info, None), 3_000);
    }

    #[test]
    fn test_invalid_document_is_an_error() {
        let err = HostConfig::from_toml_str("[durations]\nerror = \"long\"").unwrap_err();
        assert!(err.to_string().starts_with("Invalid host config"));
    }
}
