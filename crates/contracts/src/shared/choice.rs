use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_CANCEL_CAPTION: &str = "Cancel";

/// Unique key of a selectable option: a string or a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionKey {
    Number(i64),
    Text(String),
}

impl From<&str> for OptionKey {
    fn from(key: &str) -> Self {
        OptionKey::Text(key.to_string())
    }
}

impl From<String> for OptionKey {
    fn from(key: String) -> Self {
        OptionKey::Text(key)
    }
}

impl From<i64> for OptionKey {
    fn from(key: i64) -> Self {
        OptionKey::Number(key)
    }
}

impl std::fmt::Display for OptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionKey::Number(n) => write!(f, "{n}"),
            OptionKey::Text(s) => f.write_str(s),
        }
    }
}

/// A selectable option. `key` is the identity; `label` and `payload`
/// carry whatever the embedding application needs to display it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub key: OptionKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl ChoiceOption {
    pub fn new(key: impl Into<OptionKey>) -> Self {
        Self {
            key: key.into(),
            label: None,
            payload: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Label if present, otherwise the key.
    pub fn display_text(&self) -> String {
        self.label.clone().unwrap_or_else(|| self.key.to_string())
    }
}

/// Options for a single-choice request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChooseOptions {
    pub title: Option<String>,
    pub options: Vec<ChoiceOption>,
    /// Rendering discriminator, interpreted by the choice renderer.
    pub kind: Option<String>,
    pub cancel_caption: Option<String>,
    /// Opaque data passed through to the renderer.
    pub extra: Option<Value>,
}

impl ChooseOptions {
    pub fn new(options: Vec<ChoiceOption>) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn cancel_caption(mut self, caption: impl Into<String>) -> Self {
        self.cancel_caption = Some(caption.into());
        self
    }

    pub fn extra(mut self, extra: Value) -> Self {
        self.extra = Some(extra);
        self
    }

    /// Cancel caption resolved against the configured default, then "Cancel".
    pub fn resolve_cancel_caption(&self, configured: Option<&str>) -> String {
        self.cancel_caption
            .as_deref()
            .or(configured)
            .unwrap_or(DEFAULT_CANCEL_CAPTION)
            .to_string()
    }
}
