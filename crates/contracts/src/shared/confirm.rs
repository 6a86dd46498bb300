/// Caption of the deny button.
///
/// `Suppressed` is distinct from `Unspecified`: it yields an empty caption
/// (no deny button) instead of falling back to the configured default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DenyCaption {
    #[default]
    Unspecified,
    Suppressed,
    Custom(String),
}

impl DenyCaption {
    /// Resolves against the configured default, then the hard default.
    pub fn resolve(&self, configured: Option<&str>) -> String {
        match self {
            DenyCaption::Custom(text) => text.clone(),
            DenyCaption::Suppressed => String::new(),
            DenyCaption::Unspecified => configured.unwrap_or(DEFAULT_NO_CAPTION).to_string(),
        }
    }
}

impl From<&str> for DenyCaption {
    fn from(text: &str) -> Self {
        DenyCaption::Custom(text.to_string())
    }
}

impl From<String> for DenyCaption {
    fn from(text: String) -> Self {
        DenyCaption::Custom(text)
    }
}

pub const DEFAULT_YES_CAPTION: &str = "Yes";
pub const DEFAULT_NO_CAPTION: &str = "No";

/// Options for a confirmation request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfirmOptions {
    pub title: Option<String>,
    pub message: String,
    /// Caption of the accept button.
    pub yes: Option<String>,
    /// Caption of the deny button.
    pub no: DenyCaption,
}

impl ConfirmOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn yes(mut self, caption: impl Into<String>) -> Self {
        self.yes = Some(caption.into());
        self
    }

    pub fn no(mut self, caption: impl Into<DenyCaption>) -> Self {
        self.no = caption.into();
        self
    }

    /// Hides the deny button.
    pub fn without_no(mut self) -> Self {
        self.no = DenyCaption::Suppressed;
        self
    }

    /// Accept caption resolved against the configured default, then "Yes".
    pub fn resolve_yes(&self, configured: Option<&str>) -> String {
        self.yes
            .as_deref()
            .or(configured)
            .unwrap_or(DEFAULT_YES_CAPTION)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_caption_resolution() {
        let explicit = ConfirmOptions::new("Delete?").yes("Delete");
        assert_eq!(explicit.resolve_yes(Some("OK")), "Delete");

        let plain = ConfirmOptions::new("Delete?");
        assert_eq!(plain.resolve_yes(Some("OK")), "OK");
        assert_eq!(plain.resolve_yes(None), "Yes");
    }

    #[test]
    fn test_no_caption_resolution() {
        assert_eq!(DenyCaption::from("Keep").resolve(Some("Nope")), "Keep");
        assert_eq!(DenyCaption::Unspecified.resolve(Some("Nope")), "Nope");
        assert_eq!(DenyCaption::Unspecified.resolve(None), "No");
    }

    #[test]
    fn test_suppressed_no_caption_is_empty_even_with_config() {
        let options = ConfirmOptions::new("Continue?").without_no();
        assert_eq!(options.no.resolve(Some("Nope")), "");
    }
}
