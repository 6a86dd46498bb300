//! Data contracts shared by the confirm service and the host component.

pub mod enums;
pub mod shared;

pub use enums::AlertSeverity;
pub use shared::alert::{AlertOptions, AlertRequest};
pub use shared::choice::{ChoiceOption, ChooseOptions, OptionKey, DEFAULT_CANCEL_CAPTION};
pub use shared::confirm::{ConfirmOptions, DenyCaption, DEFAULT_NO_CAPTION, DEFAULT_YES_CAPTION};
pub use shared::settings::{AlertDurations, Captions};
