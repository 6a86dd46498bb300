pub mod alert_severity;

pub use alert_severity::AlertSeverity;
