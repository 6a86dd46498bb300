pub mod alert;
pub mod choice;
pub mod confirm;
pub mod settings;
