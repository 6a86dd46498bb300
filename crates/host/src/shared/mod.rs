pub mod dialog_frame;
