pub mod canvas;
pub mod dialogs;
