pub mod blocking;
pub mod dialogs;
