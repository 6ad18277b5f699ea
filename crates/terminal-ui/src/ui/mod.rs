pub mod ui_error_message;
pub mod ui_organizer;
