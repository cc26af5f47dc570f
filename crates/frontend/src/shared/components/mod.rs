pub mod confirm_dialog;
pub mod date_range_picker;
pub mod field_error;
pub mod pagination_controls;
pub mod search_input;
pub mod status_badge;
