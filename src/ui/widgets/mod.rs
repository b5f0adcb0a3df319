pub mod form;
pub mod status_line;
