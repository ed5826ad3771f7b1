pub mod date;
pub mod sanitize;
