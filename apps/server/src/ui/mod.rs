// Server-rendered HTML for the booking directory

pub mod screens;
pub mod widgets;

pub use widgets::layout::{escape, format_datetime, page, DateFormat};
