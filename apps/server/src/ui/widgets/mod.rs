pub mod form_fields;
pub mod layout;
pub mod lists;
