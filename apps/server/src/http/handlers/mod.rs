pub mod artists;
pub mod home;
pub mod shows;
pub mod venues;

use chrono::{Local, NaiveDateTime};
use serde::Deserialize;

/// Body of the venue and artist search boxes
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// Wall-clock time that splits past from upcoming shows
pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
