// App module for fyyur
// Holds the storage-facing actions, form handling and flash messages

pub mod actions;
pub mod flash;
pub mod forms;

pub use actions::{ArtistDetail, Directory, RecentListings, VenueDetail};
pub use flash::{Flash, FlashLevel};
pub use forms::{ArtistForm, FormFields, ShowForm, ValidationErrors, VenueForm};
