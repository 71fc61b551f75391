pub mod artists;
pub mod errors;
pub mod home;
pub mod shows;
pub mod venues;
