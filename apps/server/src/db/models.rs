use chrono::NaiveDateTime;
use sqlx::types::Json;
use sqlx::FromRow;

/// Represents a Venue record in the database
#[derive(Debug, FromRow, Clone)]
pub struct VenueRecord {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Json<Vec<String>>, // stored as a JSON array in a TEXT column
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Represents an Artist record in the database
#[derive(Debug, FromRow, Clone)]
pub struct ArtistRecord {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Json<Vec<String>>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Parameters for creating or fully replacing a Venue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueParams {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Parameters for creating or fully replacing an Artist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistParams {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Parameters for listing a new Show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowParams {
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: NaiveDateTime,
}

/// A show at a venue, joined with the performing artist
#[derive(Debug, FromRow, Clone, PartialEq, Eq)]
pub struct ArtistShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// A show by an artist, joined with the hosting venue
#[derive(Debug, FromRow, Clone, PartialEq, Eq)]
pub struct VenueShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// A row of the flat show listing
#[derive(Debug, FromRow, Clone, PartialEq, Eq)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}
