use sqlx::types::Json;
use sqlx::{query, query_as, query_scalar, SqliteExecutor};

use crate::db::models::{
    ArtistParams, ArtistRecord, ArtistShow, ShowListing, ShowParams, VenueParams, VenueRecord,
    VenueShow,
};

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, genres, image_link, \
     facebook_link, website_link, seeking_talent, seeking_description";

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, image_link, \
     facebook_link, website_link, seeking_venue, seeking_description";

// Venues

/// Retrieves all Venue records in storage order
pub async fn get_venues<'e, E>(executor: E) -> Result<Vec<VenueRecord>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    query_as::<_, VenueRecord>(&format!("SELECT {VENUE_COLUMNS} FROM venue ORDER BY id"))
        .fetch_all(executor)
        .await
}

/// Retrieves the most recently listed venues, newest first
pub async fn recent_venues<'e, E>(executor: E, limit: i64) -> Result<Vec<VenueRecord>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    query_as::<_, VenueRecord>(&format!(
        "SELECT {VENUE_COLUMNS} FROM venue ORDER BY id DESC LIMIT ?"
    ))
    .bind(limit)
    .fetch_all(executor)
    .await
}

pub async fn get_venue_by_id<'e, E>(executor: E, id: i64) -> Result<Option<VenueRecord>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    query_as::<_, VenueRecord>(&format!("SELECT {VENUE_COLUMNS} FROM venue WHERE id = ?"))
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn count_venues<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    query_scalar("SELECT COUNT(*) FROM venue")
        .fetch_one(executor)
        .await
}

/// Inserts a new Venue and returns its generated id
pub async fn insert_venue<'e, E>(executor: E, params: &VenueParams) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = query(
        "INSERT INTO venue (name, city, state, address, phone, genres, image_link, \
         facebook_link, website_link, seeking_talent, seeking_description) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&params.name)
    .bind(&params.city)
    .bind(&params.state)
    .bind(&params.address)
    .bind(&params.phone)
    .bind(Json(&params.genres))
    .bind(&params.image_link)
    .bind(&params.facebook_link)
    .bind(&params.website_link)
    .bind(params.seeking_talent)
    .bind(&params.seeking_description)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrites every editable field of a Venue, returning the number of rows touched
pub async fn update_venue<'e, E>(
    executor: E,
    id: i64,
    params: &VenueParams,
) -> Result<u64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = query(
        "UPDATE venue
         SET name = ?,
             city = ?,
             state = ?,
             address = ?,
             phone = ?,
             genres = ?,
             image_link = ?,
             facebook_link = ?,
             website_link = ?,
             seeking_talent = ?,
             seeking_description = ?
         WHERE id = ?",
    )
    .bind(&params.name)
    .bind(&params.city)
    .bind(&params.state)
    .bind(&params.address)
    .bind(&params.phone)
    .bind(Json(&params.genres))
    .bind(&params.image_link)
    .bind(&params.facebook_link)
    .bind(&params.website_link)
    .bind(params.seeking_talent)
    .bind(&params.seeking_description)
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_venue<'e, E>(executor: E, id: i64) -> Result<u64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = query("DELETE FROM venue WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}

/// Retrieves every show hosted by a venue, joined with the performing artist
pub async fn get_shows_for_venue<'e, E>(
    executor: E,
    venue_id: i64,
) -> Result<Vec<ArtistShow>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    query_as::<_, ArtistShow>(
        "SELECT a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link, \
         s.start_time AS start_time
         FROM show s
         JOIN artist a ON a.id = s.artist_id
         WHERE s.venue_id = ?
         ORDER BY s.start_time, s.id",
    )
    .bind(venue_id)
    .fetch_all(executor)
    .await
}

// Artists

pub async fn get_artists<'e, E>(executor: E) -> Result<Vec<ArtistRecord>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    query_as::<_, ArtistRecord>(&format!("SELECT {ARTIST_COLUMNS} FROM artist ORDER BY id"))
        .fetch_all(executor)
        .await
}

pub async fn recent_artists<'e, E>(
    executor: E,
    limit: i64,
) -> Result<Vec<ArtistRecord>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    query_as::<_, ArtistRecord>(&format!(
        "SELECT {ARTIST_COLUMNS} FROM artist ORDER BY id DESC LIMIT ?"
    ))
    .bind(limit)
    .fetch_all(executor)
    .await
}

pub async fn get_artist_by_id<'e, E>(
    executor: E,
    id: i64,
) -> Result<Option<ArtistRecord>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    query_as::<_, ArtistRecord>(&format!("SELECT {ARTIST_COLUMNS} FROM artist WHERE id = ?"))
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn count_artists<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    query_scalar("SELECT COUNT(*) FROM artist")
        .fetch_one(executor)
        .await
}

/// Inserts a new Artist and returns its generated id
pub async fn insert_artist<'e, E>(executor: E, params: &ArtistParams) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = query(
        "INSERT INTO artist (name, city, state, phone, genres, image_link, facebook_link, \
         website_link, seeking_venue, seeking_description) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&params.name)
    .bind(&params.city)
    .bind(&params.state)
    .bind(&params.phone)
    .bind(Json(&params.genres))
    .bind(&params.image_link)
    .bind(&params.facebook_link)
    .bind(&params.website_link)
    .bind(params.seeking_venue)
    .bind(&params.seeking_description)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn update_artist<'e, E>(
    executor: E,
    id: i64,
    params: &ArtistParams,
) -> Result<u64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = query(
        "UPDATE artist
         SET name = ?,
             city = ?,
             state = ?,
             phone = ?,
             genres = ?,
             image_link = ?,
             facebook_link = ?,
             website_link = ?,
             seeking_venue = ?,
             seeking_description = ?
         WHERE id = ?",
    )
    .bind(&params.name)
    .bind(&params.city)
    .bind(&params.state)
    .bind(&params.phone)
    .bind(Json(&params.genres))
    .bind(&params.image_link)
    .bind(&params.facebook_link)
    .bind(&params.website_link)
    .bind(params.seeking_venue)
    .bind(&params.seeking_description)
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

/// Retrieves every show an artist plays, joined with the hosting venue
pub async fn get_shows_for_artist<'e, E>(
    executor: E,
    artist_id: i64,
) -> Result<Vec<VenueShow>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    query_as::<_, VenueShow>(
        "SELECT v.id AS venue_id, v.name AS venue_name, v.image_link AS venue_image_link, \
         s.start_time AS start_time
         FROM show s
         JOIN venue v ON v.id = s.venue_id
         WHERE s.artist_id = ?
         ORDER BY s.start_time, s.id",
    )
    .bind(artist_id)
    .fetch_all(executor)
    .await
}

// Shows

/// Retrieves all shows joined with venue and artist display fields, in listing order
pub async fn get_shows<'e, E>(executor: E) -> Result<Vec<ShowListing>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    query_as::<_, ShowListing>(
        "SELECT s.venue_id AS venue_id, v.name AS venue_name, \
         s.artist_id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link, \
         s.start_time AS start_time
         FROM show s
         JOIN venue v ON v.id = s.venue_id
         JOIN artist a ON a.id = s.artist_id
         ORDER BY s.id",
    )
    .fetch_all(executor)
    .await
}

pub async fn count_shows<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    query_scalar("SELECT COUNT(*) FROM show")
        .fetch_one(executor)
        .await
}

/// Inserts a show linkage row; referential integrity is left to the foreign keys
pub async fn insert_show<'e, E>(executor: E, params: &ShowParams) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    query("INSERT INTO show (venue_id, artist_id, start_time) VALUES (?, ?, ?)")
        .bind(params.venue_id)
        .bind(params.artist_id)
        .bind(params.start_time)
        .execute(executor)
        .await?;

    Ok(())
}
