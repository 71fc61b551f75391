use chrono::NaiveDateTime;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{error, info, warn};

use crate::catalog::{
    group_by_area, partition_shows, search_by_name, Area, SearchResults, ShowPartition,
};
use crate::db::models::{
    ArtistParams, ArtistRecord, ArtistShow, ShowListing, ShowParams, VenueParams, VenueRecord,
    VenueShow,
};
use crate::db::queries;
use crate::error::{AppError, AppResult, Entity};

/// A venue with its shows split around the time of the request
#[derive(Debug, Clone)]
pub struct VenueDetail {
    pub venue: VenueRecord,
    pub shows: ShowPartition<ArtistShow>,
}

/// An artist with its shows split around the time of the request
#[derive(Debug, Clone)]
pub struct ArtistDetail {
    pub artist: ArtistRecord,
    pub shows: ShowPartition<VenueShow>,
}

#[derive(Debug, Clone)]
pub struct RecentListings {
    pub artists: Vec<ArtistRecord>,
    pub venues: Vec<VenueRecord>,
}

/// Storage handle shared by every request handler.
#[derive(Debug, Clone)]
pub struct Directory {
    pool: SqlitePool,
}

impl Directory {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn begin(&self) -> AppResult<Transaction<'static, Sqlite>> {
        self.pool.begin().await.map_err(|e| {
            error!(error = %e, "could not start transaction");
            AppError::Persistence(e)
        })
    }

    pub async fn recent_listings(&self, limit: i64) -> AppResult<RecentListings> {
        let artists = queries::recent_artists(&self.pool, limit).await?;
        let venues = queries::recent_venues(&self.pool, limit).await?;
        Ok(RecentListings { artists, venues })
    }

    // Venues

    pub async fn venue_areas(&self) -> AppResult<Vec<Area>> {
        let venues = queries::get_venues(&self.pool).await?;
        Ok(group_by_area(&venues))
    }

    pub async fn search_venues(&self, term: &str) -> AppResult<SearchResults<VenueRecord>> {
        let venues = queries::get_venues(&self.pool).await?;
        Ok(search_by_name(venues, term, |venue| venue.name.as_str()))
    }

    pub async fn venue(&self, id: i64) -> AppResult<VenueRecord> {
        queries::get_venue_by_id(&self.pool, id)
            .await?
            .ok_or(AppError::not_found(Entity::Venue, id))
    }

    pub async fn venue_detail(&self, id: i64, now: NaiveDateTime) -> AppResult<VenueDetail> {
        let venue = self.venue(id).await?;
        let shows = queries::get_shows_for_venue(&self.pool, id).await?;
        Ok(VenueDetail {
            venue,
            shows: partition_shows(shows, now),
        })
    }

    pub async fn create_venue(&self, params: &VenueParams) -> AppResult<i64> {
        let mut tx = self.begin().await?;
        let result = queries::insert_venue(&mut *tx, params).await;
        let id = finish(tx, result).await?;
        info!(venue_id = id, name = %params.name, "venue listed");
        Ok(id)
    }

    pub async fn update_venue(&self, id: i64, params: &VenueParams) -> AppResult<()> {
        let mut tx = self.begin().await?;
        let result = queries::update_venue(&mut *tx, id, params).await;
        if finish(tx, result).await? == 0 {
            warn!(venue_id = id, "venue not found, nothing updated");
            return Err(AppError::not_found(Entity::Venue, id));
        }
        info!(venue_id = id, "venue updated");
        Ok(())
    }

    pub async fn delete_venue(&self, id: i64) -> AppResult<()> {
        let mut tx = self.begin().await?;
        let lookup = queries::get_venue_by_id(&mut *tx, id).await;
        let existing = match lookup {
            Ok(existing) => existing,
            Err(e) => return finish(tx, Err(e)).await,
        };
        if existing.is_none() {
            warn!(venue_id = id, "venue not found, nothing deleted");
            return Err(AppError::not_found(Entity::Venue, id));
        }
        let result = queries::delete_venue(&mut *tx, id).await;
        finish(tx, result).await?;
        info!(venue_id = id, "venue deleted");
        Ok(())
    }

    // Artists

    pub async fn artists(&self) -> AppResult<Vec<ArtistRecord>> {
        Ok(queries::get_artists(&self.pool).await?)
    }

    pub async fn search_artists(&self, term: &str) -> AppResult<SearchResults<ArtistRecord>> {
        let artists = queries::get_artists(&self.pool).await?;
        Ok(search_by_name(artists, term, |artist| artist.name.as_str()))
    }

    pub async fn artist(&self, id: i64) -> AppResult<ArtistRecord> {
        queries::get_artist_by_id(&self.pool, id)
            .await?
            .ok_or(AppError::not_found(Entity::Artist, id))
    }

    pub async fn artist_detail(&self, id: i64, now: NaiveDateTime) -> AppResult<ArtistDetail> {
        let artist = self.artist(id).await?;
        let shows = queries::get_shows_for_artist(&self.pool, id).await?;
        Ok(ArtistDetail {
            artist,
            shows: partition_shows(shows, now),
        })
    }

    pub async fn create_artist(&self, params: &ArtistParams) -> AppResult<i64> {
        let mut tx = self.begin().await?;
        let result = queries::insert_artist(&mut *tx, params).await;
        let id = finish(tx, result).await?;
        info!(artist_id = id, name = %params.name, "artist listed");
        Ok(id)
    }

    pub async fn update_artist(&self, id: i64, params: &ArtistParams) -> AppResult<()> {
        let mut tx = self.begin().await?;
        let result = queries::update_artist(&mut *tx, id, params).await;
        if finish(tx, result).await? == 0 {
            warn!(artist_id = id, "artist not found, nothing updated");
            return Err(AppError::not_found(Entity::Artist, id));
        }
        info!(artist_id = id, "artist updated");
        Ok(())
    }

    // Shows

    pub async fn shows(&self) -> AppResult<Vec<ShowListing>> {
        Ok(queries::get_shows(&self.pool).await?)
    }

    pub async fn create_show(&self, params: &ShowParams) -> AppResult<()> {
        let mut tx = self.begin().await?;
        let result = queries::insert_show(&mut *tx, params).await;
        finish(tx, result).await?;
        info!(
            venue_id = params.venue_id,
            artist_id = params.artist_id,
            start_time = %params.start_time,
            "show listed"
        );
        Ok(())
    }
}

/// Commits when the write succeeded and rolls back otherwise. The transaction
/// is consumed either way, returning its connection to the pool.
async fn finish<T>(
    tx: Transaction<'static, Sqlite>,
    result: Result<T, sqlx::Error>,
) -> AppResult<T> {
    match result {
        Ok(value) => match tx.commit().await {
            Ok(()) => Ok(value),
            Err(e) => {
                error!(error = %e, "commit failed");
                Err(AppError::Persistence(e))
            }
        },
        Err(e) => {
            error!(error = %e, "write failed, rolling back");
            if let Err(rollback_error) = tx.rollback().await {
                error!(error = %rollback_error, "rollback failed");
            }
            Err(AppError::Persistence(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::create_in_memory_pool;
    use chrono::NaiveDate;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    struct BufferWriter(Arc<Mutex<Vec<u8>>>);

    impl<'a> MakeWriter<'a> for SharedBuffer {
        type Writer = BufferWriter;

        fn make_writer(&'a self) -> Self::Writer {
            BufferWriter(Arc::clone(&self.0))
        }
    }

    impl io::Write for BufferWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let mut guard = self
                .0
                .lock()
                .map_err(|_| io::Error::new(io::ErrorKind::Other, "lock poisoned"))?;
            guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn text(&self) -> String {
            let bytes = self.0.lock().expect("lock output").clone();
            String::from_utf8(bytes).expect("utf8 log output")
        }
    }

    fn capture_logs() -> (SharedBuffer, tracing::subscriber::DefaultGuard) {
        let sink = SharedBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(sink.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (sink, guard)
    }

    fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .expect("valid timestamp")
    }

    fn venue_params(name: &str, city: &str, state: &str) -> VenueParams {
        VenueParams {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: "335 Delancey Street".to_string(),
            phone: None,
            genres: vec!["Classical".to_string()],
            image_link: None,
            facebook_link: None,
            website_link: None,
            seeking_talent: false,
            seeking_description: None,
        }
    }

    fn artist_params(name: &str) -> ArtistParams {
        ArtistParams {
            name: name.to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            phone: Some("300-400-5000".to_string()),
            genres: vec!["Jazz".to_string()],
            image_link: None,
            facebook_link: None,
            website_link: None,
            seeking_venue: false,
            seeking_description: None,
        }
    }

    async fn directory() -> Directory {
        Directory::new(create_in_memory_pool().await.expect("in-memory pool"))
    }

    #[tokio::test]
    async fn test_create_venue_adds_exactly_one_row() -> Result<(), Box<dyn std::error::Error>> {
        let directory = directory().await;
        let before = queries::count_venues(directory.pool()).await?;

        let id = directory
            .create_venue(&venue_params("The Dueling Pianos Bar", "New York", "NY"))
            .await?;

        assert_eq!(queries::count_venues(directory.pool()).await?, before + 1);
        assert_eq!(directory.venue(id).await?.name, "The Dueling Pianos Bar");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_venue_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
        let directory = directory().await;
        directory
            .create_venue(&venue_params("The Musical Hop", "San Francisco", "CA"))
            .await?;

        let result = directory.delete_venue(42).await;

        assert!(matches!(
            result,
            Err(AppError::NotFound {
                entity: Entity::Venue,
                id: 42
            })
        ));
        assert_eq!(queries::count_venues(directory.pool()).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_venue() -> Result<(), Box<dyn std::error::Error>> {
        let directory = directory().await;
        let id = directory
            .create_venue(&venue_params("The Musical Hop", "San Francisco", "CA"))
            .await?;

        directory.delete_venue(id).await?;

        assert_eq!(queries::count_venues(directory.pool()).await?, 0);
        assert!(matches!(
            directory.venue(id).await,
            Err(AppError::NotFound { .. })
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_entities() -> Result<(), Box<dyn std::error::Error>> {
        let directory = directory().await;

        let venue = directory
            .update_venue(7, &venue_params("Nowhere", "New York", "NY"))
            .await;
        let artist = directory.update_artist(7, &artist_params("Nobody")).await;

        assert!(matches!(venue, Err(AppError::NotFound { .. })));
        assert!(matches!(
            artist,
            Err(AppError::NotFound {
                entity: Entity::Artist,
                ..
            })
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_artist_overwrites_fields() -> Result<(), Box<dyn std::error::Error>> {
        let directory = directory().await;
        let id = directory.create_artist(&artist_params("Matt Quevedo")).await?;

        let mut params = artist_params("Matt Quevedo Trio");
        params.seeking_venue = true;
        params.seeking_description = Some("Booking for the fall".to_string());
        directory.update_artist(id, &params).await?;

        let artist = directory.artist(id).await?;
        assert_eq!(artist.name, "Matt Quevedo Trio");
        assert!(artist.seeking_venue);
        assert_eq!(
            artist.seeking_description.as_deref(),
            Some("Booking for the fall")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_venue_detail_partitions_shows() -> Result<(), Box<dyn std::error::Error>> {
        let directory = directory().await;
        let venue_id = directory
            .create_venue(&venue_params("Park Square", "San Francisco", "CA"))
            .await?;
        let past_artist = directory.create_artist(&artist_params("Matt Quevedo")).await?;
        let future_artist = directory
            .create_artist(&artist_params("The Wild Sax Band"))
            .await?;

        for (artist_id, start_time) in [
            (past_artist, at(2019, 6, 15, 23)),
            (future_artist, at(2035, 4, 1, 20)),
            (future_artist, at(2035, 4, 8, 20)),
        ] {
            directory
                .create_show(&ShowParams {
                    venue_id,
                    artist_id,
                    start_time,
                })
                .await?;
        }

        let detail = directory.venue_detail(venue_id, at(2024, 1, 1, 0)).await?;
        assert_eq!(detail.shows.past_shows_count(), 1);
        assert_eq!(detail.shows.upcoming_shows_count(), 2);
        assert_eq!(detail.shows.past[0].artist_name, "Matt Quevedo");

        let artist = directory
            .artist_detail(future_artist, at(2035, 4, 5, 0))
            .await?;
        assert_eq!(artist.shows.past_shows_count(), 1);
        assert_eq!(artist.shows.upcoming_shows_count(), 1);
        assert_eq!(artist.shows.upcoming[0].venue_name, "Park Square");

        Ok(())
    }

    #[tokio::test]
    async fn test_detail_of_missing_entities() {
        let directory = directory().await;
        let now = at(2024, 1, 1, 0);

        assert!(matches!(
            directory.venue_detail(1, now).await,
            Err(AppError::NotFound { .. })
        ));
        assert!(matches!(
            directory.artist_detail(1, now).await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_create_show_with_missing_venue_rolls_back() -> Result<(), Box<dyn std::error::Error>>
    {
        let directory = directory().await;
        let artist_id = directory.create_artist(&artist_params("Guns N Petals")).await?;

        let result = directory
            .create_show(&ShowParams {
                venue_id: 99,
                artist_id,
                start_time: at(2019, 5, 21, 21),
            })
            .await;

        assert!(matches!(result, Err(AppError::Persistence(_))));
        assert_eq!(queries::count_shows(directory.pool()).await?, 0);
        // the connection went back to the pool
        directory
            .create_venue(&venue_params("The Musical Hop", "San Francisco", "CA"))
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_search_and_areas() -> Result<(), Box<dyn std::error::Error>> {
        let directory = directory().await;
        for (name, city, state) in [
            ("The Musical Hop", "San Francisco", "CA"),
            ("Park Square Live Music & Coffee", "San Francisco", "CA"),
            ("The Dueling Pianos Bar", "New York", "NY"),
        ] {
            directory
                .create_venue(&venue_params(name, city, state))
                .await?;
        }
        for name in ["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"] {
            directory.create_artist(&artist_params(name)).await?;
        }

        let areas = directory.venue_areas().await?;
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].venues.len(), 2);
        assert_eq!(areas[1].city, "New York");

        let music = directory.search_venues("Music").await?;
        assert_eq!(music.count, 2);
        assert_eq!(directory.search_venues("hop").await?.data[0].name, "The Musical Hop");

        let bands = directory.search_artists("band").await?;
        assert_eq!(bands.count, 1);
        assert_eq!(bands.data[0].name, "The Wild Sax Band");
        assert_eq!(directory.search_artists("").await?.count, 3);

        let recent = directory.recent_listings(10).await?;
        assert_eq!(recent.venues[0].name, "The Dueling Pianos Bar");
        assert_eq!(recent.artists.len(), 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_not_found_writes_are_logged() -> Result<(), Box<dyn std::error::Error>> {
        let (logs, _guard) = capture_logs();
        let directory = directory().await;

        assert!(directory.delete_venue(42).await.is_err());
        assert!(directory
            .update_venue(7, &venue_params("Nowhere", "New York", "NY"))
            .await
            .is_err());
        assert!(directory
            .update_artist(8, &artist_params("Nobody"))
            .await
            .is_err());

        let text = logs.text();
        assert!(text.contains("WARN"));
        assert!(text.contains("venue not found, nothing deleted"));
        assert!(text.contains("venue_id=7"));
        assert!(text.contains("artist not found, nothing updated"));

        Ok(())
    }

    #[tokio::test]
    async fn test_failed_transaction_start_is_logged() {
        let (logs, _guard) = capture_logs();
        let directory = directory().await;
        directory.pool().close().await;

        let result = directory
            .create_venue(&venue_params("The Musical Hop", "San Francisco", "CA"))
            .await;

        assert!(matches!(result, Err(AppError::Persistence(_))));
        let text = logs.text();
        assert!(text.contains("ERROR"));
        assert!(text.contains("could not start transaction"));
    }

    #[tokio::test]
    async fn test_failed_write_is_logged() -> Result<(), Box<dyn std::error::Error>> {
        let (logs, _guard) = capture_logs();
        let directory = directory().await;

        let result = directory
            .create_show(&ShowParams {
                venue_id: 99,
                artist_id: 99,
                start_time: at(2035, 4, 1, 20),
            })
            .await;

        assert!(matches!(result, Err(AppError::Persistence(_))));
        assert!(logs.text().contains("write failed, rolling back"));

        Ok(())
    }
}
