use chrono::{NaiveDate, NaiveDateTime};
use color_eyre::eyre::eyre;
use color_eyre::Result;

use fyyur::app::Directory;
use fyyur::config::init_app_config;
use fyyur::db::create_database_pool;
use fyyur::db::models::{ArtistParams, ShowParams, VenueParams};
use fyyur::db::queries;

fn genres(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(|| eyre!("invalid show time {year}-{month}-{day} {hour}:{minute}"))
}

fn venues() -> [VenueParams; 3] {
    [
        VenueParams {
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: Some("123-123-1234".to_string()),
            genres: genres(&["Jazz", "Reggae", "Classical", "Folk"]),
            image_link: Some("https://images.unsplash.com/photo-1543900694-133f37abaaa5?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=400&q=60".to_string()),
            facebook_link: Some("https://www.facebook.com/TheMusicalHop".to_string()),
            website_link: Some("https://www.themusicalhop.com".to_string()),
            seeking_talent: true,
            seeking_description: Some("We are on the lookout for a local artist to play every two weeks. Please call us.".to_string()),
        },
        VenueParams {
            name: "The Dueling Pianos Bar".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            address: "335 Delancey Street".to_string(),
            phone: Some("914-003-1132".to_string()),
            genres: genres(&["Classical", "R&B", "Hip-Hop"]),
            image_link: Some("https://images.unsplash.com/photo-1497032205916-ac775f0649ae?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=750&q=80".to_string()),
            facebook_link: Some("https://www.facebook.com/theduelingpianos".to_string()),
            website_link: Some("https://www.theduelingpianos.com".to_string()),
            seeking_talent: false,
            seeking_description: None,
        },
        VenueParams {
            name: "Park Square Live Music & Coffee".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "34 Whiskey Moore Ave".to_string(),
            phone: Some("415-000-1234".to_string()),
            genres: genres(&["Rock n Roll", "Jazz", "Classical", "Folk"]),
            image_link: Some("https://images.unsplash.com/photo-1485686531765-ba63b07845a7?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=747&q=80".to_string()),
            facebook_link: Some("https://www.facebook.com/ParkSquareLiveMusicAndCoffee".to_string()),
            website_link: Some("https://www.parksquarelivemusicandcoffee.com".to_string()),
            seeking_talent: false,
            seeking_description: None,
        },
    ]
}

fn artists() -> [ArtistParams; 3] {
    [
        ArtistParams {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: Some("326-123-5000".to_string()),
            genres: genres(&["Rock n Roll"]),
            image_link: Some("https://images.unsplash.com/photo-1549213783-8284d0336c4f?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=300&q=80".to_string()),
            facebook_link: Some("https://www.facebook.com/GunsNPetals".to_string()),
            website_link: Some("https://www.gunsnpetalsband.com".to_string()),
            seeking_venue: true,
            seeking_description: Some("Looking for shows to perform at in the San Francisco Bay Area!".to_string()),
        },
        ArtistParams {
            name: "Matt Quevedo".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            phone: Some("300-400-5000".to_string()),
            genres: genres(&["Jazz"]),
            image_link: Some("https://images.unsplash.com/photo-1495223153807-b916f75de8c5?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=334&q=80".to_string()),
            facebook_link: Some("https://www.facebook.com/mattquevedo923251523".to_string()),
            website_link: None,
            seeking_venue: false,
            seeking_description: None,
        },
        ArtistParams {
            name: "The Wild Sax Band".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: Some("432-325-5432".to_string()),
            genres: genres(&["Jazz", "Classical"]),
            image_link: Some("https://images.unsplash.com/photo-1558369981-f9ca78462e61?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=794&q=80".to_string()),
            facebook_link: None,
            website_link: None,
            seeking_venue: false,
            seeking_description: None,
        },
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    println!("Seeding the Fyyur directory...");

    let config = init_app_config()?;
    let pool = create_database_pool(&config).await?;

    if queries::count_venues(&pool).await? > 0 {
        println!("Venues already exist, skipping seed data");
        pool.close().await;
        return Ok(());
    }

    let directory = Directory::new(pool.clone());

    let mut venue_ids = Vec::new();
    for venue in venues() {
        venue_ids.push(directory.create_venue(&venue).await?);
    }
    let mut artist_ids = Vec::new();
    for artist in artists() {
        artist_ids.push(directory.create_artist(&artist).await?);
    }

    // (venue, artist, start time) by position in the lists above
    let shows = [
        (0, 0, at(2019, 5, 21, 21, 30)?),
        (2, 1, at(2019, 6, 15, 23, 0)?),
        (2, 2, at(2035, 4, 1, 20, 0)?),
        (2, 2, at(2035, 4, 8, 20, 0)?),
        (2, 2, at(2035, 4, 15, 20, 0)?),
    ];
    for (venue, artist, start_time) in shows {
        directory
            .create_show(&ShowParams {
                venue_id: venue_ids[venue],
                artist_id: artist_ids[artist],
                start_time,
            })
            .await?;
    }

    println!(
        "Seeded {} venues, {} artists and {} shows",
        queries::count_venues(&pool).await?,
        queries::count_artists(&pool).await?,
        queries::count_shows(&pool).await?
    );

    pool.close().await;
    Ok(())
}
