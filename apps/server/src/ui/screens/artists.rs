use crate::app::{ArtistDetail, ArtistForm, Flash, ValidationErrors};
use crate::catalog::SearchResults;
use crate::db::models::{ArtistRecord, VenueShow};
use crate::ui::widgets::form_fields::{
    checkbox, error_summary, genres_select, state_select, text_input,
};
use crate::ui::widgets::lists::{detail_row, items, show_section, ListItem, ShowItem};
use crate::ui::{escape, page};

fn search_box(term: &str) -> String {
    format!(
        r#"<form class="search" method="post" action="/artists/search">
<input type="search" name="search_term" placeholder="Find an artist" value="{}">
<button type="submit">Search</button>
</form>"#,
        escape(term)
    )
}

fn artist_items(artists: &[ArtistRecord]) -> impl Iterator<Item = ListItem<'_>> {
    artists.iter().map(|artist| ListItem {
        href: format!("/artists/{}", artist.id),
        name: &artist.name,
        image_link: artist.image_link.as_deref(),
        caption: None,
    })
}

pub fn index(artists: &[ArtistRecord], flash: Option<&Flash>) -> String {
    let body = format!(
        "<h1>Artists</h1>{}{}",
        search_box(""),
        items(artist_items(artists), "No artists listed yet.")
    );
    page("Artists", flash, &body)
}

pub fn search(results: &SearchResults<ArtistRecord>, term: &str) -> String {
    let body = format!(
        r#"{search}<h3>Number of search results for "{term}": {count}</h3>{found}"#,
        search = search_box(term),
        term = escape(term),
        count = results.count,
        found = items(artist_items(&results.data), "No artists matched."),
    );
    page("Artist search", None, &body)
}

fn show_items(shows: &[VenueShow]) -> impl Iterator<Item = ShowItem<'_>> {
    shows.iter().map(|show| ShowItem {
        href: format!("/venues/{}", show.venue_id),
        name: &show.venue_name,
        image_link: show.venue_image_link.as_deref(),
        start_time: show.start_time,
    })
}

pub fn detail(detail: &ArtistDetail, flash: Option<&Flash>) -> String {
    let artist = &detail.artist;
    let seeking = if artist.seeking_venue {
        format!(
            "<p><strong>Currently seeking performance venues</strong> {}</p>",
            escape(artist.seeking_description.as_deref().unwrap_or_default())
        )
    } else {
        "<p>Not currently seeking performance venues</p>".to_string()
    };

    let body = format!(
        r#"<h1>{name}</h1>
<p>{genres}</p>
<p>{city}, {state}</p>
{phone}{website}{facebook}{seeking}
<p><a href="/artists/{id}/edit">Edit</a></p>
{upcoming}
{past}"#,
        name = escape(&artist.name),
        genres = escape(&artist.genres.0.join(", ")),
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = detail_row("Phone", artist.phone.as_deref()),
        website = detail_row("Website", artist.website_link.as_deref()),
        facebook = detail_row("Facebook", artist.facebook_link.as_deref()),
        id = artist.id,
        upcoming = show_section(
            &format!("{} Upcoming Shows", detail.shows.upcoming_shows_count()),
            show_items(&detail.shows.upcoming),
        ),
        past = show_section(
            &format!("{} Past Shows", detail.shows.past_shows_count()),
            show_items(&detail.shows.past),
        ),
    );
    page(&artist.name, flash, &body)
}

/// Create form when `id` is `None`, edit form for that artist otherwise
pub fn form(form: &ArtistForm, id: Option<i64>, errors: Option<&ValidationErrors>) -> String {
    let (title, action) = match id {
        Some(id) => (format!("Edit artist {}", form.name), format!("/artists/{id}/edit")),
        None => ("List a new artist".to_string(), "/artists/create".to_string()),
    };

    let body = format!(
        r#"<h1>{heading}</h1>
{summary}
<form method="post" action="{action}">
{name}{city}{state}{phone}{genres}{image}{facebook}{website}
{seeking}
{description}
<p><button type="submit">{button}</button></p>
</form>"#,
        heading = escape(&title),
        summary = error_summary(errors),
        name = text_input("name", "Name", &form.name, errors),
        city = text_input("city", "City", &form.city, errors),
        state = state_select(&form.state, errors),
        phone = text_input("phone", "Phone", &form.phone, errors),
        genres = genres_select(&form.genres, errors),
        image = text_input("image_link", "Image link", &form.image_link, errors),
        facebook = text_input("facebook_link", "Facebook link", &form.facebook_link, errors),
        website = text_input("website_link", "Website link", &form.website_link, errors),
        seeking = checkbox("seeking_venue", "Seeking venues", form.seeking_venue),
        description = text_input(
            "seeking_description",
            "Seeking description",
            &form.seeking_description,
            errors,
        ),
        button = if id.is_some() { "Save artist" } else { "Create artist" },
    );
    page(&title, None, &body)
}
