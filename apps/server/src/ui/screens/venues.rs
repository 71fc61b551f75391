use crate::app::{Flash, ValidationErrors, VenueDetail, VenueForm};
use crate::catalog::{Area, SearchResults};
use crate::db::models::{ArtistShow, VenueRecord};
use crate::ui::widgets::form_fields::{
    checkbox, error_summary, genres_select, state_select, text_input,
};
use crate::ui::widgets::lists::{detail_row, items, show_section, ListItem, ShowItem};
use crate::ui::{escape, page};

fn search_box(term: &str) -> String {
    format!(
        r#"<form class="search" method="post" action="/venues/search">
<input type="search" name="search_term" placeholder="Find a venue" value="{}">
<button type="submit">Search</button>
</form>"#,
        escape(term)
    )
}

pub fn index(areas: &[Area], flash: Option<&Flash>) -> String {
    let groups: String = areas
        .iter()
        .map(|area| {
            let venues = items(
                area.venues.iter().map(|venue| ListItem {
                    href: format!("/venues/{}", venue.id),
                    name: &venue.name,
                    image_link: None,
                    caption: None,
                }),
                "",
            );
            format!(
                "<section><h3>{}, {}</h3>{venues}</section>",
                escape(&area.city),
                escape(&area.state)
            )
        })
        .collect();
    let groups = if groups.is_empty() {
        "<p>No venues listed yet.</p>".to_string()
    } else {
        groups
    };

    let body = format!("<h1>Venues</h1>{}{groups}", search_box(""));
    page("Venues", flash, &body)
}

pub fn search(results: &SearchResults<VenueRecord>, term: &str) -> String {
    let found = items(
        results.data.iter().map(|venue| ListItem {
            href: format!("/venues/{}", venue.id),
            name: &venue.name,
            image_link: venue.image_link.as_deref(),
            caption: None,
        }),
        "No venues matched.",
    );
    let body = format!(
        r#"{search}<h3>Number of search results for "{term}": {count}</h3>{found}"#,
        search = search_box(term),
        term = escape(term),
        count = results.count,
    );
    page("Venue search", None, &body)
}

fn show_items(shows: &[ArtistShow]) -> impl Iterator<Item = ShowItem<'_>> {
    shows.iter().map(|show| ShowItem {
        href: format!("/artists/{}", show.artist_id),
        name: &show.artist_name,
        image_link: show.artist_image_link.as_deref(),
        start_time: show.start_time,
    })
}

pub fn detail(detail: &VenueDetail, flash: Option<&Flash>) -> String {
    let venue = &detail.venue;
    let seeking = if venue.seeking_talent {
        format!(
            "<p><strong>Currently seeking talent</strong> {}</p>",
            escape(venue.seeking_description.as_deref().unwrap_or_default())
        )
    } else {
        "<p>Not currently seeking talent</p>".to_string()
    };
    let body = format!(
        r#"<h1>{name}</h1>
<p>{genres}</p>
<p>{address}, {city}, {state}</p>
{phone}{website}{facebook}{seeking}
<p><a href="/venues/{id}/edit">Edit</a></p>
<form method="post" action="/venues/{id}"><button type="submit">Delete venue</button></form>
{upcoming}
{past}"#,
        name = escape(&venue.name),
        genres = escape(&venue.genres.0.join(", ")),
        address = escape(&venue.address),
        city = escape(&venue.city),
        state = escape(&venue.state),
        phone = detail_row("Phone", venue.phone.as_deref()),
        website = detail_row("Website", venue.website_link.as_deref()),
        facebook = detail_row("Facebook", venue.facebook_link.as_deref()),
        id = venue.id,
        upcoming = show_section(
            &format!("{} Upcoming Shows", detail.shows.upcoming_shows_count()),
            show_items(&detail.shows.upcoming),
        ),
        past = show_section(
            &format!("{} Past Shows", detail.shows.past_shows_count()),
            show_items(&detail.shows.past),
        ),
    );
    page(&venue.name, flash, &body)
}

/// Create form when `id` is `None`, edit form for that venue otherwise
pub fn form(form: &VenueForm, id: Option<i64>, errors: Option<&ValidationErrors>) -> String {
    let (title, action) = match id {
        Some(id) => (format!("Edit venue {}", form.name), format!("/venues/{id}/edit")),
        None => ("List a new venue".to_string(), "/venues/create".to_string()),
    };

    let body = format!(
        r#"<h1>{heading}</h1>
{summary}
<form method="post" action="{action}">
{name}{city}{state}{address}{phone}{genres}{image}{facebook}{website}
{seeking}
{description}
<p><button type="submit">{button}</button></p>
</form>"#,
        heading = escape(&title),
        summary = error_summary(errors),
        name = text_input("name", "Name", &form.name, errors),
        city = text_input("city", "City", &form.city, errors),
        state = state_select(&form.state, errors),
        address = text_input("address", "Address", &form.address, errors),
        phone = text_input("phone", "Phone", &form.phone, errors),
        genres = genres_select(&form.genres, errors),
        image = text_input("image_link", "Image link", &form.image_link, errors),
        facebook = text_input("facebook_link", "Facebook link", &form.facebook_link, errors),
        website = text_input("website_link", "Website link", &form.website_link, errors),
        seeking = checkbox("seeking_talent", "Seeking talent", form.seeking_talent),
        description = text_input(
            "seeking_description",
            "Seeking description",
            &form.seeking_description,
            errors,
        ),
        button = if id.is_some() { "Save venue" } else { "Create venue" },
    );
    page(&title, None, &body)
}
