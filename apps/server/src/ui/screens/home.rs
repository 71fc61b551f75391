use crate::app::{Flash, RecentListings};
use crate::ui::page;
use crate::ui::widgets::lists::{items, ListItem};

pub fn render(listings: &RecentListings, flash: Option<&Flash>) -> String {
    let artists = items(
        listings.artists.iter().map(|artist| ListItem {
            href: format!("/artists/{}", artist.id),
            name: &artist.name,
            image_link: artist.image_link.as_deref(),
            caption: None,
        }),
        "No artists listed yet.",
    );
    let venues = items(
        listings.venues.iter().map(|venue| ListItem {
            href: format!("/venues/{}", venue.id),
            name: &venue.name,
            image_link: venue.image_link.as_deref(),
            caption: Some(format!("{}, {}", venue.city, venue.state)),
        }),
        "No venues listed yet.",
    );

    let body = format!(
        r#"<h1>Fyyur</h1>
<p>Find and book local venues and artists.</p>
<section><h2>Recently listed artists</h2>{artists}</section>
<section><h2>Recently listed venues</h2>{venues}</section>"#
    );
    page("Home", flash, &body)
}
