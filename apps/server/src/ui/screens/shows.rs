use crate::app::{Flash, ShowForm, ValidationErrors};
use crate::db::models::ShowListing;
use crate::ui::widgets::form_fields::{error_summary, text_input};
use crate::ui::{escape, format_datetime, page, DateFormat};

pub fn index(shows: &[ShowListing], flash: Option<&Flash>) -> String {
    let rows: String = shows
        .iter()
        .map(|show| {
            let image = show
                .artist_image_link
                .as_deref()
                .map(|src| {
                    format!(
                        r#"<img src="{}" alt="{}">"#,
                        escape(src),
                        escape(&show.artist_name)
                    )
                })
                .unwrap_or_default();
            format!(
                r#"<li>{image}<div><a href="/artists/{artist_id}">{artist}</a> playing at <a href="/venues/{venue_id}">{venue}</a><br><small>{start}</small></div></li>"#,
                artist_id = show.artist_id,
                artist = escape(&show.artist_name),
                venue_id = show.venue_id,
                venue = escape(&show.venue_name),
                start = format_datetime(show.start_time, DateFormat::Medium),
            )
        })
        .collect();

    let body = if rows.is_empty() {
        "<h1>Shows</h1><p>No shows listed yet.</p>".to_string()
    } else {
        format!(r#"<h1>Shows</h1><ul class="items">{rows}</ul>"#)
    };
    page("Shows", flash, &body)
}

pub fn form(form: &ShowForm, errors: Option<&ValidationErrors>) -> String {
    let body = format!(
        r#"<h1>List a new show</h1>
{summary}
<form method="post" action="/shows/create">
{artist}{venue}{start}
<p><button type="submit">Create show</button></p>
</form>"#,
        summary = error_summary(errors),
        artist = text_input("artist_id", "Artist ID", &form.artist_id, errors),
        venue = text_input("venue_id", "Venue ID", &form.venue_id, errors),
        start = text_input("start_time", "Start time", &form.start_time, errors),
    );
    page("List a new show", None, &body)
}
