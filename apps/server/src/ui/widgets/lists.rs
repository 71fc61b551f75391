use chrono::NaiveDateTime;

use crate::ui::{escape, format_datetime, DateFormat};

/// One entry of a venue or artist list
pub struct ListItem<'a> {
    pub href: String,
    pub name: &'a str,
    pub image_link: Option<&'a str>,
    pub caption: Option<String>,
}

fn image(image_link: Option<&str>, alt: &str) -> String {
    image_link
        .map(|src| format!(r#"<img src="{}" alt="{}">"#, escape(src), escape(alt)))
        .unwrap_or_default()
}

pub fn items<'a>(items: impl IntoIterator<Item = ListItem<'a>>, empty: &str) -> String {
    let rendered: String = items
        .into_iter()
        .map(|item| {
            let caption = item
                .caption
                .map(|caption| format!(" <small>{}</small>", escape(&caption)))
                .unwrap_or_default();
            format!(
                r#"<li>{image}<a href="{href}">{name}</a>{caption}</li>"#,
                image = image(item.image_link, item.name),
                href = escape(&item.href),
                name = escape(item.name),
            )
        })
        .collect();

    if rendered.is_empty() {
        format!("<p>{}</p>", escape(empty))
    } else {
        format!(r#"<ul class="items">{rendered}</ul>"#)
    }
}

/// Labelled line of a detail page, omitted when the value is missing
pub fn detail_row(label: &str, value: Option<&str>) -> String {
    value
        .map(|value| format!("<p><strong>{label}:</strong> {}</p>", escape(value)))
        .unwrap_or_default()
}

/// One show as seen from the page of the entity hosting or performing it
pub struct ShowItem<'a> {
    pub href: String,
    pub name: &'a str,
    pub image_link: Option<&'a str>,
    pub start_time: NaiveDateTime,
}

pub fn show_section<'a>(heading: &str, shows: impl IntoIterator<Item = ShowItem<'a>>) -> String {
    let items = items(
        shows.into_iter().map(|show| ListItem {
            href: show.href,
            name: show.name,
            image_link: show.image_link,
            caption: Some(format_datetime(show.start_time, DateFormat::Full)),
        }),
        "No shows.",
    );
    format!("<section><h3>{}</h3>{items}</section>", escape(heading))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_items_render_links_without_image() {
        let html = items(
            [ListItem {
                href: "/artists/4".to_string(),
                name: "Guns N Petals",
                image_link: None,
                caption: None,
            }],
            "Nothing here.",
        );
        assert!(html.contains(r#"<a href="/artists/4">Guns N Petals</a>"#));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_empty_items() {
        assert_eq!(items(Vec::new(), "Nothing here."), "<p>Nothing here.</p>");
    }

    #[test]
    fn test_show_section_formats_start_time() {
        let start_time = NaiveDate::from_ymd_opt(2035, 4, 1)
            .and_then(|d| d.and_hms_opt(20, 0, 0))
            .expect("valid timestamp");
        let html = show_section(
            "1 Upcoming Shows",
            [ShowItem {
                href: "/venues/1".to_string(),
                name: "The Musical Hop",
                image_link: Some("https://example.com/hop.jpg"),
                start_time,
            }],
        );
        assert!(html.contains("<h3>1 Upcoming Shows</h3>"));
        assert!(html.contains("Sunday April, 1, 2035 at 8:00PM"));
    }
}
