use chrono::NaiveDateTime;

use crate::app::{Flash, FlashLevel};

const STYLE: &str = "
body { font-family: sans-serif; max-width: 1100px; margin: 0 auto; padding: 20px; }
nav { background: #222; padding: 10px; margin-bottom: 20px; }
nav a { color: #eee; margin-right: 20px; text-decoration: none; }
.flash { padding: 10px; margin-bottom: 20px; border-radius: 4px; }
.flash.success { background: #dff0d8; color: #3c763d; }
.flash.error { background: #f2dede; color: #a94442; }
.errors { color: #a94442; margin: 2px 0 8px; padding-left: 18px; }
.items { list-style: none; padding: 0; }
.items li { display: flex; align-items: center; margin-bottom: 8px; }
.items img { width: 60px; height: 60px; object-fit: cover; margin-right: 12px; }
label { display: block; margin-top: 10px; font-weight: bold; }
form.search { display: inline; }
";

/// Escapes text for use in HTML element content and quoted attributes
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `Sunday April, 1, 2035 at 8:00PM`
    Full,
    /// `Sun 04, 01, 2035 8:00PM`
    Medium,
}

pub fn format_datetime(value: NaiveDateTime, format: DateFormat) -> String {
    let pattern = match format {
        DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
        DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
    };
    value.format(pattern).to_string()
}

fn flash_banner(flash: Option<&Flash>) -> String {
    let Some((message, level)) = flash.and_then(|f| f.message().map(|m| (m, f.level))) else {
        return String::new();
    };
    let class = match level {
        FlashLevel::Success => "success",
        FlashLevel::Error => "error",
    };
    format!(
        r#"<div class="flash {class}">{}</div>"#,
        escape(message)
    )
}

/// Wraps a page body in the shared document chrome
pub fn page(title: &str, flash: Option<&Flash>, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title} | Fyyur</title>
    <style>{STYLE}</style>
</head>
<body>
    <nav>
        <a href="/">Fyyur</a>
        <a href="/venues">Venues</a>
        <a href="/artists">Artists</a>
        <a href="/shows">Shows</a>
        <a href="/venues/create">Post a venue</a>
        <a href="/artists/create">Post an artist</a>
        <a href="/shows/create">Post a show</a>
    </nav>
    {banner}
    <main>
{body}
    </main>
</body>
</html>
"#,
        title = escape(title),
        banner = flash_banner(flash),
    )
}
