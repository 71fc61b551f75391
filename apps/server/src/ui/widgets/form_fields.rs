use crate::app::ValidationErrors;
use crate::domain::{Genre, US_STATES};
use crate::ui::escape;

fn field_errors(errors: Option<&ValidationErrors>, name: &str) -> String {
    let messages = errors.map(|errors| errors.field(name)).unwrap_or_default();
    if messages.is_empty() {
        return String::new();
    }
    let items: String = messages
        .iter()
        .map(|message| format!("<li>{}</li>", escape(message)))
        .collect();
    format!(r#"<ul class="errors">{items}</ul>"#)
}

pub fn text_input(
    name: &str,
    label: &str,
    value: &str,
    errors: Option<&ValidationErrors>,
) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<input type="text" id="{name}" name="{name}" value="{value}">
{errors}"#,
        label = escape(label),
        value = escape(value),
        errors = field_errors(errors, name),
    )
}

pub fn checkbox(name: &str, label: &str, checked: bool) -> String {
    let checked = if checked { " checked" } else { "" };
    format!(
        r#"<label><input type="checkbox" name="{name}" value="y"{checked}> {label}</label>"#,
        label = escape(label),
    )
}

fn options<'a>(choices: impl Iterator<Item = &'a str>, is_selected: impl Fn(&str) -> bool) -> String {
    choices
        .map(|choice| {
            let selected = if is_selected(choice) { " selected" } else { "" };
            let choice = escape(choice);
            format!(r#"<option value="{choice}"{selected}>{choice}</option>"#)
        })
        .collect()
}

pub fn state_select(value: &str, errors: Option<&ValidationErrors>) -> String {
    format!(
        r#"<label for="state">State</label>
<select id="state" name="state"><option value="">--</option>{options}</select>
{errors}"#,
        options = options(US_STATES.into_iter(), |code| code.eq_ignore_ascii_case(value)),
        errors = field_errors(errors, "state"),
    )
}

pub fn genres_select(selected: &[String], errors: Option<&ValidationErrors>) -> String {
    format!(
        r#"<label for="genres">Genres</label>
<select id="genres" name="genres" multiple size="8">{options}</select>
{errors}"#,
        options = options(Genre::ALL.into_iter().map(Genre::as_str), |genre| {
            selected.iter().any(|s| s.eq_ignore_ascii_case(genre))
        }),
        errors = field_errors(errors, "genres"),
    )
}

/// Banner summarising every failing field above a form
pub fn error_summary(errors: Option<&ValidationErrors>) -> String {
    match errors {
        Some(errors) if !errors.is_empty() => format!(
            r#"<div class="flash error">Please correct the highlighted fields: {}</div>"#,
            escape(&errors.to_string())
        ),
        _ => String::new(),
    }
}
