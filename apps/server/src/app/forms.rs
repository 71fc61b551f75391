use std::collections::BTreeMap;
use std::fmt;

use chrono::{Local, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::db::models::{ArtistParams, ArtistRecord, ShowParams, VenueParams, VenueRecord};
use crate::domain::{parse_state, Genre};

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?[0-9]{3}\)?[-. ]?[0-9]{3}[-. ]?[0-9]{4}$").expect("valid phone regex")
});
static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i)https?://[^\s/$.?#][^\s]*$").expect("valid url regex"));

const REQUIRED: &str = "This field is required.";
const INVALID_URL: &str = "Invalid URL.";
const INVALID_PHONE: &str = "Invalid phone number.";
const INVALID_CHOICE: &str = "Not a valid choice.";

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const ACCEPTED_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Field-level validation messages, keyed by form field name
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, Vec<String>>);

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map_or(&[][..], Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> + '_ {
        self.0.iter().map(|(field, messages)| (*field, messages.as_slice()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in self.iter() {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Submitted `application/x-www-form-urlencoded` pairs, in submission order.
/// Repeated keys (multi-selects) are kept.
#[derive(Debug, Default, Clone)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub const fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// First value submitted for `key`, or an empty string
    pub fn text(&self, key: &str) -> String {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.trim().to_string())
            .unwrap_or_default()
    }

    pub fn all(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, v)| k == key && !v.trim().is_empty())
            .map(|(_, v)| v.trim().to_string())
            .collect()
    }

    /// HTML checkboxes are only submitted when ticked
    pub fn checkbox(&self, key: &str) -> bool {
        self.0.iter().any(|(k, v)| {
            k == key && matches!(v.trim().to_lowercase().as_str(), "y" | "on" | "true" | "1")
        })
    }
}

fn required(errors: &mut ValidationErrors, field: &'static str, value: &str) -> String {
    if value.is_empty() {
        errors.add(field, REQUIRED);
    }
    value.to_string()
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn optional_url(errors: &mut ValidationErrors, field: &'static str, value: &str) -> Option<String> {
    let value = optional(value)?;
    if !URL_RE.is_match(&value) {
        errors.add(field, INVALID_URL);
    }
    Some(value)
}

fn optional_phone(errors: &mut ValidationErrors, value: &str) -> Option<String> {
    let value = optional(value)?;
    if !PHONE_RE.is_match(&value) {
        errors.add("phone", INVALID_PHONE);
    }
    Some(value)
}

fn state_choice(errors: &mut ValidationErrors, value: &str) -> String {
    if value.is_empty() {
        errors.add("state", REQUIRED);
        return String::new();
    }
    parse_state(value).map_or_else(
        || {
            errors.add("state", INVALID_CHOICE);
            value.to_string()
        },
        str::to_string,
    )
}

fn genre_choices(errors: &mut ValidationErrors, values: &[String]) -> Vec<String> {
    if values.is_empty() {
        errors.add("genres", REQUIRED);
    }
    values
        .iter()
        .map(|value| {
            Genre::parse(value).map_or_else(
                || {
                    errors.add("genres", format!("'{value}' is not a valid choice."));
                    value.clone()
                },
                |genre| genre.as_str().to_string(),
            )
        })
        .collect()
}

fn finish<T>(errors: ValidationErrors, params: T) -> Result<T, ValidationErrors> {
    if errors.is_empty() {
        Ok(params)
    } else {
        Err(errors)
    }
}

/// The venue listing form as submitted, before validation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl VenueForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state"),
            address: fields.text("address"),
            phone: fields.text("phone"),
            genres: fields.all("genres"),
            image_link: fields.text("image_link"),
            facebook_link: fields.text("facebook_link"),
            website_link: fields.text("website_link"),
            seeking_talent: fields.checkbox("seeking_talent"),
            seeking_description: fields.text("seeking_description"),
        }
    }

    /// Pre-populates the edit form from a stored venue
    pub fn from_record(venue: &VenueRecord) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            genres: venue.genres.0.clone(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            website_link: venue.website_link.clone().unwrap_or_default(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<VenueParams, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let params = VenueParams {
            name: required(&mut errors, "name", &self.name),
            city: required(&mut errors, "city", &self.city),
            state: state_choice(&mut errors, &self.state),
            address: required(&mut errors, "address", &self.address),
            phone: optional_phone(&mut errors, &self.phone),
            genres: genre_choices(&mut errors, &self.genres),
            image_link: optional_url(&mut errors, "image_link", &self.image_link),
            facebook_link: optional_url(&mut errors, "facebook_link", &self.facebook_link),
            website_link: optional_url(&mut errors, "website_link", &self.website_link),
            seeking_talent: self.seeking_talent,
            seeking_description: optional(&self.seeking_description),
        };

        finish(errors, params)
    }
}

/// The artist listing form as submitted, before validation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.text("name"),
            city: fields.text("city"),
            state: fields.text("state"),
            phone: fields.text("phone"),
            genres: fields.all("genres"),
            image_link: fields.text("image_link"),
            facebook_link: fields.text("facebook_link"),
            website_link: fields.text("website_link"),
            seeking_venue: fields.checkbox("seeking_venue"),
            seeking_description: fields.text("seeking_description"),
        }
    }

    pub fn from_record(artist: &ArtistRecord) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            genres: artist.genres.0.clone(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            website_link: artist.website_link.clone().unwrap_or_default(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<ArtistParams, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let params = ArtistParams {
            name: required(&mut errors, "name", &self.name),
            city: required(&mut errors, "city", &self.city),
            state: state_choice(&mut errors, &self.state),
            phone: optional_phone(&mut errors, &self.phone),
            genres: genre_choices(&mut errors, &self.genres),
            image_link: optional_url(&mut errors, "image_link", &self.image_link),
            facebook_link: optional_url(&mut errors, "facebook_link", &self.facebook_link),
            website_link: optional_url(&mut errors, "website_link", &self.website_link),
            seeking_venue: self.seeking_venue,
            seeking_description: optional(&self.seeking_description),
        };

        finish(errors, params)
    }
}

/// The show listing form as submitted, before validation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    /// A blank form whose start time defaults to the current local time
    pub fn blank() -> Self {
        Self {
            start_time: Local::now().naive_local().format(DATETIME_FORMAT).to_string(),
            ..Self::default()
        }
    }

    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            artist_id: fields.text("artist_id"),
            venue_id: fields.text("venue_id"),
            start_time: fields.text("start_time"),
        }
    }

    pub fn validate(&self) -> Result<ShowParams, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let artist_id = parse_id(&mut errors, "artist_id", &self.artist_id);
        let venue_id = parse_id(&mut errors, "venue_id", &self.venue_id);
        let start_time = parse_start_time(&mut errors, &self.start_time);

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) if errors.is_empty() => {
                Ok(ShowParams {
                    venue_id,
                    artist_id,
                    start_time,
                })
            }
            _ => Err(errors),
        }
    }
}

fn parse_id(errors: &mut ValidationErrors, field: &'static str, value: &str) -> Option<i64> {
    if value.is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add(field, "Not a valid integer value.");
            None
        }
    }
}

fn parse_start_time(errors: &mut ValidationErrors, value: &str) -> Option<NaiveDateTime> {
    if value.is_empty() {
        errors.add("start_time", REQUIRED);
        return None;
    }
    let parsed = ACCEPTED_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok());
    if parsed.is_none() {
        errors.add("start_time", "Not a valid datetime value.");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        FormFields::new(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    fn valid_venue_fields() -> FormFields {
        fields(&[
            ("name", "The Musical Hop"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("address", "1015 Folsom Street"),
            ("phone", "123-123-1234"),
            ("genres", "Jazz"),
            ("genres", "reggae"),
            ("image_link", ""),
            ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
            ("website_link", "https://www.themusicalhop.com"),
            ("seeking_talent", "y"),
            ("seeking_description", "We are on the lookout for a local artist."),
        ])
    }

    #[test]
    fn test_valid_venue_form() {
        let params = VenueForm::from_fields(&valid_venue_fields())
            .validate()
            .expect("valid form");

        assert_eq!(params.name, "The Musical Hop");
        assert_eq!(params.genres, vec!["Jazz".to_string(), "Reggae".to_string()]);
        assert_eq!(params.image_link, None);
        assert_eq!(params.phone.as_deref(), Some("123-123-1234"));
        assert!(params.seeking_talent);
    }

    #[test]
    fn test_venue_form_reports_every_failing_field() {
        let form = VenueForm::from_fields(&fields(&[
            ("name", "  "),
            ("city", "San Francisco"),
            ("state", "XX"),
            ("address", "1015 Folsom Street"),
            ("phone", "12345"),
            ("genres", "Polka"),
            ("website_link", "not a url"),
        ]));

        let errors = form.validate().expect_err("invalid form");

        assert_eq!(errors.field("name"), [REQUIRED.to_string()]);
        assert_eq!(errors.field("state"), [INVALID_CHOICE.to_string()]);
        assert_eq!(errors.field("phone"), [INVALID_PHONE.to_string()]);
        assert_eq!(errors.field("website_link"), [INVALID_URL.to_string()]);
        assert_eq!(errors.field("genres").len(), 1);
        assert!(errors.field("city").is_empty());
        assert!(!form.seeking_talent);
    }

    #[test]
    fn test_venue_form_requires_genres() {
        let form = VenueForm::from_fields(&fields(&[
            ("name", "Park Square"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("address", "34 Whiskey Moore Ave"),
        ]));

        let errors = form.validate().expect_err("missing genres");
        assert_eq!(errors.field("genres"), [REQUIRED.to_string()]);
        assert_eq!(errors.to_string(), "genres: This field is required.");
    }

    #[test]
    fn test_artist_form_round_trips_record_fields() {
        let params = ArtistForm::from_fields(&fields(&[
            ("name", "Guns N Petals"),
            ("city", "San Francisco"),
            ("state", "ca"),
            ("genres", "Rock n Roll"),
            ("seeking_venue", "on"),
        ]))
        .validate()
        .expect("valid form");

        assert_eq!(params.state, "CA");
        assert!(params.seeking_venue);
        assert_eq!(params.facebook_link, None);
    }

    #[test]
    fn test_show_form_parses_ids_and_time() {
        let params = ShowForm::from_fields(&fields(&[
            ("artist_id", "4"),
            ("venue_id", "1"),
            ("start_time", "2019-05-21 21:30:00"),
        ]))
        .validate()
        .expect("valid form");

        let expected = NaiveDate::from_ymd_opt(2019, 5, 21)
            .and_then(|d| d.and_hms_opt(21, 30, 0))
            .expect("valid timestamp");
        assert_eq!(params.artist_id, 4);
        assert_eq!(params.venue_id, 1);
        assert_eq!(params.start_time, expected);

        let params = ShowForm::from_fields(&fields(&[
            ("artist_id", "4"),
            ("venue_id", "1"),
            ("start_time", "2019-05-21T21:30"),
        ]))
        .validate()
        .expect("valid form");
        assert_eq!(params.start_time, expected);
    }

    #[test]
    fn test_show_form_rejects_bad_input() {
        let errors = ShowForm::from_fields(&fields(&[
            ("artist_id", "four"),
            ("venue_id", ""),
            ("start_time", "next tuesday"),
        ]))
        .validate()
        .expect_err("invalid form");

        assert_eq!(errors.field("artist_id").len(), 1);
        assert_eq!(errors.field("venue_id"), [REQUIRED.to_string()]);
        assert_eq!(errors.field("start_time").len(), 1);
    }

    #[test]
    fn test_blank_show_form_defaults_start_time() {
        let form = ShowForm::blank();
        assert!(NaiveDateTime::parse_from_str(&form.start_time, DATETIME_FORMAT).is_ok());
    }
}
