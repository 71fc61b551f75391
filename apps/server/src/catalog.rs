//! Shapes stored rows for display: venue areas, name search and the
//! past/upcoming split of an entity's shows.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::db::models::{ArtistShow, VenueRecord, VenueShow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueSummary {
    pub id: i64,
    pub name: String,
}

/// Venues sharing one (city, state) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Groups venues by (city, state) in first-seen order of the input.
pub fn group_by_area<'a, I>(venues: I) -> Vec<Area>
where
    I: IntoIterator<Item = &'a VenueRecord>,
{
    let mut areas: Vec<Area> = Vec::new();
    let mut seen: HashMap<(&'a str, &'a str), usize> = HashMap::new();

    for venue in venues {
        let index = *seen
            .entry((venue.city.as_str(), venue.state.as_str()))
            .or_insert_with(|| {
                areas.push(Area {
                    city: venue.city.clone(),
                    state: venue.state.clone(),
                    venues: Vec::new(),
                });
                areas.len() - 1
            });

        areas[index].venues.push(VenueSummary {
            id: venue.id,
            name: venue.name.clone(),
        });
    }

    areas
}

/// Case-insensitive substring match; an empty term matches every name.
pub fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

/// Keeps the rows whose name contains `term`, preserving storage order.
pub fn search_by_name<T, F>(rows: Vec<T>, term: &str, name: F) -> SearchResults<T>
where
    F: Fn(&T) -> &str,
{
    let data: Vec<T> = rows
        .into_iter()
        .filter(|row| name_matches(name(row), term))
        .collect();

    SearchResults {
        count: data.len(),
        data,
    }
}

/// Anything with a scheduled start time
pub trait Scheduled {
    fn start_time(&self) -> NaiveDateTime;
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowPartition<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> ShowPartition<T> {
    pub fn past_shows_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_shows_count(&self) -> usize {
        self.upcoming.len()
    }
}

/// Splits shows around `now`. A show starting exactly at `now` is in neither half.
pub fn partition_shows<T: Scheduled>(shows: Vec<T>, now: NaiveDateTime) -> ShowPartition<T> {
    let mut partition = ShowPartition {
        past: Vec::new(),
        upcoming: Vec::new(),
    };

    for show in shows {
        let start = show.start_time();
        if start > now {
            partition.upcoming.push(show);
        } else if start < now {
            partition.past.push(show);
        }
    }

    partition
}
