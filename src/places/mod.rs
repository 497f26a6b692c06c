use std::sync::Arc;

use serde::Serialize;

use crate::{
    estimate::RouteTable,
    shared::{self, Named, NormalizedKey, normalize},
};

/// What the "locate me" button fills into the pickup field.
pub const CURRENT_LOCATION: &str = "Current Location";

/// Landmarks drawn on the demo map that have no curated route of their own.
const LANDMARKS: [&str; 5] = ["Downtown", "Marina", "Park View", "Lake", "Green Park"];

/// There is no real geolocation, locating always yields [`CURRENT_LOCATION`].
pub fn locate() -> &'static str {
    CURRENT_LOCATION
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub name: Arc<str>,
    #[serde(skip)]
    pub normalized_name: NormalizedKey,
}

impl Place {
    pub fn new(name: &str) -> Self {
        let name = name.trim();
        Self {
            name: name.into(),
            normalized_name: normalize(name),
        }
    }
}

impl Named for Place {
    fn normalized_name(&self) -> &NormalizedKey {
        &self.normalized_name
    }
}

/// Known place names of the demo area, used to complete location input.
#[derive(Debug, Clone)]
pub struct Places {
    places: Vec<Place>,
}

impl Default for Places {
    fn default() -> Self {
        Self::from_table(&RouteTable::default())
    }
}

impl Places {
    pub fn new() -> Self {
        Self { places: Vec::new() }
    }

    /// Route endpoints of the table followed by the map landmarks.
    pub fn from_table(table: &RouteTable) -> Self {
        table
            .places()
            .iter()
            .map(String::as_str)
            .chain(LANDMARKS)
            .fold(Self::new(), |places, name| places.with_place(name))
    }

    /// Adds a place unless one with the same normalized name exists.
    pub fn with_place(mut self, name: &str) -> Self {
        let place = Place::new(name);
        if !place.normalized_name.is_empty()
            && !self
                .places
                .iter()
                .any(|known| known.normalized_name == place.normalized_name)
        {
            self.places.push(place);
        }
        self
    }

    pub fn search(&self, needle: &str) -> Vec<&Place> {
        shared::search(needle, &self.places)
    }

    pub fn all(&self) -> &[Place] {
        &self.places
    }
}

#[test]
fn places_are_deduplicated() {
    let places = Places::default();
    // 7 route endpoints plus "Lake"
    assert_eq!(places.all().len(), 8);
}

#[test]
fn locate_is_current_location() {
    assert_eq!(locate(), "Current Location");
}
