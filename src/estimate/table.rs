use std::{collections::HashMap, fmt::Display, io};

use serde::{Deserialize, Serialize};

use crate::{
    estimate,
    shared::{NormalizedKey, geo::Distance, normalize, time::Duration},
};

/// Lookup key of a directed pair of locations, rendered as `"from-to"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RouteKey {
    pub from: NormalizedKey,
    pub to: NormalizedKey,
}

impl RouteKey {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: normalize(from),
            to: normalize(to),
        }
    }

    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

impl Display for RouteKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteEstimate {
    #[serde(rename = "distance_km")]
    pub distance: Distance,
    #[serde(rename = "duration_minutes")]
    pub duration: Duration,
}

impl RouteEstimate {
    pub const fn new(distance_km: f64, duration_minutes: u32) -> Self {
        Self {
            distance: Distance::from_kilometers(distance_km),
            duration: Duration::from_minutes(duration_minutes),
        }
    }

    pub const fn distance_km(&self) -> f64 {
        self.distance.as_kilometers()
    }

    pub const fn duration_minutes(&self) -> u32 {
        self.duration.as_minutes()
    }
}

const SEED_ROUTES: [(&str, &str, RouteEstimate); 6] = [
    ("PESU RR", "Reva University", RouteEstimate::new(38.8, 70)),
    ("PESU RR", "Downtown", RouteEstimate::new(12.3, 35)),
    ("Downtown", "Marina", RouteEstimate::new(5.7, 15)),
    ("Park View", "Green Park", RouteEstimate::new(7.9, 22)),
    ("Current Location", "Reva University", RouteEstimate::new(40.2, 75)),
    ("Current Location", "Downtown", RouteEstimate::new(10.5, 30)),
];

#[derive(Debug, Deserialize)]
struct RouteRow {
    from: String,
    to: String,
    distance_km: f64,
    duration_minutes: u32,
}

/// Curated routes of the demo area. Keys are stored in one direction only,
/// [`RouteTable::lookup`] tries the reverse direction as well.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: HashMap<RouteKey, RouteEstimate>,
    // Display names of the endpoints, in insertion order
    places: Vec<String>,
}

impl Default for RouteTable {
    fn default() -> Self {
        SEED_ROUTES
            .iter()
            .fold(Self::new(), |table, (from, to, estimate)| {
                table.with_route(from, to, *estimate)
            })
    }
}

impl RouteTable {
    /// An empty table, every pair falls through to the synthetic estimate.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            places: Vec::new(),
        }
    }

    pub fn with_route(mut self, from: &str, to: &str, estimate: RouteEstimate) -> Self {
        self.insert(from, to, estimate);
        self
    }

    pub fn insert(&mut self, from: &str, to: &str, estimate: RouteEstimate) {
        for name in [from, to] {
            let key = normalize(name);
            if !self.places.iter().any(|place| normalize(place) == key) {
                self.places.push(name.trim().to_string());
            }
        }
        self.routes.insert(RouteKey::new(from, to), estimate);
    }

    /// Reads routes from csv with the header `from,to,distance_km,duration_minutes`.
    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Self, estimate::Error> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut table = Self::new();
        for (i, row) in reader.deserialize::<RouteRow>().enumerate() {
            let row = row?;
            // Header is line 1
            let line = i + 2;
            if row.from.is_empty()
                || row.to.is_empty()
                || !row.distance_km.is_finite()
                || row.distance_km <= 0.0
                || row.duration_minutes == 0
            {
                return Err(estimate::Error::InvalidRoute { line });
            }
            table.insert(
                &row.from,
                &row.to,
                RouteEstimate::new(row.distance_km, row.duration_minutes),
            );
        }
        Ok(table)
    }

    /// Forward key first, then the reverse. First match wins.
    pub fn lookup(&self, key: &RouteKey) -> Option<RouteEstimate> {
        self.routes
            .get(key)
            .or_else(|| self.routes.get(&key.reversed()))
            .copied()
    }

    pub fn places(&self) -> &[String] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[test]
fn route_key_display() {
    let key = RouteKey::new("Downtown", " Marina ");
    assert_eq!(key.to_string(), "downtown-marina");
    assert_eq!(key.reversed().to_string(), "marina-downtown");
}

#[test]
fn seed_table_has_six_routes() {
    let table = RouteTable::default();
    assert_eq!(table.len(), 6);
    assert_eq!(table.places().len(), 7);
}

#[test]
fn lookup_reverse_direction() {
    let table = RouteTable::default();
    let forward = table.lookup(&RouteKey::new("downtown", "marina"));
    let reverse = table.lookup(&RouteKey::new("MARINA", "Downtown"));
    assert!(forward.is_some());
    assert_eq!(forward, reverse);
}

#[test]
fn lookup_forward_wins() {
    let table = RouteTable::new()
        .with_route("A", "B", RouteEstimate::new(1.0, 2))
        .with_route("B", "A", RouteEstimate::new(3.0, 4));
    assert_eq!(
        table.lookup(&RouteKey::new("b", "a")),
        Some(RouteEstimate::new(3.0, 4))
    );
}
