mod table;
pub use table::*;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    config::Config,
    shared::{NormalizedKey, geo::Distance, time::Duration},
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("The {field} location is empty")]
    InvalidInput { field: &'static str },
    #[error("Csv error: {0}")]
    Csv(String),
    #[error("Route on line {line} needs two locations and a positive distance and duration")]
    InvalidRoute { line: usize },
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value.to_string())
    }
}

/// Where an estimate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimateSource {
    Curated,
    Synthetic,
}

/// Turns a pair of free-text locations into a route estimate.
/// Holds no mutable state, the same pair always yields the same estimate.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    table: RouteTable,
    config: Config,
}

impl Estimator {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn estimate(&self, source: &str, destination: &str) -> Result<RouteEstimate, self::Error> {
        self.resolve(source, destination).map(|(estimate, _)| estimate)
    }

    pub fn source_of(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<EstimateSource, self::Error> {
        self.resolve(source, destination).map(|(_, from)| from)
    }

    /// Estimate and where it came from, resolved once.
    pub fn resolve(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<(RouteEstimate, EstimateSource), self::Error> {
        let key = route_key(source, destination)?;
        if let Some(estimate) = self.table.lookup(&key) {
            debug!("Curated route {key}: {}", estimate.distance);
            return Ok((estimate, EstimateSource::Curated));
        }
        let estimate = self.synthetic(&key.from, &key.to);
        debug!("No curated route for {key}, using {}", estimate.distance);
        Ok((estimate, EstimateSource::Synthetic))
    }

    /// Deterministic fallback driven only by the length of both keys.
    fn synthetic(&self, from: &NormalizedKey, to: &NormalizedKey) -> RouteEstimate {
        let buckets = self.config.synthetic_buckets.max(1);
        let combined = (from.len() + to.len()) % buckets;
        trace!("Synthetic bucket {combined} of {buckets}");
        let distance: Distance =
            self.config.synthetic_base + self.config.synthetic_step * combined as f64;
        let minutes = (distance.as_kilometers() * self.config.minutes_per_km).round() as u32;
        RouteEstimate {
            distance,
            duration: Duration::from_minutes(minutes),
        }
    }
}

/// Builds the lookup key, rejecting empty or whitespace only locations
/// before anything else runs.
pub fn route_key(source: &str, destination: &str) -> Result<RouteKey, self::Error> {
    if source.trim().is_empty() {
        return Err(self::Error::InvalidInput { field: "source" });
    }
    if destination.trim().is_empty() {
        return Err(self::Error::InvalidInput {
            field: "destination",
        });
    }
    Ok(RouteKey::new(source, destination))
}

/// Whether both fields are filled in enough to ask for a comparison.
pub fn can_compare(source: &str, destination: &str) -> bool {
    route_key(source, destination).is_ok()
}

/// Estimates with the curated demo table and default settings.
pub fn estimate(source: &str, destination: &str) -> Result<RouteEstimate, self::Error> {
    Estimator::default().estimate(source, destination)
}

#[test]
fn synthetic_literal_case() {
    let estimate = estimate("Park X", "Lake Y").unwrap();
    assert_eq!(estimate.distance_km(), 12.0);
    assert_eq!(estimate.duration_minutes(), 22);
}

#[test]
fn curated_literal_case() {
    let estimate = estimate("Downtown", "Marina").unwrap();
    assert_eq!(estimate.distance_km(), 5.7);
    assert_eq!(estimate.duration_minutes(), 15);
}

#[test]
fn empty_source_is_rejected() {
    assert_eq!(
        estimate("  ", "Marina"),
        Err(Error::InvalidInput { field: "source" })
    );
}

#[test]
fn empty_destination_is_rejected() {
    assert_eq!(
        estimate("Downtown", ""),
        Err(Error::InvalidInput {
            field: "destination"
        })
    );
}

#[test]
fn source_of_reports_origin() {
    let estimator = Estimator::default();
    assert_eq!(
        estimator.source_of("Marina", "downtown"),
        Ok(EstimateSource::Curated)
    );
    assert_eq!(
        estimator.source_of("Park X", "Lake Y"),
        Ok(EstimateSource::Synthetic)
    );
}
