use ridecompare::estimate::{EstimateSource, RouteEstimate};
use serde::Serialize;

/// Route summary as the map panel shows it, numbers plus display strings.
#[derive(Debug, Clone, Serialize)]
pub struct RouteDto {
    pub source: String,
    pub destination: String,
    pub distance_km: f64,
    pub duration_minutes: u32,
    pub distance: String,
    pub duration: String,
    pub origin: EstimateSource,
}

impl RouteDto {
    pub fn from(
        source: &str,
        destination: &str,
        estimate: &RouteEstimate,
        origin: EstimateSource,
    ) -> Self {
        Self {
            source: source.to_string(),
            destination: destination.to_string(),
            distance_km: estimate.distance_km(),
            duration_minutes: estimate.duration_minutes(),
            distance: estimate.distance.to_display_string(),
            duration: estimate.duration.to_display_string(),
            origin,
        }
    }
}

#[test]
fn route_dto_keeps_display_names() {
    let estimate = RouteEstimate::new(38.8, 70);
    let dto = RouteDto::from("PESU RR", "Reva University", &estimate, EstimateSource::Curated);
    assert_eq!(dto.source, "PESU RR");
    assert_eq!(dto.distance, "38.8 km");
    assert_eq!(dto.duration, "1 hr 10 min");
}
