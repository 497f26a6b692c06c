use std::time;

use crate::{catalog::Fare, shared::Distance};

#[derive(Debug, Clone)]
pub struct Config {
    /// Offers strictly below this fare are economy, the rest premium.
    pub economy_threshold: Fare,
    /// How many offers the fastest view keeps.
    pub fastest_limit: usize,
    pub fastest_reason: String,

    // Synthetic route fallback
    pub synthetic_base: Distance,
    pub synthetic_step: Distance,
    pub synthetic_buckets: usize,
    pub minutes_per_km: f64,

    // Simulated latency seen by the user before results show up
    pub estimate_delay: time::Duration,
    pub refresh_delay: time::Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            economy_threshold: Fare::new(300),
            fastest_limit: 3,
            fastest_reason: "Fastest option".into(),
            synthetic_base: Distance::from_kilometers(5.0),
            synthetic_step: Distance::from_kilometers(3.5),
            synthetic_buckets: 10,
            minutes_per_km: 1.8,
            estimate_delay: time::Duration::from_millis(500),
            refresh_delay: time::Duration::from_millis(1500),
        }
    }
}
