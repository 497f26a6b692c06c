use std::{
    cmp,
    fmt::Display,
    ops::{Add, Mul},
};

use serde::{Deserialize, Serialize};

/// Road distance, stored in kilometers so curated values stay exact.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Add for Distance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Mul<f64> for Distance {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Distance {
    pub const fn from_kilometers(distance: f64) -> Self {
        Self(distance)
    }

    pub const fn from_meters(distance: f64) -> Self {
        Self(distance / 1000.0)
    }

    pub const fn as_kilometers(&self) -> f64 {
        self.0
    }

    pub const fn as_meters(&self) -> f64 {
        self.0 * 1000.0
    }

    /// One decimal and a unit, e.g. `"12.0 km"`.
    pub fn to_display_string(&self) -> String {
        format!("{:.1} km", self.0)
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

#[test]
fn distance_eq_test() {
    let dist_a = Distance::from_meters(1500.0);
    let dist_b = Distance::from_kilometers(1.5);
    assert_eq!(dist_a, dist_b)
}

#[test]
fn distance_cmp_test() {
    let dist_a = Distance::from_kilometers(12.3);
    let dist_b = Distance::from_kilometers(5.7);
    assert!(dist_a > dist_b)
}

#[test]
fn distance_display_test() {
    assert_eq!(Distance::from_kilometers(12.0).to_display_string(), "12.0 km");
    assert_eq!(Distance::from_kilometers(38.8).to_string(), "38.8 km");
}
