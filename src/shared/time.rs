use std::{
    fmt::Display,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

const MINUTES_PER_HOUR: u32 = 60;

/// Travel or waiting time in whole minutes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Duration(u32);

impl From<u32> for Duration {
    fn from(minutes: u32) -> Self {
        Self(minutes)
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0)
    }
}

impl Duration {
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    pub const fn from_hours(hours: u32) -> Self {
        Self(hours * MINUTES_PER_HOUR)
    }

    pub const fn as_minutes(&self) -> u32 {
        self.0
    }

    /// `"1 hr 10 min"` from an hour up, `"45 min"` below.
    pub fn to_display_string(&self) -> String {
        if self.0 >= MINUTES_PER_HOUR {
            format!(
                "{} hr {} min",
                self.0 / MINUTES_PER_HOUR,
                self.0 % MINUTES_PER_HOUR
            )
        } else {
            format!("{} min", self.0)
        }
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

#[test]
fn display_minutes_only() {
    assert_eq!(Duration::from_minutes(15).to_display_string(), "15 min");
    assert_eq!(Duration::from_minutes(59).to_display_string(), "59 min");
}

#[test]
fn display_hours_and_minutes() {
    assert_eq!(Duration::from_minutes(60).to_display_string(), "1 hr 0 min");
    assert_eq!(Duration::from_minutes(70).to_display_string(), "1 hr 10 min");
    assert_eq!(Duration::from_minutes(135).to_display_string(), "2 hr 15 min");
}

#[test]
fn duration_add_saturates() {
    let total = Duration::from_minutes(u32::MAX) + Duration::from_minutes(1);
    assert_eq!(total.as_minutes(), u32::MAX);
}

#[test]
fn duration_add() {
    let mut total = Duration::from_minutes(4) + Duration::from_minutes(24);
    total += Duration::from_hours(1);
    assert_eq!(total.as_minutes(), 88);
}
