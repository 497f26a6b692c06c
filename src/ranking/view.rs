use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown ride view: {0}")]
pub struct UnknownView(pub String);

/// Tab a list of offers is shown under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RideView {
    #[default]
    All,
    Economy,
    Premium,
    Fastest,
}

impl RideView {
    pub const ALL: [RideView; 4] = [
        RideView::All,
        RideView::Economy,
        RideView::Premium,
        RideView::Fastest,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            RideView::All => "all",
            RideView::Economy => "economy",
            RideView::Premium => "premium",
            RideView::Fastest => "fastest",
        }
    }
}

impl Display for RideView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RideView {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        RideView::ALL
            .into_iter()
            .find(|view| view.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

#[test]
fn parse_view() {
    assert_eq!("Fastest".parse::<RideView>(), Ok(RideView::Fastest));
    assert_eq!(" economy".parse::<RideView>(), Ok(RideView::Economy));
    assert!("cheapest".parse::<RideView>().is_err());
}
