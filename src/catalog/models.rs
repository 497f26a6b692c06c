use std::{fmt::Display, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{catalog, shared::time::Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Uber,
    Ola,
    Rapido,
}

impl Provider {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Provider::Uber => "uber",
            Provider::Ola => "ola",
            Provider::Rapido => "rapido",
        }
    }
}

impl Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = catalog::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uber" => Ok(Provider::Uber),
            "ola" => Ok(Provider::Ola),
            "rapido" => Ok(Provider::Rapido),
            _ => Err(catalog::Error::UnknownProvider(s.to_string())),
        }
    }
}

/// Whole currency units.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Fare(u32);

impl Fare {
    pub const fn new(amount: u32) -> Self {
        Self(amount)
    }

    pub const fn amount(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Fare {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Display for Fare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RideOffer {
    pub provider: Provider,
    pub vehicle_type: Arc<str>,
    pub fare: Fare,
    pub eta: Duration,
    pub travel_time: Duration,
    pub recommended: bool,
    pub recommend_reason: Option<Arc<str>>,
}

impl RideOffer {
    pub fn new(
        provider: Provider,
        vehicle_type: &str,
        fare: u32,
        eta: u32,
        travel_time: u32,
    ) -> Self {
        Self {
            provider,
            vehicle_type: vehicle_type.into(),
            fare: Fare::new(fare),
            eta: Duration::from_minutes(eta),
            travel_time: Duration::from_minutes(travel_time),
            recommended: false,
            recommend_reason: None,
        }
    }

    pub fn recommended(mut self, reason: &str) -> Self {
        self.recommended = true;
        self.recommend_reason = Some(reason.into());
        self
    }

    /// Attaches a reason without flagging the offer.
    pub fn with_reason(mut self, reason: &str) -> Self {
        self.recommend_reason = Some(reason.into());
        self
    }

    /// Pickup wait plus ride, what the fastest view sorts on. Saturates
    /// instead of overflowing.
    pub fn total_time(&self) -> Duration {
        self.eta + self.travel_time
    }
}

#[test]
fn provider_parse() {
    assert_eq!("Uber".parse::<Provider>().unwrap(), Provider::Uber);
    assert_eq!(" rapido ".parse::<Provider>().unwrap(), Provider::Rapido);
    assert!("lyft".parse::<Provider>().is_err());
}

#[test]
fn total_time_adds_eta_and_travel() {
    let offer = RideOffer::new(Provider::Ola, "Ola Mini", 224, 8, 22);
    assert_eq!(offer.total_time().as_minutes(), 30);
}

#[test]
fn fare_display() {
    assert_eq!(Fare::new(254).to_string(), "₹254");
}
