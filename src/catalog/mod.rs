mod models;
pub use models::*;

use serde::Deserialize;
use std::{fs::File, io, ops::Deref, path::Path};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
    #[error("More than one offer is flagged as recommended")]
    MultipleRecommended,
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    provider: String,
    vehicle_type: String,
    fare: u32,
    eta_minutes: u32,
    travel_time_minutes: u32,
    recommended: Option<bool>,
    recommend_reason: Option<String>,
}

impl TryFrom<CatalogRow> for RideOffer {
    type Error = self::Error;

    fn try_from(row: CatalogRow) -> Result<Self, Self::Error> {
        let provider: Provider = row.provider.parse()?;
        let mut offer = RideOffer::new(
            provider,
            &row.vehicle_type,
            row.fare,
            row.eta_minutes,
            row.travel_time_minutes,
        );
        offer.recommended = row.recommended.unwrap_or(false);
        offer.recommend_reason = row
            .recommend_reason
            .filter(|reason| !reason.trim().is_empty())
            .map(|reason| reason.into());
        Ok(offer)
    }
}

/// Ordered, immutable set of ride offers. Order is insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    offers: Box<[RideOffer]>,
}

impl Catalog {
    pub fn new(offers: Vec<RideOffer>) -> Self {
        Self {
            offers: offers.into(),
        }
    }

    /// The fixed demo catalog the app ships with.
    pub fn demo() -> Self {
        Self::new(vec![
            RideOffer::new(Provider::Uber, "UberGo", 254, 4, 24)
                .recommended("Best overall value"),
            RideOffer::new(Provider::Ola, "Ola Mini", 224, 8, 22).with_reason("Lowest price"),
            RideOffer::new(Provider::Rapido, "Bike", 129, 3, 18).with_reason("Fastest arrival"),
            RideOffer::new(Provider::Uber, "Premier", 356, 6, 24),
            RideOffer::new(Provider::Ola, "Prime Sedan", 328, 7, 22),
        ])
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, self::Error> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Reads offers from csv with the header
    /// `provider,vehicle_type,fare,eta_minutes,travel_time_minutes,recommended,recommend_reason`.
    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Self, self::Error> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let offers = reader
            .deserialize::<CatalogRow>()
            .map(|row| RideOffer::try_from(row?))
            .collect::<Result<Vec<_>, _>>()?;

        if offers.iter().filter(|offer| offer.recommended).count() > 1 {
            return Err(self::Error::MultipleRecommended);
        }
        debug!("Loaded {} ride offers", offers.len());
        Ok(Self::new(offers))
    }

    pub fn offers(&self) -> &[RideOffer] {
        &self.offers
    }
}

impl Deref for Catalog {
    type Target = [RideOffer];

    fn deref(&self) -> &Self::Target {
        &self.offers
    }
}

#[test]
fn demo_has_one_recommended() {
    let catalog = Catalog::demo();
    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.iter().filter(|offer| offer.recommended).count(), 1);
    assert!(catalog[0].recommended);
}
