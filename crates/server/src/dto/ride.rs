use ridecompare::{
    catalog::{Provider, RideOffer},
    ranking::RideViews,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RideDto {
    pub provider: Provider,
    pub vehicle_type: String,
    pub fare: u32,
    pub eta_minutes: u32,
    pub travel_time_minutes: u32,
    pub total_minutes: u32,
    pub recommended: bool,
    pub recommend_reason: Option<String>,
}

impl From<&RideOffer> for RideDto {
    fn from(offer: &RideOffer) -> Self {
        Self {
            provider: offer.provider,
            vehicle_type: offer.vehicle_type.to_string(),
            fare: offer.fare.amount(),
            eta_minutes: offer.eta.as_minutes(),
            travel_time_minutes: offer.travel_time.as_minutes(),
            total_minutes: offer.total_time().as_minutes(),
            recommended: offer.recommended,
            recommend_reason: offer.recommend_reason.as_ref().map(|reason| reason.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RideViewsDto {
    pub all: Vec<RideDto>,
    pub economy: Vec<RideDto>,
    pub premium: Vec<RideDto>,
    pub fastest: Vec<RideDto>,
}

impl From<&RideViews> for RideViewsDto {
    fn from(views: &RideViews) -> Self {
        let convert = |offers: &[RideOffer]| -> Vec<RideDto> {
            offers.iter().map(RideDto::from).collect()
        };
        Self {
            all: convert(&views.all),
            economy: convert(&views.economy),
            premium: convert(&views.premium),
            fastest: convert(&views.fastest),
        }
    }
}
