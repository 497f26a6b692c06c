use ridecompare::places::Place;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceDto {
    pub name: String,
}

impl From<&Place> for PlaceDto {
    fn from(place: &Place) -> Self {
        Self {
            name: place.name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocateDto {
    pub location: String,
}
