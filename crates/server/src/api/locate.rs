use axum::{
    Json,
    response::{IntoResponse, Response},
};

use crate::dto::LocateDto;

pub async fn locate() -> Response {
    Json(LocateDto {
        location: ridecompare::places::locate().to_string(),
    })
    .into_response()
}
