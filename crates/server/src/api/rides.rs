use std::{collections::HashMap, sync::Arc};

use crate::{
    api::locations,
    dto::{RideDto, RideViewsDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ridecompare::ranking::RideView;
use tracing::error;

pub async fn rides(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    // Rides only make sense once both ends are known
    locations(&params)?;
    match params.get("view") {
        Some(view) => {
            let view: RideView = view.parse().map_err(|err| {
                error!("{err}");
                StatusCode::BAD_REQUEST
            })?;
            let result: Vec<_> = state
                .ranker
                .view(&state.catalog, view)
                .iter()
                .map(RideDto::from)
                .collect();
            Ok(Json(result).into_response())
        }
        None => {
            let views = state.ranker.classify(&state.catalog);
            Ok(Json(RideViewsDto::from(&views)).into_response())
        }
    }
}
