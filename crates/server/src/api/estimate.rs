use std::{collections::HashMap, sync::Arc};

use crate::{api::locations, dto::RouteDto, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

pub async fn estimate(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let (from, to) = locations(&params)?;
    let (estimate, origin) = state.estimator.resolve(from, to).map_err(|err| {
        error!("Failed to estimate {from} to {to}: {err}");
        StatusCode::BAD_REQUEST
    })?;
    Ok(Json(RouteDto::from(from, to, &estimate, origin)).into_response())
}
