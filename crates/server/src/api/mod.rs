mod estimate;
mod locate;
mod rides;
mod search;

pub use estimate::*;
pub use locate::*;
pub use rides::*;
pub use search::*;

use axum::http::StatusCode;
use std::collections::HashMap;

/// Pulls the `from` and `to` query parameters, both must hold some text.
fn locations(params: &HashMap<String, String>) -> Result<(&str, &str), StatusCode> {
    let from = params.get("from").ok_or(StatusCode::BAD_REQUEST)?;
    let to = params.get("to").ok_or(StatusCode::BAD_REQUEST)?;
    if ridecompare::estimate::can_compare(from, to) {
        Ok((from.as_str(), to.as_str()))
    } else {
        Err(StatusCode::BAD_REQUEST)
    }
}
