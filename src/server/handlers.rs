//! Request handlers.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{debug, error};

use crate::export::to_geojson_string;

use super::AppState;

/// Query parameter carrying the time index.
pub const TIME_INDEX_PARAM: &str = "timeIndex";

/// GET `/api/weather` - Synthesizes the temperature field for `timeIndex`.
///
/// # Query
/// - `timeIndex` (optional): month offset from January 1750. Only the first occurrence is
///   read. Missing or unparseable values use the configured default.
///
/// # Response
/// `200 OK`, `application/json` GeoJSON `FeatureCollection`.
///
/// Query pairs are taken as a raw list so that repeated or odd parameters never cause an
/// extractor rejection.
pub async fn weather_handler(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let raw = params
        .iter()
        .find(|(key, _)| key == TIME_INDEX_PARAM)
        .map(|(_, value)| value.as_str());

    let time_index = state.synth.resolve_index(raw);
    let field = state.synth.synthesize(time_index);
    debug!(
        ?raw,
        time_index,
        time = %field.metadata().time,
        "weather request"
    );

    match to_geojson_string(&field) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(err) => {
            error!("Failed to encode field {time_index}: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
