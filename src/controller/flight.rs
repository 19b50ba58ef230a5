use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    controller::param::FlightsFilterParam,
    error::AppError,
    model::{api::ErrorDto, flight::FlightsQuery},
    service::flight_api::{FlightApiService, FlightSource},
    state::AppState,
};

/// Tag for grouping flight endpoints in OpenAPI documentation
pub static FLIGHT_TAG: &str = "flight";

/// Get a list of flights with optional filters.
///
/// Proxies the upstream flight listing with optional date, direction, airline,
/// and page filters. Absent filters are not forwarded upstream.
///
/// # Returns
/// - `200 OK` - A list of flights based on the specified filters
/// - `500 Internal Server Error` - Upstream or network error
#[utoipa::path(
    get,
    path = "/flights",
    tag = FLIGHT_TAG,
    params(
        ("date" = Option<String>, Query, description = "The date to filter flights ('yyyy-mm-dd')"),
        ("direction" = Option<String>, Query, description = "The flight direction ('A' for arrival, 'D' for departure)"),
        ("airline" = Option<String>, Query, description = "The airline IATA or ICAO code"),
        ("page" = Option<u32>, Query, description = "The page number for paginated results (default: 1)")
    ),
    responses(
        (status = 200, description = "A list of flights based on the specified filters"),
        (status = 500, description = "An error occurred", body = ErrorDto)
    ),
)]
pub async fn get_flights(
    State(state): State<AppState>,
    Query(params): Query<FlightsFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let query = FlightsQuery {
        schedule_date: params.date,
        flight_direction: params.direction,
        airline: params.airline,
        page: params.page,
    };

    let flights = FlightApiService::new(&state.http_client, &state.upstream)
        .get_flights(&query)
        .await?;

    Ok((StatusCode::OK, Json(flights)))
}

/// Get information about a specific flight.
///
/// Looks the flight up upstream by ID. The upstream API answers 204 for
/// unknown IDs; that status is forwarded as-is.
///
/// # Returns
/// - `200 OK` - Information about the flight
/// - `204 No Content` - The flight was not found
/// - `500 Internal Server Error` - Upstream or network error
#[utoipa::path(
    get,
    path = "/flight/{id}",
    tag = FLIGHT_TAG,
    params(
        ("id" = String, Path, description = "The flight ID")
    ),
    responses(
        (status = 200, description = "Information about the flight"),
        (status = 204, description = "The flight was not found"),
        (status = 500, description = "An error occurred", body = ErrorDto)
    ),
)]
pub async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let flight = FlightApiService::new(&state.http_client, &state.upstream)
        .get_flight(&id)
        .await?;

    match flight {
        Some(flight) => Ok((StatusCode::OK, Json(flight)).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
