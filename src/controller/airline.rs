use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::param::PaginationParam, error::AppError, model::api::ErrorDto,
    service::flight_api::FlightApiService, state::AppState,
};

/// Tag for grouping airline endpoints in OpenAPI documentation
pub static AIRLINE_TAG: &str = "airline";

/// Get a list of airlines.
///
/// Proxies the upstream airline listing. Default pageNum is 1 and default
/// sortType is publicName.
///
/// # Returns
/// - `200 OK` - A list of airlines
/// - `500 Internal Server Error` - Upstream or network error
#[utoipa::path(
    get,
    path = "/airlines",
    tag = AIRLINE_TAG,
    params(
        ("pageNum" = Option<u32>, Query, description = "The page number (default: 1)"),
        ("sortType" = Option<String>, Query, description = "The sort type (default: publicName)")
    ),
    responses(
        (status = 200, description = "A list of airlines"),
        (status = 500, description = "An error occurred", body = ErrorDto)
    ),
)]
pub async fn get_airlines(
    State(state): State<AppState>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let airlines = FlightApiService::new(&state.http_client, &state.upstream)
        .get_airlines(params.page_num, params.sort_type.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(airlines)))
}

/// Get information about a specific airline.
///
/// Proxies the upstream airline lookup. IATA and ICAO codes are supported.
///
/// # Returns
/// - `200 OK` - Information about the airline
/// - `500 Internal Server Error` - Upstream or network error
#[utoipa::path(
    get,
    path = "/airline/{code}",
    tag = AIRLINE_TAG,
    params(
        ("code" = String, Path, description = "The airline IATA or ICAO code")
    ),
    responses(
        (status = 200, description = "Information about the airline"),
        (status = 500, description = "An error occurred", body = ErrorDto)
    ),
)]
pub async fn get_airline(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let airline = FlightApiService::new(&state.http_client, &state.upstream)
        .get_airline(&code)
        .await?;

    Ok((StatusCode::OK, Json(airline)))
}
