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

/// Tag for grouping destination endpoints in OpenAPI documentation
pub static DESTINATION_TAG: &str = "destination";

/// Get a list of destinations.
///
/// Proxies the upstream destination listing. Default pageNum is 1 and default
/// sortType is country.
///
/// # Returns
/// - `200 OK` - A list of destinations
/// - `500 Internal Server Error` - Upstream or network error
#[utoipa::path(
    get,
    path = "/destinations",
    tag = DESTINATION_TAG,
    params(
        ("pageNum" = Option<u32>, Query, description = "The page number (default: 1)"),
        ("sortType" = Option<String>, Query, description = "The sort type (default: country)")
    ),
    responses(
        (status = 200, description = "A list of destinations"),
        (status = 500, description = "An error occurred", body = ErrorDto)
    ),
)]
pub async fn get_destinations(
    State(state): State<AppState>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let destinations = FlightApiService::new(&state.http_client, &state.upstream)
        .get_destinations(params.page_num, params.sort_type.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(destinations)))
}

/// Get information about a specific destination.
///
/// Proxies the upstream destination lookup by IATA code.
///
/// # Returns
/// - `200 OK` - Information about the destination
/// - `500 Internal Server Error` - Upstream or network error
#[utoipa::path(
    get,
    path = "/destination/{code}",
    tag = DESTINATION_TAG,
    params(
        ("code" = String, Path, description = "The destination IATA code")
    ),
    responses(
        (status = 200, description = "Information about the destination"),
        (status = 500, description = "An error occurred", body = ErrorDto)
    ),
)]
pub async fn get_destination(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let destination = FlightApiService::new(&state.http_client, &state.upstream)
        .get_destination(&code)
        .await?;

    Ok((StatusCode::OK, Json(destination)))
}
