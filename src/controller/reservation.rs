use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::param::MakeReservationParam as MakeReservationQuery,
    error::AppError,
    model::{
        api::{ErrorDto, MessageDto},
        reservation::{MakeReservationParam, ReservationDto},
    },
    service::{flight_api::FlightApiService, reservation::ReservationService},
    state::AppState,
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

/// Get a list of all reservations.
///
/// # Returns
/// - `200 OK` - A list of reservations
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/reservations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "A list of reservations", body = Vec<ReservationDto>),
        (status = 500, description = "An error occurred", body = ErrorDto)
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let reservations = ReservationService::new(&state.db).get_all().await?;

    let reservations_dto: Vec<_> = reservations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reservations_dto)))
}

/// Get reservations for a specific user.
///
/// A user with zero reservations is a not-found outcome, not an empty
/// success.
///
/// # Returns
/// - `200 OK` - A list of reservations for the specified user
/// - `404 Not Found` - No reservations found for the specified user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/reservation/{user_id}",
    tag = RESERVATION_TAG,
    params(
        ("user_id" = String, Path, description = "The user ID")
    ),
    responses(
        (status = 200, description = "A list of reservations for the specified user", body = Vec<ReservationDto>),
        (status = 404, description = "No reservations found for the specified user", body = ErrorDto),
        (status = 500, description = "An error occurred", body = ErrorDto)
    ),
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let reservations = ReservationService::new(&state.db).get_by_user(&user_id).await?;

    if reservations.is_empty() {
        return Err(AppError::NotFound(
            "No reservations found for the specified user".to_string(),
        ));
    }

    let reservations_dto: Vec<_> = reservations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reservations_dto)))
}

/// Make a reservation.
///
/// Validates the flight against the upstream API (existence, future schedule
/// date, departure direction) before recording the reservation. All request
/// fields arrive as query parameters.
///
/// # Returns
/// - `200 OK` - Reservation successful
/// - `204 No Content` - The flight was not found
/// - `400 Bad Request` - Past flight or non-departure flight
/// - `500 Internal Server Error` - Upstream or database error
#[utoipa::path(
    post,
    path = "/makeReservation",
    tag = RESERVATION_TAG,
    params(
        ("user_id" = String, Query, description = "The user ID"),
        ("user_name" = String, Query, description = "The user's name"),
        ("flight_id" = String, Query, description = "The flight ID"),
        ("seat" = String, Query, description = "The seat number")
    ),
    responses(
        (status = 200, description = "Reservation successful", body = MessageDto),
        (status = 204, description = "The flight was not found"),
        (status = 400, description = "Past flight or non-departure flight", body = ErrorDto),
        (status = 500, description = "An error occurred", body = ErrorDto)
    ),
)]
pub async fn make_reservation(
    State(state): State<AppState>,
    Query(params): Query<MakeReservationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let flight_api = FlightApiService::new(&state.http_client, &state.upstream);

    ReservationService::new(&state.db)
        .make_reservation(
            &flight_api,
            MakeReservationParam {
                user_id: params.user_id,
                user_name: params.user_name,
                flight_id: params.flight_id,
                seat: params.seat,
            },
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Reservation successful".to_string(),
        }),
    ))
}
