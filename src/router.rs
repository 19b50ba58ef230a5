use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{airline, destination, flight, reservation},
    model::{
        api::{ErrorDto, MessageDto},
        reservation::ReservationDto,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Flight API Documentation",
        version = "1.0.0",
        description = "Simple API Documentation"
    ),
    paths(
        airline::get_airlines,
        airline::get_airline,
        destination::get_destinations,
        destination::get_destination,
        flight::get_flights,
        flight::get_flight,
        reservation::get_reservations,
        reservation::get_reservation,
        reservation::make_reservation,
    ),
    components(schemas(ErrorDto, MessageDto, ReservationDto))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/airlines", get(airline::get_airlines))
        .route("/airline/{code}", get(airline::get_airline))
        .route("/destinations", get(destination::get_destinations))
        .route("/destination/{code}", get(destination::get_destination))
        .route("/flights", get(flight::get_flights))
        .route("/flight/{id}", get(flight::get_flight))
        .route("/reservations", get(reservation::get_reservations))
        .route("/reservation/{user_id}", get(reservation::get_reservation))
        .route("/makeReservation", post(reservation::make_reservation))
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
