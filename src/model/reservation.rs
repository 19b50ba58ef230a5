//! Reservation domain models and parameters.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted reservation binding a user to a seat on a flight.
///
/// Immutable once created; the user and flight names are denormalized copies
/// taken at reservation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub reservation_id: i32,
    pub user_id: String,
    pub user_name: String,
    pub flight_id: String,
    pub flight_name: String,
    pub seat: String,
}

impl Reservation {
    /// Converts an entity model to a reservation domain model at the repository boundary.
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            reservation_id: entity.reservation_id,
            user_id: entity.user_id,
            user_name: entity.user_name,
            flight_id: entity.flight_id,
            flight_name: entity.flight_name,
            seat: entity.seat,
        }
    }

    /// Converts the reservation domain model to a DTO for API responses.
    ///
    /// Only the user, flight, and seat columns are exposed on the listing
    /// endpoints.
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            user_id: self.user_id,
            flight_id: self.flight_id,
            seat: self.seat,
        }
    }
}

/// Reservation row as exposed by the listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReservationDto {
    pub user_id: String,
    pub flight_id: String,
    pub seat: String,
}

/// Parameters for the reservation workflow.
///
/// The flight name is not part of the request; it is taken from the upstream
/// flight record fetched during validation.
#[derive(Debug, Clone)]
pub struct MakeReservationParam {
    pub user_id: String,
    pub user_name: String,
    pub flight_id: String,
    pub seat: String,
}

/// Parameters for inserting a fully resolved reservation row.
#[derive(Debug, Clone)]
pub struct InsertReservationParam {
    pub user_id: String,
    pub user_name: String,
    pub flight_id: String,
    pub flight_name: String,
    pub seat: String,
}
