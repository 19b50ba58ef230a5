//! Reservation workflow and queries.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::{flight::FlightRepository, reservation::ReservationRepository, user::UserRepository},
    error::AppError,
    model::{
        flight::FlightDirection,
        reservation::{InsertReservationParam, MakeReservationParam, Reservation},
    },
    service::flight_api::FlightSource,
};

/// Service providing the reservation workflow and reservation queries.
pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    /// Creates a new ReservationService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and records a reservation.
    ///
    /// Workflow:
    /// 1. Fetch the flight from the upstream source; unknown flights are a
    ///    not-found outcome, not an error.
    /// 2. Reject flights not scheduled strictly in the future.
    /// 3. Reject anything that is not a departure.
    /// 4. Create the user row if missing.
    /// 5. Create the flight row if missing, named after the fetched record.
    /// 6. Insert the reservation row.
    ///
    /// The existence checks in 4 and 5 can race under concurrent requests for
    /// the same new user or flight; the repositories insert with an on-conflict
    /// no-op so the primary-key constraint keeps one row per ID either way.
    ///
    /// # Arguments
    /// - `flights` - Upstream flight source used for validation
    /// - `param` - Reservation request fields
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The recorded reservation
    /// - `Err(AppError::FlightNotFound)` - No such flight upstream
    /// - `Err(AppError::Validation)` - Past flight or non-departure
    /// - `Err(AppError)` - Upstream or database failure
    pub async fn make_reservation<F: FlightSource>(
        &self,
        flights: &F,
        param: MakeReservationParam,
    ) -> Result<Reservation, AppError> {
        let Some(flight) = flights.get_flight(&param.flight_id).await? else {
            return Err(AppError::FlightNotFound);
        };

        if flight.schedule_date <= Utc::now().date_naive() {
            return Err(AppError::Validation("Cannot reserve past flights".to_string()));
        }

        if flight.flight_direction != FlightDirection::Departure {
            return Err(AppError::Validation(
                "Can only reserve departure flights".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);
        if !user_repo.exists(&param.user_id).await? {
            user_repo.insert(&param.user_id, &param.user_name).await?;
        }

        let flight_repo = FlightRepository::new(self.db);
        if !flight_repo.exists(&param.flight_id).await? {
            flight_repo
                .insert(&param.flight_id, &flight.flight_name)
                .await?;
        }

        let reservation = ReservationRepository::new(self.db)
            .insert(InsertReservationParam {
                user_id: param.user_id,
                user_name: param.user_name,
                flight_id: param.flight_id,
                flight_name: flight.flight_name,
                seat: param.seat,
            })
            .await?;

        Ok(reservation)
    }

    /// Gets all reservations.
    ///
    /// # Returns
    /// - `Ok(Vec<Reservation>)` - All recorded reservations
    /// - `Err(AppError)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Reservation>, AppError> {
        let reservations = ReservationRepository::new(self.db).get_all().await?;
        Ok(reservations)
    }

    /// Gets all reservations for a user.
    ///
    /// Returns an empty vector for users with no reservations; the controller
    /// maps that case to a not-found response.
    ///
    /// # Returns
    /// - `Ok(Vec<Reservation>)` - The user's reservations
    /// - `Err(AppError)` - Database error during query
    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<Reservation>, AppError> {
        let reservations = ReservationRepository::new(self.db)
            .get_by_user(user_id)
            .await?;
        Ok(reservations)
    }
}
