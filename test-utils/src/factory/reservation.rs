//! Reservation factory for creating test reservation entities.
//!
//! Reservations carry foreign keys to users and flights, so the convenience
//! helper creates both parents before inserting the reservation itself.

use crate::factory::{flight::FlightFactory, helpers::next_id, user::UserFactory};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// The referenced user and flight rows must already exist; use
/// `create_reservation_with_parents` when the test does not care about them.
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    user_name: String,
    flight_id: String,
    flight_name: String,
    seat: String,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults reference `"user_{id}"` / `"flight_{id}"` parents and seat `"1A"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: format!("user_{}", id),
            user_name: format!("User {}", id),
            flight_id: format!("flight_{}", id),
            flight_name: format!("KL {}", id),
            seat: "1A".to_string(),
        }
    }

    /// Sets the user ID the reservation references.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the denormalized user name.
    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    /// Sets the flight ID the reservation references.
    pub fn flight_id(mut self, flight_id: impl Into<String>) -> Self {
        self.flight_id = flight_id.into();
        self
    }

    /// Sets the denormalized flight name.
    pub fn flight_name(mut self, flight_name: impl Into<String>) -> Self {
        self.flight_name = flight_name.into();
        self
    }

    /// Sets the seat.
    pub fn seat(mut self, seat: impl Into<String>) -> Self {
        self.seat = seat.into();
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error (including FK violation when parents are missing)
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            user_name: ActiveValue::Set(self.user_name),
            flight_id: ActiveValue::Set(self.flight_id),
            flight_name: ActiveValue::Set(self.flight_name),
            seat: ActiveValue::Set(self.seat),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation along with its user and flight parent rows.
///
/// # Returns
/// - `Ok((user, flight, reservation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_parents(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::flight::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let user = UserFactory::new(db).build().await?;
    let flight = FlightFactory::new(db).build().await?;
    let reservation = ReservationFactory::new(db)
        .user_id(user.user_id.clone())
        .user_name(user.user_name.clone())
        .flight_id(flight.flight_id.clone())
        .flight_name(flight.flight_name.clone())
        .build()
        .await?;

    Ok((user, flight, reservation))
}
