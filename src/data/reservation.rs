//! Reservation repository for database operations.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::reservation::{InsertReservationParam, Reservation};

/// Repository providing database operations for reservation rows.
pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    /// Creates a new ReservationRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a reservation row.
    ///
    /// The referenced user and flight rows must exist; the foreign-key
    /// constraints reject the insert otherwise.
    ///
    /// # Arguments
    /// - `param` - Fully resolved reservation fields including the flight name
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation with its generated ID
    /// - `Err(DbErr)` - Database error (including FK violations)
    pub async fn insert(&self, param: InsertReservationParam) -> Result<Reservation, DbErr> {
        let entity = entity::prelude::Reservation::insert(entity::reservation::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            user_name: ActiveValue::Set(param.user_name),
            flight_id: ActiveValue::Set(param.flight_id),
            flight_name: ActiveValue::Set(param.flight_name),
            seat: ActiveValue::Set(param.seat),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Reservation::from_entity(entity))
    }

    /// Gets all reservations, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Reservation>)` - All reservation rows (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .order_by_asc(entity::reservation::Column::ReservationId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Gets all reservations for a specific user, oldest first.
    ///
    /// An empty result is the distinguished "no reservations for this user"
    /// outcome; the controller maps it to a not-found response.
    ///
    /// # Returns
    /// - `Ok(Vec<Reservation>)` - The user's reservations (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .order_by_asc(entity::reservation::Column::ReservationId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }
}
