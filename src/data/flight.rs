//! Flight cache repository for database operations.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Repository providing database operations for locally cached flight rows.
///
/// Flight rows are created the first time a reservation references a flight,
/// with the display name taken from the upstream record. Never updated or
/// deleted.
pub struct FlightRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightRepository<'a> {
    /// Creates a new FlightRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a flight row exists for the given ID.
    ///
    /// # Returns
    /// - `Ok(true)` - A flight with this ID exists
    /// - `Ok(false)` - No such flight
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists(&self, flight_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Flight::find()
            .filter(entity::flight::Column::FlightId.eq(flight_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a flight row, ignoring the insert if the ID already exists.
    ///
    /// Same race policy as the user repository: the primary-key constraint is
    /// the backstop and a conflicting insert is a no-op.
    ///
    /// # Returns
    /// - `Ok(())` - Row inserted, or already present
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert(&self, flight_id: &str, flight_name: &str) -> Result<(), DbErr> {
        entity::prelude::Flight::insert(entity::flight::ActiveModel {
            flight_id: ActiveValue::Set(flight_id.to_string()),
            flight_name: ActiveValue::Set(flight_name.to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::flight::Column::FlightId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
