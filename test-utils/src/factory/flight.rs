//! Flight factory for creating test flight cache entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flight rows with customizable fields.
pub struct FlightFactory<'a> {
    db: &'a DatabaseConnection,
    flight_id: String,
    flight_name: String,
}

impl<'a> FlightFactory<'a> {
    /// Creates a new FlightFactory with default values.
    ///
    /// Defaults:
    /// - flight_id: `"flight_{id}"` where id is auto-incremented
    /// - flight_name: `"KL {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            flight_id: format!("flight_{}", id),
            flight_name: format!("KL {}", id),
        }
    }

    /// Sets the flight ID.
    pub fn flight_id(mut self, flight_id: impl Into<String>) -> Self {
        self.flight_id = flight_id.into();
        self
    }

    /// Sets the flight display name.
    pub fn flight_name(mut self, flight_name: impl Into<String>) -> Self {
        self.flight_name = flight_name.into();
        self
    }

    /// Builds and inserts the flight entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::flight::Model)` - Created flight entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::flight::Model, DbErr> {
        entity::flight::ActiveModel {
            flight_id: ActiveValue::Set(self.flight_id),
            flight_name: ActiveValue::Set(self.flight_name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flight row with default values.
pub async fn create_flight(db: &DatabaseConnection) -> Result<entity::flight::Model, DbErr> {
    FlightFactory::new(db).build().await
}
