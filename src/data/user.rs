//! User data repository for database operations.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Repository providing database operations for user rows.
///
/// Users are created on first reservation and never updated or deleted.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a user row exists for the given ID.
    ///
    /// # Returns
    /// - `Ok(true)` - A user with this ID exists
    /// - `Ok(false)` - No such user
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists(&self, user_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a user row, ignoring the insert if the ID already exists.
    ///
    /// Concurrent reservations for the same new user may race past the
    /// existence check; the on-conflict clause makes the duplicate insert a
    /// no-op so the end state always has exactly one row per ID.
    ///
    /// # Returns
    /// - `Ok(())` - Row inserted, or already present
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert(&self, user_id: &str, user_name: &str) -> Result<(), DbErr> {
        entity::prelude::User::insert(entity::user::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            user_name: ActiveValue::Set(user_name.to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::UserId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
