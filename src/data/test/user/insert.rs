use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests creating a new user row.
///
/// Expected: Ok with the row present afterwards
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.insert("u1", "Alice").await;

    assert!(result.is_ok());

    let user = entity::prelude::User::find_by_id("u1".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(user.user_id, "u1");
    assert_eq!(user.user_name, "Alice");

    Ok(())
}

/// Tests that inserting the same user ID twice leaves a single row.
///
/// The on-conflict clause makes the second insert a no-op, so racing
/// reservations for the same new user cannot duplicate it.
///
/// Expected: Ok both times, one row, original name preserved
#[tokio::test]
async fn duplicate_insert_keeps_single_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.insert("u1", "Alice").await?;
    let result = repo.insert("u1", "Alice Again").await;

    assert!(result.is_ok());

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    let user = entity::prelude::User::find_by_id("u1".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(user.user_name, "Alice");

    Ok(())
}
