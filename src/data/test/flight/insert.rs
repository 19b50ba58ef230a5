use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests creating a new flight cache row.
///
/// Expected: Ok with the row present afterwards
#[tokio::test]
async fn creates_new_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Flight)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);
    let result = repo.insert("FL123", "KL0897").await;

    assert!(result.is_ok());

    let flight = entity::prelude::Flight::find_by_id("FL123".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(flight.flight_id, "FL123");
    assert_eq!(flight.flight_name, "KL0897");

    Ok(())
}

/// Tests that inserting the same flight ID twice leaves a single row.
///
/// Expected: Ok both times, one row
#[tokio::test]
async fn duplicate_insert_keeps_single_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Flight)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);
    repo.insert("FL123", "KL0897").await?;
    let result = repo.insert("FL123", "KL0897").await;

    assert!(result.is_ok());

    let count = entity::prelude::Flight::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
