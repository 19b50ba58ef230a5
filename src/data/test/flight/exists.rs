use super::*;

/// Tests the existence check for a cached flight row.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Flight)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);
    repo.insert("FL123", "KL0897").await?;

    let result = repo.exists("FL123").await;

    assert!(result.is_ok());
    assert!(result.unwrap());

    Ok(())
}

/// Tests the existence check for a flight ID never cached.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Flight)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);
    let result = repo.exists("missing").await;

    assert!(result.is_ok());
    assert!(!result.unwrap());

    Ok(())
}
