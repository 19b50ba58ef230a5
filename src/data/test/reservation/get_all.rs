use super::*;
use test_utils::factory::reservation::create_reservation_with_parents;

/// Tests listing all reservations across users.
///
/// Expected: Ok with every inserted row, oldest first
#[tokio::test]
async fn returns_all_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, first) = create_reservation_with_parents(db).await?;
    let (_, _, second) = create_reservation_with_parents(db).await?;

    let repo = ReservationRepository::new(db);
    let result = repo.get_all().await;

    assert!(result.is_ok());
    let reservations = result.unwrap();
    assert_eq!(reservations.len(), 2);
    assert_eq!(reservations[0].reservation_id, first.reservation_id);
    assert_eq!(reservations[1].reservation_id, second.reservation_id);

    Ok(())
}

/// Tests listing reservations from an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let result = repo.get_all().await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}
