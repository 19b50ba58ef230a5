use super::*;
use test_utils::factory::reservation::{create_reservation_with_parents, ReservationFactory};

/// Tests listing reservations scoped to one user.
///
/// Expected: Ok with only that user's rows
#[tokio::test]
async fn returns_only_rows_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, flight, first) = create_reservation_with_parents(db).await?;
    // A second reservation for the same user on the same flight.
    let second = ReservationFactory::new(db)
        .user_id(user.user_id.clone())
        .user_name(user.user_name.clone())
        .flight_id(flight.flight_id.clone())
        .flight_name(flight.flight_name.clone())
        .seat("2B")
        .build()
        .await?;
    // And one belonging to someone else.
    create_reservation_with_parents(db).await?;

    let repo = ReservationRepository::new(db);
    let result = repo.get_by_user(&user.user_id).await;

    assert!(result.is_ok());
    let reservations = result.unwrap();
    assert_eq!(reservations.len(), 2);
    assert_eq!(reservations[0].reservation_id, first.reservation_id);
    assert_eq!(reservations[1].reservation_id, second.reservation_id);
    assert!(reservations.iter().all(|r| r.user_id == user.user_id));

    Ok(())
}

/// Tests listing reservations for a user with none.
///
/// The empty vector is the distinguished outcome the controller turns into
/// a 404 response.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_user_without_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_reservation_with_parents(db).await?;

    let repo = ReservationRepository::new(db);
    let result = repo.get_by_user("nobody").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}
