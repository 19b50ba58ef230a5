use super::*;

/// Tests inserting a reservation whose parent rows exist.
///
/// Expected: Ok with all fields persisted and a generated ID
#[tokio::test]
async fn creates_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).user_id("u1").user_name("Alice").build().await?;
    let flight = FlightFactory::new(db)
        .flight_id("FL123")
        .flight_name("KL0897")
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let result = repo
        .insert(InsertReservationParam {
            user_id: user.user_id.clone(),
            user_name: user.user_name.clone(),
            flight_id: flight.flight_id.clone(),
            flight_name: flight.flight_name.clone(),
            seat: "12A".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let reservation = result.unwrap();
    assert!(reservation.reservation_id >= 1);
    assert_eq!(reservation.user_id, "u1");
    assert_eq!(reservation.user_name, "Alice");
    assert_eq!(reservation.flight_id, "FL123");
    assert_eq!(reservation.flight_name, "KL0897");
    assert_eq!(reservation.seat, "12A");

    Ok(())
}

/// Tests that a reservation referencing missing parents is rejected.
///
/// The foreign-key constraints are the last line of defense for the
/// parent-rows-first invariant.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_reservation_without_parents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let result = repo
        .insert(InsertReservationParam {
            user_id: "ghost".to_string(),
            user_name: "Ghost".to_string(),
            flight_id: "FL999".to_string(),
            flight_name: "XX0000".to_string(),
            seat: "1A".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
