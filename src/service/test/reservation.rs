use chrono::{Days, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

use crate::{
    error::AppError,
    model::{
        flight::{FlightDirection, FlightRecord},
        reservation::MakeReservationParam,
    },
    service::{flight_api::FlightSource, reservation::ReservationService},
};

/// Upstream stub answering every lookup with the same canned record.
struct StubFlightSource {
    flight: Option<FlightRecord>,
}

impl FlightSource for StubFlightSource {
    async fn get_flight(&self, _id: &str) -> Result<Option<FlightRecord>, AppError> {
        Ok(self.flight.clone())
    }
}

fn flight(name: &str, direction: FlightDirection, days_from_now: i64) -> FlightRecord {
    let today = Utc::now().date_naive();
    let schedule_date = if days_from_now >= 0 {
        today + Days::new(days_from_now as u64)
    } else {
        today - Days::new((-days_from_now) as u64)
    };

    FlightRecord {
        flight_name: name.to_string(),
        schedule_date,
        flight_direction: direction,
        extra: serde_json::Map::new(),
    }
}

fn param(user_id: &str, flight_id: &str, seat: &str) -> MakeReservationParam {
    MakeReservationParam {
        user_id: user_id.to_string(),
        user_name: "Alice".to_string(),
        flight_id: flight_id.to_string(),
        seat: seat.to_string(),
    }
}

/// Tests that a flight unknown upstream yields the not-found outcome.
///
/// Expected: Err(FlightNotFound), no rows written
#[tokio::test]
async fn rejects_unknown_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let source = StubFlightSource { flight: None };
    let result = ReservationService::new(db)
        .make_reservation(&source, param("u1", "FL123", "12A"))
        .await;

    assert!(matches!(result, Err(AppError::FlightNotFound)));

    let users = entity::prelude::User::find().count(db).await?;
    assert_eq!(users, 0);

    Ok(())
}

/// Tests that a flight scheduled yesterday is rejected.
///
/// Expected: Err(Validation) with the past-flight message
#[tokio::test]
async fn rejects_past_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let source = StubFlightSource {
        flight: Some(flight("KL0897", FlightDirection::Departure, -1)),
    };
    let result = ReservationService::new(db)
        .make_reservation(&source, param("u1", "FL123", "12A"))
        .await;

    match result {
        Err(AppError::Validation(msg)) => assert_eq!(msg, "Cannot reserve past flights"),
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}

/// Tests that a flight scheduled today is rejected.
///
/// The scheduled date must be strictly in the future; same-day flights count
/// as past.
///
/// Expected: Err(Validation) with the past-flight message
#[tokio::test]
async fn rejects_same_day_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let source = StubFlightSource {
        flight: Some(flight("KL0897", FlightDirection::Departure, 0)),
    };
    let result = ReservationService::new(db)
        .make_reservation(&source, param("u1", "FL123", "12A"))
        .await;

    match result {
        Err(AppError::Validation(msg)) => assert_eq!(msg, "Cannot reserve past flights"),
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}

/// Tests that an arrival flight is rejected even when scheduled in the future.
///
/// Expected: Err(Validation) with the wrong-direction message
#[tokio::test]
async fn rejects_arrival_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let source = StubFlightSource {
        flight: Some(flight("KL0897", FlightDirection::Arrival, 7)),
    };
    let result = ReservationService::new(db)
        .make_reservation(&source, param("u1", "FL123", "12A"))
        .await;

    match result {
        Err(AppError::Validation(msg)) => assert_eq!(msg, "Can only reserve departure flights"),
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}

/// Tests the full workflow for a valid departure next week.
///
/// Expected: Ok, with user and flight rows created and exactly one
/// reservation visible for the user
#[tokio::test]
async fn records_reservation_for_valid_departure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let source = StubFlightSource {
        flight: Some(flight("KL0897", FlightDirection::Departure, 7)),
    };
    let service = ReservationService::new(db);
    let result = service
        .make_reservation(&source, param("u1", "FL123", "12A"))
        .await;

    assert!(result.is_ok());

    let reservations = service.get_by_user("u1").await.unwrap();
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].user_id, "u1");
    assert_eq!(reservations[0].flight_id, "FL123");
    assert_eq!(reservations[0].seat, "12A");

    let user = entity::prelude::User::find_by_id("u1".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(user.user_name, "Alice");

    // The flight cache row takes its name from the upstream record.
    let cached = entity::prelude::Flight::find_by_id("FL123".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(cached.flight_name, "KL0897");

    Ok(())
}

/// Tests that reserving twice as the same new user never duplicates the
/// user or flight rows.
///
/// Expected: Ok twice, one user row, one flight row, two reservations
#[tokio::test]
async fn repeated_reservations_keep_single_user_and_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let source = StubFlightSource {
        flight: Some(flight("KL0897", FlightDirection::Departure, 7)),
    };
    let service = ReservationService::new(db);

    service
        .make_reservation(&source, param("u1", "FL123", "12A"))
        .await
        .unwrap();
    service
        .make_reservation(&source, param("u1", "FL123", "14C"))
        .await
        .unwrap();

    let users = entity::prelude::User::find().count(db).await?;
    assert_eq!(users, 1);

    let flights = entity::prelude::Flight::find().count(db).await?;
    assert_eq!(flights, 1);

    let reservations = service.get_by_user("u1").await.unwrap();
    assert_eq!(reservations.len(), 2);

    Ok(())
}

/// Tests the per-user query for a user with no reservations.
///
/// Expected: Ok with an empty vector (controller maps this to 404)
#[tokio::test]
async fn get_by_user_empty_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ReservationService::new(db).get_by_user("nobody").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}
