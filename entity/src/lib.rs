//! SeaORM entity definitions for the flightgate database schema.
//!
//! Three tables back the reservation feature: `users` and `flights` hold the
//! foreign-key parents created on first use, and `reservations` binds a user
//! to a seat on a flight.

pub mod flight;
pub mod prelude;
pub mod reservation;
pub mod user;
