//! Service layer for business logic and orchestration.
//!
//! Sits between the controller layer and the data layer:
//!
//! - `flight_api` - parameterized GET client for the upstream flight API
//! - `reservation` - the reservation workflow orchestrating upstream
//!   validation and persistence

pub mod flight_api;
pub mod reservation;

#[cfg(test)]
mod test;
