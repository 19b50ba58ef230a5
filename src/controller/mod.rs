//! HTTP request handlers.
//!
//! One handler per endpoint. Handlers extract query and path parameters,
//! delegate to the service layer, and map outcomes to status codes; no
//! business logic lives here.

pub mod airline;
pub mod destination;
pub mod flight;
pub mod param;
pub mod reservation;
