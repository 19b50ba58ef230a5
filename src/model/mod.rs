//! Domain models, operation parameters, and DTOs.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary. Upstream flight records
//! are typed only on the fields the reservation workflow inspects; the rest of
//! the upstream payload is carried through untouched.

pub mod api;
pub mod flight;
pub mod reservation;
