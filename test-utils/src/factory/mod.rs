//! Entity factories for creating test data.
//!
//! Each factory inserts an entity with sensible defaults that can be
//! overridden per test through a builder pattern.

pub mod flight;
pub mod helpers;
pub mod reservation;
pub mod user;
