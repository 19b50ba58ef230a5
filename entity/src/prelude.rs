pub use super::flight::Entity as Flight;
pub use super::reservation::Entity as Reservation;
pub use super::user::Entity as User;
