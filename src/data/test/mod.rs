mod flight;
mod reservation;
mod user;
