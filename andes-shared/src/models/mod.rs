pub mod flight;
pub mod manifest;
pub mod passenger;
pub mod seat;
