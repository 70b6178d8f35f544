pub mod models;
pub mod pii;

pub use models::flight::{Flight, FlightPassengers};
pub use models::manifest::FlightManifest;
pub use models::passenger::{Passenger, ADULT_AGE};
pub use models::seat::Seat;
pub use pii::Masked;

pub type SeatId = i64;
pub type PassengerId = i64;
pub type PurchaseId = i64;
pub type FareClassId = i64;
pub type AirplaneId = i64;
pub type FlightId = i64;
